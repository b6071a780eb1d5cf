pub mod catalog;
pub mod records;

pub use catalog::{Profile, SiteContent};
pub use records::{AssetRef, CourseRecord, EducationRecord, ExperienceRecord, Links, ProjectRecord};
