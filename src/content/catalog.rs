//! The site's literal content.

use serde::Serialize;

use super::records::{
    AssetRef, CourseRecord, EducationRecord, ExperienceRecord, Links, ProjectRecord,
};

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200";
pub const PLACEHOLDER_WIDE: &str = "https://via.placeholder.com/600x340";

pub const PROFILE_IMAGE: AssetRef = AssetRef::new("assets/profile.jpg", PLACEHOLDER_IMAGE);
pub const HERO_IMAGE: AssetRef = AssetRef::new("assets/hero.png", PLACEHOLDER_WIDE);
pub const RESUME_PATH: &str = "assets/Sunny_Solomon_Resume.pdf";
pub const RESUME_FILE_NAME: &str = "Sunny_Solomon_Resume.pdf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github_user: String,
    pub bio: Vec<String>,
    pub highlights: Vec<String>,
    pub focus: Vec<String>,
}

impl Profile {
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    pub fn github_repo_url(&self, repo: &str) -> String {
        format!("https://github.com/{}/{}", self.github_user, repo)
    }
}

/// Everything the renderers read. Shared immutably for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectRecord>,
    pub courses: Vec<CourseRecord>,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<ExperienceRecord>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SiteContent {
    pub fn load() -> Self {
        let profile = Profile {
            name: "Sunny Solomon".into(),
            tagline: "Data Science · UI/UX · Music".into(),
            headline: "Data Science & UI/UX Enthusiast | Creative Thinker | Problem Solver".into(),
            location: "Hyderabad, India".into(),
            email: "sunnysolomon20@gmail.com".into(),
            linkedin: "https://www.linkedin.com/in/sunny-solomon/".into(),
            github_user: "Sunny777Solomon".into(),
            bio: strings(&[
                "I'm a Life Sciences graduate who blends creativity with analytical thinking. \
                 I've worked at Synchrony Financial and Concentrix (Google Operations), where I \
                 developed strong communication, problem-solving, and attention-to-detail.",
                "I build ML models, design UI/UX prototypes, and enjoy performing music in my \
                 free time.",
            ]),
            highlights: strings(&[
                "Closed high-volume transactions in a pilot team at Synchrony Financial.",
                "Supported YouTube TV customers at Concentrix (Google).",
                "Built machine learning demos and UI prototypes; comfortable with Python, \
                 Adobe XD, and data visualization.",
            ]),
            focus: strings(&["Interpretable ML", "Data visualization", "User-centered design"]),
        };

        let projects = vec![
            ProjectRecord {
                title: "Breast Cancer Risk Prediction".into(),
                subtitle: "Machine learning · Healthcare".into(),
                description: "Predictive model for 10-year risk estimation. Includes data \
                              preprocessing, model training, and visualization."
                    .into(),
                deliverables: strings(&[
                    "Cleaned and encoded clinical dataset",
                    "Trained and compared classification models",
                    "Interactive risk calculator demo",
                    "Feature importance visualizations",
                ]),
                tools: strings(&[
                    "Python",
                    "Pandas",
                    "scikit-learn",
                    "Matplotlib",
                    "Seaborn",
                    "Streamlit",
                ]),
                links: [
                    (
                        "Open Repo",
                        profile.github_repo_url("Breast-cancer-Risk-Prediction-streamlit"),
                    ),
                    ("Open Demo", "#demo".to_string()),
                ]
                .into_iter()
                .collect(),
                tags: strings(&["ML", "Classification", "Healthcare"]),
                image: Some(AssetRef::new("assets/project1.png", PLACEHOLDER_WIDE)),
            },
            ProjectRecord {
                title: "Solo Leveling: Habit Tracker".into(),
                subtitle: "UI/UX case study".into(),
                description: "Dark-theme habit tracker concept with level-up mechanics, created \
                              in Adobe XD. Includes user flows and prototypes."
                    .into(),
                deliverables: strings(&[
                    "User personas and journey map",
                    "Low and high fidelity wireframes",
                    "Clickable prototype",
                ]),
                tools: strings(&["Adobe XD", "Figma", "Miro"]),
                links: [("View Design", "https://www.behance.net/")].into_iter().collect(),
                tags: strings(&["UI/UX", "Prototype", "Gamification"]),
                image: Some(AssetRef::new("assets/project2.png", PLACEHOLDER_WIDE)),
            },
            ProjectRecord {
                title: "Customer Support Insights".into(),
                subtitle: "Data visualization".into(),
                description: "Exploratory analysis of support ticket volumes and resolution \
                              times, summarised in a small dashboard."
                    .into(),
                deliverables: Vec::new(),
                tools: strings(&["Python", "Pandas", "MS Excel", "Matplotlib"]),
                links: Links::new(),
                tags: strings(&["EDA", "Dashboard"]),
                image: None,
            },
        ];

        let courses = vec![
            CourseRecord {
                name: "Machine Learning Specialization".into(),
                provider: "Coursera".into(),
                status: "Completed".into(),
                year: "2024".into(),
            },
            CourseRecord {
                name: "Google UX Design Certificate".into(),
                provider: "Coursera".into(),
                status: "In progress".into(),
                year: "2025".into(),
            },
            CourseRecord {
                name: "Statistics for Data Science".into(),
                provider: "Self-paced".into(),
                status: "Completed".into(),
                year: "2024".into(),
            },
        ];

        let education = vec![EducationRecord {
            degree: "B.Sc. in Biotechnology, Genetics & Chemistry".into(),
            institution: "Bhavans Vivekananda Degree College".into(),
            period: String::new(),
            details: "Life sciences foundation with coursework in genetics, statistics and \
                      laboratory methods."
                .into(),
        }];

        let experience = vec![
            ExperienceRecord {
                role: "Pilot Team Associate".into(),
                organization: "Synchrony Financial".into(),
                period: String::new(),
                details: "Closed high-volume transactions in a pilot team.".into(),
            },
            ExperienceRecord {
                role: "Customer Support Associate".into(),
                organization: "Concentrix (Google Operations)".into(),
                period: String::new(),
                details: "Supported YouTube TV customers across billing and playback issues."
                    .into(),
            },
        ];

        Self {
            profile,
            skills: strings(&[
                "Python",
                "Pandas",
                "scikit-learn",
                "Matplotlib",
                "Adobe XD",
                "UI/UX Design",
                "MS Excel",
                "Statistics",
                "Data Visualization",
            ]),
            projects,
            courses,
            education,
            experience,
        }
    }
}
