//! Optional demo module mounted in the contact section.
//!
//! The slot is resolved once at startup. Having no demo is ordinary
//! configuration; naming a module that has no entry point yields a warning
//! on the page instead of a failure.

use std::sync::Arc;

use crate::config::Config;
use crate::logging::log_demo_slot;
use crate::render::markup::{escape, Frame, NoticeKind};

/// Anything with a `run` entry point that draws into the page in place.
pub trait DemoModule: Send + Sync {
    fn name(&self) -> &str;
    fn run(&self, frame: &mut Frame);
}

#[derive(Clone)]
pub enum DemoSlot {
    Absent,
    Mounted(Arc<dyn DemoModule>),
    /// A module was named but none with a `run` entry point exists under that name.
    MissingEntry(String),
}

impl std::fmt::Debug for DemoSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoSlot::Absent => f.write_str("Absent"),
            DemoSlot::Mounted(m) => f.debug_tuple("Mounted").field(&m.name()).finish(),
            DemoSlot::MissingEntry(n) => f.debug_tuple("MissingEntry").field(n).finish(),
        }
    }
}

pub const ABSENT_NOTICE: &str = "No demo module is mounted. To integrate a demo, set \
    DEMO_MODULE to a module that implements run() (for example DEMO_MODULE=bc_app), \
    or deploy the demo separately and link to it.";

impl DemoSlot {
    pub fn from_config(cfg: &Config) -> Self {
        let slot = match cfg.demo_module.as_deref() {
            None => DemoSlot::Absent,
            Some(name) => match builtin(name, cfg) {
                Some(module) => DemoSlot::Mounted(module),
                None => DemoSlot::MissingEntry(name.to_string()),
            },
        };
        log_demo_slot(slot.state(), slot.module_name());
        slot
    }

    pub fn mounted(module: Arc<dyn DemoModule>) -> Self {
        DemoSlot::Mounted(module)
    }

    pub fn state(&self) -> &'static str {
        match self {
            DemoSlot::Absent => "absent",
            DemoSlot::Mounted(_) => "mounted",
            DemoSlot::MissingEntry(_) => "missing_entry",
        }
    }

    pub fn module_name(&self) -> Option<&str> {
        match self {
            DemoSlot::Absent => None,
            DemoSlot::Mounted(m) => Some(m.name()),
            DemoSlot::MissingEntry(n) => Some(n),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match self {
            DemoSlot::Absent => {
                frame.notice(NoticeKind::Info, ABSENT_NOTICE);
            }
            DemoSlot::Mounted(module) => {
                frame.raw("<div class=\"demo-mount\">");
                module.run(frame);
                frame.raw("</div>");
            }
            DemoSlot::MissingEntry(name) => {
                frame.notice(
                    NoticeKind::Warning,
                    &format!(
                        "Found demo module `{}` but no run() entry point. Wrap the demo in a \
                         module that implements run().",
                        name
                    ),
                );
            }
        }
    }
}

fn builtin(name: &str, cfg: &Config) -> Option<Arc<dyn DemoModule>> {
    match name {
        "bc_app" => Some(Arc::new(LinkedDemo {
            name: "bc_app".to_string(),
            title: "Breast Cancer Risk Prediction".to_string(),
            url: cfg.demo_url.clone(),
        })),
        _ => None,
    }
}

/// Mounts a separately deployed demo by embedding and linking it.
#[derive(Debug, Clone)]
pub struct LinkedDemo {
    pub name: String,
    pub title: String,
    pub url: String,
}

impl DemoModule for LinkedDemo {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, frame: &mut Frame) {
        frame.text("h3", "", &self.title);
        frame.raw(&format!(
            "<iframe class=\"demo-frame\" src=\"{}\" title=\"{}\" loading=\"lazy\"></iframe>",
            escape(&self.url),
            escape(&self.title)
        ));
        frame.link_button(&self.url, "Open demo in a new tab");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(module: Option<&str>) -> Config {
        Config {
            demo_module: module.map(str::to_string),
            demo_url: "https://demo.example".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn unset_module_is_absent() {
        let slot = DemoSlot::from_config(&cfg(None));
        assert!(matches!(slot, DemoSlot::Absent));
        let mut f = Frame::new();
        slot.render(&mut f);
        assert!(f.as_str().contains("DEMO_MODULE"));
        assert!(f.as_str().contains("notice-info"));
    }

    #[test]
    fn builtin_module_mounts() {
        let slot = DemoSlot::from_config(&cfg(Some("bc_app")));
        assert_eq!(slot.state(), "mounted");
        let mut f = Frame::new();
        slot.render(&mut f);
        assert!(f.as_str().contains("https://demo.example"));
        assert!(f.as_str().contains("demo-mount"));
    }

    #[test]
    fn unknown_module_warns() {
        let slot = DemoSlot::from_config(&cfg(Some("ml_toy")));
        assert_eq!(slot.module_name(), Some("ml_toy"));
        let mut f = Frame::new();
        slot.render(&mut f);
        assert!(f.as_str().contains("notice-warning"));
        assert!(f.as_str().contains("no run() entry point"));
    }

    struct Counter;

    impl DemoModule for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn run(&self, frame: &mut Frame) {
            frame.text("p", "", "counter demo");
        }
    }

    #[test]
    fn injected_module_runs_in_place() {
        let slot = DemoSlot::mounted(Arc::new(Counter));
        let mut f = Frame::new();
        f.raw("<section>");
        slot.render(&mut f);
        f.raw("</section>");
        assert_eq!(
            f.as_str(),
            "<section><div class=\"demo-mount\"><p>counter demo</p></div></section>"
        );
    }
}
