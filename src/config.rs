use std::path::PathBuf;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory that relative asset paths are checked against.
    pub site_root: PathBuf,
    /// Memoize asset lookups for the process lifetime.
    pub cache_assets: bool,
    pub demo_module: Option<String>,
    pub demo_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            site_root: PathBuf::from("."),
            cache_assets: false,
            demo_module: None,
            demo_url: "https://breast-cancer-risk-prediction.streamlit.app/".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(d.host),
            port: std::env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(d.port),
            site_root: std::env::var("SITE_ROOT").map(PathBuf::from).unwrap_or(d.site_root),
            cache_assets: std::env::var("CACHE_ASSETS").ok().map(|v| parse_flag(&v)).unwrap_or(d.cache_assets),
            demo_module: std::env::var("DEMO_MODULE").ok().filter(|v| !v.trim().is_empty()),
            demo_url: std::env::var("DEMO_URL").unwrap_or(d.demo_url),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_bind_addr() {
        let cfg = Config { port: 9000, ..Default::default() };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
    }
}
