//! Site configuration.
//!
//! Every field has a default reproducing the live site, so a config file
//! only needs the keys it changes.
//!
//! ```json
//! { "brand_name": "Artvince Academy", "toast_seconds": 3.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::motion::SpringConfig;
use crate::state::scroll::SCROLLED_THRESHOLD;
use crate::toast::DEFAULT_TOAST_SECONDS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub tagline: String,
    /// Prefix for every internal link and asset, e.g. `/` or `/academy/`.
    pub base_url: String,
    /// Pointer smoothing for the hero tilt and parallax.
    pub hero_spring: SpringConfig,
    /// Scroll progress smoothing.
    pub scroll_spring: SpringConfig,
    pub toast_seconds: f64,
    /// Scroll offset past which the navbar turns to glass.
    pub scrolled_threshold: f64,
    /// Year in the footer copyright line.
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Artvince Academy".to_string(),
            tagline: "Master the Art of Game Creation".to_string(),
            base_url: "/".to_string(),
            hero_spring: SpringConfig::default(),
            scroll_spring: SpringConfig::critical(100.0),
            toast_seconds: DEFAULT_TOAST_SECONDS,
            scrolled_threshold: SCROLLED_THRESHOLD,
            copyright_year: 2026,
        }
    }
}

impl SiteConfig {
    /// Load a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.hero_spring.validate()?;
        self.scroll_spring.validate()?;
        if !self.toast_seconds.is_finite() || self.toast_seconds <= 0.0 {
            return Err(SiteError::InvalidConfig {
                field: "toast_seconds",
                expected: "positive and finite",
                value: self.toast_seconds,
            });
        }
        if !self.scrolled_threshold.is_finite() {
            return Err(SiteError::InvalidConfig {
                field: "scrolled_threshold",
                expected: "finite",
                value: self.scrolled_threshold,
            });
        }
        Ok(())
    }

    /// Brand name split for the two-tone logo: first word, then the rest.
    pub fn brand_parts(&self) -> (&str, &str) {
        let name = self.brand_name.trim();
        match name.split_once(' ') {
            Some((first, rest)) => (first, rest.trim_start()),
            None => (name, ""),
        }
    }

    /// Join an absolute site path onto the base URL.
    pub fn href(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.hero_spring.stiffness, 700.0);
        assert_eq!(config.scrolled_threshold, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "toast_seconds": 2.5, "hero_spring": {{ "stiffness": 300 }} }}"#).unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.toast_seconds, 2.5);
        assert_eq!(config.hero_spring.stiffness, 300.0);
        assert_eq!(config.hero_spring.damping, 25.0);
        assert_eq!(config.brand_name, "Artvince Academy");
    }

    #[test]
    fn test_bad_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_spring_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "scroll_spring": {{ "mass": 0 }} }}"#).unwrap();
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::Motion(_)));
    }

    #[test]
    fn test_invalid_toast_seconds_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "toast_seconds": -1.0 }}"#).unwrap();
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig { field: "toast_seconds", .. }));

        let config = SiteConfig {
            toast_seconds: f64::INFINITY,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
        let config = SiteConfig {
            toast_seconds: 0.0,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let config = SiteConfig {
            scrolled_threshold: f64::NAN,
            ..SiteConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig { field: "scrolled_threshold", .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = SiteConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SiteError::ConfigRead { .. }));
    }

    #[test]
    fn test_brand_parts() {
        let mut config = SiteConfig::default();
        assert_eq!(config.brand_parts(), ("Artvince", "Academy"));
        config.brand_name = "Solo".to_string();
        assert_eq!(config.brand_parts(), ("Solo", ""));
    }

    #[test]
    fn test_href_joins_base() {
        let mut config = SiteConfig::default();
        assert_eq!(config.href("/courses"), "/courses");
        config.base_url = "/academy/".to_string();
        assert_eq!(config.href("/courses"), "/academy/courses");
        assert_eq!(config.href("https://twitter.com"), "https://twitter.com");
    }
}
