//! Configuration for paginators
//!
//! Paginator defaults can be supplied in YAML:
//!
//! ```yaml
//! page_size: 25
//! max_visible_pages: 7
//! page_size_policy: clamp
//! ```
//!
//! Every field is optional. Missing fields take the defaults below.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default width of the page number window
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

// ============================================================================
// Page Size Policy
// ============================================================================

/// What to do when asked for a page size of zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSizePolicy {
    /// Refuse the change, keep the previous size and return an error
    #[default]
    Reject,
    /// Coerce the size to 1
    Clamp,
}

impl PageSizePolicy {
    /// Apply the policy to a requested page size
    pub fn apply(self, size: usize) -> Result<usize> {
        if size > 0 {
            return Ok(size);
        }
        match self {
            Self::Reject => Err(Error::invalid_page_size(size)),
            Self::Clamp => Ok(1),
        }
    }
}

// ============================================================================
// Paginator Config
// ============================================================================

/// Paginator defaults loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Number of items per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Width of the page number window
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,

    /// Handling of zero page sizes passed at runtime
    #[serde(default)]
    pub page_size_policy: PageSizePolicy,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_visible_pages() -> usize {
    DEFAULT_MAX_VISIBLE_PAGES
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            page_size_policy: PageSizePolicy::default(),
        }
    }
}

impl PaginatorConfig {
    /// Create a config with the default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page number window width
    pub fn with_max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = max_visible_pages;
        self
    }

    /// Set the page size policy
    pub fn with_policy(mut self, policy: PageSizePolicy) -> Self {
        self.page_size_policy = policy;
        self
    }

    /// Validate the config
    ///
    /// The policy governs runtime changes only; a config file with a zero
    /// page size is always rejected.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.max_visible_pages == 0 {
            return Err(Error::invalid_value(
                "max_visible_pages",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Load a paginator config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginatorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a paginator config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PaginatorConfig> {
    // An empty document deserializes to unit, not a map
    if yaml.trim().is_empty() {
        return Ok(PaginatorConfig::default());
    }

    let config: PaginatorConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    tracing::debug!(
        page_size = config.page_size,
        max_visible_pages = config.max_visible_pages,
        "Loaded paginator config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.page_size_policy, PageSizePolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r"
page_size: 25
max_visible_pages: 7
page_size_policy: clamp
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(
            config,
            PaginatorConfig::new()
                .with_page_size(25)
                .with_max_visible_pages(7)
                .with_policy(PageSizePolicy::Clamp)
        );
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let config = load_config_from_str("page_size: 50").unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.max_visible_pages, DEFAULT_MAX_VISIBLE_PAGES);
        assert_eq!(config.page_size_policy, PageSizePolicy::Reject);
    }

    #[test]
    fn test_load_empty_config() {
        assert_eq!(load_config_from_str("").unwrap(), PaginatorConfig::default());
        assert_eq!(
            load_config_from_str("  \n").unwrap(),
            PaginatorConfig::default()
        );
    }

    #[test_case("page_size: 0", "page_size" ; "zero page size")]
    #[test_case("max_visible_pages: 0", "max_visible_pages" ; "zero window")]
    fn test_load_rejects_zero(yaml: &str, field: &str) {
        let err = load_config_from_str(yaml).unwrap_err();
        match err {
            Error::InvalidConfigValue { field: f, .. } => assert_eq!(f, field),
            other => panic!("Expected InvalidConfigValue, got {other:?}"),
        }
    }

    #[test_case("page_size: -3" ; "negative page size")]
    #[test_case("page_size_policy: wrap" ; "unknown policy")]
    #[test_case("page_size: [1, 2]" ; "wrong type")]
    fn test_load_rejects_malformed(yaml: &str) {
        let err = load_config_from_str(yaml).unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)), "got {err:?}");
        assert!(err.to_string().starts_with("Failed to parse YAML: "));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size: 3").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.page_size, 3);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test_case(PageSizePolicy::Reject, 4 => Some(4) ; "reject passes valid size")]
    #[test_case(PageSizePolicy::Reject, 0 => None ; "reject refuses zero")]
    #[test_case(PageSizePolicy::Clamp, 4 => Some(4) ; "clamp passes valid size")]
    #[test_case(PageSizePolicy::Clamp, 0 => Some(1) ; "clamp coerces zero")]
    fn test_policy_apply(policy: PageSizePolicy, size: usize) -> Option<usize> {
        policy.apply(size).ok()
    }
}
