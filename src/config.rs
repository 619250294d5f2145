#![forbid(unsafe_code)]

//! relint.toml configuration loading
//!
//! The configuration is optional: a missing file means every registered
//! rule runs and no group mapping is assumed. `disabled` removes registered
//! rules by code; `expected-groups` switches on the two group-mapping
//! checkers, which are opt-in and not subject to `disabled`.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "relint.toml";

/// Parsed relint.toml contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct LintConfig {
    /// Codes of registered rules to skip
    #[serde(default)]
    pub disabled: Vec<u16>,

    /// Expected capture-group count for positional group mapping
    #[serde(default)]
    pub expected_groups: Option<usize>,
}

impl LintConfig {
    /// Loads configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read,
    /// `ConfigError::Parse` if it is not valid TOML, and
    /// `ConfigError::InvalidValue` if a disabled code is not a registered
    /// rule code.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: LintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` if it exists, defaults otherwise
    ///
    /// # Errors
    ///
    /// Same as [`load`](LintConfig::load) when the file exists.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Whether the registered rule with `code` should run
    pub fn is_enabled(&self, code: u16) -> bool {
        !self.disabled.contains(&code)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for &code in &self.disabled {
            if !(101..=106).contains(&code) {
                return Err(ConfigError::InvalidValue {
                    field: "disabled".to_string(),
                    message: format!("{} is not a registered rule code", code),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "disabled = [105]\nexpected-groups = 3\n");

        let config = LintConfig::load(&path).unwrap();

        assert_eq!(config.disabled, vec![105]);
        assert_eq!(config.expected_groups, Some(3));
        assert!(!config.is_enabled(105));
        assert!(config.is_enabled(101));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let config = LintConfig::load(&path).unwrap();

        assert_eq!(config, LintConfig::default());
        assert!(config.is_enabled(101));
    }

    #[test]
    fn test_load_rejects_unknown_rule_code() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "disabled = [42]\n");

        let result = LintConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "dissabled = [105]\n");

        let result = LintConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "disabled = [");

        let result = LintConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = LintConfig::load_or_default(&path).unwrap();
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let result = LintConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
