use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DropfillError, Result};
use crate::utils::validation::{
    looks_like_url, validate_non_empty_string, validate_path, validate_positive_number,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_PLACEHOLDER: &str = "Choose Name";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub control: ControlConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    pub id: String,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub roster: String,
    pub page_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| DropfillError::ConfigError {
            message: format!("Invalid TOML in {}: {}", path.as_ref().display(), e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn roster_location(&self) -> &str {
        &self.source.roster
    }

    fn page_url(&self) -> Option<&str> {
        self.source.page_url.as_deref()
    }

    fn placeholder_text(&self) -> &str {
        self.control.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    fn control_id(&self) -> &str {
        &self.control.id
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("control.id", &self.control.id)?;
        if let Some(placeholder) = &self.control.placeholder {
            validate_non_empty_string("control.placeholder", placeholder)?;
        }
        validate_positive_number("source.timeout_seconds", self.timeout_seconds(), 1)?;

        if let Some(page) = &self.source.page_url {
            validate_url("source.page_url", page)?;
            validate_path("source.roster", &self.source.roster)?;
        } else if looks_like_url(&self.source.roster) {
            validate_url("source.roster", &self.source.roster)?;
        } else {
            validate_path("source.roster", &self.source.roster)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: TomlConfig = toml::from_str(
            r#"
            [control]
            id = "dropdown"

            [source]
            roster = "idjson.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.control_id(), "dropdown");
        assert_eq!(config.placeholder_text(), "Choose Name");
        assert_eq!(config.timeout_seconds(), 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config_round_trip() {
        let config: TomlConfig = toml::from_str(
            r#"
            [control]
            id = "members"
            placeholder = "Pick a member"

            [source]
            roster = "idjson.txt"
            page_url = "https://example.com/group/page.html"
            timeout_seconds = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.placeholder_text(), "Pick a member");
        assert_eq!(config.page_url(), Some("https://example.com/group/page.html"));
        assert_eq!(config.timeout_seconds(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_source_section_fails() {
        let result: std::result::Result<TomlConfig, _> = toml::from_str(
            r#"
            [control]
            id = "dropdown"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_reads_and_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[control]\nid = \"dropdown\"\n\n[source]\nroster = \"idjson.txt\"\n"
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.roster_location(), "idjson.txt");
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not toml at all [").unwrap();

        let err = TomlConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DropfillError::ConfigError { .. }));
    }
}
