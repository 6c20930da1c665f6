pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    looks_like_url, validate_non_empty_string, validate_path, validate_positive_number,
    validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dropfill")]
#[command(about = "Fills a dropdown control from a JSON name roster")]
pub struct CliConfig {
    /// Roster location: an http(s) URL or a local file path
    #[arg(long, default_value = "idjson.txt")]
    pub roster: String,

    /// Page URL to resolve a relative roster location against
    #[arg(long)]
    pub page_url: Option<String>,

    /// Placeholder text shown before (and instead of) real data
    #[arg(long, default_value = "Choose Name")]
    pub placeholder: String,

    /// Identifier of the select control
    #[arg(long, default_value = "dropdown")]
    pub control_id: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn roster_location(&self) -> &str {
        &self.roster
    }

    fn page_url(&self) -> Option<&str> {
        self.page_url.as_deref()
    }

    fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    fn control_id(&self) -> &str {
        &self.control_id
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("placeholder", &self.placeholder)?;
        validate_non_empty_string("control_id", &self.control_id)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if let Some(page) = &self.page_url {
            validate_url("page_url", page)?;
            validate_path("roster", &self.roster)?;
        } else if looks_like_url(&self.roster) {
            validate_url("roster", &self.roster)?;
        } else {
            validate_path("roster", &self.roster)?;
        }

        Ok(())
    }
}
