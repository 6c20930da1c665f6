pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileRosterSource, HttpRosterSource, SelectBox};
pub use config::toml_config::TomlConfig;
pub use core::{engine::FillEngine, populator::Populator};
pub use domain::model::{Entry, EntryId, FillReport, LoadPhase, OptionItem};
pub use domain::ports::{ConfigProvider, RosterSource, SelectControl};
pub use utils::error::{DropfillError, Result};
