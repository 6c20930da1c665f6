pub mod engine;
pub mod populator;
pub mod roster_format;

pub use crate::domain::model::{Entry, EntryId, FillReport, LoadPhase, OptionItem};
pub use crate::domain::ports::{ConfigProvider, RosterSource, SelectControl};
pub use crate::utils::error::Result;
