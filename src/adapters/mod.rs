// Adapters layer: concrete implementations for external systems (http roster,
// local file roster, the stand-in select control).

pub mod file;
pub mod http;
pub mod select;

pub use file::FileRosterSource;
pub use http::HttpRosterSource;
pub use select::SelectBox;
