use crate::domain::model::{Entry, OptionItem};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the roster comes from (HTTP resource, local file, test stub).
#[async_trait]
pub trait RosterSource: Send + Sync {
    async fn fetch_entries(&self) -> Result<Vec<Entry>>;
}

/// Seam to the host-owned select control. The populator is the only writer;
/// rendering is the host's business.
pub trait SelectControl: Send + Sync {
    fn clear(&mut self);
    fn append(&mut self, option: OptionItem);
    fn set_selected_index(&mut self, index: usize);
    fn options(&self) -> &[OptionItem];
    fn selected_index(&self) -> usize;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_location(&self) -> &str;
    fn page_url(&self) -> Option<&str>;
    fn placeholder_text(&self) -> &str;
    fn control_id(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
