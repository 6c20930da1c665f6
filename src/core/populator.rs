use crate::domain::model::OptionItem;
use crate::domain::ports::{RosterSource, SelectControl};
use crate::utils::error::Result;

/// Rebuilds a select control from a roster source. Every run owns the whole
/// option list: the control is cleared and rebuilt, never patched in place.
pub struct Populator<S: RosterSource> {
    source: S,
    placeholder: String,
}

impl<S: RosterSource> Populator<S> {
    pub fn new(source: S, placeholder: impl Into<String>) -> Self {
        Self {
            source,
            placeholder: placeholder.into(),
        }
    }

    /// Puts the control into its loading state: no options but the disabled
    /// placeholder, selection forced back to index 0 whatever it was before.
    pub fn reset<C: SelectControl + ?Sized>(&self, control: &mut C) {
        control.clear();
        control.append(OptionItem::placeholder(&self.placeholder));
        control.set_selected_index(0);
    }

    /// Reset, fetch, append one option per entry in source order. The single
    /// await point sits between the reset and the append loop; until the
    /// fetch resolves the control shows only the placeholder. On any failure
    /// nothing is appended and the control is left exactly as after `reset`.
    pub async fn populate<C: SelectControl + ?Sized>(&self, control: &mut C) -> Result<usize> {
        self.reset(control);

        let entries = self.source.fetch_entries().await?;
        tracing::debug!("Fetched {} roster entries", entries.len());

        // 逐筆附加選項，保留來源順序
        let appended = entries.len();
        for entry in &entries {
            control.append(OptionItem::from_entry(entry));
        }

        Ok(appended)
    }
}
