use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque roster identifier. The source data carries ids as JSON numbers or
/// strings; both pass through verbatim and are never validated or normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

/// One roster record. Extra fields in the source object are ignored; a record
/// missing `id` or `name` fails the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
}

/// A single option of the select control. The placeholder is the only option
/// with no value.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionItem {
    pub value: Option<String>,
    pub label: String,
    pub disabled: bool,
}

impl OptionItem {
    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            value: None,
            label: text.into(),
            disabled: true,
        }
    }

    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            value: Some(entry.id.to_string()),
            label: entry.name.clone(),
            disabled: false,
        }
    }
}

/// Load state of the control. `Loading` covers both "fetch still pending" and
/// "fetch failed" — a failed load is indistinguishable from one in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
}

/// Outcome of one fill run, for the driver to report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillReport {
    pub phase: LoadPhase,
    pub appended: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_deserializes_from_number_and_string() {
        let e: Entry = serde_json::from_str(r#"{"id": 7, "name": "Alice"}"#).unwrap();
        assert_eq!(e.id, EntryId::Number(7.into()));
        assert_eq!(e.id.to_string(), "7");

        let e: Entry = serde_json::from_str(r#"{"id": "x7", "name": "Bob"}"#).unwrap();
        assert_eq!(e.id, EntryId::Text("x7".to_string()));
        assert_eq!(e.id.to_string(), "x7");
    }

    #[test]
    fn test_entry_ignores_extra_fields() {
        let e: Entry =
            serde_json::from_str(r#"{"id": 1, "name": "Alice", "temp": 36.5}"#).unwrap();
        assert_eq!(e.name, "Alice");
    }

    #[test]
    fn test_entry_requires_both_fields() {
        assert!(serde_json::from_str::<Entry>(r#"{"id": 1}"#).is_err());
        assert!(serde_json::from_str::<Entry>(r#"{"name": "Alice"}"#).is_err());
    }

    #[test]
    fn test_placeholder_option_shape() {
        let opt = OptionItem::placeholder("Choose Name");
        assert_eq!(opt.value, None);
        assert_eq!(opt.label, "Choose Name");
        assert!(opt.disabled);
    }

    #[test]
    fn test_option_from_entry() {
        let entry = Entry {
            id: EntryId::Number(42.into()),
            name: "Carol".to_string(),
        };
        let opt = OptionItem::from_entry(&entry);
        assert_eq!(opt.value.as_deref(), Some("42"));
        assert_eq!(opt.label, "Carol");
        assert!(!opt.disabled);
    }
}
