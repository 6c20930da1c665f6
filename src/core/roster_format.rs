use crate::domain::model::{Entry, EntryId};
use crate::utils::error::{DropfillError, Result};
use std::fs;
use std::path::Path;

/// Converts the raw roster (`id.txt`, one headerless `id,name` line per
/// member) into the JSON array resource the dropdown consumes
/// (`idjson.txt`). Ids come out as JSON strings; columns past the second are
/// ignored.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let entries = read_csv_roster(input)?;
    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(output, json)?;
    Ok(entries.len())
}

pub fn read_csv_roster(path: &Path) -> Result<Vec<Entry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let id = field(&record, 0, line)?;
        let name = field(&record, 1, line)?;

        entries.push(Entry {
            id: EntryId::Text(id.to_string()),
            name: name.to_string(),
        });
    }

    Ok(entries)
}

fn field<'a>(record: &'a csv::StringRecord, index: usize, line: u64) -> Result<&'a str> {
    record
        .get(index)
        .ok_or_else(|| DropfillError::ProcessingError {
            message: format!("roster line {} needs an id and a name", line),
        })
}
