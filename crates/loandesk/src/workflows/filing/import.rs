//! Importer for checklist exports from the CRM.
//!
//! Expected columns: `Ref`, `Name`, `Category`, `Accepted Types` (semicolon
//! separated aliases), and an optional `Due Date` (RFC 3339 or `%Y-%m-%d`).
//! Blank cells are treated as absent rather than errors.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::{ChecklistRequirement, RequirementId};

#[derive(Debug)]
pub enum ChecklistImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ChecklistImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecklistImportError::Io(err) => write!(f, "failed to read checklist export: {}", err),
            ChecklistImportError::Csv(err) => write!(f, "invalid checklist CSV data: {}", err),
        }
    }
}

impl std::error::Error for ChecklistImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChecklistImportError::Io(err) => Some(err),
            ChecklistImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ChecklistImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ChecklistImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Read a checklist export from disk.
pub fn import_checklist_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<ChecklistRequirement>, ChecklistImportError> {
    let file = File::open(path)?;
    import_checklist_from_reader(file)
}

/// Parse a checklist export from any reader.
pub fn import_checklist_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<ChecklistRequirement>, ChecklistImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requirements = Vec::new();
    for record in csv_reader.deserialize::<ChecklistRow>() {
        let row = record?;
        requirements.push(row.into_requirement());
    }

    Ok(requirements)
}

#[derive(Debug, Deserialize)]
struct ChecklistRow {
    #[serde(rename = "Ref")]
    reference: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Accepted Types", default, deserialize_with = "empty_string_as_none")]
    accepted_types: Option<String>,
    #[serde(rename = "Due Date", default, deserialize_with = "empty_string_as_none")]
    due_date: Option<String>,
}

impl ChecklistRow {
    fn into_requirement(self) -> ChecklistRequirement {
        let matching_document_types = self
            .accepted_types
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let due_on = self.due_date.as_deref().and_then(parse_date);

        ChecklistRequirement {
            id: RequirementId(self.reference),
            name: self.name,
            category: self.category,
            matching_document_types,
            due_on,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "\
Ref,Name,Category,Accepted Types,Due Date
kyc-proof-of-id,Certified Proof of ID,Identity,Passport; Driving Licence,2026-09-15
kyc-proof-of-address,Proof of Address,Address,Utility Bill;Council Tax Bill,
fin-bank-statements,3 Months Bank Statements,Financial,,
";

    #[test]
    fn parses_rows_and_splits_accepted_types() {
        let items = import_checklist_from_reader(Cursor::new(EXPORT)).expect("export parses");
        assert_eq!(items.len(), 3);

        let id_item = &items[0];
        assert_eq!(id_item.id, RequirementId("kyc-proof-of-id".to_string()));
        assert_eq!(
            id_item.matching_document_types,
            vec!["Passport".to_string(), "Driving Licence".to_string()]
        );
        assert_eq!(id_item.due_on, NaiveDate::from_ymd_opt(2026, 9, 15));

        assert!(items[1].due_on.is_none());
        assert!(items[2].matching_document_types.is_empty());
    }

    #[test]
    fn accepts_rfc3339_due_dates() {
        assert_eq!(
            parse_date("2026-09-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2026, 9, 15)
        );
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn rejects_malformed_csv() {
        let result = import_checklist_from_reader(Cursor::new("Ref,Name\n\"unterminated"));
        assert!(matches!(result, Err(ChecklistImportError::Csv(_))));
    }
}
