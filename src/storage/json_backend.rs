use std::{
    fs::{self, File},
    io::{self, Write},
    path::Path,
};

use tracing::{debug, info};

use crate::{errors::LedgerError, ledger::LedgerDocument};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Reads the document at `path`, creating the file with an empty document when it is absent.
pub fn load_or_create_document(path: &Path) -> Result<LedgerDocument> {
    match fs::read_to_string(path) {
        Ok(data) => {
            let document = parse_document(&data).map_err(|err| {
                LedgerError::StorageUnavailable(format!("{}: {err}", path.display()))
            })?;
            debug!(
                path = %path.display(),
                incomes = document.incomes.len(),
                expenses = document.expenses.len(),
                "ledger loaded"
            );
            Ok(document)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let document = LedgerDocument::new();
            save_document_to_path(&document, path)?;
            info!(path = %path.display(), "created empty ledger");
            Ok(document)
        }
        Err(err) => Err(LedgerError::StorageUnavailable(format!(
            "{}: {err}",
            path.display()
        ))),
    }
}

/// Overwrites `path` with the pretty-printed document.
pub fn save_document_to_path(document: &LedgerDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(document)?;
    write_file(path, &json).map_err(|err| {
        LedgerError::StorageUnavailable(format!("{}: {err}", path.display()))
    })?;
    debug!(path = %path.display(), "ledger saved");
    Ok(())
}

/// Only a JSON object is a ledger; serde would otherwise also accept a bare array.
fn parse_document(data: &str) -> serde_json::Result<LedgerDocument> {
    let value: serde_json::Value = serde_json::from_str(data)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("ledger root must be a JSON object"));
    }
    serde_json::from_value(value)
}

fn write_file(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Transaction;
    use tempfile::TempDir;

    #[test]
    fn absent_file_is_created_with_empty_document() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("nested").join("db.json");
        let document = load_or_create_document(&path).expect("load");
        assert_eq!(document, LedgerDocument::new());
        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({ "incomes": [], "expenses": [] }));
    }

    #[test]
    fn malformed_json_is_storage_unavailable() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("db.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_or_create_document(&path).unwrap_err();
        assert!(matches!(err, LedgerError::StorageUnavailable(_)));
    }

    #[test]
    fn directory_in_place_of_file_is_storage_unavailable() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("db.json");
        fs::create_dir(&path).unwrap();
        assert!(matches!(
            load_or_create_document(&path),
            Err(LedgerError::StorageUnavailable(_))
        ));
        assert!(matches!(
            save_document_to_path(&LedgerDocument::new(), &path),
            Err(LedgerError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn saved_file_is_pretty_printed() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("db.json");
        let mut document = LedgerDocument::new();
        document.add_income(Transaction::new(10.0, 0));
        save_document_to_path(&document, &path).expect("save");
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"incomes\": ["));
    }
}
