use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    core::{errors::ExpenseError, utils::ensure_dir},
    domain::Expense,
};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";
const INDENT: &[u8] = b"    ";

/// Single-file JSON store: one pretty-printed array holding every expense.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Vec<Expense>> {
        load_expenses_from_path(&self.path)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        save_expenses_to_path(expenses, &self.path)
    }
}

pub fn load_expenses_from_path(path: &Path) -> Result<Vec<Expense>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no expense store yet, starting empty");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    let expenses: Vec<Expense> =
        serde_json::from_str(&data).map_err(|err| ExpenseError::CorruptStore {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    tracing::info!(path = %path.display(), count = expenses.len(), "loaded expenses");
    Ok(expenses)
}

pub fn save_expenses_to_path(expenses: &[Expense], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = to_pretty_json(expenses)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), count = expenses.len(), "saved expenses");
    Ok(())
}

fn to_pretty_json(expenses: &[Expense]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    expenses.serialize(&mut serializer)?;
    Ok(buffer)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("expenses.json"));
        (storage, temp)
    }

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Food", 12.5, "2025-01-03"),
            Expense::new("Bills", 80.0, "2025-01-15"),
        ]
    }

    #[test]
    fn missing_store_loads_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load().expect("load").is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample()).expect("save");
        assert_eq!(storage.load().expect("load"), sample());
        assert!(!tmp_path(storage.path()).exists());
    }

    #[test]
    fn writes_four_space_indented_array() {
        let (storage, _guard) = storage_with_temp_dir();
        storage.save(&sample()[..1]).expect("save");
        let raw = fs::read_to_string(storage.path()).expect("read");
        assert_eq!(
            raw,
            "[\n    {\n        \"category\": \"Food\",\n        \"amount\": 12.5,\n        \"date\": \"2025-01-03\"\n    }\n]"
        );
    }

    #[test]
    fn corrupt_store_is_reported() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.path(), "{ not json").expect("write");
        let err = storage.load().expect_err("corrupt store");
        assert!(matches!(err, ExpenseError::CorruptStore { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().join("nested/dir/expenses.json"));
        storage.save(&sample()).expect("save");
        assert_eq!(storage.load().expect("load").len(), 2);
    }
}
