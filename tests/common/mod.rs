use std::path::PathBuf;

use account_book::storage::LedgerStore;
use tempfile::TempDir;

/// Creates an isolated ledger path; the returned guard keeps the directory alive.
pub fn ledger_path() -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("db.json");
    (path, temp)
}

#[allow(dead_code)]
pub fn open_store() -> (LedgerStore, TempDir) {
    let (path, temp) = ledger_path();
    let store = LedgerStore::open(path).expect("open ledger store");
    (store, temp)
}
