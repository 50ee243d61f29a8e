pub mod json_backend;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    errors::LedgerError,
    ledger::{LedgerDocument, Transaction},
};

pub use json_backend::Result;

/// Single source of truth for transaction data, backed by one JSON file.
///
/// The document is read from disk at most once per store; afterwards every read and
/// mutation works on the in-memory copy and `save` overwrites the whole file.
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    document: LedgerDocument,
    loaded: bool,
}

impl LedgerStore {
    /// Binds a store to `path` without touching the disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: LedgerDocument::new(),
            loaded: false,
        }
    }

    /// Creates a store and loads its document immediately.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Loads the document on first call; later calls return the cached copy.
    ///
    /// Refuses to load over records appended before the first load, since the disk copy
    /// would replace them.
    pub fn load(&mut self) -> Result<&LedgerDocument> {
        if !self.loaded {
            if self.document != LedgerDocument::default() {
                return Err(LedgerError::PendingAppends);
            }
            self.document = json_backend::load_or_create_document(&self.path)?;
            self.loaded = true;
        }
        Ok(&self.document)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list_incomes(&self) -> &[Transaction] {
        &self.document.incomes
    }

    pub fn list_expenses(&self) -> &[Transaction] {
        &self.document.expenses
    }

    /// Appends an income record. Category kind is not checked here.
    pub fn add_income(&mut self, amount: f64, category: usize) -> &mut Self {
        self.document.add_income(Transaction::new(amount, category));
        debug!(amount, category, "income appended");
        self
    }

    /// Appends an expense record. Category kind is not checked here.
    pub fn add_expense(&mut self, amount: f64, category: usize) -> &mut Self {
        self.document.add_expense(Transaction::new(amount, category));
        debug!(amount, category, "expense appended");
        self
    }

    pub fn total_income(&self) -> f64 {
        self.document.total_income()
    }

    pub fn total_expense(&self) -> f64 {
        self.document.total_expense()
    }

    pub fn savings(&self) -> f64 {
        self.document.savings()
    }

    /// Overwrites the backing file with the in-memory document.
    pub fn save(&mut self) -> Result<()> {
        if !self.loaded {
            return Err(LedgerError::LedgerNotLoaded);
        }
        json_backend::save_document_to_path(&self.document, &self.path)
    }
}
