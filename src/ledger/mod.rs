//! Ledger domain models: transactions, the category table, and the persisted document.

pub mod category;
pub mod document;
pub mod transaction;

pub use category::{Category, CategoryKind, CategoryTable};
pub use document::LedgerDocument;
pub use transaction::Transaction;
