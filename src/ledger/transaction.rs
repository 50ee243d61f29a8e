use serde::{Deserialize, Serialize};

/// A single income or expense entry. Identified only by its position in the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    pub category: usize,
}

impl Transaction {
    pub fn new(amount: f64, category: usize) -> Self {
        Self { amount, category }
    }
}
