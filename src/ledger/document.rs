use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Root persisted object. Both sequences are always written, even when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LedgerDocument {
    #[serde(default)]
    pub incomes: Vec<Transaction>,
    #[serde(default)]
    pub expenses: Vec<Transaction>,
}

impl LedgerDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_income(&mut self, transaction: Transaction) {
        self.incomes.push(transaction);
    }

    pub fn add_expense(&mut self, transaction: Transaction) {
        self.expenses.push(transaction);
    }

    pub fn total_income(&self) -> f64 {
        sum_amounts(&self.incomes)
    }

    pub fn total_expense(&self) -> f64 {
        sum_amounts(&self.expenses)
    }

    pub fn savings(&self) -> f64 {
        self.total_income() - self.total_expense()
    }
}

fn sum_amounts(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|txn| txn.amount).sum()
}
