use std::fmt;

use crate::errors::LedgerError;

/// Categorises ledger activity as money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn label(self) -> &'static str {
        match self {
            CategoryKind::Income => "Income",
            CategoryKind::Expense => "Expense",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Fixed, position-indexed list of categories. Transactions refer to entries by index,
/// so the order must never change between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    pub fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.entries.get(index)
    }

    /// Resolves a category name for display, tolerating indices that fall outside the table.
    pub fn name_of(&self, index: usize) -> &str {
        self.get(index)
            .map(|category| category.name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Category)> {
        self.entries.iter().enumerate()
    }

    /// Entries of the given kind, keeping their original table index.
    pub fn of_kind(&self, kind: CategoryKind) -> impl Iterator<Item = (usize, &Category)> {
        self.iter().filter(move |(_, category)| category.kind == kind)
    }

    /// Accepts `index` only when it names an entry whose kind matches `kind`.
    pub fn validate(&self, index: i64, kind: CategoryKind) -> Result<usize, LedgerError> {
        let position = usize::try_from(index).map_err(|_| {
            LedgerError::InvalidSelection(format!("category {index} is out of range"))
        })?;
        match self.get(position) {
            Some(category) if category.kind == kind => Ok(position),
            Some(category) => Err(LedgerError::InvalidSelection(format!(
                "category {index} ({}) is not an {} category",
                category.name,
                kind.label().to_lowercase()
            ))),
            None => Err(LedgerError::InvalidSelection(format!(
                "category {index} is out of range"
            ))),
        }
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(vec![
            Category::new("Business", CategoryKind::Income),
            Category::new("Loan", CategoryKind::Income),
            Category::new("Salary", CategoryKind::Income),
            Category::new("Rent", CategoryKind::Expense),
            Category::new("Utility Bill", CategoryKind::Expense),
            Category::new("Internet Bill", CategoryKind::Expense),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opposite(kind: CategoryKind) -> CategoryKind {
        match kind {
            CategoryKind::Income => CategoryKind::Expense,
            CategoryKind::Expense => CategoryKind::Income,
        }
    }

    #[test]
    fn every_entry_accepted_for_its_own_kind_only() {
        let table = CategoryTable::default();
        for (index, category) in table.iter() {
            let raw = index as i64;
            assert_eq!(table.validate(raw, category.kind).unwrap(), index);
            assert!(matches!(
                table.validate(raw, opposite(category.kind)),
                Err(LedgerError::InvalidSelection(_))
            ));
        }
    }

    #[test]
    fn out_of_range_rejected_for_both_kinds() {
        let table = CategoryTable::default();
        let len = table.len() as i64;
        for raw in [-1, -42, len, len + 1, i64::MAX] {
            for kind in [CategoryKind::Income, CategoryKind::Expense] {
                assert!(
                    table.validate(raw, kind).is_err(),
                    "index {raw} should be rejected for {kind}"
                );
            }
        }
    }

    #[test]
    fn filtering_by_kind_preserves_table_indices() {
        let table = CategoryTable::default();
        let expense: Vec<usize> = table
            .of_kind(CategoryKind::Expense)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(expense, vec![3, 4, 5]);
    }

    #[test]
    fn unknown_index_resolves_to_placeholder_name() {
        let table = CategoryTable::default();
        assert_eq!(table.name_of(2), "Salary");
        assert_eq!(table.name_of(99), "Unknown");
    }
}
