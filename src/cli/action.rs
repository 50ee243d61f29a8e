use crate::errors::LedgerError;

/// Menu commands, in the order they are numbered on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddIncome,
    AddExpense,
    ViewIncome,
    ViewExpense,
    ViewSavings,
    ViewCategories,
    Exit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::AddIncome,
        Action::AddExpense,
        Action::ViewIncome,
        Action::ViewExpense,
        Action::ViewSavings,
        Action::ViewCategories,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddIncome => "Add income",
            Action::AddExpense => "Add expense",
            Action::ViewIncome => "View income",
            Action::ViewExpense => "View expense",
            Action::ViewSavings => "View savings",
            Action::ViewCategories => "View categories",
            Action::Exit => "Exit",
        }
    }

    pub fn number(self) -> usize {
        self as usize
    }

    /// Maps a raw menu line to an action.
    pub fn from_selection(input: &str) -> Result<Action, LedgerError> {
        let trimmed = input.trim();
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(|number| Action::ALL.get(number).copied())
            .ok_or_else(|| LedgerError::InvalidSelection(format!("unknown option `{trimmed}`")))
    }
}
