use std::{
    env,
    path::{Path, PathBuf},
};

use crate::ledger::CategoryTable;

const DEFAULT_LEDGER_FILE: &str = "db.json";
const LEDGER_PATH_VAR: &str = "ACCOUNT_BOOK_DB";
const SCRIPT_MODE_VAR: &str = "ACCOUNT_BOOK_CLI_SCRIPT";
const NO_COLOR_VAR: &str = "NO_COLOR";

/// How the interaction loop reads its input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Interactive,
    Script,
}

/// Immutable application configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub ledger_path: PathBuf,
    pub categories: CategoryTable,
    pub input_mode: InputMode,
    pub styled_output: bool,
}

impl Config {
    /// Plain configuration with the default category table, suited to tests and embedding.
    pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            ledger_path: ledger_path.into(),
            categories: CategoryTable::default(),
            input_mode: InputMode::Script,
            styled_output: false,
        }
    }

    /// Resolves configuration from `ACCOUNT_BOOK_DB`, `ACCOUNT_BOOK_CLI_SCRIPT` and `NO_COLOR`.
    pub fn from_env() -> Self {
        let ledger_path = env::var_os(LEDGER_PATH_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILE));
        let input_mode = if env::var_os(SCRIPT_MODE_VAR).is_some() {
            InputMode::Script
        } else {
            InputMode::Interactive
        };
        let styled_output =
            env::var_os(NO_COLOR_VAR).is_none() && input_mode == InputMode::Interactive;
        Self {
            ledger_path,
            categories: CategoryTable::default(),
            input_mode,
            styled_output,
        }
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }
}
