use std::io::{self, Write};

use tracing::{debug, info};

use super::{
    action::Action,
    input::{LineSource, ReadlineInput, ScriptInput},
    output::{format_amount, Output},
    prompts,
};
use crate::{
    config::{Config, InputMode},
    errors::CliError,
    ledger::{CategoryKind, CategoryTable, Transaction},
    storage::LedgerStore,
};

const MENU_PROMPT: &str = "=> Enter your option: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Read-evaluate-print cycle over the fixed action menu. Owns the store it mutates.
pub struct InteractionLoop<'a, S, W> {
    store: LedgerStore,
    categories: &'a CategoryTable,
    input: S,
    out: Output<W>,
    state: LoopState,
}

impl<'a, S: LineSource, W: Write> InteractionLoop<'a, S, W> {
    pub fn new(
        store: LedgerStore,
        categories: &'a CategoryTable,
        input: S,
        out: Output<W>,
    ) -> Self {
        Self {
            store,
            categories,
            input,
            out,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_parts(self) -> (LedgerStore, W) {
        (self.store, self.out.into_inner())
    }

    /// Runs until the exit action is chosen or input runs out.
    pub fn run(&mut self) -> Result<(), CliError> {
        while self.state == LoopState::Running {
            self.step()?;
        }
        info!("interaction loop stopped");
        Ok(())
    }

    /// Renders the menu once, reads a selection and performs it.
    pub fn step(&mut self) -> Result<LoopState, CliError> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        self.out.blank_line()?;
        self.print_menu()?;
        self.out.blank_line()?;

        let Some(line) = prompts::ask(&mut self.input, &mut self.out, MENU_PROMPT)? else {
            self.stop();
            return Ok(self.state);
        };
        self.out.blank_line()?;

        match Action::from_selection(&line) {
            Ok(action) => self.dispatch(action)?,
            Err(err) => {
                debug!(%err, "menu selection rejected");
                self.out.warning("Wrong number! Try again!")?;
            }
        }
        Ok(self.state)
    }

    fn dispatch(&mut self, action: Action) -> Result<(), CliError> {
        debug!(?action, "dispatching");
        match action {
            Action::AddIncome => self.add_transaction(CategoryKind::Income),
            Action::AddExpense => self.add_transaction(CategoryKind::Expense),
            Action::ViewIncome => print_transactions(
                &mut self.out,
                self.categories,
                "All Incomes",
                self.store.list_incomes(),
            ),
            Action::ViewExpense => print_transactions(
                &mut self.out,
                self.categories,
                "All Expenses",
                self.store.list_expenses(),
            ),
            Action::ViewSavings => {
                self.out
                    .line(format!("Total savings: {}", format_amount(self.store.savings())))?;
                Ok(())
            }
            Action::ViewCategories => {
                prompts::print_categories(&mut self.out, self.categories, None)
            }
            Action::Exit => {
                self.stop();
                Ok(())
            }
        }
    }

    fn add_transaction(&mut self, kind: CategoryKind) -> Result<(), CliError> {
        let Some(amount) = prompts::amount(&mut self.input, &mut self.out, kind)? else {
            self.stop();
            return Ok(());
        };
        let Some(category) =
            prompts::category(&mut self.input, &mut self.out, self.categories, kind)?
        else {
            self.stop();
            return Ok(());
        };

        match kind {
            CategoryKind::Income => self.store.add_income(amount, category).save()?,
            CategoryKind::Expense => self.store.add_expense(amount, category).save()?,
        }

        self.out.blank_line()?;
        self.out.success(format!(
            "New {} record added!",
            kind.label().to_lowercase()
        ))?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        self.out.section("Available Actions")?;
        for action in Action::ALL {
            self.out
                .line(format!("[{}] {}", action.number(), action.label()))?;
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }
}

fn print_transactions<W: Write>(
    out: &mut Output<W>,
    categories: &CategoryTable,
    title: &str,
    transactions: &[Transaction],
) -> Result<(), CliError> {
    out.section(title)?;
    for (index, txn) in transactions.iter().enumerate() {
        out.line(format!(
            "[{index}] Amount: {}, Category: {}",
            format_amount(txn.amount),
            categories.name_of(txn.category)
        ))?;
    }
    out.blank_line()?;
    Ok(())
}

/// Opens the configured ledger and drives the menu over stdin/stdout.
pub fn run_cli(config: &Config) -> Result<(), CliError> {
    let store = LedgerStore::open(config.ledger_path())?;
    info!(path = %store.path().display(), "ledger ready");
    let out = Output::new(io::stdout(), config.styled_output);

    match config.input_mode {
        InputMode::Script => {
            let input = ScriptInput::new(io::stdin().lock());
            InteractionLoop::new(store, &config.categories, input, out).run()
        }
        InputMode::Interactive => {
            let input = ReadlineInput::new()?;
            InteractionLoop::new(store, &config.categories, input, out).run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(script: &str) -> (LoopState, LedgerStore, String, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = LedgerStore::open(temp.path().join("db.json")).expect("store");
        let categories = CategoryTable::default();
        let input = ScriptInput::new(Cursor::new(script.to_string()));
        let mut shell =
            InteractionLoop::new(store, &categories, input, Output::new(Vec::new(), false));
        shell.run().expect("run");
        let state = shell.state();
        let (store, bytes) = shell.into_parts();
        (state, store, String::from_utf8(bytes).unwrap(), temp)
    }

    #[test]
    fn exit_stops_without_further_prompts() {
        let (state, _, text, _guard) = run_script("6\n0\n");
        assert_eq!(state, LoopState::Stopped);
        assert_eq!(text.matches(MENU_PROMPT).count(), 1);
        assert!(!text.contains("Enter the income amount"));
    }

    #[test]
    fn step_on_unknown_selection_keeps_running() {
        let temp = TempDir::new().expect("temp dir");
        let store = LedgerStore::open(temp.path().join("db.json")).expect("store");
        let categories = CategoryTable::default();
        let input = ScriptInput::new(Cursor::new("99\n"));
        let mut shell =
            InteractionLoop::new(store, &categories, input, Output::new(Vec::new(), false));

        assert_eq!(shell.step().unwrap(), LoopState::Running);
        assert_eq!(shell.step().unwrap(), LoopState::Stopped);
        let (_, bytes) = shell.into_parts();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Wrong number! Try again!"));
        assert_eq!(text.matches("--- Available Actions ---").count(), 2);
    }

    #[test]
    fn savings_view_reflects_added_records() {
        let (_, store, text, _guard) = run_script("0\n1500\n2\n1\n400\n3\n4\n6\n");
        assert_eq!(store.total_income(), 1500.0);
        assert_eq!(store.total_expense(), 400.0);
        assert!(text.contains("Total savings: 1100.00"));
    }
}
