use std::io::Write;

use tracing::debug;

use super::{input::LineSource, output::Output};
use crate::{
    errors::{CliError, LedgerError},
    ledger::{CategoryKind, CategoryTable},
};

/// Reads one line, printing `prompt` first when the source does not draw it.
pub fn ask<S: LineSource, W: Write>(
    input: &mut S,
    out: &mut Output<W>,
    prompt: &str,
) -> Result<Option<String>, CliError> {
    if !input.renders_prompt() {
        out.prompt(prompt)?;
    }
    let line = input.read_line(prompt)?;
    if line.is_none() && !input.renders_prompt() {
        out.blank_line()?;
    }
    Ok(line)
}

/// Prompts until the user enters a finite, non-negative amount.
pub fn amount<S: LineSource, W: Write>(
    input: &mut S,
    out: &mut Output<W>,
    kind: CategoryKind,
) -> Result<Option<f64>, CliError> {
    let prompt = format!("Enter the {} amount: ", kind.label().to_lowercase());
    loop {
        let Some(line) = ask(input, out, &prompt)? else {
            return Ok(None);
        };
        match parse_amount(&line) {
            Some(value) => return Ok(Some(value)),
            None => {
                debug!(input = %line.trim(), "amount rejected");
                out.warning("Enter a valid non-negative amount")?;
            }
        }
    }
}

/// Prints the categories of `kind` and prompts until a matching table index is entered.
pub fn category<S: LineSource, W: Write>(
    input: &mut S,
    out: &mut Output<W>,
    table: &CategoryTable,
    kind: CategoryKind,
) -> Result<Option<usize>, CliError> {
    out.blank_line()?;
    print_categories(out, table, Some(kind))?;
    loop {
        let Some(line) = ask(input, out, "Enter the category option: ")? else {
            return Ok(None);
        };
        let outcome = line
            .trim()
            .parse::<i64>()
            .map_err(|_| {
                LedgerError::InvalidSelection(format!("`{}` is not a number", line.trim()))
            })
            .and_then(|index| table.validate(index, kind));
        match outcome {
            Ok(index) => return Ok(Some(index)),
            Err(err) => {
                debug!(%err, "category rejected");
                out.warning(format!(
                    "Enter a valid {} category",
                    kind.label().to_lowercase()
                ))?;
            }
        }
    }
}

/// Lists the category table, optionally restricted to one kind. Indices are never renumbered.
pub fn print_categories<W: Write>(
    out: &mut Output<W>,
    table: &CategoryTable,
    kind: Option<CategoryKind>,
) -> Result<(), CliError> {
    out.section("Available Categories")?;
    for (index, entry) in table.iter() {
        if kind.is_some_and(|wanted| wanted != entry.kind) {
            continue;
        }
        out.line(format!("[{index}] Name: {}, Type: {}", entry.name, entry.kind))?;
    }
    out.blank_line()?;
    Ok(())
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
