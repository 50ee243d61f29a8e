use std::{
    fmt,
    io::{self, Write},
};

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Plain,
    Section,
    Success,
    Warning,
    Error,
    Prompt,
}

/// Writes user-facing text, optionally styled with ANSI colours.
pub struct Output<W> {
    writer: W,
    styled: bool,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, styled: bool) -> Self {
        Self { writer, styled }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> io::Result<()> {
        let formatted = self.apply_style(kind, message);
        if kind == MessageKind::Prompt {
            write!(self.writer, "{formatted}")?;
            return self.writer.flush();
        }
        writeln!(self.writer, "{formatted}")
    }

    pub fn line(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Plain, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Section, title)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Error, message)
    }

    pub fn prompt(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.print(MessageKind::Prompt, message)
    }

    pub fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    fn apply_style(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = match kind {
            MessageKind::Section => format!("--- {} ---", message.to_string().trim()),
            _ => message.to_string(),
        };

        if !self.styled {
            return text;
        }

        match kind {
            MessageKind::Plain => text,
            MessageKind::Section => text.bold().to_string(),
            MessageKind::Success => text.bright_green().to_string(),
            MessageKind::Warning => text.bright_yellow().to_string(),
            MessageKind::Error => text.bright_red().to_string(),
            MessageKind::Prompt => text.bright_cyan().to_string(),
        }
    }
}

/// Renders an amount the way every view shows it.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
