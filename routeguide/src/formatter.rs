use colored::*;
use routeguide_core::{ClientConnectError, Console, SequenceError};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<ClientConnectError> for FormattedString {
    fn from(err: ClientConnectError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Connection Error:".red().bold(), err))
    }
}

impl From<SequenceError> for FormattedString {
    fn from(err: SequenceError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Tour Failed:".red().bold(), err))
    }
}

/// Prints tour progress to standard output.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn line(&self, line: &str) {
        println!("{line}");
    }

    fn section(&self, title: &str) {
        println!();
        println!("{}", format!("*** {title} ***").cyan().bold());
    }
}
