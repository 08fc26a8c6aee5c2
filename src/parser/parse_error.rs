use std::fmt::{self, Display};

use colored::Colorize;

/// A single parser diagnostic: a message plus the source line it happened
/// on, so it can be displayed with the offending span highlighted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub(crate) source: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context = self.source.lines().nth(self.line.saturating_sub(1));

        writeln!(f, "{}: {}", "error".red().bold(), self.message)?;
        writeln!(f, "  {} line {}:{}", "-->".blue(), self.line, self.col)?;

        if let Some(context) = context {
            writeln!(f, "   {}", context)?;
            let marker = " ".repeat(self.col.saturating_sub(1)) + "^";
            write!(f, "   {}", marker.red().bold())?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
