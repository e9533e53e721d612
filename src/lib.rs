#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

/// Formats a parse diagnostic for the terminal.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `5`, expected ASSIGN here)
///   | next token is INT, want ASSIGN
///   | at `5`
/// ```
pub fn display_error(error: &Error) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n  | {}\n  | at `{}`", header, error, error.get_literal())
}
