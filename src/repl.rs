//! Line-oriented interactive front end.
//!
//! Every line read is lexed and its tokens printed, one per line, up to the
//! end of the line. In [`Mode::Parse`] the line is parsed instead and the
//! canonical rendering (or the diagnostics) is printed.

use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::debug;

use crate::{
    ast::ast::Node,
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tokens,
    Parse,
}

/// Name shown in the banner, taken from `USER` or `USERNAME`.
pub fn user_name() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| String::from("stranger"))
}

pub fn banner(name: &str) -> String {
    format!("Hello, {}! This is the Monkey programming language.", name)
}

/// Produces the output for a single input line, newline-terminated.
pub fn eval_line(line: &str, mode: Mode) -> String {
    let mut output = String::new();

    match mode {
        Mode::Tokens => {
            let mut lexer = Lexer::new(line.to_string());
            loop {
                let token = lexer.next_token();
                if token.kind == TokenKind::EOF {
                    break;
                }
                output.push_str(&format!("{}\n", token));
            }
        }
        Mode::Parse => {
            let (parser, program) = parse(line.to_string());
            if parser.diagnostics().is_empty() {
                output.push_str(&format!("{}\n", program.to_text()));
            } else {
                for error in parser.diagnostics() {
                    output.push_str(&format!("{}\n", display_error(error)));
                }
            }
        }
    }

    output
}

/// Runs the read loop until end of input or interrupt.
pub fn start(mode: Mode) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                print!("{}", eval_line(&line, mode));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("input closed, leaving read loop");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        assert_eq!(
            banner("ada"),
            "Hello, ada! This is the Monkey programming language."
        );
    }

    #[test]
    fn test_user_name_is_never_empty() {
        assert!(!user_name().is_empty());
    }

    #[test]
    fn test_eval_line_prints_tokens() {
        assert_eq!(
            eval_line("let x = 1;", Mode::Tokens),
            "LET:\"let\"\nIDENT:\"x\"\nASSIGN:\"=\"\nINT:\"1\"\nSEMICOLON:\";\"\n"
        );
    }

    #[test]
    fn test_eval_line_empty() {
        assert_eq!(eval_line("", Mode::Tokens), "");
        assert_eq!(eval_line("", Mode::Parse), "\n");
    }

    #[test]
    fn test_eval_line_parses() {
        assert_eq!(eval_line("-a * b", Mode::Parse), "((-a) * b)\n");
    }

    #[test]
    fn test_eval_line_reports_diagnostics() {
        let output = eval_line("let = 1", Mode::Parse);

        assert!(output.contains("next token is ASSIGN, want IDENT"));
        assert!(output.contains("no prefix parse function for ASSIGN found"));
    }
}
