use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A recorded parse diagnostic.
///
/// There is no source position; the literal of the token that triggered
/// the diagnostic is the only location hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    literal: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, literal: impl Into<String>) -> Self {
        Error {
            internal_error: error_impl,
            literal: literal.into(),
        }
    }

    pub fn get_literal(&self) -> &str {
        &self.literal
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {} here",
                self.literal, expected
            )),
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Semicolon } => ErrorTip::Suggestion(
                String::from("Expected an expression before `;`"),
            ),
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal } => ErrorTip::None,
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                self.literal
            )),
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                literal
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("next token is {found}, want {expected}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
}
