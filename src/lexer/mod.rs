//! Lexical analysis for Monkey source text.
//!
//! This module contains the lexer that turns source text into tokens on
//! demand. It handles:
//!
//! - Recognition of keywords, identifiers and integer literals
//! - One- and two-character operators and delimiters
//! - Whitespace skipping
//! - Reporting unrecognised characters as `Illegal` tokens

pub mod lexer;
pub mod tokens;
