//! Parser module for building the syntax tree.
//!
//! This module contains the parser that pulls tokens from a lexer and builds
//! a [`Program`](crate::ast::ast::Program). It uses a Pratt parser for
//! expressions with operator precedence and handles:
//!
//! - Statement dispatch (`let`, `return`, expression statements)
//! - Prefix and infix expressions
//! - Diagnostic accumulation without aborting the parse
//!
//! Expressions are parsed with NUD (null denotation) and LED (left
//! denotation) handlers looked up by token kind, with binding powers for
//! precedence.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod property_tests;
