//! Property-based tests for the parser.
//!
//! 1. **Parser always terminates** and never panics on arbitrary token soup
//! 2. **Well-formed expressions parse cleanly** into a single statement
//! 3. **Rendered trees keep their leaves**: re-lexing the canonical text
//!    yields the same identifiers and integers in the same order

use proptest::prelude::*;

use crate::{
    ast::ast::Node,
    lexer::{
        lexer::tokenize,
        tokens::{classify, TokenKind},
    },
};

use super::parser::parse;

const FRAGMENTS: &[&str] = &[
    "a", "b", "1", "22", "+", "-", "*", "/", "==", "!=", "<", ">", "!", ";", "let", "=",
    "return", "(", ")", "@",
];

const PREFIX_OPERATORS: &[&str] = &["-", "!"];

const INFIX_OPERATORS: &[&str] = &["+", "-", "*", "/", "==", "!=", "<", ">"];

fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40).prop_map(|parts| parts.join(" "))
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_]{1,6}".prop_filter("keywords are not identifiers", |s| {
            classify(s) == TokenKind::Identifier
        }),
        (0u32..100_000).prop_map(|n| n.to_string()),
    ]
}

fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (prop::sample::select(PREFIX_OPERATORS), inner.clone())
                .prop_map(|(op, operand)| format!("{}{}", op, operand)),
            (inner.clone(), prop::sample::select(INFIX_OPERATORS), inner)
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
        ]
    })
}

fn leaves(source: &str) -> Vec<String> {
    tokenize(source.to_string())
        .into_iter()
        .filter(|t| matches!(t.kind, TokenKind::Identifier | TokenKind::Int))
        .map(|t| t.literal)
        .collect()
}

proptest! {
    #[test]
    fn parser_never_panics(source in token_soup()) {
        let token_count = tokenize(source.clone()).len();
        let (_parser, program) = parse(source);

        prop_assert!(program.len() < token_count.max(1));
    }

    #[test]
    fn well_formed_expressions_parse_cleanly(source in expression()) {
        let (parser, program) = parse(source.clone());

        prop_assert!(parser.errors().is_empty(), "{:?}: {:?}", source, parser.errors());
        prop_assert_eq!(program.len(), 1);
    }

    #[test]
    fn rendering_keeps_leaves(name in leaf().prop_filter("integers cannot be bound", |s| {
        classify(s) == TokenKind::Identifier && !s.starts_with(|c: char| c.is_ascii_digit())
    }), value in expression()) {
        let source = format!("let {} = {};", name, value);
        let (parser, program) = parse(source.clone());
        prop_assert!(parser.errors().is_empty());

        prop_assert_eq!(leaves(&program.to_text()), leaves(&source));
    }
}
