//! Unit tests for node rendering.

use crate::{
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: MK_TOKEN!(TokenKind::Identifier, name.to_string()),
        value: name.to_string(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: MK_TOKEN!(TokenKind::Int, value.to_string()),
        value,
    })
}

fn op(kind: TokenKind, literal: &str) -> Token {
    MK_TOKEN!(kind, literal.to_string())
}

#[test]
fn test_let_statement_rendering() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: op(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_text(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_rendering() {
    let stmt = Stmt::Return(ReturnStmt {
        token: op(TokenKind::Return, "return"),
        value: int(10),
    });

    assert_eq!(stmt.to_text(), "return 10;");
    assert_eq!(stmt.token_literal(), "return");
}

#[test]
fn test_operator_rendering_is_parenthesized() {
    let negated = Expr::Prefix(PrefixExpr {
        operator: op(TokenKind::Dash, "-"),
        right_expr: Box::new(int(15)),
    });
    assert_eq!(negated.to_text(), "(-15)");
    assert_eq!(negated.token_literal(), "-");

    let sum = Expr::Infix(InfixExpr {
        left: Box::new(int(5)),
        operator: op(TokenKind::Plus, "+"),
        right: Box::new(negated),
    });
    assert_eq!(sum.to_text(), "(5 + (-15))");

    let stmt = Stmt::Expression(ExpressionStmt {
        token: op(TokenKind::Int, "5"),
        expression: sum,
    });
    assert_eq!(stmt.to_text(), "(5 + (-15))");
    assert_eq!(stmt.token_literal(), "5");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            Stmt::Let(LetStmt {
                token: op(TokenKind::Let, "let"),
                name: ident("x"),
                value: int(1),
            }),
            Stmt::Expression(ExpressionStmt {
                token: op(TokenKind::Identifier, "x"),
                expression: Expr::Identifier(ident("x")),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "let x = 1;x");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_text(), "");
}
