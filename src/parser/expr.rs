use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{IdentifierExpr, InfixExpr, IntegerExpr, PrefixExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses one expression starting at the current token.
///
/// Infix operators are folded into the left operand for as long as the peek
/// token binds tighter than `bp`. On return the current token is the last
/// token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.current_token().literal.clone(),
        ));
    };

    let mut left = nud(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token().kind).copied() else {
            return Ok(left);
        };

        parser.next_token();
        let operator_bp = parser.current_binding_power();
        trace!(operator = %parser.current_token().literal, ?operator_bp, "folding infix expression");
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Int => match token.literal.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.literal.clone(),
                },
                token.literal,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Identifier(IdentifierExpr {
            value: token.literal.clone(),
            token,
        })),
        kind => Err(Error::new(ErrorImpl::NoPrefixParseFn { kind }, token.literal)),
    }
}

/// Parses a run of prefix operators and their operand.
///
/// The whole run is collected first and folded from the inside out, so a
/// long chain like `!-!-x` costs no recursion per operator.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut operators = vec![parser.current_token().clone()];
    parser.next_token();

    while matches!(parser.current_token_kind(), TokenKind::Not | TokenKind::Dash) {
        operators.push(parser.current_token().clone());
        parser.next_token();
    }

    let mut expr = parse_expr(parser, BindingPower::Prefix)?;
    while let Some(operator) = operators.pop() {
        expr = Expr::Prefix(PrefixExpr {
            operator,
            right_expr: Box::new(expr),
        });
    }

    Ok(expr)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}
