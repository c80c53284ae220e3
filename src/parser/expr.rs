use crate::{ast::ast::{BinaryOperator, Node}, errors::errors::{Error, ErrorImpl}, lexer::lexer::TokenSource};

use super::{lookups::BindingPower, parser::Parser};

/// `expression := term (("+" | "-") term)*`
pub fn parse_expression<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parse_binary_expr(parser, BindingPower::Additive)
}

/// `term := factor (("*" | "/") factor)*`
pub fn parse_term<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parse_binary_expr(parser, BindingPower::Multiplicative)
}

/// Parses a left-associative chain of operators that all sit at `bp`,
/// with operands parsed one level tighter.
pub fn parse_binary_expr<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Result<Node, Error> {
    let mut left = parse_operand(parser, bp)?;

    while parser.current_binding_power() == bp {
        let token = parser.advance()?;
        let operator = BinaryOperator::from_token_kind(token.kind)
            .ok_or(Error::new(ErrorImpl::UnexpectedToken { token: token.value }))?;
        let right = parse_operand(parser, bp)?;
        left = Node::binary(operator, left, right);
    }

    Ok(left)
}

fn parse_operand<S: TokenSource>(parser: &mut Parser<S>, bp: BindingPower) -> Result<Node, Error> {
    match bp.tighter() {
        BindingPower::Primary => parse_factor(parser),
        tighter => parse_binary_expr(parser, tighter),
    }
}

/// `factor := IDENTIFIER | CHAR_LITERAL | "(" expression ")"`
pub fn parse_factor<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let handler = parser
        .current_token_kind()
        .and_then(|kind| parser.get_nud_lookup().get(&kind).copied());

    match handler {
        Some(handler) => handler(parser),
        None => Err(Error::new(ErrorImpl::UnexpectedToken {
            token: parser.current_value().to_string(),
        })),
    }
}

pub fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let token = parser.advance()?;
    Ok(Node::identifier(&token.value))
}

pub fn parse_character<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let token = parser.advance()?;
    Ok(Node::character(&token.value))
}

/// A parenthesised expression yields the inner tree, no node of its own.
pub fn parse_grouping_expr<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    parser.enter_group()?;
    parser.consume("(")?;
    let expression = parse_expression(parser);
    parser.exit_group();

    let expression = expression?;
    parser.consume(")")?;

    Ok(expression)
}
