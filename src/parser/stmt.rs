use crate::{ast::ast::Node, errors::errors::{Error, ErrorImpl}, lexer::{lexer::TokenSource, tokens::TokenKind}};

use super::{expr::parse_expression, parser::Parser};

/// `statement := IDENTIFIER ":=" expression`
pub fn parse_statement<S: TokenSource>(parser: &mut Parser<S>) -> Result<Node, Error> {
    let target = match parser.current_token() {
        Some(token) if token.kind == TokenKind::Word => token.value.clone(),
        _ => {
            return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_value().to_string(),
                message: String::from("expected an identifier to assign to"),
            }))
        }
    };

    parser.consume(&target)?;
    parser.consume(":=")?;
    let value = parse_expression(parser)?;

    Ok(Node::assignment(&target, value))
}
