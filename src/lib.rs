#![allow(clippy::module_inception)]

use tracing::info;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::{LexMode, Scanner},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Scans and parses `source`, returning one tree per statement.
pub fn parse_program(source: &str, mode: LexMode) -> Result<Vec<Node>, Error> {
    let scanner = Scanner::new(source, mode)?;
    info!(tokens = scanner.tokens().len(), "tokenized");

    let statements = parse(scanner)?;
    info!(statements = statements.len(), "parsed");

    Ok(statements)
}

/// Formats an error the way the driver reports it.
pub fn format_error(error: &Error) -> String {
    if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    }
}
