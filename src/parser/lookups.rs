use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::{lexer::TokenSource, tokens::TokenKind}};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Additive,
    Multiplicative,
    Primary,
}

impl BindingPower {
    /// The next level that binds tighter than this one.
    pub fn tighter(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

pub type NUDHandler<S> = fn(&mut Parser<S>) -> Result<Node, Error>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive);
    parser.led(TokenKind::Dash, BindingPower::Additive);
    parser.led(TokenKind::Star, BindingPower::Multiplicative);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative);

    // Factors
    parser.nud(TokenKind::Word, parse_identifier);
    parser.nud(TokenKind::Character, parse_character);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup<S> = HashMap<TokenKind, NUDHandler<S>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
