//! Parser cursor and the statement-sequence entry point.
//!
//! The parser holds exactly one token of lookahead pulled from a
//! `TokenSource`. Every grammar rule inspects that lookahead to choose an
//! alternative and advances it through `consume`, so no token is read
//! twice or skipped.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl, END_OF_INPUT},
    lexer::{lexer::TokenSource, tokens::{Token, TokenKind}},
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, NUDHandler, NUDLookup},
    stmt::parse_statement,
};

/// How many parentheses may be open at once.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Parsing state for a single run over one token source.
pub struct Parser<S> {
    /// Where tokens are pulled from
    source: S,
    /// The next unconsumed token, `None` once input is exhausted
    lookahead: Option<Token>,
    /// Lookup table for factor (prefix) handlers
    nud_lookup: NUDLookup<S>,
    /// Lookup table for binary operator binding powers
    binding_power_lookup: BPLookup,
    /// Parentheses currently open
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and pulls the first token as lookahead.
    pub fn new(source: S) -> Result<Self, Error> {
        let mut parser = Parser {
            source,
            lookahead: None,
            nud_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);
        parser.lookahead = parser.pull()?;
        Ok(parser)
    }

    fn pull(&mut self) -> Result<Option<Token>, Error> {
        if self.source.has_next() {
            Ok(Some(self.source.next_token()?))
        } else {
            Ok(None)
        }
    }

    /// Returns the lookahead without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    /// The lookahead's text, or `end of input`.
    pub fn current_value(&self) -> &str {
        self.lookahead
            .as_ref()
            .map_or(END_OF_INPUT, |token| token.value.as_str())
    }

    pub fn at_end(&self) -> bool {
        self.lookahead.is_none()
    }

    /// Binding power of the lookahead when it is a binary operator,
    /// `BindingPower::Default` otherwise.
    pub fn current_binding_power(&self) -> BindingPower {
        self.current_token_kind()
            .and_then(|kind| self.binding_power_lookup.get(&kind))
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Accepts the lookahead if its text is exactly `expected` and moves on
    /// to the next token.
    ///
    /// # Returns
    ///
    /// The consumed token, or `TokenMismatch` naming what was expected and
    /// what was found. On mismatch the lookahead is left untouched.
    pub fn consume(&mut self, expected: &str) -> Result<Token, Error> {
        match self.lookahead.take() {
            Some(token) if token.value == expected => {
                trace!(token = %token.value, "consumed");
                self.lookahead = self.pull()?;
                Ok(token)
            }
            other => {
                let found = other
                    .as_ref()
                    .map_or(END_OF_INPUT.to_string(), |token| token.value.clone());
                self.lookahead = other;
                Err(Error::new(ErrorImpl::TokenMismatch {
                    expected: expected.to_string(),
                    found,
                }))
            }
        }
    }

    /// Accepts whatever token is current.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let expected = match &self.lookahead {
            Some(token) => token.value.clone(),
            None => {
                return Err(Error::new(ErrorImpl::UnexpectedToken {
                    token: END_OF_INPUT.to_string(),
                }))
            }
        };
        self.consume(&expected)
    }

    /// Opens one level of parentheses, failing past `MAX_NESTING_DEPTH`.
    pub fn enter_group(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a binary operator at the given binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a factor handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.binding_power_lookup.insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }
}

/// Parses every statement in `source`.
///
/// Statements are separated by `;`. A trailing `;` is accepted. The first
/// error aborts the whole run and no partial result is returned.
pub fn parse<S: TokenSource>(source: S) -> Result<Vec<Node>, Error> {
    let mut parser = Parser::new(source)?;
    let mut statements = vec![];

    while !parser.at_end() {
        let statement = parse_statement(&mut parser)?;
        debug!(index = statements.len(), "parsed statement");
        statements.push(statement);

        if !parser.at_end() {
            parser.consume(";")?;
        }
    }

    Ok(statements)
}
