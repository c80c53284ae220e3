use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{errors::errors::{Error, ErrorImpl}, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored to the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[A-Za-z0-9_]+").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^'[^\\r\\n\\x{85}\\x{2028}\\x{2029}]'").unwrap(), handler: character_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Walrus, ":=") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
    ];
}

/// What the scanner does with a character no pattern accepts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// Drop the character and keep scanning.
    #[default]
    Skip,
    /// Fail with `UnrecognisedCharacter`.
    Strict,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        let len = matched.end();
        lexer.advance_n(len);
    }
}

fn word_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        let value = matched.as_str().to_string();
        lexer.advance_n(value.len());
        lexer.push(MK_TOKEN!(TokenKind::Word, value));
    }
}

fn character_handler(lexer: &mut Lexer, regex: &Regex) {
    if let Some(matched) = regex.find(lexer.remainder()) {
        let value = matched.as_str().to_string();
        lexer.advance_n(value.len());
        lexer.push(MK_TOKEN!(TokenKind::Character, value));
    }
}

/// Splits `source` into tokens, discarding whitespace.
///
/// Patterns are tried in table order at each position and the first one
/// that matches there wins. A position no pattern accepts is handled
/// according to `mode`.
pub fn tokenize(source: &str, mode: LexMode) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while let Some(character) = lex.at() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match (pattern, mode) {
            (Some(pattern), _) => (pattern.handler)(&mut lex, &pattern.regex),
            (None, LexMode::Strict) => {
                return Err(Error::new(ErrorImpl::UnrecognisedCharacter {
                    character,
                    offset: lex.pos,
                }));
            }
            (None, LexMode::Skip) => {
                debug!(?character, offset = lex.pos, "skipping unrecognised character");
                lex.advance_n(character.len_utf8());
            }
        }
    }

    debug_assert!(lex.at_eof());
    Ok(lex.tokens)
}

/// Anything the parser can pull tokens from, one at a time.
pub trait TokenSource {
    fn has_next(&self) -> bool;
    /// Takes the next token. Calling this when `has_next` is false is an
    /// internal error and yields `TokensExhausted`.
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// A fully scanned token sequence with a forward-only cursor.
#[derive(Debug, Clone)]
pub struct Scanner {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Scanner {
    pub fn new(source: &str, mode: LexMode) -> Result<Scanner, Error> {
        Ok(Scanner::from_tokens(tokenize(source, mode)?))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Scanner {
        Scanner { tokens, cursor: 0 }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl TokenSource for Scanner {
    fn has_next(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    fn next_token(&mut self) -> Result<Token, Error> {
        let token = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or(Error::new(ErrorImpl::TokensExhausted))?;
        self.cursor += 1;
        Ok(token)
    }
}
