//! Lexical analysis.
//!
//! Converts raw input text into the ordered token sequence the parser
//! consumes. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Word tokens, single-quoted character literals and punctuation
//! - Whitespace skipping and the policy for unrecognised characters
//! - The `TokenSource` cursor the parser pulls from

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
