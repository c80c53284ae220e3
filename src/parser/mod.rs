//! Parser module for building one syntax tree per statement.
//!
//! Recursive descent over the grammar
//!
//! ```text
//! statement  := IDENTIFIER ":=" expression
//! expression := term (("+" | "-") term)*
//! term       := factor (("*" | "/") factor)*
//! factor     := IDENTIFIER | CHAR_LITERAL | "(" expression ")"
//! ```
//!
//! Binary operators are looked up by binding power, so `expression` and
//! `term` share one left-associative loop. Factors dispatch through a
//! table of prefix (NUD) handlers keyed by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
