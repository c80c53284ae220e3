//! Unit tests for the lexer module.
//!
//! Covers punctuation, word tokens, character literals, whitespace
//! handling, both policies for unrecognised characters and the scanner
//! cursor.

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::{tokenize, LexMode, Scanner, TokenSource},
    tokens::TokenKind,
};

fn values(source: &str) -> Vec<String> {
    tokenize(source, LexMode::Skip)
        .unwrap()
        .into_iter()
        .map(|token| token.value)
        .collect()
}

#[test]
fn test_tokenize_statement() {
    let tokens = values("x := 5 + y * (z - 3) ;");

    assert_eq!(
        tokens,
        vec!["x", ":=", "5", "+", "y", "*", "(", "z", "-", "3", ")", ";"]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) + - * / := ;", LexMode::Strict).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::Plus);
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].kind, TokenKind::Star);
    assert_eq!(tokens[5].kind, TokenKind::Slash);
    assert_eq!(tokens[6].kind, TokenKind::Walrus);
    assert_eq!(tokens[7].kind, TokenKind::Semicolon);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_words() {
    let tokens = tokenize("foo baz_123 _under 42 007", LexMode::Strict).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Word));
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_under");
    assert_eq!(tokens[3].value, "42");
    assert_eq!(tokens[4].value, "007");
}

#[test]
fn test_tokenize_character_literals() {
    let tokens = tokenize("'a' ' ' '+'", LexMode::Strict).unwrap();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Character));
    assert_eq!(tokens[0].value, "'a'");
    assert_eq!(tokens[1].value, "' '");
    assert_eq!(tokens[2].value, "'+'");
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(values("a:=b*(c/'d');"), vec!["a", ":=", "b", "*", "(", "c", "/", "'d'", ")", ";"]);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = values("  \tx\n  :=\r\n  y  ");

    assert_eq!(tokens, vec!["x", ":=", "y"]);
    assert!(tokens.iter().all(|token| !token.trim().is_empty()));
}

#[test]
fn test_tokenize_empty_input() {
    assert!(tokenize("", LexMode::Strict).unwrap().is_empty());
    assert!(tokenize("   \n\t", LexMode::Strict).unwrap().is_empty());
}

#[test]
fn test_tokenize_skips_unrecognised() {
    assert_eq!(values("x @:= #y $"), vec!["x", ":=", "y"]);
}

#[test]
fn test_tokenize_lone_colon_is_skipped() {
    assert_eq!(values("x : = y"), vec!["x", "y"]);
}

#[test]
fn test_tokenize_unterminated_character_literal() {
    // The quotes of 'ab' match no pattern, only the word survives.
    assert_eq!(values("'ab'"), vec!["ab"]);
}

#[test]
fn test_tokenize_strict_rejects_unrecognised() {
    let error = tokenize("x := y @ z", LexMode::Strict).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedCharacter {
            character: '@',
            offset: 7
        }
    );
}

#[test]
fn test_tokenize_strict_reports_multibyte_character() {
    let error = tokenize("é", LexMode::Strict).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedCharacter {
            character: 'é',
            offset: 0
        }
    );
}

#[test]
fn test_tokenize_skips_multibyte_character() {
    assert_eq!(values("aé b"), vec!["a", "b"]);
}

#[test]
fn test_default_mode_is_skip() {
    assert_eq!(LexMode::default(), LexMode::Skip);
}

#[test]
fn test_scanner_cursor() {
    let mut scanner = Scanner::new("a := b", LexMode::Skip).unwrap();

    assert_eq!(scanner.tokens().len(), 3);
    assert!(scanner.has_next());
    assert_eq!(scanner.next_token().unwrap().value, "a");
    assert_eq!(scanner.next_token().unwrap().value, ":=");
    assert_eq!(scanner.next_token().unwrap().value, "b");
    assert!(!scanner.has_next());
}

#[test]
fn test_scanner_exhausted() {
    let mut scanner = Scanner::new("", LexMode::Skip).unwrap();

    assert!(!scanner.has_next());
    let error = scanner.next_token().unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::TokensExhausted);
}

#[test]
fn test_character_literal_excludes_line_terminators() {
    for terminator in ["\r", "\n", "\u{85}", "\u{2028}", "\u{2029}"] {
        let source = format!("x '{}'", terminator);
        let tokens = tokenize(&source, LexMode::Skip).unwrap();

        assert_eq!(tokens.len(), 1, "terminator {:?}", terminator);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }
}

#[test]
fn test_strict_rejects_quoted_carriage_return() {
    let error = tokenize("'\r'", LexMode::Strict).unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorImpl::UnrecognisedCharacter {
            character: '\'',
            offset: 0
        }
    );
}
