//! logos-based tokenizer for inline declaration blocks.
//!
//! Longest match wins, so `10px` lexes as [`Token::Dimension`] rather than
//! `Number` + `Ident`.

use logos::Logos;

use crate::style::properties::PropertyError;

/// Token produced by the declaration lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Number with a unit suffix: `10px`, `50%`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?(px|%)")]
    Dimension,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: property names and keywords.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,
}

/// Tokenize a declaration block into `(Token, text)` pairs.
///
/// Fails on the first character that does not start a token.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, PropertyError> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, input[span].to_string())),
            Err(()) => Err(PropertyError::Malformed(format!(
                "unexpected '{}' at offset {}",
                &input[span.clone()],
                span.start
            ))),
        })
        .collect()
}
