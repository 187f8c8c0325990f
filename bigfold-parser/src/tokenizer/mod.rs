pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Classifies the whole input, returning every run along with its span and text.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    tokenize(input)
        .spanned()
        .map(|(kind, span)| Token {
            lexeme: &input[span.clone()],
            span,
            // every character is matched by at least the `Symbol` pattern
            kind: kind.unwrap_or(TokenKind::Symbol),
        })
        .collect()
}
