// Licensed under MIT. See LICENSE for details.

use thiserror::Error;

use crate::types::TokenKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid symbol {character:?} at position {position}")]
pub struct LexError {
    pub character: char,
    // Character offset into the normalized formula text.
    pub position: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unclosed parenthesis")]
    UnclosedParen,
    #[error("unexpected token {kind} ({text:?})")]
    UnexpectedToken { kind: TokenKind, text: String },
    #[error("trailing tokens after the end of the formula")]
    TrailingTokens,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("the atom map is empty, define atoms (A=description, B=description, ...) first")]
    EmptyMap,
    #[error("no atom was defined, use the format A=description")]
    EmptyExtraction,
    #[error("all atom letters A-Z are in use")]
    NoFreeLetter,
    #[error("invalid clause pattern: {0}")]
    Pattern(#[from] regex::Error),
}
