// cpc: propositional formulas and Portuguese sentences
// (c) 2017 Tim Taubert <tim@timtaubert.de>
// CPC may be freely distributed under the MIT license.

//! Translation between propositional formulas (¬ ∧ ∨ ⊕ → ↔) and Portuguese
//! sentences.

#[macro_use]
extern crate log;

// Compiles a constant pattern once.
macro_rules! static_regex {
    ($re:expr) => {{
        static RE: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
        RE.get_or_init(|| ::regex::Regex::new($re).expect("invalid static pattern"))
    }};
}

pub mod atoms;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod nl;
pub mod parser;
pub mod render;
pub mod session;
pub mod state;
pub mod targets;
pub mod types;

pub use atoms::AtomMap;
pub use error::{Error, LexError, ParseError, Result};
pub use parser::parse;
pub use session::{AcceptAll, Confirm, Session};
pub use state::State;
pub use types::{Oper, Token, TokenKind, AST};
