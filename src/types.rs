// cpc: propositional formulas and Portuguese sentences
// (c) 2017 Tim Taubert <tim@timtaubert.de>
// CPC may be freely distributed under the MIT license.

use std::fmt;

pub type Ident = String;

// Precedence of negation, tighter than any binary connective.
pub const NOT_PRECEDENCE: u8 = 5;

// Identifiers never need parentheses.
pub const ATOM_PRECEDENCE: u8 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Id,
    Not,
    And,
    Or,
    Xor,
    Imp,
    Iff,
    LParen,
    RParen,
}

impl TokenKind {
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '¬' | '!' | '~' => Some(TokenKind::Not),
            '∧' | '&' | '^' => Some(TokenKind::And),
            '∨' | '|' => Some(TokenKind::Or),
            '⊕' => Some(TokenKind::Xor),
            '→' => Some(TokenKind::Imp),
            '↔' => Some(TokenKind::Iff),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }

    // The binary connective this token stands for, if any.
    pub fn binary(self) -> Option<Oper> {
        match self {
            TokenKind::And => Some(Oper::And),
            TokenKind::Or => Some(Oper::Or),
            TokenKind::Xor => Some(Oper::Xor),
            TokenKind::Imp => Some(Oper::Imp),
            TokenKind::Iff => Some(Oper::Iff),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            TokenKind::Id => "ID",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Xor => "XOR",
            TokenKind::Imp => "IMP",
            TokenKind::Iff => "IFF",
            TokenKind::LParen => "LP",
            TokenKind::RParen => "RP",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: String::from(text),
        }
    }
}

// Binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Oper {
    And,
    Or,
    Xor,
    Imp,
    Iff,
}

impl Oper {
    pub fn symbol(self) -> &'static str {
        match self {
            Oper::And => "∧",
            Oper::Or => "∨",
            Oper::Xor => "⊕",
            Oper::Imp => "→",
            Oper::Iff => "↔",
        }
    }

    // Or and Xor share a level; Iff binds loosest.
    pub fn precedence(self) -> u8 {
        match self {
            Oper::Iff => 1,
            Oper::Imp => 2,
            Oper::Or | Oper::Xor => 3,
            Oper::And => 4,
        }
    }

    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Oper::And => lhs && rhs,
            Oper::Or => lhs || rhs,
            Oper::Xor => lhs ^ rhs,
            Oper::Imp => !lhs || rhs,
            Oper::Iff => lhs == rhs,
        }
    }
}

// AST node types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AST {
    // A
    Identifier(Ident),
    // ¬A
    // [one child]
    Negation(Box<AST>),
    // A ∧ B, A → B, ...
    // [two children]
    Binary(Oper, Box<AST>, Box<AST>),
}

impl AST {
    pub fn precedence(&self) -> u8 {
        match *self {
            AST::Identifier(_) => ATOM_PRECEDENCE,
            AST::Negation(_) => NOT_PRECEDENCE,
            AST::Binary(op, _, _) => op.precedence(),
        }
    }
}

// A connective as presented to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub reading: &'static str,
}

pub const OPERATORS: [OperatorInfo; 6] = [
    OperatorInfo { symbol: "¬", name: "Negação", reading: "não" },
    OperatorInfo { symbol: "∧", name: "Conjunção", reading: "e" },
    OperatorInfo { symbol: "∨", name: "Disjunção", reading: "ou" },
    OperatorInfo { symbol: "⊕", name: "Exclusivo", reading: "ou...ou" },
    OperatorInfo { symbol: "→", name: "Condicional", reading: "se...então" },
    OperatorInfo { symbol: "↔", name: "Bicondicional", reading: "se e somente se" },
];
