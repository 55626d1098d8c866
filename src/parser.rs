// Licensed under MIT. See LICENSE for details.

use crate::error::{ParseError, Result};
use crate::lexer::tokenize;
use crate::targets;
use crate::types::{Token, TokenKind, AST};

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self) -> Option<&'a Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    // '(' expr ')' | NOT atom | identifier
    fn atom(&mut self) -> std::result::Result<AST, ParseError> {
        let tok = self.eat().ok_or(ParseError::UnexpectedEnd)?;
        match tok.kind {
            TokenKind::LParen => {
                let expr = self.expr(0)?;
                match self.eat() {
                    Some(t) if t.kind == TokenKind::RParen => Ok(expr),
                    _ => Err(ParseError::UnclosedParen),
                }
            }
            TokenKind::Not => Ok(AST::Negation(Box::new(self.atom()?))),
            TokenKind::Id => Ok(AST::Identifier(tok.text.clone())),
            kind => Err(ParseError::UnexpectedToken {
                kind,
                text: tok.text.clone(),
            }),
        }
    }

    // Precedence climbing. The right operand needs a strictly higher binding
    // power, so equal-precedence chains nest to the right.
    fn expr(&mut self, min_bp: u8) -> std::result::Result<AST, ParseError> {
        let mut lhs = self.atom()?;

        while let Some(op) = self.peek().and_then(|t| t.kind.binary()) {
            if op.precedence() < min_bp {
                break;
            }
            self.pos += 1;
            let rhs = self.expr(op.precedence() + 1)?;
            lhs = AST::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        Ok(lhs)
    }
}

pub fn parse_tokens(tokens: &[Token]) -> std::result::Result<AST, ParseError> {
    let mut parser = Parser { tokens, pos: 0 };
    let ast = parser.expr(0)?;

    if parser.pos != tokens.len() {
        debug!(
            target: targets::PARSER,
            "{} trailing tokens, first {:?}",
            tokens.len() - parser.pos,
            tokens[parser.pos]
        );
        return Err(ParseError::TrailingTokens);
    }

    trace!(target: targets::PARSER, "{:?}", ast);
    Ok(ast)
}

/// Lexes and parses formula text.
pub fn parse(src: &str) -> Result<AST> {
    let tokens = tokenize(src)?;
    Ok(parse_tokens(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Oper;

    // Some test helpers.
    fn _b<T>(a: T) -> Box<T> {
        Box::new(a)
    }
    fn _id(s: &str) -> AST {
        AST::Identifier(String::from(s))
    }
    fn _not(a: AST) -> AST {
        AST::Negation(_b(a))
    }
    fn _bin(op: Oper, a: AST, b: AST) -> AST {
        AST::Binary(op, _b(a), _b(b))
    }
    fn _and(a: AST, b: AST) -> AST {
        _bin(Oper::And, a, b)
    }
    fn _or(a: AST, b: AST) -> AST {
        _bin(Oper::Or, a, b)
    }
    fn _imp(a: AST, b: AST) -> AST {
        _bin(Oper::Imp, a, b)
    }

    fn parse_ok(input: &str, res: AST) {
        assert_eq!(parse(input).unwrap(), res);
    }

    fn parse_err(input: &str, err: ParseError) {
        match parse(input) {
            Err(Error::Parse(e)) => assert_eq!(e, err),
            other => panic!("expected {:?} for {:?}, got {:?}", err, input, other),
        }
    }

    #[test]
    fn test_atoms() {
        parse_ok("A", _id("A"));
        parse_ok("a", _id("A"));
        parse_ok("(A)", _id("A"));
        parse_ok("((A))", _id("A"));
        parse_ok("¬A", _not(_id("A")));
        parse_ok("~~A", _not(_not(_id("A"))));
        parse_ok("!(A ∧ B)", _not(_and(_id("A"), _id("B"))));
    }

    #[test]
    fn test_precedence() {
        parse_ok("A ∨ B ∧ C", _or(_id("A"), _and(_id("B"), _id("C"))));
        parse_ok("A ∧ B ∨ C", _or(_and(_id("A"), _id("B")), _id("C")));
        parse_ok("¬A ∧ B", _and(_not(_id("A")), _id("B")));
        parse_ok(
            "A → B ↔ C",
            _bin(Oper::Iff, _imp(_id("A"), _id("B")), _id("C")),
        );
        parse_ok(
            "A ⊕ B → C",
            _imp(_bin(Oper::Xor, _id("A"), _id("B")), _id("C")),
        );
    }

    #[test]
    fn test_right_associativity() {
        parse_ok("A → B → C", _imp(_id("A"), _imp(_id("B"), _id("C"))));
        parse_ok("A ∨ B ∨ C", _or(_id("A"), _or(_id("B"), _id("C"))));
        parse_ok(
            "A ∨ B ⊕ C",
            _or(_id("A"), _bin(Oper::Xor, _id("B"), _id("C"))),
        );
        parse_ok("(A → B) → C", _imp(_imp(_id("A"), _id("B")), _id("C")));
    }

    #[test]
    fn test_shorthand() {
        parse_ok("a -> b", _imp(_id("A"), _id("B")));
        parse_ok("p1 & p2 | q", _or(_and(_id("P1"), _id("P2")), _id("Q")));
        parse_ok("a iff b", _bin(Oper::Iff, _id("A"), _id("B")));
    }

    #[test]
    fn test_errors() {
        parse_err("", ParseError::UnexpectedEnd);
        parse_err("A ∧", ParseError::UnexpectedEnd);
        parse_err("(A ∧ B", ParseError::UnclosedParen);
        parse_err("(A B)", ParseError::UnclosedParen);
        parse_err("A B", ParseError::TrailingTokens);
        parse_err("A)", ParseError::TrailingTokens);
        parse_err(
            "∧ A",
            ParseError::UnexpectedToken {
                kind: TokenKind::And,
                text: String::from("∧"),
            },
        );

        match parse("A $ B") {
            Err(Error::Lex(e)) => assert_eq!(e.character, '$'),
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_message() {
        let err = parse("(A ∧ B").unwrap_err();
        assert!(err.to_string().contains("unclosed parenthesis"));
    }
}
