// Licensed under MIT. See LICENSE for details.

use nom::branch::alt;
use nom::bytes::complete::take_while;
use nom::character::complete::{anychar, multispace0, satisfy};
use nom::combinator::{map, map_opt, recognize};
use nom::multi::many0;
use nom::sequence::{pair, preceded, terminated};
use nom::IResult;

use crate::error::LexError;
use crate::targets;
use crate::types::{Token, TokenKind};

// Rewrite ASCII shorthand into native symbols. "<->" must go before "->".
fn normalize(src: &str) -> String {
    let s = static_regex!(r"<->|<=>").replace_all(src, "↔");
    let s = static_regex!(r"->").replace_all(&s, "→");
    let s = static_regex!(r"(?i)\bxor\b").replace_all(&s, "⊕");
    let s = static_regex!(r"(?i)\biff\b").replace_all(&s, "↔");
    let s = static_regex!(r"(?i)\bimplies\b").replace_all(&s, "→");
    let s = static_regex!(r"\s+").replace_all(&s, " ");
    s.trim().to_string()
}

// A letter followed by letters, digits or underscores. A lone "v" is the
// ASCII disjunction.
fn identifier(input: &str) -> IResult<&str, Token> {
    map(
        recognize(pair(
            satisfy(|c| c.is_ascii_alphabetic()),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        )),
        |id: &str| match id {
            "v" => Token::new(TokenKind::Or, id),
            _ => Token::new(TokenKind::Id, &id.to_uppercase()),
        },
    )(input)
}

fn symbol(input: &str) -> IResult<&str, Token> {
    map_opt(anychar, |c| {
        TokenKind::from_symbol(c).map(|kind| Token {
            kind,
            text: c.to_string(),
        })
    })(input)
}

fn token(input: &str) -> IResult<&str, Token> {
    preceded(multispace0, alt((identifier, symbol)))(input)
}

fn tokens(input: &str) -> IResult<&str, Vec<Token>> {
    terminated(many0(token), multispace0)(input)
}

/// Splits formula text into tokens. Empty input gives no tokens, which the
/// parser rejects.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    let text = normalize(src);

    let rest = match tokens(&text) {
        Ok(("", toks)) => {
            debug!(target: targets::LEXER, "{} tokens from {:?}", toks.len(), text);
            return Ok(toks);
        }
        Ok((rest, _)) => rest,
        Err(_) => text.as_str(),
    };

    let err = LexError {
        character: rest.chars().next().unwrap_or_default(),
        position: text[..text.len() - rest.len()].chars().count(),
    };
    debug!(target: targets::LEXER, "{} in {:?}", err, text);
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a <-> b"), "a ↔ b");
        assert_eq!(normalize("a <=> b"), "a ↔ b");
        assert_eq!(normalize("a -> b"), "a → b");
        assert_eq!(normalize("a XOR b"), "a ⊕ b");
        assert_eq!(normalize("a Iff b implies c"), "a ↔ b → c");
        assert_eq!(normalize("  a \t\n  b  "), "a b");
        // Only whole words are keywords.
        assert_eq!(normalize("xorx"), "xorx");
    }

    #[test]
    fn test_symbols() {
        use crate::types::TokenKind::*;
        assert_eq!(kinds("¬!~"), vec![Not, Not, Not]);
        assert_eq!(kinds("∧&^"), vec![And, And, And]);
        assert_eq!(kinds("∨|"), vec![Or, Or]);
        assert_eq!(kinds("⊕→↔()"), vec![Xor, Imp, Iff, LParen, RParen]);
        assert_eq!(kinds("A v B"), vec![Id, Or, Id]);
        assert_eq!(kinds("(A->B)<->~C"), vec![LParen, Id, Imp, Id, RParen, Iff, Not, Id]);
    }

    #[test]
    fn test_identifiers() {
        let toks = tokenize("p1 ∧ chuva_forte").unwrap();
        assert_eq!(toks[0], Token::new(TokenKind::Id, "P1"));
        assert_eq!(toks[1], Token::new(TokenKind::And, "∧"));
        assert_eq!(toks[2], Token::new(TokenKind::Id, "CHUVA_FORTE"));

        // Uppercase V is an atom, not a connective.
        assert_eq!(kinds("V"), vec![TokenKind::Id]);
        assert_eq!(kinds("vv"), vec![TokenKind::Id]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("   ").unwrap(), vec![]);
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            tokenize("A $ B"),
            Err(LexError {
                character: '$',
                position: 2,
            })
        );
        assert_eq!(tokenize("1A").unwrap_err().character, '1');
        assert_eq!(tokenize("A ∧ B ∧ #").unwrap_err().position, 8);
    }
}
