// Licensed under MIT. See LICENSE for details.

use std::fmt;

use crate::atoms::AtomMap;
use crate::error::{Error, Result};
use crate::types::{Oper, AST};

// Canonical symbolic form with as few parentheses as the parser needs to
// rebuild the same tree. Chains nest to the right, so a left operand of equal
// precedence keeps its parentheses.
impl fmt::Display for AST {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AST::Identifier(ref id) => f.write_str(id),
            AST::Negation(ref sub) => match **sub {
                AST::Identifier(_) => write!(f, "¬{}", sub),
                _ => write!(f, "¬({})", sub),
            },
            AST::Binary(op, ref lhs, ref rhs) => {
                let prec = op.precedence();
                if lhs.precedence() <= prec {
                    write!(f, "({})", lhs)?;
                } else {
                    write!(f, "{}", lhs)?;
                }
                write!(f, " {} ", op.symbol())?;
                if rhs.precedence() < prec {
                    write!(f, "({})", rhs)
                } else {
                    write!(f, "{}", rhs)
                }
            }
        }
    }
}

// Parenthesize readings that would otherwise be ambiguous.
fn guard(text: String) -> String {
    if static_regex!(r"\b(e|ou|então|somente|ambos)\b|,").is_match(&text.to_lowercase()) {
        format!("({})", text)
    } else {
        text
    }
}

/// Reads a formula as a Portuguese sentence, replacing atoms by their clauses.
/// Atoms missing from `atoms` are spelled by name, but `atoms` itself must not
/// be empty.
pub fn to_portuguese(ast: &AST, atoms: &AtomMap) -> Result<String> {
    if atoms.is_empty() {
        return Err(Error::EmptyMap);
    }
    Ok(read(ast, atoms))
}

fn read(ast: &AST, atoms: &AtomMap) -> String {
    match *ast {
        AST::Identifier(ref id) => atoms
            .get(id)
            .filter(|clause| !clause.is_empty())
            .unwrap_or(id.as_str())
            .to_string(),
        AST::Negation(ref sub) => {
            format!("Não é verdade que {}", guard(read(sub, atoms)))
        }
        AST::Binary(op, ref lhs, ref rhs) => {
            let l = guard(read(lhs, atoms));
            let r = guard(read(rhs, atoms));
            match op {
                Oper::And => format!("{} e {}", l, r),
                Oper::Or => format!("{} ou {}", l, r),
                Oper::Xor => format!("{} ou {} (mas não ambos)", l, r),
                Oper::Imp => format!("Se {}, então {}", l, r),
                Oper::Iff => format!("{} se e somente se {}", l, r),
            }
        }
    }
}
