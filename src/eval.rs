// Licensed under MIT. See LICENSE for details.

use crate::state::State;
use crate::types::AST;

impl AST {
    pub fn evaluate(&self, state: &State) -> bool {
        match *self {
            AST::Identifier(ref id) => state.get(id),
            AST::Negation(ref sub) => !sub.evaluate(state),
            AST::Binary(op, ref lhs, ref rhs) => op.apply(lhs.evaluate(state), rhs.evaluate(state)),
        }
    }
}
