// Licensed under MIT. See LICENSE for details.

use std::collections::HashMap;

use crate::types::Ident;

// Truth values of atoms. Atoms without a value are false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    vars: HashMap<Ident, bool>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> bool {
        self.vars.get(id).copied().unwrap_or(false)
    }

    pub fn extend(&self, id: &str, val: bool) -> Self {
        let mut vars = self.vars.clone();
        vars.insert(id.to_uppercase(), val);
        Self { vars }
    }

    pub fn set(&mut self, id: &str, val: bool) {
        self.vars.insert(id.to_uppercase(), val);
    }
}

impl<'a> FromIterator<(&'a str, bool)> for State {
    fn from_iter<I: IntoIterator<Item = (&'a str, bool)>>(iter: I) -> Self {
        let mut state = State::new();
        for (id, val) in iter {
            state.set(id, val);
        }
        state
    }
}
