// Licensed under MIT. See LICENSE for details.

use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::types::Ident;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Name of the atom for the `index`-th clause: `A`..`Z`, then `P27`, `P28`, ...
pub fn letter(index: usize) -> Ident {
    ALPHABET
        .chars()
        .nth(index)
        .map(String::from)
        .unwrap_or_else(|| format!("P{}", index + 1))
}

/// Atom names mapped to the clauses they stand for, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomMap {
    entries: Vec<(Ident, String)>,
}

impl AtomMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names clauses `A`, `B`, ... in order.
    pub fn from_clauses<I, S>(clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = AtomMap::new();
        for (i, clause) in clauses.into_iter().enumerate() {
            map.insert(&letter(i), clause);
        }
        map
    }

    /// Reads `LETTER=description` lines. Blank lines, lines without `=` and
    /// entries with an empty letter or description are skipped.
    pub fn parse(text: &str) -> Self {
        let mut map = AtomMap::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some((id, desc)) = line.split_once('=') {
                let (id, desc) = (id.trim(), desc.trim());
                if !id.is_empty() && !desc.is_empty() {
                    map.insert(&id.to_uppercase(), desc);
                }
            }
        }
        map
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Sets the clause for `id`. An existing atom keeps its position.
    pub fn insert<S: Into<String>>(&mut self, id: &str, clause: S) {
        let clause = clause.into();
        match self.entries.iter_mut().find(|(k, _)| k == id) {
            Some(entry) => entry.1 = clause,
            None => self.entries.push((String::from(id), clause)),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First letter of the alphabet not yet naming an atom.
    pub fn next_free_letter(&self) -> Option<Ident> {
        ALPHABET
            .chars()
            .map(String::from)
            .find(|l| !self.contains(l))
    }

    /// Adds a clause under the next free letter.
    pub fn push<S: Into<String>>(&mut self, clause: S) -> Result<Ident> {
        let id = self.next_free_letter().ok_or(Error::NoFreeLetter)?;
        self.insert(&id, clause);
        Ok(id)
    }

    /// Trims every clause and drops the ones left blank.
    pub fn without_blanks(self) -> Self {
        let entries = self
            .entries
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .filter(|(_, v)| !v.is_empty())
            .collect();
        Self { entries }
    }
}

// One `LETTER=description` per line.
impl fmt::Display for AtomMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.iter().map(|(k, v)| format!("{}={}", k, v)).join("\n");
        f.write_str(&text)
    }
}
