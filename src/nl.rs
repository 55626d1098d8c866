// Licensed under MIT. See LICENSE for details.

//! Heuristic translation of Portuguese sentences into formulas.
//!
//! Sentences are normalized, cut into clauses at connective keywords and the
//! clauses are named by letters. Translating back substitutes the letters and
//! rewrites the remaining keywords into connectives. The result is not checked
//! for well-formedness.

use itertools::Itertools;
use regex::{Captures, NoExpand, Regex};

use crate::atoms::AtomMap;
use crate::error::{Error, Result};
use crate::targets;

// Split points, tried in order on every fragment of the previous split.
const CONNECTIVES: [&str; 6] = [
    " se e somente se ",
    " se ",
    " então ",
    " somente se ",
    " e ",
    " ou ",
];

/// Lowercases, strips punctuation and folds keyword variants onto one
/// spelling each.
pub fn normalize(text: &str) -> String {
    let s = format!(" {} ", text.to_lowercase());
    let s = static_regex!(r"[.,;:!?]+").replace_all(&s, " ");
    let s = static_regex!(r"\bmas\b").replace_all(&s, " e ");
    let s = static_regex!(r"\bssi\b").replace_all(&s, " se e somente se ");
    let s = static_regex!(r"\bapenas se\b").replace_all(&s, " somente se ");
    let s = static_regex!(r"\bse,? e somente se\b").replace_all(&s, " se e somente se ");
    let s = static_regex!(r"\bnao\b").replace_all(&s, " não ");
    let s = static_regex!(r"\bnã o\b").replace_all(&s, " não ");
    let s = static_regex!(r"\s+").replace_all(&s, " ");
    s.trim().to_string()
}

/// The distinct atomic clauses of a sentence, in order of appearance.
/// Negation is stripped; it is restored by [`to_formula`].
pub fn extract_clauses(text: &str) -> Vec<String> {
    let padded = format!(" {} ", normalize(text));

    let parts = CONNECTIVES.iter().fold(vec![padded], |parts, sep| {
        parts
            .iter()
            .flat_map(|p| p.split(*sep))
            .map(String::from)
            .collect()
    });

    let clauses: Vec<String> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| {
            static_regex!(r"(?i)^não (é verdade que )?")
                .replace(p, "")
                .trim()
                .to_string()
        })
        .filter(|p| !p.is_empty())
        .unique()
        .collect();

    debug!(target: targets::TRANSLATE, "clauses of {:?}: {:?}", text, clauses);
    clauses
}

impl AtomMap {
    /// Proposes a letter for every clause of `text`.
    pub fn from_sentence(text: &str) -> Self {
        AtomMap::from_clauses(extract_clauses(text))
    }
}

fn rewrite(stage: &str, re: &Regex, s: &str, rep: &str) -> String {
    let out = re.replace_all(s, rep).into_owned();
    trace!(target: targets::TRANSLATE, "{}: {:?}", stage, out);
    out
}

/// Translates a sentence into a formula over the atoms of `atoms`.
///
/// The rewrites run in a fixed order; keywords inside clauses that were not
/// substituted may still be picked up by later steps. Fails with
/// `Error::EmptyMap` when `atoms` has no non-blank clause.
pub fn to_formula(text: &str, atoms: &AtomMap) -> Result<String> {
    let mut s = normalize(text);
    trace!(target: targets::TRANSLATE, "normalized: {:?}", s);

    // Longest clauses first so that a clause inside another is not replaced
    // before the outer one.
    let entries = atoms
        .iter()
        .filter(|(_, clause)| !clause.trim().is_empty())
        .sorted_by(|a, b| b.1.chars().count().cmp(&a.1.chars().count()))
        .collect::<Vec<_>>();
    if entries.is_empty() {
        return Err(Error::EmptyMap);
    }
    for (id, clause) in entries {
        let re = Regex::new(&format!(r"\b{}\b", regex::escape(&clause.to_lowercase())))?;
        s = re.replace_all(&s, NoExpand(&format!(" {} ", id))).into_owned();
    }
    trace!(target: targets::TRANSLATE, "substituted: {:?}", s);

    s = rewrite(
        "negation",
        static_regex!(r"\bnão é verdade que\s+(\w+)\b"),
        &s,
        " ¬${1} ",
    );
    s = rewrite(
        "negation",
        static_regex!(r"\bnão\s+\(\s*([^\)]+)\s*\)"),
        &s,
        " ¬(${1}) ",
    );
    s = rewrite("negation", static_regex!(r"\bnão\s+(\w+)\b"), &s, " ¬${1} ");
    s = rewrite("iff", static_regex!(r"\bse e somente se\b"), &s, " ↔ ");

    s = static_regex!(r"(?s)\bse\s+(.+?)\s*então\s+(.+)$")
        .replace_all(&s, |caps: &Captures| format!(" ( {} ) → ( {} ) ", &caps[1], &caps[2]))
        .into_owned();
    trace!(target: targets::TRANSLATE, "implication: {:?}", s);

    s = rewrite(
        "only if",
        static_regex!(r"\b(\w+)\s+somente se\s+(\w+)\b"),
        &s,
        " (${1}) → (${2}) ",
    );
    s = rewrite(
        "exclusive",
        static_regex!(r"\bou\s+(\w+)\s+ou\s+(\w+)\b"),
        &s,
        " (${1}) ⊕ (${2}) ",
    );
    s = rewrite("and", static_regex!(r"\se\b"), &s, " ∧ ");
    s = rewrite("or", static_regex!(r"\bou\b"), &s, " ∨ ");

    let s = static_regex!(r"\s+").replace_all(&s, " ");
    let s = static_regex!(r"\b[A-Z][A-Za-z0-9_]*\b")
        .replace_all(s.trim(), |caps: &Captures| caps[0].to_uppercase())
        .into_owned();

    debug!(target: targets::TRANSLATE, "{:?} => {:?}", text, s);
    Ok(s)
}
