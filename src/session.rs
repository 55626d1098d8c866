// Licensed under MIT. See LICENSE for details.

use crate::atoms::AtomMap;
use crate::error::{Error, Result};
use crate::nl;
use crate::parser::parse;
use crate::render::to_portuguese;
use crate::state::State;
use crate::targets;

/// Reviews the atoms proposed for a sentence before it is translated.
///
/// Returns the edited map, where blank clauses mark removed atoms, or `None`
/// to cancel the translation.
pub trait Confirm {
    fn confirm(&mut self, proposed: AtomMap) -> Option<AtomMap>;
}

impl<F> Confirm for F
where
    F: FnMut(AtomMap) -> Option<AtomMap>,
{
    fn confirm(&mut self, proposed: AtomMap) -> Option<AtomMap> {
        self(proposed)
    }
}

/// Takes every proposal as is.
pub struct AcceptAll;

impl Confirm for AcceptAll {
    fn confirm(&mut self, proposed: AtomMap) -> Option<AtomMap> {
        Some(proposed)
    }
}

/// The atom map shared by both translation directions.
#[derive(Clone, Debug, Default)]
pub struct Session {
    atoms: AtomMap,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_atoms(atoms: AtomMap) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &AtomMap {
        &self.atoms
    }

    /// Current map in `LETTER=description` form.
    pub fn atoms_text(&self) -> String {
        self.atoms.to_string()
    }

    /// Replaces the map with the one read from `text`, returning the number of
    /// atoms. The map is left alone if `text` defines none.
    pub fn apply_atoms_text(&mut self, text: &str) -> Result<usize> {
        let atoms = AtomMap::parse(text);
        if atoms.is_empty() {
            return Err(Error::EmptyExtraction);
        }
        info!(target: targets::SESSION, "applied map with {} atoms", atoms.len());
        self.atoms = atoms;
        Ok(self.atoms.len())
    }

    /// Sentence to formula. The clauses found in `text` are proposed to
    /// `confirm`; on cancellation nothing changes and `None` is returned.
    /// Otherwise the confirmed map replaces the current one.
    pub fn to_formula<C: Confirm + ?Sized>(
        &mut self,
        text: &str,
        confirm: &mut C,
    ) -> Result<Option<String>> {
        let proposed = AtomMap::from_sentence(text);
        debug!(target: targets::SESSION, "proposing {:?}", proposed);

        let atoms = match confirm.confirm(proposed) {
            Some(atoms) => atoms.without_blanks(),
            None => {
                info!(target: targets::SESSION, "translation cancelled");
                return Ok(None);
            }
        };

        let formula = nl::to_formula(text, &atoms)?;
        self.atoms = atoms;
        Ok(Some(formula))
    }

    /// Formula to sentence, reading atoms through the current map.
    pub fn to_portuguese(&self, formula: &str) -> Result<String> {
        let ast = parse(formula)?;
        to_portuguese(&ast, &self.atoms)
    }

    /// Canonical symbolic form of `formula`.
    pub fn normalize(&self, formula: &str) -> Result<String> {
        Ok(parse(formula)?.to_string())
    }

    pub fn evaluate(&self, formula: &str, state: &State) -> Result<bool> {
        Ok(parse(formula)?.evaluate(state))
    }
}
