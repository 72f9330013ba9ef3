//! Species/form plausibility of a candidate against the evolution chain.

use super::types::Encounter;
use crate::evolution::EvoCriteria;
use crate::forms;

/// Whether `enc` could have become some stage of `chain`.
///
/// Only the first stage sharing the candidate's species is considered, even
/// if the species appears again further down the chain.
pub fn is_plausible(chain: &[EvoCriteria], enc: &Encounter<'_>, format: u8) -> bool {
    let species = enc.species();
    let Some(evo) = chain.iter().find(|evo| evo.species == species) else {
        return false;
    };
    let form = enc.form();
    if evo.form == form {
        return true;
    }
    if forms::is_form_changeable(species, form, evo.form, enc.generation()) {
        return true;
    }
    if enc.is_random_unspecified_form() {
        return true;
    }
    // Totem forms are wiped on transfer out of their generation
    enc.is_totem() && evo.form == 0 && format > enc.generation()
}
