//! Generation-specific learn rules.
//!
//! Each generation implements [`LearnRules`]. The default methods describe
//! the newest games; older generations override only what differs, the same
//! way the tables they back differ only in data.

mod gen1;
mod gen2;
mod gen3;
mod later;

pub use gen1::Gen1;
pub use gen2::Gen2;
pub use gen3::Gen3;
pub use later::{Gen4, Gen5, Gen6, Gen7, Gen8, Gen9};

use crate::creature::CreatureTemplate;
use crate::evolution::EvoCriteria;
use crate::forms;
use crate::learn::LearnOption;
use crate::moves::MoveId;
use crate::moveset::MovePermitSet;
use crate::species::SpeciesId;

/// Rules that vary between generations' learn tables.
pub trait LearnRules: Send + Sync {
    /// Generation number
    const GEN: u8;

    /// Whether every level-up move up to the stage's level can be recovered.
    /// Without it, only moves learned inside the stage's level window count.
    fn has_move_reminder(&self, _creature: &CreatureTemplate) -> bool {
        true
    }

    /// Lowest level-up level a single-move query accepts for `evo`
    fn query_level_floor(&self, creature: &CreatureTemplate, evo: &EvoCriteria) -> u8 {
        if self.has_move_reminder(creature) {
            1
        } else {
            evo.level_min
        }
    }

    /// Whether a move from this environment can still be on the creature
    /// in its current format
    fn is_move_in_scope(&self, _creature: &CreatureTemplate, _mv: MoveId) -> bool {
        true
    }

    /// Whether a compatible machine move can actually be taught
    fn is_machine_usable(&self, _creature: &CreatureTemplate, _mv: MoveId) -> bool {
        true
    }

    /// Whether the environment's special tutors are reachable
    fn special_tutors_available(&self, _creature: &CreatureTemplate) -> bool {
        true
    }

    /// Form-locked and signature tutor moves
    fn is_enhanced_tutor(
        &self,
        creature: &CreatureTemplate,
        evo: &EvoCriteria,
        mv: MoveId,
        option: LearnOption,
    ) -> bool {
        match evo.species {
            SpeciesId::KELDEO => mv == MoveId::SECRET_SWORD,
            SpeciesId::MELOETTA => mv == MoveId::RELIC_SONG,
            SpeciesId::ROTOM => forms::rotom_form_of_move(mv)
                .is_some_and(|form| option == LearnOption::AtAnyTime || creature.form == form),
            _ => false,
        }
    }

    /// Mark the enhanced tutor move available to the stage
    fn enhanced_tutor_moves(&self, evo: &EvoCriteria, result: &mut MovePermitSet) {
        let mv = match evo.species {
            SpeciesId::ROTOM => forms::rotom_form_move(evo.form),
            SpeciesId::KELDEO => Some(MoveId::SECRET_SWORD),
            SpeciesId::MELOETTA => Some(MoveId::RELIC_SONG),
            _ => None,
        };
        if let Some(mv) = mv {
            result.insert(mv);
        }
    }
}
