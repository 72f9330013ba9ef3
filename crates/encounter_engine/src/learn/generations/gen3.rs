//! Generation 3 (Ruby/Sapphire/Emerald/FireRed/LeafGreen) learn rules.

use super::LearnRules;
use crate::creature::CreatureTemplate;
use crate::moves::MoveId;

/// Hidden machines; they cannot be deleted, so they only count in Gen 3 format
pub const HM_3: [MoveId; 8] = [
    MoveId::CUT,
    MoveId::FLY,
    MoveId::SURF,
    MoveId::STRENGTH,
    MoveId::FLASH,
    MoveId::ROCK_SMASH,
    MoveId::WATERFALL,
    MoveId::DIVE,
];

/// Generation 3 rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen3;

impl LearnRules for Gen3 {
    const GEN: u8 = 3;

    fn is_machine_usable(&self, creature: &CreatureTemplate, mv: MoveId) -> bool {
        creature.format() == Self::GEN || !HM_3.contains(&mv)
    }
}
