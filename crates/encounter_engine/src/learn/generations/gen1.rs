//! Generation 1 (Red/Blue/Yellow) learn rules.

use super::LearnRules;
use crate::creature::CreatureTemplate;
use crate::evolution::EvoCriteria;
use crate::game::MAX_MOVE_ID_1;
use crate::moves::MoveId;

/// Generation 1 rules.
///
/// Key differences:
/// - No move reminder; level-up moves only count inside the stage's level window
/// - No tutors
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen1;

impl LearnRules for Gen1 {
    const GEN: u8 = 1;

    fn has_move_reminder(&self, _creature: &CreatureTemplate) -> bool {
        false
    }

    fn query_level_floor(&self, _creature: &CreatureTemplate, evo: &EvoCriteria) -> u8 {
        evo.level_min
    }

    fn is_move_in_scope(&self, _creature: &CreatureTemplate, mv: MoveId) -> bool {
        mv.0 <= MAX_MOVE_ID_1
    }

    fn special_tutors_available(&self, _creature: &CreatureTemplate) -> bool {
        false
    }
}
