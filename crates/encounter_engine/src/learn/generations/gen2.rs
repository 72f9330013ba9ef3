//! Generation 2 (Gold/Silver/Crystal) learn rules.

use super::LearnRules;
use crate::creature::CreatureTemplate;
use crate::evolution::EvoCriteria;
use crate::game::MAX_MOVE_ID_1;
use crate::moves::MoveId;

/// Generation 2 rules.
///
/// Key differences:
/// - The move reminder (Crystal) only exists while the creature is in a Gen 2 game,
///   and only widens bulk listing; single-move queries keep the level window
/// - Moves newer than Gen 1 are lost when the creature is traded back to
///   Gen 1, or came through Gen 1 Virtual Console
/// - Crystal's tutors are unreachable from Gen 1 format
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen2;

impl LearnRules for Gen2 {
    const GEN: u8 = 2;

    fn has_move_reminder(&self, creature: &CreatureTemplate) -> bool {
        creature.format() == 2
    }

    fn query_level_floor(&self, _creature: &CreatureTemplate, evo: &EvoCriteria) -> u8 {
        evo.level_min
    }

    fn is_move_in_scope(&self, creature: &CreatureTemplate, mv: MoveId) -> bool {
        let gen1_only = creature.format() == 1 || creature.is_vc1();
        !gen1_only || mv.0 <= MAX_MOVE_ID_1
    }

    fn special_tutors_available(&self, creature: &CreatureTemplate) -> bool {
        creature.format() != 1
    }
}
