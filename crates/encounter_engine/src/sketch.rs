//! Smeargle's Sketch target validation.

use crate::game::EntityContext;
use crate::moves::MoveId;

/// Moves Sketch can never copy
const UNSKETCHABLE: [MoveId; 2] = [MoveId::STRUGGLE, MoveId::CHATTER];

/// Whether `mv` can be obtained through Sketch in `context`
pub fn is_valid_sketch(mv: MoveId, context: EntityContext) -> bool {
    mv != MoveId::NONE && mv.0 <= context.max_move_id() && !UNSKETCHABLE.contains(&mv)
}
