//! One lazy candidate generator per origin category.
//!
//! Every generator takes the shared [`SearchContext`] and the table
//! collaborator and returns a fresh iterator. Nothing is computed until the
//! iterator is pulled, and dropping it part way leaves no state behind.

mod egg;
mod gift;
mod slot;
mod statics;
mod trade;

use std::rc::Rc;

use super::{Encounter, EncounterOrder, GameTables, SearchContext};
use crate::moves::MoveId;

/// Boxed candidate stream
pub type Candidates<'t> = Box<dyn Iterator<Item = Encounter<'t>> + 't>;

/// Generator for one category
pub fn of_type<'t>(order: EncounterOrder, ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> Candidates<'t> {
    match order {
        EncounterOrder::Egg => Box::new(egg::generate(ctx, tables)),
        EncounterOrder::Mystery => Box::new(gift::generate(ctx, tables)),
        EncounterOrder::Static => Box::new(statics::generate(ctx, tables)),
        EncounterOrder::Trade => Box::new(trade::generate(ctx, tables)),
        EncounterOrder::Slot => Box::new(slot::generate(ctx, tables)),
    }
}

/// Coverage bits from the moves a Gen 1/2 creature met at `level` would know
/// from its level-up table, or none for later generations
fn level_up_bits(ctx: &SearchContext, tables: &dyn GameTables, enc: &Encounter<'_>, level: u8) -> u32 {
    if enc.generation() > 2 {
        return 0;
    }
    let source = tables.learn_source(enc.version.learn_environment());
    let known: [MoveId; 4] = source.encounter_moves(enc.species(), enc.form(), level);
    ctx.needs.overlap(&known)
}
