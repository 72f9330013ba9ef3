//! Wild slot candidates.

use std::rc::Rc;

use tracing::trace;

use super::level_up_bits;
use crate::encounters::sanity::is_plausible;
use crate::encounters::{Encounter, EncounterSlot, GameTables, Origin, SearchContext, SlotFlags};

pub fn generate<'t>(ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> impl Iterator<Item = Encounter<'t>> + 't {
    let version = ctx.version;
    tables.slots(version).iter().filter_map(move |slot| {
        let enc = Encounter::new(version, Origin::Slot(slot));
        if !is_plausible(&ctx.chain, &enc, ctx.format()) {
            return None;
        }
        if covers(&ctx, tables, &enc, slot) {
            Some(enc)
        } else {
            trace!(species = slot.species.0, "slot does not cover needs");
            None
        }
    })
}

fn covers(ctx: &SearchContext, tables: &dyn GameTables, enc: &Encounter<'_>, slot: &EncounterSlot) -> bool {
    let needs = &ctx.needs;
    if needs.is_empty() || needs.is_covered(needs.overlap(slot.moves)) {
        return true;
    }
    // Side mechanics can add exactly one extra move
    if let [need] = needs.as_slice() {
        if slot.flags.contains(SlotFlags::DEXNAV) {
            let source = tables.learn_source(enc.version.learn_environment());
            if source.egg_moves(slot.species, slot.form).contains(need) {
                return true;
            }
        }
        if slot.flags.contains(SlotFlags::UNDERGROUND) && tables.underground_moves(slot.species).contains(need) {
            return true;
        }
    }
    enc.generation() <= 2 && needs.is_covered(level_up_bits(ctx, tables, enc, slot.level_min))
}
