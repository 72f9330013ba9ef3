//! In-game trade candidates.

use std::rc::Rc;

use super::level_up_bits;
use crate::encounters::sanity::is_plausible;
use crate::encounters::{Encounter, EncounterTrade, GameTables, Origin, SearchContext};
use crate::game::{GameVersion, LanguageId};

pub fn generate<'t>(ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> impl Iterator<Item = Encounter<'t>> + 't {
    let version = ctx.version;
    let legacy = ctx.format() <= 2 || ctx.creature.is_virtual_console();

    let table: &'t [EncounterTrade] = if legacy {
        tables.trades_gb(version)
    } else if ctx.filter_trade_language && !is_language_tradeable(&ctx) {
        &[]
    } else {
        tables.trades(version)
    };

    table.iter().filter_map(move |t| {
        if legacy {
            // Game Boy trades only ever hand over the base form
            let evo = ctx.first_match(t.species)?;
            if evo.form != 0 {
                return None;
            }
        }
        let enc = Encounter::new(version, Origin::Trade(t));
        if !is_plausible(&ctx.chain, &enc, ctx.format()) {
            return None;
        }
        let needs = &ctx.needs;
        if needs.is_empty() {
            return Some(enc);
        }
        let flags = needs.overlap(t.moves) | needs.overlap(t.relearn) | level_up_bits(&ctx, tables, &enc, t.level);
        needs.is_covered(flags).then_some(enc)
    })
}

/// Whether any trade could have produced a creature with this language tag.
/// Japanese Black/White trades are the only ones stored with no language.
fn is_language_tradeable(ctx: &SearchContext) -> bool {
    match ctx.creature.language {
        LanguageId::Unused6 => false,
        LanguageId::Hacked => {
            ctx.format() == 5 && matches!(ctx.creature.version, GameVersion::B | GameVersion::W)
        }
        _ => true,
    }
}
