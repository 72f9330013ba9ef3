//! Static encounter candidates, plus Game Boy gift Pokémon.

use std::rc::Rc;

use super::level_up_bits;
use crate::encounters::sanity::is_plausible;
use crate::encounters::{Encounter, GameTables, Origin, SearchContext};

pub fn generate<'t>(ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> impl Iterator<Item = Encounter<'t>> + 't {
    let version = ctx.version;
    let gb = Rc::clone(&ctx);

    let statics = tables.statics(version).iter().filter_map(move |s| {
        let enc = Encounter::new(version, Origin::Static(s));
        if !is_plausible(&ctx.chain, &enc, ctx.format()) {
            return None;
        }
        let needs = &ctx.needs;
        if needs.is_empty() {
            return Some(enc);
        }
        // Some events hide their special move in the relearn section
        let flags = needs.overlap(s.moves) | needs.overlap(s.relearn) | level_up_bits(&ctx, tables, &enc, s.level);
        needs.is_covered(flags).then_some(enc)
    });

    // Game Boy gifts: species match only, intrinsic moves only
    let gifts = (version.generation() < 3)
        .then(|| tables.gb_gifts(version))
        .unwrap_or_default()
        .iter()
        .filter_map(move |s| {
            gb.first_match(s.species)?;
            let enc = Encounter::new(version, Origin::Static(s));
            let needs = &gb.needs;
            (needs.is_empty() || needs.is_covered(needs.overlap(s.moves))).then_some(enc)
        });

    statics.chain(gifts)
}
