//! Mystery gift candidates.

use std::rc::Rc;

use crate::encounters::sanity::is_plausible;
use crate::encounters::{Encounter, GameTables, GiftFlags, Origin, SearchContext};

pub fn generate<'t>(ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> impl Iterator<Item = Encounter<'t>> + 't {
    let version = ctx.version;
    tables
        .gifts(version.generation())
        .iter()
        .filter(move |g| !g.flags.contains(GiftFlags::NOT_DISTRIBUTED) && g.is_receivable_by(version))
        .filter_map(move |g| {
            let enc = Encounter::new(version, Origin::Gift(g));
            if !is_plausible(&ctx.chain, &enc, ctx.format()) {
                return None;
            }
            let needs = &ctx.needs;
            (needs.is_empty() || needs.is_covered(needs.overlap(g.moves) | needs.overlap(g.relearn))).then_some(enc)
        })
}
