//! Hatched egg candidates.

use std::rc::Rc;

use super::level_up_bits;
use crate::encounters::{Encounter, EncounterEgg, GameTables, Origin, SearchContext};
use crate::game::GameVersion;
use crate::moves::MoveId;
use crate::species::SpeciesId;

/// Babies that need an incense to breed; without it the egg hatches one
/// stage up.
fn is_split_breed(species: SpeciesId, generation: u8) -> bool {
    match species {
        SpeciesId::AZURILL | SpeciesId::WYNAUT => generation >= 3,
        SpeciesId::MIME_JR
        | SpeciesId::HAPPINY
        | SpeciesId::MUNCHLAX
        | SpeciesId::BONSLY
        | SpeciesId::MANTYKE
        | SpeciesId::BUDEW
        | SpeciesId::CHINGLING => generation >= 4,
        _ => false,
    }
}

pub fn generate<'t>(ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> impl Iterator<Item = Encounter<'t>> + 't {
    // Versions without a day care never touch the tables
    ctx.version
        .can_generate_eggs()
        .then(move || hatch(ctx, tables))
        .into_iter()
        .flatten()
}

fn hatch<'t>(ctx: Rc<SearchContext>, tables: &'t dyn GameTables) -> impl Iterator<Item = Encounter<'t>> + 't {
    let version = ctx.version;
    let eggs = possible_eggs(&ctx, tables, version);
    eggs.into_iter().filter_map(move |egg| {
        let enc = Encounter::new(version, Origin::Egg(egg));
        covers(&ctx, tables, &enc, &egg).then_some(enc)
    })
}

fn possible_eggs(ctx: &SearchContext, tables: &dyn GameTables, version: GameVersion) -> Vec<EncounterEgg> {
    let generation = version.generation();
    let source = tables.learn_source(version.learn_environment());
    let level = if generation <= 3 { 5 } else { 1 };

    let mut eggs = Vec::with_capacity(2);
    let mut stages = ctx.chain.iter().rev();
    let Some(base) = stages.next() else {
        return eggs;
    };
    let mut push = |species: SpeciesId, form: u8| {
        if source.info(species, form).is_some_and(|info| info.can_hatch) {
            eggs.push(EncounterEgg {
                species,
                form,
                level,
                version,
                can_have_volt_tackle: species == SpeciesId::PICHU && generation >= 3,
            });
        }
    };
    push(base.species, base.form);
    if is_split_breed(base.species, generation) {
        if let Some(parent) = stages.next() {
            push(parent.species, parent.form);
        }
    }
    eggs
}

fn covers(ctx: &SearchContext, tables: &dyn GameTables, enc: &Encounter<'_>, egg: &EncounterEgg) -> bool {
    let needs = &ctx.needs;
    if needs.is_empty() {
        return true;
    }
    let source = tables.learn_source(egg.version.learn_environment());
    let mut flags = needs.overlap(source.egg_moves(egg.species, egg.form));
    if egg.can_have_volt_tackle {
        flags |= needs.bit_of(MoveId::VOLT_TACKLE).unwrap_or(0);
    }
    flags |= level_up_bits(ctx, tables, enc, egg.level);
    needs.is_covered(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_breed_babies() {
        assert!(is_split_breed(SpeciesId::AZURILL, 3));
        assert!(!is_split_breed(SpeciesId::MUNCHLAX, 3));
        assert!(is_split_breed(SpeciesId::MUNCHLAX, 4));
        assert!(!is_split_breed(SpeciesId::PICHU, 9));
    }
}
