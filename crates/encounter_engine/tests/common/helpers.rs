//! Test helper functions for encounter resolution tests.
//!
//! These helpers turn fixture names into engine ids and check generator
//! output against the tables it was drawn from.

use encounter_engine::encounters::SlotFlags;
use encounter_engine::learn::LearnSource;
use encounter_engine::{
    CreatureTemplate, Encounter, EncounterMovesetGenerator, EncounterOrder, GameTables, GameVersion, MoveId, Needs,
    Origin, SpeciesId,
};

pub fn species(name: &str) -> Result<SpeciesId, String> {
    SpeciesId::from_name(name).ok_or_else(|| format!("Unknown species: {}", name))
}

pub fn move_ids(names: &[String]) -> Result<Vec<MoveId>, String> {
    names
        .iter()
        .map(|name| MoveId::from_name(name).ok_or_else(|| format!("Unknown move: {}", name)))
        .collect()
}

pub fn version(name: &str) -> Result<GameVersion, String> {
    GameVersion::from_str(name).ok_or_else(|| format!("Unknown version: {}", name))
}

/// Candidates from one version, collected
pub fn version_encounters<'t>(
    generator: &EncounterMovesetGenerator<'t>,
    creature: &CreatureTemplate,
    moves: &[MoveId],
    version: GameVersion,
) -> Vec<Encounter<'t>> {
    generator
        .generate_version_encounters(creature, moves, version)
        .collect()
}

/// Candidates of a single category
pub fn of_category<'t>(encounters: &[Encounter<'t>], category: EncounterOrder) -> Vec<Encounter<'t>> {
    encounters
        .iter()
        .copied()
        .filter(|enc| enc.category() == category)
        .collect()
}

pub fn categories(encounters: &[Encounter<'_>]) -> Vec<EncounterOrder> {
    encounters.iter().map(Encounter::category).collect()
}

/// Every move a candidate could have arrived knowing, including the side
/// mechanics a generator may credit it with.
pub fn supplied_moves(tables: &dyn GameTables, enc: &Encounter<'_>, needs: &Needs) -> Vec<MoveId> {
    let source = tables.learn_source(enc.version.learn_environment());
    let mut moves: Vec<MoveId> = enc.moves().iter().chain(enc.relearn()).copied().collect();

    match enc.origin {
        Origin::Egg(egg) => {
            moves.extend_from_slice(source.egg_moves(egg.species, egg.form));
            if egg.can_have_volt_tackle {
                moves.push(MoveId::VOLT_TACKLE);
            }
        }
        Origin::Slot(slot) if needs.len() == 1 => {
            if slot.flags.contains(SlotFlags::DEXNAV) {
                moves.extend_from_slice(source.egg_moves(slot.species, slot.form));
            }
            if slot.flags.contains(SlotFlags::UNDERGROUND) {
                moves.extend_from_slice(tables.underground_moves(slot.species));
            }
        }
        _ => {}
    }

    if enc.generation() <= 2 {
        moves.extend(source.encounter_moves(enc.species(), enc.form(), enc.level_min()));
    }
    moves
}

/// Check a candidate supplies every need, reporting the first one missing
pub fn verify_coverage(tables: &dyn GameTables, enc: &Encounter<'_>, needs: &Needs) -> Result<(), String> {
    let supplied = supplied_moves(tables, enc, needs);
    match needs.as_slice().iter().find(|mv| !supplied.contains(mv)) {
        Some(missing) => Err(format!(
            "{:?} {} in {:?} does not supply {}",
            enc.category(),
            enc.species().name(),
            enc.version,
            missing.name()
        )),
        None => Ok(()),
    }
}
