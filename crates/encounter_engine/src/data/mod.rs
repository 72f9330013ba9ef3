//! Built-in sample tables.
//!
//! A representative cast (the Pikachu and Marill lines, Magikarp, Lapras,
//! Eevee, Farfetch'd, Smeargle, Ho-Oh, Rotom, Keldeo, Meloetta, Vivillon and
//! the Yungoos line) across every learn environment, enough to exercise each
//! generator and rule the engine knows about.

mod evolutions;
mod gen1;
mod gen2;
mod gen3;
mod gen4;
mod gen5;
mod gen6;
mod gen7;
mod gen8;
mod gen9;

pub use evolutions::EVOLUTIONS;

use crate::encounters::{EncounterGift, EncounterSlot, EncounterStatic, EncounterTrade, GameTables};
use crate::evolution::EvolutionTree;
use crate::game::{EntityContext, GameVersion, LearnEnvironment};
use crate::learn::LearnSource;
use crate::moves::MoveId;
use crate::species::SpeciesId;

/// Type tutors shared by Gen 5 through Gen 7
pub(crate) const TYPE_TUTORS_567: &[MoveId] = &[
    MoveId::GRASS_PLEDGE,
    MoveId::FIRE_PLEDGE,
    MoveId::WATER_PLEDGE,
    MoveId::FRENZY_PLANT,
    MoveId::BLAST_BURN,
    MoveId::HYDRO_CANNON,
    MoveId::DRACO_METEOR,
];

/// The built-in tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTables;

impl BuiltinTables {
    pub const fn new() -> Self {
        BuiltinTables
    }
}

impl GameTables for BuiltinTables {
    fn learn_source(&self, environment: LearnEnvironment) -> &dyn LearnSource {
        use LearnEnvironment::*;
        match environment {
            RB => &gen1::SOURCE_RB,
            YW => &gen1::SOURCE_YW,
            GS => &gen2::SOURCE_GS,
            C => &gen2::SOURCE_C,
            RS => &gen3::SOURCE_RS,
            E => &gen3::SOURCE_E,
            FRLG => &gen3::SOURCE_FRLG,
            DPPt => &gen4::SOURCE_DPPT,
            HGSS => &gen4::SOURCE_HGSS,
            BW => &gen5::SOURCE_BW,
            B2W2 => &gen5::SOURCE_B2W2,
            XY => &gen6::SOURCE_XY,
            ORAS => &gen6::SOURCE_ORAS,
            SM => &gen7::SOURCE_SM,
            USUM => &gen7::SOURCE_USUM,
            GG => &gen7::SOURCE_GG,
            SWSH => &gen8::SOURCE_SWSH,
            PLA => &gen8::SOURCE_PLA,
            BDSP => &gen8::SOURCE_BDSP,
            SV => &gen9::SOURCE_SV,
        }
    }

    fn evolution_tree(&self, context: EntityContext) -> EvolutionTree<'_> {
        EvolutionTree::new(context, EVOLUTIONS)
    }

    fn slots(&self, version: GameVersion) -> &[EncounterSlot] {
        use GameVersion::*;
        match version {
            RD | GN | BU => gen1::SLOTS_RB,
            YW => gen1::SLOTS_YW,
            GD | SI => gen2::SLOTS_GS,
            C => gen2::SLOTS_C,
            R | S => gen3::SLOTS_RS,
            E => gen3::SLOTS_E,
            FR | LG => gen3::SLOTS_FRLG,
            D | P | Pt => gen4::SLOTS_DPPT,
            HG | SS => gen4::SLOTS_HGSS,
            B | W | B2 | W2 => gen5::SLOTS_BW,
            X | Y => gen6::SLOTS_XY,
            AS | OR => gen6::SLOTS_ORAS,
            SN | MN | US | UM => gen7::SLOTS_SM,
            GP | GE => gen7::SLOTS_GG,
            SW | SH => gen8::SLOTS_SWSH,
            PLA => gen8::SLOTS_PLA,
            BD | SP => gen8::SLOTS_BDSP,
            SL | VL => gen9::SLOTS_SV,
        }
    }

    fn statics(&self, version: GameVersion) -> &[EncounterStatic] {
        use GameVersion::*;
        match version {
            GD | SI => gen2::STATICS_GS,
            C => gen2::STATICS_C,
            E => gen3::STATICS_E,
            FR | LG => gen3::STATICS_FRLG,
            D | P | Pt => gen4::STATICS_DPPT,
            HG | SS => gen4::STATICS_HGSS,
            SN | MN => gen7::STATICS_SM,
            US | UM => gen7::STATICS_USUM,
            _ => &[],
        }
    }

    fn gb_gifts(&self, version: GameVersion) -> &[EncounterStatic] {
        match version.generation() {
            1 => gen1::GB_GIFTS,
            2 => gen2::GB_GIFTS,
            _ => &[],
        }
    }

    fn gifts(&self, generation: u8) -> &[EncounterGift] {
        match generation {
            3 => gen3::GIFTS,
            4 => gen4::GIFTS,
            5 => gen5::GIFTS,
            7 => gen7::GIFTS,
            9 => gen9::GIFTS,
            _ => &[],
        }
    }

    fn trades(&self, version: GameVersion) -> &[EncounterTrade] {
        use GameVersion::*;
        match version {
            FR | LG => gen3::TRADES_FRLG,
            B | W => gen5::TRADES_BW,
            _ => &[],
        }
    }

    fn trades_gb(&self, version: GameVersion) -> &[EncounterTrade] {
        use GameVersion::*;
        match version {
            RD | GN | BU | YW => gen1::TRADES_GB,
            _ => &[],
        }
    }

    fn underground_moves(&self, species: SpeciesId) -> &[MoveId] {
        gen8::underground_moves(species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_environment_has_a_source() {
        let tables = BuiltinTables::new();
        for version in GameVersion::ALL {
            let env = version.learn_environment();
            let source = tables.learn_source(env);
            assert_eq!(source.environment(), env);
            assert!(source.max_species_id() >= 151);
        }
    }

    #[test]
    fn test_species_ceilings_match_contexts() {
        let tables = BuiltinTables::new();
        for version in GameVersion::ALL {
            let source = tables.learn_source(version.learn_environment());
            assert_eq!(
                source.max_species_id(),
                version.context().max_species_id(),
                "{:?}",
                version
            );
        }
    }

    #[test]
    fn test_table_species_exist_in_their_generation() {
        let tables = BuiltinTables::new();
        for version in GameVersion::ALL {
            let source = tables.learn_source(version.learn_environment());
            for slot in tables.slots(version) {
                assert!(
                    source.info(slot.species, slot.form).is_some(),
                    "{:?} slot {}",
                    version,
                    slot.species.name()
                );
            }
            for s in tables.statics(version) {
                assert!(source.info(s.species, s.form).is_some(), "{:?} static {}", version, s.species.name());
            }
        }
    }

    #[test]
    fn test_learnset_levels_are_sorted() {
        let tables = BuiltinTables::new();
        for version in GameVersion::ALL {
            let source = tables.learn_source(version.learn_environment());
            for species in [SpeciesId::PIKACHU, SpeciesId::MAGIKARP, SpeciesId::EEVEE] {
                let levels: Vec<u8> = source.learnset(species, 0).iter().map(|(l, _)| l).collect();
                assert!(levels.windows(2).all(|w| w[0] <= w[1]), "{:?} {}", version, species.name());
            }
        }
    }

    #[test]
    fn test_moves_within_context_ceiling() {
        let tables = BuiltinTables::new();
        for version in GameVersion::ALL {
            let max = version.context().max_move_id();
            let source = tables.learn_source(version.learn_environment());
            for species in [SpeciesId::PIKACHU, SpeciesId::MARILL, SpeciesId::EEVEE, SpeciesId::HO_OH] {
                if let Some(info) = source.info(species, 0) {
                    let all = info
                        .level_moves
                        .iter()
                        .map(|(_, m)| m)
                        .chain(info.egg_moves.iter().copied())
                        .chain(info.machines.iter().copied())
                        .chain(info.special_tutors.iter().copied());
                    for mv in all {
                        assert!(mv.0 <= max, "{:?} {} knows {}", version, species.name(), mv.name());
                    }
                }
            }
        }
    }
}
