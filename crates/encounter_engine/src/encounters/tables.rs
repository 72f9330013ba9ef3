//! The table collaborator the generators read from.

use super::types::{EncounterGift, EncounterSlot, EncounterStatic, EncounterTrade};
use crate::evolution::EvolutionTree;
use crate::game::{EntityContext, GameVersion, LearnEnvironment};
use crate::learn::LearnSource;
use crate::moves::MoveId;
use crate::species::SpeciesId;

/// Per-version fact tables.
///
/// Implementations are read-only; the engine never mutates what they return.
/// Every lookup for a version with no such table returns an empty slice.
pub trait GameTables {
    /// Learn source for an environment
    fn learn_source(&self, environment: LearnEnvironment) -> &dyn LearnSource;

    /// Evolution links valid in a context
    fn evolution_tree(&self, context: EntityContext) -> EvolutionTree<'_>;

    /// Wild slots
    fn slots(&self, version: GameVersion) -> &[EncounterSlot];

    /// Static encounters
    fn statics(&self, version: GameVersion) -> &[EncounterStatic];

    /// Game Boy gift Pokémon handed over outside the static tables
    fn gb_gifts(&self, version: GameVersion) -> &[EncounterStatic];

    /// Mystery gifts of a generation
    fn gifts(&self, generation: u8) -> &[EncounterGift];

    /// In-game trades
    fn trades(&self, version: GameVersion) -> &[EncounterTrade];

    /// Game Boy in-game trades, matched by species and base form only
    fn trades_gb(&self, version: GameVersion) -> &[EncounterTrade];

    /// Moves a Grand Underground spawn of `species` may know
    fn underground_moves(&self, species: SpeciesId) -> &[MoveId];
}
