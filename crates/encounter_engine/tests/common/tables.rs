//! Table collaborators for tests: an instrumented wrapper and a fixture
//! override over the built-in data.

use std::cell::Cell;

use encounter_engine::encounters::{EncounterGift, EncounterSlot, EncounterStatic, EncounterTrade};
use encounter_engine::evolution::EvolutionTree;
use encounter_engine::learn::LearnSource;
use encounter_engine::{BuiltinTables, EntityContext, GameTables, GameVersion, LearnEnvironment, MoveId, SpeciesId};

// ============================================================================
// CountingTables
// ============================================================================

/// Built-in tables that count every lookup made through them.
#[derive(Debug, Default)]
pub struct CountingTables {
    inner: BuiltinTables,
    calls: Cell<usize>,
}

impl CountingTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups made so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl GameTables for CountingTables {
    fn learn_source(&self, environment: LearnEnvironment) -> &dyn LearnSource {
        self.tick();
        self.inner.learn_source(environment)
    }

    fn evolution_tree(&self, context: EntityContext) -> EvolutionTree<'_> {
        self.tick();
        self.inner.evolution_tree(context)
    }

    fn slots(&self, version: GameVersion) -> &[EncounterSlot] {
        self.tick();
        self.inner.slots(version)
    }

    fn statics(&self, version: GameVersion) -> &[EncounterStatic] {
        self.tick();
        self.inner.statics(version)
    }

    fn gb_gifts(&self, version: GameVersion) -> &[EncounterStatic] {
        self.tick();
        self.inner.gb_gifts(version)
    }

    fn gifts(&self, generation: u8) -> &[EncounterGift] {
        self.tick();
        self.inner.gifts(generation)
    }

    fn trades(&self, version: GameVersion) -> &[EncounterTrade] {
        self.tick();
        self.inner.trades(version)
    }

    fn trades_gb(&self, version: GameVersion) -> &[EncounterTrade] {
        self.tick();
        self.inner.trades_gb(version)
    }

    fn underground_moves(&self, species: SpeciesId) -> &[MoveId] {
        self.tick();
        self.inner.underground_moves(species)
    }
}

// ============================================================================
// FixtureTables
// ============================================================================

/// Built-in learn and evolution data, but `version` offers only the given
/// static encounters (and Game Boy gifts, if set) and nothing else.
#[derive(Debug)]
pub struct FixtureTables {
    inner: BuiltinTables,
    version: GameVersion,
    statics: &'static [EncounterStatic],
    gb_gifts: &'static [EncounterStatic],
}

impl FixtureTables {
    pub fn new(version: GameVersion, statics: &'static [EncounterStatic]) -> Self {
        Self {
            inner: BuiltinTables::new(),
            version,
            statics,
            gb_gifts: &[],
        }
    }

    pub fn with_gb_gifts(mut self, gifts: &'static [EncounterStatic]) -> Self {
        self.gb_gifts = gifts;
        self
    }
}

impl GameTables for FixtureTables {
    fn learn_source(&self, environment: LearnEnvironment) -> &dyn LearnSource {
        self.inner.learn_source(environment)
    }

    fn evolution_tree(&self, context: EntityContext) -> EvolutionTree<'_> {
        self.inner.evolution_tree(context)
    }

    fn slots(&self, version: GameVersion) -> &[EncounterSlot] {
        if version == self.version {
            &[]
        } else {
            self.inner.slots(version)
        }
    }

    fn statics(&self, version: GameVersion) -> &[EncounterStatic] {
        if version == self.version {
            self.statics
        } else {
            self.inner.statics(version)
        }
    }

    fn gb_gifts(&self, version: GameVersion) -> &[EncounterStatic] {
        if version == self.version {
            self.gb_gifts
        } else {
            self.inner.gb_gifts(version)
        }
    }

    fn gifts(&self, generation: u8) -> &[EncounterGift] {
        if generation == self.version.generation() {
            &[]
        } else {
            self.inner.gifts(generation)
        }
    }

    fn trades(&self, version: GameVersion) -> &[EncounterTrade] {
        if version == self.version {
            &[]
        } else {
            self.inner.trades(version)
        }
    }

    fn trades_gb(&self, version: GameVersion) -> &[EncounterTrade] {
        if version == self.version {
            &[]
        } else {
            self.inner.trades_gb(version)
        }
    }

    fn underground_moves(&self, species: SpeciesId) -> &[MoveId] {
        self.inner.underground_moves(species)
    }
}
