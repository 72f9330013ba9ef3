//! Move learnability per learn environment.
//!
//! Each [`LearnEnvironment`] is backed by one static [`LearnSourceTable`]
//! answering "can this stage learn this move, and how". The per-generation
//! differences (move reminder, HM restrictions, Game Boy move ceilings) live
//! in [`generations`] as [`LearnRules`] implementations; the tables
//! themselves are plain data.

pub mod generations;
mod learnset;
mod table;

pub use generations::LearnRules;
pub use learnset::{LearnData, LearnInfo, Learnset};
pub use table::LearnSourceTable;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::creature::{CreatureTemplate, MAX_MOVES};
use crate::evolution::EvoCriteria;
use crate::game::LearnEnvironment;
use crate::moves::MoveId;
use crate::moveset::MovePermitSet;
use crate::species::SpeciesId;

bitflags! {
    /// Categories of move sources a query may consider.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveSourceType: u8 {
        const LEVEL_UP = 1 << 0;
        const MACHINE = 1 << 1;
        const TYPE_TUTOR = 1 << 2;
        const SPECIAL_TUTOR = 1 << 3;
        const ENHANCED_TUTOR = 1 << 4;
        const EGG = 1 << 5;

        /// Everything obtainable after the creature is in hand
        const ALL_TEACHABLE = Self::LEVEL_UP.bits()
            | Self::MACHINE.bits()
            | Self::TYPE_TUTOR.bits()
            | Self::SPECIAL_TUTOR.bits()
            | Self::ENHANCED_TUTOR.bits();

        const ALL = Self::ALL_TEACHABLE.bits() | Self::EGG.bits();
    }
}

/// How a move was found to be learnable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnMethod {
    #[default]
    None,
    LevelUp,
    Machine,
    TypeTutor,
    SpecialTutor,
    EnhancedTutor,
    EggMove,
}

/// Whether form-locked tutor moves count only for the current form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LearnOption {
    #[default]
    Current,
    AtAnyTime,
}

/// First matching learn method for a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnResult {
    pub method: LearnMethod,
    pub environment: Option<LearnEnvironment>,
    /// Level the move is learned at, for level-up matches
    pub level: Option<u8>,
}

impl LearnResult {
    pub const NONE: LearnResult = LearnResult {
        method: LearnMethod::None,
        environment: None,
        level: None,
    };

    pub const fn new(method: LearnMethod, environment: LearnEnvironment) -> Self {
        Self {
            method,
            environment: Some(environment),
            level: None,
        }
    }

    pub const fn level_up(environment: LearnEnvironment, level: u8) -> Self {
        Self {
            method: LearnMethod::LevelUp,
            environment: Some(environment),
            level: Some(level),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.method != LearnMethod::None
    }
}

/// Move learnability authority for one learn environment.
pub trait LearnSource: Send + Sync {
    /// Environment this source answers for
    fn environment(&self) -> LearnEnvironment;

    /// Highest species id present in this environment
    fn max_species_id(&self) -> u16;

    /// Capability record for a species/form, `None` above the species ceiling
    fn info(&self, species: SpeciesId, form: u8) -> Option<&LearnInfo>;

    /// Level-up learnset, empty if the species is not present
    fn learnset(&self, species: SpeciesId, form: u8) -> Learnset {
        self.info(species, form)
            .map(|info| info.level_moves)
            .unwrap_or(Learnset::EMPTY)
    }

    /// First method through which `evo` can learn `mv`, tried in the order
    /// level-up, machine, type tutor, special tutor, enhanced tutor, egg.
    fn can_learn(
        &self,
        creature: &CreatureTemplate,
        info: &LearnInfo,
        evo: &EvoCriteria,
        mv: MoveId,
        types: MoveSourceType,
        option: LearnOption,
    ) -> LearnResult;

    /// Mark every move `evo` can obtain through `types`
    fn get_all_moves(
        &self,
        result: &mut MovePermitSet,
        creature: &CreatureTemplate,
        evo: &EvoCriteria,
        types: MoveSourceType,
    );

    /// Egg moves for a species/form
    fn egg_moves(&self, species: SpeciesId, form: u8) -> &[MoveId] {
        self.info(species, form)
            .map(|info| info.egg_moves)
            .unwrap_or(&[])
    }

    /// Moves a creature met at `level` knows from its level-up table alone
    fn encounter_moves(&self, species: SpeciesId, form: u8, level: u8) -> [MoveId; MAX_MOVES] {
        self.learnset(species, form).encounter_moves(level)
    }
}
