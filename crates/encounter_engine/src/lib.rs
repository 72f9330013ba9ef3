//! encounter_engine - Encounter resolution and move-learnability engine
//!
//! Given a partially specified creature (species, form, requested moves,
//! target versions), enumerates every origin event (wild slot, static
//! encounter, mystery gift, in-game trade, hatched egg) that could have
//! produced it while knowing those moves.

/// Species identifiers and lookup
pub mod species {
    include!(concat!(env!("OUT_DIR"), "/species.rs"));
}

/// Move identifiers and lookup
pub mod moves {
    include!(concat!(env!("OUT_DIR"), "/moves.rs"));
}

pub mod config;
pub mod creature;
pub mod data;
pub mod encounters;
pub mod error;
pub mod evolution;
pub mod forms;
pub mod game;
pub mod learn;
pub mod moveset;
pub mod needs;
pub mod sequencer;
pub mod sketch;
pub mod trainer;

// Re-export commonly used types
pub use config::GeneratorSettings;
pub use creature::CreatureTemplate;
pub use data::BuiltinTables;
pub use encounters::{Encounter, EncounterOrder, GameTables, Origin};
pub use error::EncounterError;
pub use evolution::EvoCriteria;
pub use game::{EntityContext, GameVersion, LanguageId, LearnEnvironment};
pub use learn::{LearnMethod, LearnOption, LearnResult, LearnSource, MoveSourceType};
pub use moves::MoveId;
pub use needs::Needs;
pub use sequencer::EncounterMovesetGenerator;
pub use species::SpeciesId;
pub use trainer::{EncounterConverter, TemplateConverter, TrainerInfo};
