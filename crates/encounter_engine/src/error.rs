//! Error types for the fallible surface of the engine.
//!
//! Resolution itself never fails: an empty candidate stream is the answer
//! for "no plausible origin". Errors only come from configuration and from
//! parsing caller input.

use thiserror::Error;

use crate::encounters::EncounterOrder;

#[derive(Debug, Error)]
pub enum EncounterError {
    #[error("priority list must name every category exactly once, got {0:?}")]
    InvalidPriority(Vec<EncounterOrder>),

    #[error("unknown encounter category index {0}")]
    UnknownCategory(u8),

    #[error("level ceiling must be between 1 and 100, got {0}")]
    InvalidLevelCeiling(u8),

    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    #[error("unknown move: {0}")]
    UnknownMove(String),

    #[error("unknown version: {0}")]
    UnknownVersion(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EncounterError>;
