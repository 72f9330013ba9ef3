//! Origin categories and the per-category candidate generators.

pub mod context;
pub mod generators;
pub mod sanity;
pub mod tables;
pub mod types;

pub use context::SearchContext;
pub use tables::GameTables;
pub use types::{
    Encounter, EncounterEgg, EncounterGift, EncounterSlot, EncounterStatic, EncounterTrade, GiftFlags, Origin,
    SlotFlags, StaticFlags,
};

use serde::{Deserialize, Serialize};

use crate::error::EncounterError;

/// Origin categories, in the default order they are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum EncounterOrder {
    Egg = 0,
    Mystery = 1,
    Static = 2,
    Trade = 3,
    Slot = 4,
}

impl EncounterOrder {
    /// Every category in declaration order
    pub const DEFAULT: [EncounterOrder; 5] = [
        EncounterOrder::Egg,
        EncounterOrder::Mystery,
        EncounterOrder::Static,
        EncounterOrder::Trade,
        EncounterOrder::Slot,
    ];
}

impl TryFrom<u8> for EncounterOrder {
    type Error = EncounterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::DEFAULT
            .get(value as usize)
            .copied()
            .ok_or(EncounterError::UnknownCategory(value))
    }
}
