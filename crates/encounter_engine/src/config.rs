//! Generator settings.

use serde::{Deserialize, Serialize};

use crate::encounters::EncounterOrder;
use crate::error::{EncounterError, Result};

/// Default level ceiling for chain resolution
pub const DEFAULT_LEVEL_CEILING: u8 = 100;

/// Settings owned by one [`EncounterMovesetGenerator`](crate::EncounterMovesetGenerator).
///
/// Every field has a default, so partial JSON such as
/// `{"priority": ["slot", "egg", "static", "trade", "mystery"]}` is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Order categories are generated in
    pub priority: Vec<EncounterOrder>,
    /// Highest level considered when resolving evolution chains
    pub level_ceiling: u8,
    /// Drop trades for creatures whose language no trade could carry
    pub filter_trade_language: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            priority: EncounterOrder::DEFAULT.to_vec(),
            level_ceiling: DEFAULT_LEVEL_CEILING,
            filter_trade_language: false,
        }
    }
}

impl GeneratorSettings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        validate_priority(&self.priority)?;
        if !(1..=100).contains(&self.level_ceiling) {
            return Err(EncounterError::InvalidLevelCeiling(self.level_ceiling));
        }
        Ok(())
    }
}

/// A priority list must be a permutation of every category
pub fn validate_priority(priority: &[EncounterOrder]) -> Result<()> {
    let mut sorted = priority.to_vec();
    sorted.sort();
    if sorted != EncounterOrder::DEFAULT {
        return Err(EncounterError::InvalidPriority(priority.to_vec()));
    }
    Ok(())
}
