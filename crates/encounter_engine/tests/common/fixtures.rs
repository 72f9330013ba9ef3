//! Fixture data structures for encounter resolution tests.
//!
//! These types are deserialized from `tests/fixtures/encounters.json`.

use serde::Deserialize;

use encounter_engine::{EncounterOrder, EntityContext, GeneratorSettings, LanguageId};

/// Root structure for the encounter fixture file.
#[derive(Deserialize)]
pub struct EncounterFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    pub cases: Vec<EncounterCase>,
}

/// A single resolution request and what it should produce.
#[derive(Deserialize, Debug, Clone)]
pub struct EncounterCase {
    pub id: String,
    pub description: String,
    pub creature: CreatureData,
    /// Requested move names
    #[serde(default)]
    pub moves: Vec<String>,
    /// Version searched; also the creature's declared version
    pub version: String,
    pub settings: Option<GeneratorSettings>,
    pub expected: ExpectedResult,
}

/// Creature configuration from fixture.
#[derive(Deserialize, Debug, Clone)]
pub struct CreatureData {
    pub species: String,
    #[serde(default)]
    pub form: u8,
    pub context: EntityContext,
    #[serde(default)]
    pub language: LanguageId,
}

/// Expected resolution output.
#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedResult {
    /// Move names the origin must supply, in request order
    pub needs: Vec<String>,
    /// Category of each candidate, in the order yielded
    pub categories: Vec<EncounterOrder>,
}
