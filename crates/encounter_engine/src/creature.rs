//! Partially specified creature records.
//!
//! `CreatureTemplate` is the rough input to resolution: whatever the caller
//! knows about the creature (species, form, moves, where it is stored now and
//! which version it claims to come from).

use serde::{Deserialize, Serialize};

use crate::game::{EntityContext, GameVersion, LanguageId};
use crate::moves::MoveId;
use crate::species::SpeciesId;

/// Move slots on a creature
pub const MAX_MOVES: usize = 4;

/// Default level
pub const DEFAULT_LEVEL: u8 = 50;

/// Rough creature data handed to the generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureTemplate {
    /// Current species
    pub species: SpeciesId,

    /// Current form
    pub form: u8,

    /// Current level (1-100)
    pub level: u8,

    /// Move slots, `MoveId::NONE` for empty
    pub moves: [MoveId; MAX_MOVES],

    /// Format the creature is stored in
    pub context: EntityContext,

    /// Declared origin version
    pub version: GameVersion,

    /// Explicit origin generation, when known independently of `version`
    pub generation: Option<u8>,

    /// Language tag
    pub language: LanguageId,

    /// Trainer id, populated by the caller before materializing results
    pub trainer_id: u16,
}

impl Default for CreatureTemplate {
    fn default() -> Self {
        Self {
            species: SpeciesId::NONE,
            form: 0,
            level: DEFAULT_LEVEL,
            moves: [MoveId::NONE; MAX_MOVES],
            context: EntityContext::Gen9,
            version: GameVersion::SL,
            generation: None,
            language: LanguageId::English,
            trainer_id: 0,
        }
    }
}

impl CreatureTemplate {
    /// Create a template for a species
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            ..Default::default()
        }
    }

    /// Create from species string key
    pub fn from_str(species_key: &str) -> Option<Self> {
        SpeciesId::from_str(species_key).map(Self::new)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set form
    pub fn form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    /// Set level
    pub fn level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 100);
        self
    }

    /// Set moves (up to 4, extra entries ignored)
    pub fn moves(mut self, moves: &[MoveId]) -> Self {
        self.moves = [MoveId::NONE; MAX_MOVES];
        for (slot, mv) in self.moves.iter_mut().zip(moves) {
            *slot = *mv;
        }
        self
    }

    /// Set storage context
    pub fn context(mut self, context: EntityContext) -> Self {
        self.context = context;
        self
    }

    /// Set declared origin version
    pub fn version(mut self, version: GameVersion) -> Self {
        self.version = version;
        self
    }

    /// Set explicit origin generation
    pub fn generation(mut self, generation: u8) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Set language
    pub fn language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }

    /// Set trainer id
    pub fn trainer_id(mut self, trainer_id: u16) -> Self {
        self.trainer_id = trainer_id;
        self
    }

    // ========================================================================
    // Derived properties
    // ========================================================================

    /// Generation of the storage format
    pub fn format(&self) -> u8 {
        self.context.generation()
    }

    /// Origin generation: explicit if set, else from the declared version
    pub fn origin_generation(&self) -> u8 {
        self.generation.unwrap_or_else(|| self.version.generation())
    }

    /// A Game Boy origin transferred forward through Virtual Console
    pub fn is_virtual_console(&self) -> bool {
        self.format() >= 7 && self.version.generation() <= 2
    }

    /// Transferred from a Gen 1 Virtual Console game
    pub fn is_vc1(&self) -> bool {
        self.format() >= 7 && self.version.generation() == 1
    }

    /// Non-empty move slots
    pub fn known_moves(&self) -> impl Iterator<Item = MoveId> + '_ {
        self.moves.iter().copied().filter(|m| *m != MoveId::NONE)
    }
}
