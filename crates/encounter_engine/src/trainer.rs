//! Trainer context and candidate materialization.

use serde::{Deserialize, Serialize};

use crate::creature::CreatureTemplate;
use crate::encounters::Encounter;
use crate::game::LanguageId;

/// The receiving trainer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerInfo {
    pub trainer_id: u16,
    pub secret_id: u16,
    pub ot_name: String,
    pub language: LanguageId,
}

impl TrainerInfo {
    pub fn new(trainer_id: u16, ot_name: impl Into<String>) -> Self {
        Self {
            trainer_id,
            ot_name: ot_name.into(),
            ..Default::default()
        }
    }
}

/// Builds a creature from a candidate origin and the trainer receiving it.
pub trait EncounterConverter {
    fn convert(&self, enc: &Encounter<'_>, trainer: &TrainerInfo) -> CreatureTemplate;
}

/// Fills in species, form, level, origin and the first four known moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateConverter;

impl EncounterConverter for TemplateConverter {
    fn convert(&self, enc: &Encounter<'_>, trainer: &TrainerInfo) -> CreatureTemplate {
        let version = enc.version;
        CreatureTemplate::new(enc.species())
            .form(enc.form())
            .level(enc.level_min())
            .moves(enc.moves())
            .context(version.context())
            .version(version)
            .generation(enc.generation())
            .language(trainer.language)
            .trainer_id(trainer.trainer_id)
    }
}
