//! Evolution chain resolution.
//!
//! Walks backwards from a creature's current species through the evolution
//! links valid in its context, annotating each stage with the level window
//! in which it could have existed.

use serde::{Deserialize, Serialize};

use crate::creature::CreatureTemplate;
use crate::encounters::GameTables;
use crate::forms;
use crate::game::{EntityContext, GameVersion};
use crate::species::SpeciesId;

/// Longest possible chain (baby, basic, stage 1, stage 2) plus slack
pub const MAX_EVOLUTION_DEPTH: usize = 5;

/// One stage of a resolved evolution chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvoCriteria {
    pub species: SpeciesId,
    pub form: u8,
    /// Lowest level this stage can have been at
    pub level_min: u8,
    /// Highest level this stage can have been at
    pub level_max: u8,
    /// Reaching this stage required a level-up
    pub level_up_required: bool,
}

impl EvoCriteria {
    pub fn new(species: SpeciesId, form: u8, level_max: u8) -> Self {
        Self {
            species,
            form,
            level_min: 1,
            level_max,
            level_up_required: false,
        }
    }
}

// ============================================================================
// Evolution Links
// ============================================================================

/// How a link is traversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvolutionMethod {
    /// Reach the given level
    LevelUp,
    /// Level up with high friendship
    LevelUpFriendship,
    /// Use an evolution item
    UseItem,
    /// Trade
    Trade,
}

impl EvolutionMethod {
    pub const fn requires_level_up(self) -> bool {
        matches!(self, EvolutionMethod::LevelUp | EvolutionMethod::LevelUpFriendship)
    }
}

/// `from_species`/`from_form` evolves into `species`/`form`.
#[derive(Clone, Copy, Debug)]
pub struct EvolutionLink {
    pub species: SpeciesId,
    pub form: u8,
    pub from_species: SpeciesId,
    pub from_form: u8,
    pub method: EvolutionMethod,
    /// Minimum level for `LevelUp`, 0 otherwise
    pub level: u8,
    /// Generation the link first exists in
    pub introduced: u8,
    /// `species` keeps whatever form it evolves into, so every form links back
    pub any_form: bool,
}

impl EvolutionLink {
    pub const fn new(from_species: SpeciesId, species: SpeciesId, method: EvolutionMethod) -> Self {
        Self {
            species,
            form: 0,
            from_species,
            from_form: 0,
            method,
            level: 0,
            introduced: 1,
            any_form: false,
        }
    }

    pub const fn at_level(self, level: u8) -> Self {
        Self { level, ..self }
    }

    pub const fn into_form(self, form: u8) -> Self {
        Self { form, ..self }
    }

    pub const fn since(self, introduced: u8) -> Self {
        Self { introduced, ..self }
    }

    pub const fn into_any_form(self) -> Self {
        Self { any_form: true, ..self }
    }
}

/// Evolution links as seen from one context.
#[derive(Clone, Copy, Debug)]
pub struct EvolutionTree<'a> {
    pub context: EntityContext,
    pub links: &'a [EvolutionLink],
}

impl<'a> EvolutionTree<'a> {
    pub fn new(context: EntityContext, links: &'a [EvolutionLink]) -> Self {
        Self { context, links }
    }

    /// The link `species`/`form` evolved through, if any exists in this context
    pub fn pre_evolution(&self, species: SpeciesId, form: u8) -> Option<&'a EvolutionLink> {
        let generation = self.context.generation();
        let max_species = self.context.max_species_id();
        self.links.iter().find(|link| {
            link.species == species
                && (link.form == form || link.any_form)
                && link.introduced <= generation
                && link.from_species.0 <= max_species
        })
    }

    /// Stages that could precede `species`/`form`, most evolved first.
    ///
    /// With `skip_checks` the walk keeps going even when a stage's level
    /// window is empty; resolution for generation wants every candidate.
    pub fn valid_pre_evolutions(
        &self,
        species: SpeciesId,
        form: u8,
        level_ceiling: u8,
        skip_checks: bool,
    ) -> Vec<EvoCriteria> {
        let mut chain = Vec::with_capacity(MAX_EVOLUTION_DEPTH);
        let mut stage = EvoCriteria::new(species, form, level_ceiling);

        while chain.len() < MAX_EVOLUTION_DEPTH {
            let Some(link) = self.pre_evolution(stage.species, stage.form) else {
                chain.push(stage);
                break;
            };

            let mut pre_max = stage.level_max;
            if link.method.requires_level_up() {
                stage.level_min = stage.level_min.max(link.level).max(2);
                stage.level_up_required = true;
                pre_max = stage.level_max.saturating_sub(1);
            }
            let window_empty = stage.level_min > stage.level_max;
            chain.push(stage);

            if pre_max == 0 || (!skip_checks && window_empty) {
                break;
            }
            stage = EvoCriteria::new(link.from_species, link.from_form, pre_max);
        }
        chain
    }
}

/// Resolve the evolution chain for a creature, capped at `level_ceiling`.
///
/// Returns an empty chain for species or forms the creature's format cannot
/// hold.
pub fn resolve(
    tables: &dyn GameTables,
    creature: &CreatureTemplate,
    level_ceiling: u8,
    skip_checks: bool,
) -> Vec<EvoCriteria> {
    let context = learning_context(creature);
    let species = creature.species;
    if species == SpeciesId::NONE || species.0 > context.max_species_id() {
        return Vec::new();
    }
    if creature.form >= forms::form_count(species, context.generation()) {
        return Vec::new();
    }
    tables
        .evolution_tree(context)
        .valid_pre_evolutions(species, creature.form, level_ceiling, skip_checks)
}

/// Context whose evolution links apply when learning moves.
///
/// A Gen 1 origin sitting in a Gen 2 game resolves in Gen 1, leaving out the
/// babies only Gen 2 breeding can produce.
pub fn learning_context(creature: &CreatureTemplate) -> EntityContext {
    let from_gen1 = matches!(
        creature.version,
        GameVersion::RD | GameVersion::GN | GameVersion::BU | GameVersion::YW
    );
    if creature.context == EntityContext::Gen2 && from_gen1 {
        EntityContext::Gen1
    } else {
        creature.context
    }
}
