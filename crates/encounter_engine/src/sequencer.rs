//! The priority sequencer: drives the category generators for each version.

use std::rc::Rc;

use tracing::debug;

use crate::config::{validate_priority, GeneratorSettings};
use crate::creature::CreatureTemplate;
use crate::encounters::generators;
use crate::encounters::{Encounter, EncounterOrder, GameTables, SearchContext};
use crate::error::Result;
use crate::evolution::{self, EvoCriteria};
use crate::game::GameVersion;
use crate::moves::MoveId;
use crate::moveset::PermitPool;
use crate::needs::{self, Needs, MAX_REQUESTED_MOVES};
use crate::sketch;
use crate::species::SpeciesId;
use crate::trainer::{EncounterConverter, TrainerInfo};

/// Enumerates the origin events that could have produced a creature knowing
/// a set of moves.
///
/// One generator owns its settings and scratch pool; independent generators
/// over the same tables can use different priorities side by side.
///
/// ```ignore
/// let tables = BuiltinTables::new();
/// let generator = EncounterMovesetGenerator::new(&tables);
/// let creature = CreatureTemplate::new(SpeciesId::PIKACHU).context(EntityContext::Gen9);
/// for enc in generator.generate_encounters(&creature, &[MoveId::VOLT_TACKLE], &[]) {
///     println!("{:?}", enc);
/// }
/// ```
pub struct EncounterMovesetGenerator<'t> {
    tables: &'t dyn GameTables,
    settings: GeneratorSettings,
    permits: PermitPool,
}

impl<'t> EncounterMovesetGenerator<'t> {
    pub fn new(tables: &'t dyn GameTables) -> Self {
        Self {
            tables,
            settings: GeneratorSettings::default(),
            permits: PermitPool::new(),
        }
    }

    pub fn with_settings(tables: &'t dyn GameTables, settings: GeneratorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            tables,
            settings,
            permits: PermitPool::new(),
        })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn priority(&self) -> &[EncounterOrder] {
        &self.settings.priority
    }

    /// Change the category order. Affects only the order of results.
    pub fn set_priority(&mut self, priority: &[EncounterOrder]) -> Result<()> {
        validate_priority(priority)?;
        self.settings.priority = priority.to_vec();
        Ok(())
    }

    /// Restore the default category order
    pub fn reset_filters(&mut self) {
        self.settings.priority = EncounterOrder::DEFAULT.to_vec();
    }

    /// Scratch pool used for needed-move calculation
    pub fn permits(&self) -> &PermitPool {
        &self.permits
    }

    /// Evolution chain used for generation, most evolved first
    pub fn resolve_chain(&self, creature: &CreatureTemplate) -> Vec<EvoCriteria> {
        evolution::resolve(self.tables, creature, self.settings.level_ceiling, true)
    }

    /// Requested moves the origin itself must supply
    pub fn compute_needs(&self, creature: &CreatureTemplate, chain: &[EvoCriteria], moves: &[MoveId]) -> Needs {
        needs::compute_needs(self.tables, &self.permits, creature, chain, moves)
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Candidates from one version, in priority order.
    ///
    /// The chain and needs are computed up front; the candidates themselves
    /// are produced as the iterator is pulled.
    pub fn generate_version_encounters(
        &self,
        creature: &CreatureTemplate,
        moves: &[MoveId],
        version: GameVersion,
    ) -> impl Iterator<Item = Encounter<'t>> + 't {
        let tables = self.tables;
        let plan = self
            .plan(creature, moves, version)
            .map(|ctx| (ctx, self.settings.priority.clone()));

        plan.into_iter().flat_map(move |(ctx, priority)| {
            priority
                .into_iter()
                .flat_map(move |order| generators::of_type(order, Rc::clone(&ctx), tables))
        })
    }

    /// Versions a search over `versions` visits: the list itself, or every
    /// version the creature's format can hold when it is empty
    pub fn searched_versions(creature: &CreatureTemplate, versions: &[GameVersion]) -> Vec<GameVersion> {
        if versions.is_empty() {
            GameVersion::within_range(creature.context)
        } else {
            versions.to_vec()
        }
    }

    /// Needs as seen from `version`, the list a search of that version
    /// matches candidates against
    pub fn version_needs(&self, creature: &CreatureTemplate, moves: &[MoveId], version: GameVersion) -> Needs {
        let origin = creature.clone().version(version);
        let chain = self.resolve_chain(&origin);
        self.compute_needs(&origin, &chain, moves)
    }

    /// Candidates from each version in turn. An empty version list means
    /// every version the creature's format can hold.
    pub fn generate_encounters(
        &self,
        creature: &CreatureTemplate,
        moves: &[MoveId],
        versions: &[GameVersion],
    ) -> impl Iterator<Item = Encounter<'t>> + '_ {
        let creature = creature.clone();
        let moves = moves.to_vec();
        Self::searched_versions(&creature, versions)
            .into_iter()
            .flat_map(move |version| self.generate_version_encounters(&creature, &moves, version))
    }

    /// Candidates from every version released in `generation`, newest first
    pub fn generate_generation_encounters(
        &self,
        creature: &CreatureTemplate,
        moves: &[MoveId],
        generation: u8,
    ) -> impl Iterator<Item = Encounter<'t>> + '_ {
        let versions: Vec<GameVersion> = GameVersion::ALL
            .iter()
            .rev()
            .copied()
            .filter(|v| v.generation() == generation)
            .collect();
        self.generate_encounters(creature, moves, &versions)
    }

    /// Candidates materialized into creatures for `trainer`
    pub fn generate_creatures<'s, C>(
        &'s self,
        creature: &CreatureTemplate,
        trainer: &TrainerInfo,
        moves: &[MoveId],
        versions: &[GameVersion],
        converter: C,
    ) -> Box<dyn Iterator<Item = CreatureTemplate> + 's>
    where
        C: EncounterConverter + 's,
    {
        let mut creature = creature.clone();
        creature.trainer_id = trainer.trainer_id;
        let trainer = trainer.clone();
        Box::new(
            self.generate_encounters(&creature, moves, versions)
                .map(move |enc| converter.convert(&enc, &trainer)),
        )
    }

    /// Chain, needs and early exits for one version
    fn plan(&self, creature: &CreatureTemplate, moves: &[MoveId], version: GameVersion) -> Option<Rc<SearchContext>> {
        let context = creature.context;
        let species = creature.species;
        if species == SpeciesId::NONE || species.0 > context.max_species_id() {
            return None;
        }
        if moves.iter().any(|mv| mv.0 > context.max_move_id())
            || needs::distinct_moves(moves) > MAX_REQUESTED_MOVES
        {
            return None;
        }
        if species == SpeciesId::SMEARGLE
            && moves
                .iter()
                .any(|mv| *mv != MoveId::NONE && !sketch::is_valid_sketch(*mv, context))
        {
            return None;
        }

        let mut origin = creature.clone();
        origin.version = version;
        let chain = self.resolve_chain(&origin);
        if chain.is_empty() {
            return None;
        }
        let needs = self.compute_needs(&origin, &chain, moves);
        debug!(
            species = species.name(),
            ?version,
            chain = chain.len(),
            needs = ?needs.as_slice(),
            "resolving encounters"
        );

        Some(Rc::new(SearchContext {
            creature: origin,
            version,
            chain,
            needs,
            filter_trade_language: self.settings.filter_trade_language,
        }))
    }
}
