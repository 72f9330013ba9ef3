//! Needed-move calculation.
//!
//! A requested move that no reachable learn source can teach after the
//! creature is obtained must come from the origin event itself. Those moves
//! form the [`Needs`] list; candidate origins are then matched against it
//! with a bitmask where bit `i` stands for `needs[i]`.

use serde::Serialize;
use tracing::trace;

use crate::creature::CreatureTemplate;
use crate::encounters::GameTables;
use crate::evolution::EvoCriteria;
use crate::game::LearnEnvironment;
use crate::learn::MoveSourceType;
use crate::moves::MoveId;
use crate::moveset::{MovePermitSet, PermitPool};
use crate::sketch;
use crate::species::SpeciesId;

/// Width of the coverage mask, and so the most moves a request may hold
pub const MAX_REQUESTED_MOVES: usize = 32;

/// Ordered, deduplicated moves the origin must supply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Needs(Vec<MoveId>);

impl Needs {
    /// Build from requested moves, dropping empty slots and repeats.
    /// Moves past [`MAX_REQUESTED_MOVES`] are ignored.
    pub fn new<I: IntoIterator<Item = MoveId>>(moves: I) -> Self {
        let mut list: Vec<MoveId> = Vec::new();
        for mv in moves {
            if mv != MoveId::NONE && !list.contains(&mv) && list.len() < MAX_REQUESTED_MOVES {
                list.push(mv);
            }
        }
        Self(list)
    }

    pub fn as_slice(&self) -> &[MoveId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit standing for `mv`, if it is needed
    pub fn bit_of(&self, mv: MoveId) -> Option<u32> {
        self.0
            .iter()
            .position(|m| *m == mv)
            .map(|i| 1u32 << i)
    }

    /// Bits of every needed move present in `moves`
    pub fn overlap(&self, moves: &[MoveId]) -> u32 {
        moves
            .iter()
            .filter_map(|mv| self.bit_of(*mv))
            .fold(0, |acc, bit| acc | bit)
    }

    /// Mask with every need satisfied
    pub fn full_mask(&self) -> u32 {
        match self.0.len() {
            0 => 0,
            n if n >= 32 => u32::MAX,
            n => (1u32 << n) - 1,
        }
    }

    /// Whether `flags` satisfies every need. Partial coverage never counts.
    pub fn is_covered(&self, flags: u32) -> bool {
        flags & self.full_mask() == self.full_mask()
    }
}

/// Distinct moves in a request, ignoring empty slots
pub fn distinct_moves(moves: &[MoveId]) -> usize {
    let mut seen = MovePermitSet::new();
    seen.extend(moves.iter().copied().filter(|mv| *mv != MoveId::NONE));
    seen.len()
}

/// Learn environments a creature could have passed through on its way from
/// its origin to its current format.
///
/// Game Boy origins skip Gens 3-6 entirely; they only reach later games
/// through Virtual Console. A Gen 1 Virtual Console transfer also counts as
/// having visited Crystal.
pub fn reachable_environments(creature: &CreatureTemplate) -> Vec<LearnEnvironment> {
    let origin = creature.origin_generation();
    let format = creature.format();
    let home = creature.version.learn_environment();
    let mut environments = vec![home];

    // Mainline games of the origin generation can trade freely
    let siblings = LearnEnvironment::of_generation(origin);
    if siblings.contains(&home) {
        push_unique(&mut environments, siblings);
    }
    if origin == 1 && format >= 7 {
        push_unique(&mut environments, &[LearnEnvironment::C]);
    }
    for generation in origin.saturating_add(1)..=format {
        if origin <= 2 && (3..=6).contains(&generation) {
            continue;
        }
        push_unique(&mut environments, LearnEnvironment::of_generation(generation));
    }
    environments
}

fn push_unique(environments: &mut Vec<LearnEnvironment>, add: &[LearnEnvironment]) {
    for environment in add {
        if !environments.contains(environment) {
            environments.push(*environment);
        }
    }
}

/// Requested moves that cannot be taught after the origin event, in
/// request order.
pub fn compute_needs(
    tables: &dyn GameTables,
    pool: &PermitPool,
    creature: &CreatureTemplate,
    chain: &[EvoCriteria],
    requested: &[MoveId],
) -> Needs {
    if creature.species == SpeciesId::SMEARGLE {
        // Anything Sketch can copy is obtainable later
        return Needs::new(
            requested
                .iter()
                .copied()
                .filter(|mv| !sketch::is_valid_sketch(*mv, creature.context)),
        );
    }

    let mut permitted = pool.lease();
    for environment in reachable_environments(creature) {
        let source = tables.learn_source(environment);
        for evo in chain {
            source.get_all_moves(&mut permitted, creature, evo, MoveSourceType::ALL_TEACHABLE);
        }
    }
    trace!(permitted = permitted.len(), "built permitted move set");

    Needs::new(requested.iter().copied().filter(|mv| !permitted.contains(*mv)))
}
