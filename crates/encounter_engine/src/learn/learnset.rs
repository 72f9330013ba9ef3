//! Static learnset data.

use crate::creature::MAX_MOVES;
use crate::moves::MoveId;
use crate::species::SpeciesId;

// ============================================================================
// Learnset
// ============================================================================

/// Level-up moves in ascending level order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Learnset {
    moves: &'static [(u8, MoveId)],
}

impl Learnset {
    pub const EMPTY: Learnset = Learnset { moves: &[] };

    pub const fn new(moves: &'static [(u8, MoveId)]) -> Self {
        Self { moves }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, MoveId)> + '_ {
        self.moves.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Lowest level in `min..=max` at which `mv` is learned
    pub fn level_within(&self, mv: MoveId, min: u8, max: u8) -> Option<u8> {
        self.iter()
            .find(|&(level, m)| m == mv && level >= min && level <= max)
            .map(|(level, _)| level)
    }

    /// Moves learned between `min` and `max` inclusive
    pub fn moves_within(&self, min: u8, max: u8) -> impl Iterator<Item = MoveId> + '_ {
        self.iter()
            .filter(move |&(level, _)| level >= min && level <= max)
            .map(|(_, mv)| mv)
    }

    /// The moves a creature met at `level` knows with no move memory:
    /// each new move pushes out the oldest once all slots are full.
    pub fn encounter_moves(&self, level: u8) -> [MoveId; MAX_MOVES] {
        let mut result = [MoveId::NONE; MAX_MOVES];
        let mut count = 0;
        for (_, mv) in self.iter().take_while(|&(lvl, _)| lvl <= level) {
            if result.contains(&mv) {
                continue;
            }
            if count == MAX_MOVES {
                result.rotate_left(1);
                result[MAX_MOVES - 1] = mv;
            } else {
                result[count] = mv;
                count += 1;
            }
        }
        result
    }
}

// ============================================================================
// LearnInfo
// ============================================================================

/// Per species/form capability record for one environment.
#[derive(Clone, Copy, Debug)]
pub struct LearnInfo {
    pub species: SpeciesId,
    pub form: u8,
    /// Forms present in this environment
    pub form_count: u8,
    /// Whether this species/form can be obtained from an egg
    pub can_hatch: bool,
    pub level_moves: Learnset,
    pub egg_moves: &'static [MoveId],
    /// Machine compatibility
    pub machines: &'static [MoveId],
    /// Type tutor compatibility; the environment's pool decides availability
    pub type_tutors: &'static [MoveId],
    /// Special tutor compatibility; the environment's pool decides availability
    pub special_tutors: &'static [MoveId],
}

impl LearnInfo {
    pub const fn new(species: SpeciesId, form: u8) -> Self {
        Self {
            species,
            form,
            form_count: 1,
            can_hatch: true,
            level_moves: Learnset::EMPTY,
            egg_moves: &[],
            machines: &[],
            type_tutors: &[],
            special_tutors: &[],
        }
    }

    pub const fn forms(self, form_count: u8) -> Self {
        Self { form_count, ..self }
    }

    pub const fn levels(self, moves: &'static [(u8, MoveId)]) -> Self {
        Self {
            level_moves: Learnset::new(moves),
            ..self
        }
    }

    pub const fn eggs(self, egg_moves: &'static [MoveId]) -> Self {
        Self { egg_moves, ..self }
    }

    pub const fn machines(self, machines: &'static [MoveId]) -> Self {
        Self { machines, ..self }
    }

    pub const fn tutors(self, special_tutors: &'static [MoveId]) -> Self {
        Self {
            special_tutors,
            ..self
        }
    }

    pub const fn type_tutors(self, type_tutors: &'static [MoveId]) -> Self {
        Self {
            type_tutors,
            ..self
        }
    }

    /// Legendaries and other species never found in eggs
    pub const fn unhatchable(self) -> Self {
        Self {
            can_hatch: false,
            ..self
        }
    }
}

// ============================================================================
// LearnData
// ============================================================================

/// All capability records for one environment.
#[derive(Debug)]
pub struct LearnData {
    pub max_species: u16,
    pub entries: &'static [LearnInfo],
}

impl LearnData {
    /// Exact species/form record, falling back to the base form for forms
    /// that share its data.
    pub fn find(&self, species: SpeciesId, form: u8) -> Option<&LearnInfo> {
        if species.0 > self.max_species {
            return None;
        }
        let mut base = None;
        for info in self.entries.iter().filter(|i| i.species == species) {
            if info.form == form {
                return Some(info);
            }
            if info.form == 0 {
                base = Some(info);
            }
        }
        base.filter(|info| form < info.form_count)
    }
}
