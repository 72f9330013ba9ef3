//! X/Y/Omega Ruby/Alpha Sapphire.

use super::TYPE_TUTORS_567;
use crate::encounters::{EncounterSlot, SlotFlags};
use crate::game::LearnEnvironment;
use crate::learn::generations::Gen6;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

const TUTORS_ORAS: &[M] = &[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM, M::AQUA_TAIL, M::DRACO_METEOR];

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ROCK_SMASH, M::ROUND];
const MARILL_TM: &[M] = &[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::STRENGTH, M::WATERFALL, M::DIVE, M::ROUND];

pub static LEARN: LearnData = LearnData {
    max_species: 721,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::CHARM),
                (5, M::TAIL_WHIP),
                (10, M::SWEET_KISS),
                (13, M::NUZZLE),
                (13, M::THUNDER_WAVE),
            ])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE, M::WISH, M::BODY_SLAM])
            .machines(ELECTRIC_TM)
            .tutors(&[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM]),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::GROWL),
                (5, M::TAIL_WHIP),
                (7, M::THUNDER_WAVE),
                (10, M::QUICK_ATTACK),
                (23, M::NUZZLE),
                (29, M::THUNDERBOLT),
                (34, M::AGILITY),
                (37, M::DISCHARGE),
                (50, M::THUNDER),
            ])
            .machines(ELECTRIC_TM)
            .tutors(&[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM])
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .tutors(&[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM])
            .unhatchable(),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (30, M::FLAIL)]),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (5, M::SAND_ATTACK),
                (9, M::GROWL),
                (13, M::QUICK_ATTACK),
                (17, M::BITE),
                (29, M::TAKE_DOWN),
            ])
            .eggs(&[M::CHARM, M::FLAIL, M::WISH, M::CURSE, M::ENDEAVOR])
            .machines(&[M::SHADOW_BALL, M::ROUND])
            .tutors(&[M::IRON_TAIL, M::HELPING_HAND]),
        LearnInfo::new(S::AZURILL, 0)
            .levels(&[(1, M::SPLASH), (1, M::WATER_GUN), (2, M::TAIL_WHIP), (5, M::CHARM)])
            .eggs(&[M::ENCORE, M::SING, M::BODY_SLAM])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL]),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::WATER_GUN),
                (2, M::TAIL_WHIP),
                (5, M::DEFENSE_CURL),
                (10, M::ROLLOUT),
                (20, M::BUBBLE_BEAM),
                (23, M::AQUA_TAIL),
                (28, M::DOUBLE_EDGE),
                (37, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AMNESIA, M::AQUA_JET, M::BODY_SLAM, M::ENCORE, M::PRESENT, M::SING])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL]),
        LearnInfo::new(S::AZUMARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::WATER_GUN),
                (1, M::TAIL_WHIP),
                (1, M::DEFENSE_CURL),
                (10, M::ROLLOUT),
                (21, M::BUBBLE_BEAM),
                (25, M::AQUA_TAIL),
                (31, M::DOUBLE_EDGE),
                (47, M::HYDRO_PUMP),
            ])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL])
            .unhatchable(),
        LearnInfo::new(S::SCATTERBUG, 0)
            .levels(&[(1, M::TACKLE), (1, M::STRING_SHOT), (6, M::STUN_SPORE), (15, M::BUG_BITE)])
            .eggs(&[M::POISON_POWDER, M::RAGE_POWDER, M::STRUGGLE_BUG]),
        LearnInfo::new(S::SPEWPA, 0)
            .levels(&[(1, M::HARDEN), (9, M::HARDEN), (9, M::PROTECT)])
            .machines(&[M::PROTECT])
            .unhatchable(),
        LearnInfo::new(S::VIVILLON, 0)
            .forms(20)
            .levels(&[(1, M::GUST), (1, M::SLEEP_POWDER), (21, M::CONFUSION), (45, M::QUIVER_DANCE)])
            .machines(&[M::PSYCHIC, M::SUNNY_DAY, M::HYPER_BEAM, M::ROUND])
            .tutors(&[M::SIGNAL_BEAM])
            .unhatchable(),
        LearnInfo::new(S::SMEARGLE, 0).levels(&[
            (1, M::SKETCH),
            (11, M::SKETCH),
            (21, M::SKETCH),
            (31, M::SKETCH),
            (41, M::SKETCH),
            (51, M::SKETCH),
            (61, M::SKETCH),
            (71, M::SKETCH),
            (81, M::SKETCH),
            (91, M::SKETCH),
        ]),
        LearnInfo::new(S::ROTOM, 0)
            .forms(6)
            .levels(&[(1, M::TRICK), (1, M::ASTONISH), (1, M::THUNDER_WAVE), (1, M::THUNDER_SHOCK), (43, M::DISCHARGE)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ROUND])
            .tutors(&[M::ELECTROWEB, M::SIGNAL_BEAM]),
        LearnInfo::new(S::HO_OH, 0)
            .levels(&[(1, M::WHIRLWIND), (1, M::GUST), (29, M::RECOVER), (43, M::FIRE_BLAST), (71, M::SACRED_FIRE)])
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .unhatchable(),
    ],
};

pub static SOURCE_XY: LearnSourceTable<Gen6> = LearnSourceTable {
    rules: Gen6,
    environment: LearnEnvironment::XY,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: TYPE_TUTORS_567,
};

pub static SOURCE_ORAS: LearnSourceTable<Gen6> = LearnSourceTable {
    rules: Gen6,
    environment: LearnEnvironment::ORAS,
    data: &LEARN,
    special_tutors: TUTORS_ORAS,
    type_tutors: TYPE_TUTORS_567,
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_XY: &[EncounterSlot] = &[
    // Santalune Forest
    EncounterSlot::new(S::PIKACHU, 3, 5).at(6),
    EncounterSlot::new(S::VIVILLON, 12, 13).at(10),
    EncounterSlot::new(S::AZURILL, 10, 12).at(18),
    EncounterSlot::new(S::MAGIKARP, 10, 10).at(22),
];

pub static SLOTS_ORAS: &[EncounterSlot] = &[
    // Route 104
    EncounterSlot::new(S::MARILL, 4, 5).at(206).flags(SlotFlags::DEXNAV),
    EncounterSlot::new(S::AZURILL, 2, 3).at(206).flags(SlotFlags::DEXNAV),
    EncounterSlot::new(S::MAGIKARP, 5, 10).at(206),
    // Artisan Cave
    EncounterSlot::new(S::SMEARGLE, 42, 45).at(344).flags(SlotFlags::DEXNAV),
];
