//! Red/Blue/Yellow.

use crate::encounters::{EncounterSlot, EncounterStatic, EncounterTrade};
use crate::game::LearnEnvironment;
use crate::learn::generations::Gen1;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

const PIKACHU_TM: &[M] = &[
    M::BODY_SLAM,
    M::TAKE_DOWN,
    M::DOUBLE_EDGE,
    M::THUNDERBOLT,
    M::THUNDER,
    M::SWIFT,
    M::FLASH,
    M::THUNDER_WAVE,
];

const RAICHU_TM: &[M] = &[
    M::BODY_SLAM,
    M::TAKE_DOWN,
    M::DOUBLE_EDGE,
    M::HYPER_BEAM,
    M::THUNDERBOLT,
    M::THUNDER,
    M::SWIFT,
    M::FLASH,
    M::THUNDER_WAVE,
];

const GYARADOS_TM: &[M] = &[
    M::BODY_SLAM,
    M::TAKE_DOWN,
    M::DOUBLE_EDGE,
    M::HYPER_BEAM,
    M::SURF,
    M::ICE_BEAM,
    M::BLIZZARD,
    M::THUNDERBOLT,
    M::THUNDER,
    M::STRENGTH,
];

pub static LEARN: LearnData = LearnData {
    max_species: 151,
    entries: &[
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::GROWL),
                (9, M::THUNDER_WAVE),
                (16, M::QUICK_ATTACK),
                (26, M::SWIFT),
                (33, M::AGILITY),
                (43, M::THUNDER),
            ])
            .machines(PIKACHU_TM),
        LearnInfo::new(S::RAICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::GROWL), (1, M::THUNDER_WAVE)])
            .machines(RAICHU_TM),
        LearnInfo::new(S::FARFETCHD, 0)
            .levels(&[
                (1, M::PECK),
                (1, M::SAND_ATTACK),
                (7, M::LEER),
                (15, M::FURY_ATTACK),
                (23, M::SWORDS_DANCE),
                (31, M::AGILITY),
                (39, M::SLASH),
            ])
            .machines(&[M::SWORDS_DANCE, M::CUT, M::FLY, M::BODY_SLAM, M::TAKE_DOWN, M::SWIFT]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[
                (1, M::BITE),
                (1, M::DRAGON_RAGE),
                (1, M::LEER),
                (1, M::HYDRO_PUMP),
                (20, M::BITE),
                (25, M::DRAGON_RAGE),
                (32, M::LEER),
                (41, M::HYDRO_PUMP),
                (52, M::HYPER_BEAM),
            ])
            .machines(GYARADOS_TM),
        LearnInfo::new(S::LAPRAS, 0)
            .levels(&[
                (1, M::WATER_GUN),
                (1, M::GROWL),
                (16, M::SING),
                (20, M::MIST),
                (25, M::BODY_SLAM),
                (31, M::CONFUSE_RAY),
                (38, M::ICE_BEAM),
                (46, M::HYDRO_PUMP),
            ])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::PSYCHIC, M::THUNDERBOLT, M::STRENGTH]),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::SAND_ATTACK),
                (27, M::QUICK_ATTACK),
                (31, M::TAIL_WHIP),
                (37, M::BITE),
                (45, M::TAKE_DOWN),
            ])
            .machines(&[M::BODY_SLAM, M::TAKE_DOWN, M::DOUBLE_EDGE, M::SWIFT]),
        LearnInfo::new(S::VAPOREON, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::SAND_ATTACK),
                (1, M::QUICK_ATTACK),
                (1, M::WATER_GUN),
                (27, M::QUICK_ATTACK),
                (31, M::WATER_GUN),
                (37, M::TAIL_WHIP),
                (40, M::BITE),
                (42, M::ACID_ARMOR),
                (44, M::HAZE),
                (48, M::MIST),
                (54, M::HYDRO_PUMP),
            ])
            .machines(&[M::BODY_SLAM, M::TAKE_DOWN, M::DOUBLE_EDGE, M::HYPER_BEAM, M::SURF, M::ICE_BEAM, M::BLIZZARD]),
    ],
};

pub static SOURCE_RB: LearnSourceTable<Gen1> = LearnSourceTable {
    rules: Gen1,
    environment: LearnEnvironment::RB,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: &[],
};

pub static SOURCE_YW: LearnSourceTable<Gen1> = LearnSourceTable {
    rules: Gen1,
    environment: LearnEnvironment::YW,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_RB: &[EncounterSlot] = &[
    // Viridian Forest
    EncounterSlot::new(S::PIKACHU, 3, 5).at(51),
    EncounterSlot::new(S::MAGIKARP, 5, 5).at(12),
];

pub static SLOTS_YW: &[EncounterSlot] = &[
    EncounterSlot::new(S::MAGIKARP, 5, 5).at(12),
    EncounterSlot::new(S::FARFETCHD, 7, 7).at(21),
];

/// Game Corner, Silph Co. and Celadon Mansion
pub static GB_GIFTS: &[EncounterStatic] = &[
    EncounterStatic::new(S::LAPRAS, 15).at(30),
    EncounterStatic::new(S::EEVEE, 25).at(27),
    EncounterStatic::new(S::MAGIKARP, 5).at(16),
];

/// Vermilion City, Spearow for "DUX"
pub static TRADES_GB: &[EncounterTrade] = &[EncounterTrade::new(S::FARFETCHD, 15)];
