//! Gold/Silver/Crystal.

use crate::encounters::{EncounterSlot, EncounterStatic};
use crate::game::LearnEnvironment;
use crate::learn::generations::Gen2;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

/// Goldenrod Game Corner move tutor, Crystal only
pub const CRYSTAL_TUTORS: &[M] = &[M::FLAMETHROWER, M::THUNDERBOLT, M::ICE_BEAM];

const ELECTRIC_TM: &[M] = &[
    M::HEADBUTT,
    M::CURSE,
    M::ROLLOUT,
    M::IRON_TAIL,
    M::THUNDER,
    M::SWIFT,
    M::FLASH,
    M::DEFENSE_CURL,
    M::BODY_SLAM,
];

const MARILL_TM: &[M] = &[
    M::HEADBUTT,
    M::CURSE,
    M::ROLLOUT,
    M::IRON_TAIL,
    M::SURF,
    M::ICE_BEAM,
    M::BLIZZARD,
    M::STRENGTH,
    M::WATERFALL,
    M::SWIFT,
    M::DEFENSE_CURL,
];

const WATER_TM: &[M] = &[
    M::CURSE,
    M::SURF,
    M::ICE_BEAM,
    M::BLIZZARD,
    M::HYPER_BEAM,
    M::THUNDER,
    M::STRENGTH,
    M::WATERFALL,
    M::BODY_SLAM,
];

pub static LEARN: LearnData = LearnData {
    max_species: 251,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::CHARM),
                (6, M::TAIL_WHIP),
                (8, M::THUNDER_WAVE),
                (11, M::SWEET_KISS),
            ])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE])
            .machines(ELECTRIC_TM)
            .tutors(&[M::THUNDERBOLT]),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::GROWL),
                (6, M::TAIL_WHIP),
                (8, M::THUNDER_WAVE),
                (11, M::QUICK_ATTACK),
                (26, M::SWIFT),
                (33, M::AGILITY),
                (43, M::THUNDER),
            ])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE])
            .machines(ELECTRIC_TM)
            .tutors(&[M::THUNDERBOLT])
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .tutors(&[M::THUNDERBOLT])
            .unhatchable(),
        LearnInfo::new(S::FARFETCHD, 0)
            .levels(&[
                (1, M::PECK),
                (7, M::SAND_ATTACK),
                (13, M::LEER),
                (19, M::FURY_ATTACK),
                (25, M::SWORDS_DANCE),
                (31, M::AGILITY),
                (37, M::SLASH),
            ])
            .eggs(&[M::FORESIGHT, M::MIRROR_MOVE])
            .machines(&[M::SWORDS_DANCE, M::CUT, M::FLY, M::HEADBUTT, M::CURSE, M::SWIFT]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (30, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[
                (1, M::BITE),
                (20, M::BITE),
                (25, M::DRAGON_RAGE),
                (30, M::LEER),
                (35, M::TAKE_DOWN),
                (40, M::HYDRO_PUMP),
                (50, M::HYPER_BEAM),
            ])
            .machines(WATER_TM)
            .tutors(&[M::FLAMETHROWER, M::THUNDERBOLT, M::ICE_BEAM])
            .unhatchable(),
        LearnInfo::new(S::LAPRAS, 0)
            .levels(&[
                (1, M::WATER_GUN),
                (1, M::GROWL),
                (1, M::SING),
                (8, M::MIST),
                (15, M::BODY_SLAM),
                (22, M::CONFUSE_RAY),
                (36, M::ICE_BEAM),
                (43, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AURORA_BEAM, M::FORESIGHT])
            .machines(WATER_TM)
            .tutors(&[M::THUNDERBOLT, M::ICE_BEAM]),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (8, M::SAND_ATTACK),
                (16, M::GROWL),
                (23, M::QUICK_ATTACK),
                (30, M::BITE),
                (42, M::TAKE_DOWN),
            ])
            .eggs(&[M::CHARM, M::FLAIL])
            .machines(&[M::HEADBUTT, M::CURSE, M::IRON_TAIL, M::SWIFT, M::BODY_SLAM]),
        LearnInfo::new(S::ESPEON, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (8, M::SAND_ATTACK),
                (16, M::CONFUSION),
                (23, M::QUICK_ATTACK),
                (30, M::SWIFT),
                (36, M::PSYBEAM),
                (42, M::PSYCH_UP),
                (47, M::PSYCHIC),
                (52, M::MORNING_SUN),
            ])
            .machines(&[M::HEADBUTT, M::CURSE, M::IRON_TAIL, M::SWIFT, M::BODY_SLAM, M::PSYCHIC, M::HYPER_BEAM])
            .unhatchable(),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (3, M::DEFENSE_CURL),
                (6, M::TAIL_WHIP),
                (10, M::WATER_GUN),
                (15, M::ROLLOUT),
                (21, M::BUBBLE_BEAM),
                (28, M::DOUBLE_EDGE),
                (36, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AMNESIA, M::PRESENT, M::FORESIGHT])
            .machines(MARILL_TM)
            .tutors(&[M::ICE_BEAM]),
        LearnInfo::new(S::AZUMARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::DEFENSE_CURL),
                (1, M::TAIL_WHIP),
                (1, M::WATER_GUN),
                (15, M::ROLLOUT),
                (25, M::BUBBLE_BEAM),
                (36, M::DOUBLE_EDGE),
                (54, M::HYDRO_PUMP),
            ])
            .machines(MARILL_TM)
            .tutors(&[M::ICE_BEAM])
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
        LearnInfo::new(S::HO_OH, 0)
            .levels(&[
                (1, M::WHIRLWIND),
                (22, M::GUST),
                (33, M::RECOVER),
                (44, M::FIRE_BLAST),
                (55, M::SUNNY_DAY),
                (66, M::SWIFT),
                (77, M::SACRED_FIRE),
                (88, M::ANCIENT_POWER),
            ])
            .machines(&[M::CURSE, M::SUNNY_DAY, M::HYPER_BEAM, M::THUNDER, M::FIRE_BLAST, M::FLY, M::STRENGTH])
            .tutors(&[M::FLAMETHROWER, M::THUNDERBOLT])
            .unhatchable(),
    ],
};

pub static SOURCE_GS: LearnSourceTable<Gen2> = LearnSourceTable {
    rules: Gen2,
    environment: LearnEnvironment::GS,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: &[],
};

pub static SOURCE_C: LearnSourceTable<Gen2> = LearnSourceTable {
    rules: Gen2,
    environment: LearnEnvironment::C,
    data: &LEARN,
    special_tutors: CRYSTAL_TUTORS,
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_GS: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 4, 6).at(31),
    EncounterSlot::new(S::MAGIKARP, 10, 20).at(43),
    EncounterSlot::new(S::MARILL, 13, 15).at(44),
    EncounterSlot::new(S::SMEARGLE, 8, 11).at(38),
];

pub static SLOTS_C: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 4, 6).at(31),
    EncounterSlot::new(S::MAGIKARP, 10, 20).at(43),
    EncounterSlot::new(S::MARILL, 13, 15).at(44),
];

pub static STATICS_GS: &[EncounterStatic] = &[
    // Tin Tower
    EncounterStatic::new(S::HO_OH, 70).at(23),
    // Union Cave, Fridays
    EncounterStatic::new(S::LAPRAS, 20).at(32),
    // Lake of Rage
    EncounterStatic::new(S::GYARADOS, 30).at(27),
];

pub static STATICS_C: &[EncounterStatic] = &[
    EncounterStatic::new(S::HO_OH, 60).at(23),
    EncounterStatic::new(S::LAPRAS, 20).at(32),
    EncounterStatic::new(S::GYARADOS, 30).at(27),
];

/// Bill's Eevee
pub static GB_GIFTS: &[EncounterStatic] = &[EncounterStatic::new(S::EEVEE, 20).at(4)];
