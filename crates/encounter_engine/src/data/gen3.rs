//! Ruby/Sapphire/Emerald/FireRed/LeafGreen.

use crate::encounters::{EncounterGift, EncounterSlot, EncounterStatic, EncounterTrade, GiftFlags};
use crate::game::{GameVersion, LearnEnvironment};
use crate::learn::generations::Gen3;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

pub const TUTORS_E: &[M] = &[
    M::BODY_SLAM,
    M::DOUBLE_EDGE,
    M::THUNDER_WAVE,
    M::DYNAMIC_PUNCH,
    M::ROLLOUT,
    M::DEFENSE_CURL,
    M::SWIFT,
];

pub const TUTORS_FRLG: &[M] = &[
    M::SWORDS_DANCE,
    M::BODY_SLAM,
    M::DOUBLE_EDGE,
    M::THUNDER_WAVE,
    M::FRENZY_PLANT,
    M::BLAST_BURN,
    M::HYDRO_CANNON,
];

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::IRON_TAIL, M::FLASH, M::ROCK_SMASH, M::SHADOW_BALL];
const ELECTRIC_TUTOR: &[M] = &[
    M::BODY_SLAM,
    M::DOUBLE_EDGE,
    M::THUNDER_WAVE,
    M::DYNAMIC_PUNCH,
    M::ROLLOUT,
    M::DEFENSE_CURL,
    M::SWIFT,
];

const MARILL_TM: &[M] = &[
    M::ICE_BEAM,
    M::BLIZZARD,
    M::SURF,
    M::STRENGTH,
    M::WATERFALL,
    M::DIVE,
    M::ROCK_SMASH,
    M::IRON_TAIL,
];
const MARILL_TUTOR: &[M] = &[M::BODY_SLAM, M::DOUBLE_EDGE, M::DYNAMIC_PUNCH, M::ROLLOUT, M::DEFENSE_CURL, M::SWIFT];

pub static LEARN: LearnData = LearnData {
    max_species: 386,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::CHARM),
                (6, M::TAIL_WHIP),
                (8, M::THUNDER_WAVE),
                (11, M::SWEET_KISS),
            ])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE, M::WISH])
            .machines(ELECTRIC_TM)
            .tutors(ELECTRIC_TUTOR),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::GROWL),
                (6, M::TAIL_WHIP),
                (8, M::THUNDER_WAVE),
                (11, M::QUICK_ATTACK),
                (26, M::THUNDERBOLT),
                (33, M::AGILITY),
                (41, M::THUNDER),
            ])
            .machines(ELECTRIC_TM)
            .tutors(ELECTRIC_TUTOR)
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .tutors(ELECTRIC_TUTOR)
            .unhatchable(),
        LearnInfo::new(S::FARFETCHD, 0)
            .levels(&[
                (1, M::PECK),
                (6, M::SAND_ATTACK),
                (11, M::LEER),
                (16, M::FURY_ATTACK),
                (26, M::SWORDS_DANCE),
                (31, M::AGILITY),
                (36, M::SLASH),
            ])
            .eggs(&[M::FORESIGHT, M::MIRROR_MOVE, M::CURSE])
            .machines(&[M::CUT, M::FLY, M::ROCK_SMASH])
            .tutors(&[M::SWORDS_DANCE, M::BODY_SLAM, M::DOUBLE_EDGE, M::SWIFT]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (30, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[
                (1, M::BITE),
                (20, M::BITE),
                (25, M::DRAGON_RAGE),
                (30, M::LEER),
                (40, M::HYDRO_PUMP),
                (55, M::HYPER_BEAM),
            ])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::HYPER_BEAM, M::THUNDERBOLT, M::THUNDER, M::WATERFALL])
            .tutors(&[M::BODY_SLAM, M::DOUBLE_EDGE, M::THUNDER_WAVE])
            .unhatchable(),
        LearnInfo::new(S::LAPRAS, 0)
            .levels(&[
                (1, M::WATER_GUN),
                (1, M::GROWL),
                (1, M::SING),
                (7, M::MIST),
                (13, M::BODY_SLAM),
                (19, M::CONFUSE_RAY),
                (31, M::ICE_BEAM),
                (43, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AURORA_BEAM, M::FORESIGHT, M::CURSE])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::THUNDERBOLT, M::PSYCHIC, M::DIVE])
            .tutors(&[M::BODY_SLAM, M::DOUBLE_EDGE]),
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
            .eggs(&[M::CHARM, M::FLAIL, M::WISH, M::CURSE])
            .machines(&[M::IRON_TAIL, M::SHADOW_BALL])
            .tutors(&[M::BODY_SLAM, M::DOUBLE_EDGE, M::SWIFT]),
        LearnInfo::new(S::AZURILL, 0)
            .levels(&[(1, M::SPLASH), (2, M::CHARM), (5, M::TAIL_WHIP), (10, M::WATER_GUN)])
            .eggs(&[M::ENCORE, M::SING])
            .machines(MARILL_TM)
            .tutors(MARILL_TUTOR),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (3, M::DEFENSE_CURL),
                (6, M::TAIL_WHIP),
                (10, M::WATER_GUN),
                (15, M::ROLLOUT),
                (21, M::BUBBLE_BEAM),
                (28, M::DOUBLE_EDGE),
                (45, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AMNESIA, M::PRESENT, M::FORESIGHT])
            .machines(MARILL_TM)
            .tutors(MARILL_TUTOR),
        LearnInfo::new(S::AZUMARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::DEFENSE_CURL),
                (1, M::TAIL_WHIP),
                (1, M::WATER_GUN),
                (15, M::ROLLOUT),
                (24, M::BUBBLE_BEAM),
                (34, M::DOUBLE_EDGE),
                (57, M::HYDRO_PUMP),
            ])
            .machines(MARILL_TM)
            .tutors(MARILL_TUTOR)
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
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::THUNDERBOLT, M::THUNDER, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .tutors(&[M::DOUBLE_EDGE, M::SWIFT])
            .unhatchable(),
    ],
};

pub static SOURCE_RS: LearnSourceTable<Gen3> = LearnSourceTable {
    rules: Gen3,
    environment: LearnEnvironment::RS,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: &[],
};

pub static SOURCE_E: LearnSourceTable<Gen3> = LearnSourceTable {
    rules: Gen3,
    environment: LearnEnvironment::E,
    data: &LEARN,
    special_tutors: TUTORS_E,
    type_tutors: &[],
};

pub static SOURCE_FRLG: LearnSourceTable<Gen3> = LearnSourceTable {
    rules: Gen3,
    environment: LearnEnvironment::FRLG,
    data: &LEARN,
    special_tutors: TUTORS_FRLG,
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_RS: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 3, 5).at(44),
    EncounterSlot::new(S::AZURILL, 5, 5).at(17),
    EncounterSlot::new(S::MARILL, 5, 5).at(17),
    EncounterSlot::new(S::MAGIKARP, 5, 10).at(16),
];

pub static SLOTS_E: &[EncounterSlot] = &[
    // Artisan Cave
    EncounterSlot::new(S::SMEARGLE, 42, 48).at(100),
    EncounterSlot::new(S::AZURILL, 5, 5).at(17),
    EncounterSlot::new(S::MARILL, 5, 5).at(17),
    EncounterSlot::new(S::MAGIKARP, 5, 10).at(16),
];

pub static SLOTS_FRLG: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 3, 5).at(117),
    EncounterSlot::new(S::MAGIKARP, 5, 5).at(89),
    EncounterSlot::new(S::GYARADOS, 15, 25).at(89),
];

pub static STATICS_E: &[EncounterStatic] = &[
    // Navel Rock
    EncounterStatic::new(S::HO_OH, 70).at(211),
];

pub static STATICS_FRLG: &[EncounterStatic] = &[
    // Silph Co.
    EncounterStatic::new(S::LAPRAS, 25).at(88),
    // Celadon Mansion
    EncounterStatic::new(S::EEVEE, 25).at(87),
    // Navel Rock
    EncounterStatic::new(S::HO_OH, 70).at(211),
];

/// Vermilion City, Spearow for "CH'DING"
pub static TRADES_FRLG: &[EncounterTrade] = &[EncounterTrade::new(S::FARFETCHD, 5)];

pub static GIFTS: &[EncounterGift] = &[
    EncounterGift::new(1, "Aura Pikachu", 3, S::PIKACHU, 10)
        .moves(&[M::THUNDER_SHOCK, M::GROWL, M::TAIL_WHIP, M::THUNDER_WAVE]),
    EncounterGift::new(2, "Pokémon Channel Pichu", 3, S::PICHU, 5)
        .versions(&[GameVersion::R, GameVersion::S])
        .moves(&[M::THUNDER_SHOCK, M::CHARM, M::WISH]),
    EncounterGift::new(3, "Mystic Ticket Ho-Oh", 3, S::HO_OH, 70)
        .versions(&[GameVersion::E])
        .moves(&[M::SACRED_FIRE, M::SWIFT, M::SUNNY_DAY, M::FIRE_BLAST])
        .flags(GiftFlags::NOT_DISTRIBUTED),
];
