//! Black/White/Black 2/White 2.

use super::TYPE_TUTORS_567;
use crate::encounters::{EncounterGift, EncounterSlot, EncounterTrade};
use crate::game::{GameVersion, LearnEnvironment};
use crate::learn::generations::Gen5;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

pub const TUTORS_B2W2: &[M] = &[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM, M::AQUA_TAIL];

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::FLASH, M::ROCK_SMASH, M::ROUND];
const ELECTRIC_TUTOR: &[M] = &[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM];
const MARILL_TM: &[M] = &[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::STRENGTH, M::WATERFALL, M::DIVE, M::ROUND];

pub static LEARN: LearnData = LearnData {
    max_species: 649,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::CHARM),
                (5, M::TAIL_WHIP),
                (10, M::SWEET_KISS),
                (13, M::THUNDER_WAVE),
            ])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE, M::WISH, M::BODY_SLAM])
            .machines(ELECTRIC_TM)
            .tutors(ELECTRIC_TUTOR),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::GROWL),
                (5, M::TAIL_WHIP),
                (10, M::THUNDER_WAVE),
                (13, M::QUICK_ATTACK),
                (29, M::THUNDERBOLT),
                (34, M::AGILITY),
                (37, M::DISCHARGE),
                (50, M::THUNDER),
            ])
            .machines(ELECTRIC_TM)
            .tutors(ELECTRIC_TUTOR)
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .tutors(ELECTRIC_TUTOR)
            .unhatchable(),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (30, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[(1, M::BITE), (20, M::BITE), (23, M::DRAGON_RAGE), (35, M::AQUA_TAIL), (44, M::HYDRO_PUMP)])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::HYPER_BEAM, M::THUNDERBOLT, M::WATERFALL])
            .tutors(&[M::AQUA_TAIL])
            .unhatchable(),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (8, M::SAND_ATTACK),
                (15, M::GROWL),
                (22, M::QUICK_ATTACK),
                (29, M::BITE),
                (36, M::TAKE_DOWN),
            ])
            .eggs(&[M::CHARM, M::FLAIL, M::WISH, M::CURSE, M::ENDEAVOR])
            .machines(&[M::SHADOW_BALL, M::ROUND])
            .tutors(&[M::IRON_TAIL, M::HELPING_HAND]),
        LearnInfo::new(S::AZURILL, 0)
            .levels(&[(1, M::SPLASH), (2, M::CHARM), (7, M::TAIL_WHIP), (10, M::WATER_GUN)])
            .eggs(&[M::ENCORE, M::SING, M::BODY_SLAM])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL]),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (2, M::DEFENSE_CURL),
                (7, M::TAIL_WHIP),
                (10, M::WATER_GUN),
                (13, M::ROLLOUT),
                (20, M::BUBBLE_BEAM),
                (23, M::AQUA_TAIL),
                (28, M::DOUBLE_EDGE),
                (37, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AMNESIA, M::PRESENT, M::FORESIGHT, M::SING, M::BODY_SLAM, M::AQUA_JET])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL]),
        LearnInfo::new(S::AZUMARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::DEFENSE_CURL),
                (1, M::TAIL_WHIP),
                (1, M::WATER_GUN),
                (13, M::ROLLOUT),
                (20, M::BUBBLE_BEAM),
                (25, M::AQUA_TAIL),
                (32, M::DOUBLE_EDGE),
                (47, M::HYDRO_PUMP),
            ])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL])
            .unhatchable(),
        LearnInfo::new(S::ROTOM, 0)
            .forms(6)
            .levels(&[
                (1, M::TRICK),
                (1, M::ASTONISH),
                (1, M::THUNDER_WAVE),
                (1, M::THUNDER_SHOCK),
                (8, M::CONFUSE_RAY),
                (36, M::OMINOUS_WIND),
                (43, M::DISCHARGE),
            ])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::FLASH, M::ROUND])
            .tutors(&[M::ELECTROWEB, M::SIGNAL_BEAM]),
        LearnInfo::new(S::KELDEO, 0)
            .forms(2)
            .levels(&[
                (1, M::AQUA_JET),
                (1, M::LEER),
                (7, M::DOUBLE_KICK),
                (13, M::BUBBLE_BEAM),
                (43, M::SACRED_SWORD),
                (49, M::HYDRO_PUMP),
            ])
            .machines(&[M::SURF, M::WATERFALL, M::ROCK_SMASH, M::ROUND])
            .tutors(&[M::AQUA_TAIL, M::HELPING_HAND])
            .unhatchable(),
        LearnInfo::new(S::MELOETTA, 0)
            .forms(2)
            .levels(&[(1, M::ROUND), (1, M::QUICK_ATTACK), (6, M::CONFUSION), (11, M::SING), (78, M::PSYCHIC)])
            .machines(&[M::PSYCHIC, M::SHADOW_BALL, M::THUNDERBOLT, M::ROUND])
            .tutors(&[M::HELPING_HAND, M::SIGNAL_BEAM])
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
            .levels(&[(1, M::WHIRLWIND), (1, M::GUST), (29, M::RECOVER), (43, M::FIRE_BLAST), (71, M::SACRED_FIRE)])
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::THUNDERBOLT, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .unhatchable(),
    ],
};

pub static SOURCE_BW: LearnSourceTable<Gen5> = LearnSourceTable {
    rules: Gen5,
    environment: LearnEnvironment::BW,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: TYPE_TUTORS_567,
};

pub static SOURCE_B2W2: LearnSourceTable<Gen5> = LearnSourceTable {
    rules: Gen5,
    environment: LearnEnvironment::B2W2,
    data: &LEARN,
    special_tutors: TUTORS_B2W2,
    type_tutors: TYPE_TUTORS_567,
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_BW: &[EncounterSlot] = &[
    EncounterSlot::new(S::AZURILL, 40, 45).at(40),
    EncounterSlot::new(S::MARILL, 35, 40).at(40),
    EncounterSlot::new(S::MAGIKARP, 10, 25).at(8),
];

/// Language-less Japanese trade data only ever came out of Black/White
pub static TRADES_BW: &[EncounterTrade] = &[EncounterTrade::new(S::MAGIKARP, 20)];

pub static GIFTS: &[EncounterGift] = &[
    EncounterGift::new(1, "Keldeo Event", 5, S::KELDEO, 15)
        .versions(&[GameVersion::B2, GameVersion::W2])
        .moves(&[M::AQUA_JET, M::LEER, M::DOUBLE_KICK, M::BUBBLE_BEAM]),
    EncounterGift::new(2, "Meloetta Event", 5, S::MELOETTA, 15)
        .moves(&[M::ROUND, M::QUICK_ATTACK, M::CONFUSION, M::SING]),
    EncounterGift::new(3, "Cheren's Pikachu", 5, S::PIKACHU, 30)
        .moves(&[M::THUNDERBOLT, M::QUICK_ATTACK, M::VOLT_TACKLE, M::ELECTROWEB]),
];
