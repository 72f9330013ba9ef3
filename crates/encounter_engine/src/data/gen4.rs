//! Diamond/Pearl/Platinum/HeartGold/SoulSilver.

use crate::encounters::{EncounterGift, EncounterSlot, EncounterStatic};
use crate::game::{GameVersion, LearnEnvironment};
use crate::learn::generations::Gen4;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

const TUTORS_PT: &[M] = &[M::HELPING_HAND, M::IRON_TAIL, M::SIGNAL_BEAM, M::TRICK, M::OMINOUS_WIND, M::AQUA_TAIL];
const TUTORS_HGSS: &[M] = &[M::HELPING_HAND, M::IRON_TAIL, M::SIGNAL_BEAM, M::TRICK, M::AQUA_TAIL, M::HEADBUTT];

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::FLASH, M::ROCK_SMASH, M::DISCHARGE];
const MARILL_TM: &[M] = &[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::STRENGTH, M::WATERFALL, M::ROCK_SMASH, M::DIVE];

pub static LEARN: LearnData = LearnData {
    max_species: 493,
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
            .tutors(&[M::HELPING_HAND, M::IRON_TAIL, M::SIGNAL_BEAM, M::HEADBUTT]),
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
            .tutors(&[M::HELPING_HAND, M::IRON_TAIL, M::SIGNAL_BEAM, M::HEADBUTT])
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .tutors(&[M::HELPING_HAND, M::IRON_TAIL, M::SIGNAL_BEAM, M::HEADBUTT])
            .unhatchable(),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (30, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[
                (1, M::BITE),
                (20, M::BITE),
                (23, M::DRAGON_RAGE),
                (26, M::LEER),
                (35, M::AQUA_TAIL),
                (41, M::HYDRO_PUMP),
                (47, M::HYPER_BEAM),
            ])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::HYPER_BEAM, M::THUNDERBOLT, M::THUNDER, M::WATERFALL])
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
            .machines(&[M::IRON_TAIL, M::SHADOW_BALL])
            .tutors(&[M::HELPING_HAND, M::IRON_TAIL, M::HEADBUTT]),
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
                (15, M::ROLLOUT),
                (20, M::BUBBLE_BEAM),
                (27, M::AQUA_TAIL),
                (32, M::DOUBLE_EDGE),
                (37, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AMNESIA, M::PRESENT, M::FORESIGHT, M::SING, M::BODY_SLAM])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL]),
        LearnInfo::new(S::AZUMARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::DEFENSE_CURL),
                (1, M::TAIL_WHIP),
                (1, M::WATER_GUN),
                (15, M::ROLLOUT),
                (20, M::BUBBLE_BEAM),
                (27, M::AQUA_TAIL),
                (42, M::DOUBLE_EDGE),
                (47, M::HYDRO_PUMP),
            ])
            .machines(MARILL_TM)
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL])
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
                (23, M::GUST),
                (29, M::RECOVER),
                (43, M::FIRE_BLAST),
                (57, M::SUNNY_DAY),
                (71, M::SACRED_FIRE),
                (85, M::ANCIENT_POWER),
            ])
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::THUNDERBOLT, M::THUNDER, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
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
                (57, M::DISCHARGE),
            ])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::FLASH])
            .tutors(&[M::TRICK, M::OMINOUS_WIND, M::SIGNAL_BEAM]),
    ],
};

pub static SOURCE_DPPT: LearnSourceTable<Gen4> = LearnSourceTable {
    rules: Gen4,
    environment: LearnEnvironment::DPPt,
    data: &LEARN,
    special_tutors: TUTORS_PT,
    type_tutors: &[],
};

pub static SOURCE_HGSS: LearnSourceTable<Gen4> = LearnSourceTable {
    rules: Gen4,
    environment: LearnEnvironment::HGSS,
    data: &LEARN,
    special_tutors: TUTORS_HGSS,
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_DPPT: &[EncounterSlot] = &[
    // Trophy Garden
    EncounterSlot::new(S::PIKACHU, 16, 16).at(68),
    EncounterSlot::new(S::AZURILL, 16, 16).at(68),
    EncounterSlot::new(S::MAGIKARP, 10, 20).at(22),
];

pub static SLOTS_HGSS: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 4, 6).at(149),
    EncounterSlot::new(S::MARILL, 13, 15).at(197),
    EncounterSlot::new(S::SMEARGLE, 20, 20).at(209),
    EncounterSlot::new(S::MAGIKARP, 10, 20).at(169),
];

pub static STATICS_DPPT: &[EncounterStatic] = &[
    // Old Chateau
    EncounterStatic::new(S::ROTOM, 20).at(62),
];

pub static STATICS_HGSS: &[EncounterStatic] = &[
    // Bell Tower
    EncounterStatic::new(S::HO_OH, 45).at(205),
    // Lake of Rage
    EncounterStatic::new(S::GYARADOS, 30).at(177),
];

pub static GIFTS: &[EncounterGift] = &[
    EncounterGift::new(4, "Pokéwalker Pikachu", 4, S::PIKACHU, 30)
        .versions(&[GameVersion::HG, GameVersion::SS])
        .moves(&[M::THUNDERBOLT, M::VOLT_TACKLE, M::IRON_TAIL, M::QUICK_ATTACK]),
    EncounterGift::new(5, "Sinnoh Ho-Oh", 4, S::HO_OH, 45)
        .moves(&[M::SACRED_FIRE, M::RECOVER, M::ANCIENT_POWER, M::SUNNY_DAY]),
];
