//! Sword/Shield, Legends: Arceus and Brilliant Diamond/Shining Pearl.

use crate::encounters::{EncounterSlot, SlotFlags};
use crate::game::LearnEnvironment;
use crate::learn::generations::Gen8;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::IRON_TAIL, M::ELECTROWEB, M::ROUND];

const SMEARGLE_LEVELS: &[(u8, M)] = &[
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
];

pub static LEARN_SWSH: LearnData = LearnData {
    max_species: 898,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::CHARM),
                (1, M::TAIL_WHIP),
                (1, M::NUZZLE),
                (1, M::SWEET_KISS),
                (4, M::THUNDER_WAVE),
            ])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE, M::WISH, M::VOLT_TACKLE])
            .machines(ELECTRIC_TM),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::GROWL),
                (1, M::TAIL_WHIP),
                (1, M::QUICK_ATTACK),
                (4, M::THUNDER_WAVE),
                (8, M::DOUBLE_KICK),
                (24, M::DISCHARGE),
                (36, M::THUNDERBOLT),
                (44, M::AGILITY),
                (48, M::THUNDER),
            ])
            .machines(ELECTRIC_TM)
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 0)
            .forms(2)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 1)
            .forms(2)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::PSYCHIC)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::PSYCHIC, M::SHADOW_BALL, M::ROUND])
            .unhatchable(),
        LearnInfo::new(S::FARFETCHD, 0)
            .forms(2)
            .levels(&[(1, M::PECK), (1, M::SAND_ATTACK), (10, M::FURY_ATTACK), (25, M::AIR_SLASH), (45, M::SWORDS_DANCE)])
            .eggs(&[M::FORESIGHT, M::MIRROR_MOVE, M::CURSE])
            .machines(&[M::FLY, M::SWORDS_DANCE, M::ROUND]),
        LearnInfo::new(S::FARFETCHD, 1)
            .forms(2)
            .levels(&[(1, M::PECK), (1, M::SAND_ATTACK), (15, M::ROCK_SMASH), (35, M::SLASH), (55, M::SACRED_SWORD)])
            .eggs(&[M::CURSE, M::FORESIGHT])
            .machines(&[M::SWORDS_DANCE, M::ROUND]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (25, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[(1, M::BITE), (1, M::TACKLE), (21, M::AQUA_TAIL), (36, M::CRUNCH), (48, M::HYDRO_PUMP)])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::HYPER_BEAM, M::THUNDERBOLT, M::WATERFALL])
            .unhatchable(),
        LearnInfo::new(S::LAPRAS, 0)
            .levels(&[(1, M::WATER_GUN), (1, M::GROWL), (5, M::SING), (10, M::MIST), (40, M::ICE_BEAM)])
            .eggs(&[M::CURSE, M::FORESIGHT])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::PSYCHIC, M::THUNDERBOLT]),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (1, M::GROWL),
                (5, M::SAND_ATTACK),
                (10, M::QUICK_ATTACK),
                (15, M::BITE),
                (30, M::TAKE_DOWN),
            ])
            .eggs(&[M::CHARM, M::FLAIL, M::WISH, M::CURSE])
            .machines(&[M::SHADOW_BALL, M::ROUND, M::IRON_TAIL]),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[(1, M::TACKLE), (1, M::WATER_GUN), (3, M::TAIL_WHIP), (6, M::DEFENSE_CURL), (9, M::ROLLOUT)])
            .eggs(&[M::AMNESIA, M::AQUA_JET, M::BODY_SLAM, M::ENCORE, M::PRESENT, M::SING])
            .machines(&[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::WATERFALL, M::ROUND]),
        LearnInfo::new(S::AZURILL, 0)
            .levels(&[(1, M::SPLASH), (1, M::WATER_GUN), (3, M::TAIL_WHIP), (6, M::CHARM)])
            .eggs(&[M::ENCORE, M::SING, M::BODY_SLAM])
            .machines(&[M::ICE_BEAM, M::SURF, M::ROUND]),
        LearnInfo::new(S::ROTOM, 0)
            .forms(6)
            .levels(&[(1, M::TRICK), (1, M::ASTONISH), (1, M::THUNDER_WAVE), (1, M::THUNDER_SHOCK), (35, M::DISCHARGE)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ROUND]),
        LearnInfo::new(S::SMEARGLE, 0).levels(SMEARGLE_LEVELS),
        LearnInfo::new(S::HO_OH, 0)
            .levels(&[(1, M::WHIRLWIND), (1, M::GUST), (27, M::RECOVER), (63, M::FIRE_BLAST), (72, M::SACRED_FIRE)])
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .unhatchable(),
    ],
};

pub static LEARN_PLA: LearnData = LearnData {
    max_species: 905,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[(1, M::QUICK_ATTACK), (1, M::THUNDER_SHOCK), (6, M::THUNDER_WAVE)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::IRON_TAIL]),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[(1, M::QUICK_ATTACK), (1, M::THUNDER_SHOCK), (6, M::THUNDER_WAVE), (23, M::THUNDERBOLT)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::IRON_TAIL]),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[(1, M::TACKLE), (1, M::QUICK_ATTACK), (11, M::BITE), (21, M::DOUBLE_EDGE)])
            .machines(&[M::SHADOW_BALL]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (1, M::TACKLE), (20, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[(1, M::BITE), (20, M::AQUA_TAIL), (36, M::HYDRO_PUMP)])
            .machines(&[M::ICE_BEAM, M::BLIZZARD, M::HYPER_BEAM]),
    ],
};

pub static LEARN_BDSP: LearnData = LearnData {
    max_species: 493,
    entries: &[
        LearnInfo::new(S::PICHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::CHARM), (5, M::TAIL_WHIP), (10, M::SWEET_KISS), (13, M::NUZZLE)])
            .eggs(&[M::REVERSAL, M::PRESENT, M::ENCORE, M::WISH, M::VOLT_TACKLE])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL]),
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::GROWL), (4, M::THUNDER_WAVE), (24, M::DISCHARGE), (36, M::THUNDERBOLT)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL])
            .unhatchable(),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (1, M::GROWL),
                (5, M::SAND_ATTACK),
                (10, M::QUICK_ATTACK),
                (15, M::BITE),
                (30, M::TAKE_DOWN),
            ])
            .eggs(&[M::CHARM, M::FLAIL, M::CURSE])
            .machines(&[M::SHADOW_BALL]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (25, M::FLAIL)]),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[(1, M::TACKLE), (1, M::WATER_GUN), (3, M::TAIL_WHIP), (6, M::DEFENSE_CURL), (9, M::ROLLOUT)])
            .eggs(&[M::AMNESIA, M::AQUA_JET, M::BODY_SLAM, M::ENCORE, M::PRESENT, M::SING])
            .machines(&[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::WATERFALL]),
        LearnInfo::new(S::ROTOM, 0)
            .forms(6)
            .levels(&[(1, M::TRICK), (1, M::ASTONISH), (1, M::THUNDER_WAVE), (1, M::THUNDER_SHOCK), (35, M::DISCHARGE)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL]),
        LearnInfo::new(S::SMEARGLE, 0).levels(SMEARGLE_LEVELS),
        LearnInfo::new(S::HO_OH, 0)
            .levels(&[(1, M::WHIRLWIND), (1, M::GUST), (27, M::RECOVER), (63, M::FIRE_BLAST), (72, M::SACRED_FIRE)])
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .unhatchable(),
    ],
};

pub static SOURCE_SWSH: LearnSourceTable<Gen8> = LearnSourceTable {
    rules: Gen8,
    environment: LearnEnvironment::SWSH,
    data: &LEARN_SWSH,
    special_tutors: &[],
    type_tutors: &[],
};

pub static SOURCE_PLA: LearnSourceTable<Gen8> = LearnSourceTable {
    rules: Gen8,
    environment: LearnEnvironment::PLA,
    data: &LEARN_PLA,
    special_tutors: &[],
    type_tutors: &[],
};

pub static SOURCE_BDSP: LearnSourceTable<Gen8> = LearnSourceTable {
    rules: Gen8,
    environment: LearnEnvironment::BDSP,
    data: &LEARN_BDSP,
    special_tutors: &[],
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_SWSH: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 15, 17).at(122),
    EncounterSlot::new(S::EEVEE, 10, 12).at(122),
    // Galarian form, Route 5
    EncounterSlot::new(S::FARFETCHD, 16, 18).form(1).at(134),
    EncounterSlot::new(S::MAGIKARP, 3, 5).at(118),
    EncounterSlot::new(S::LAPRAS, 28, 30).at(154),
];

pub static SLOTS_PLA: &[EncounterSlot] = &[
    EncounterSlot::new(S::PICHU, 4, 6).at(6),
    EncounterSlot::new(S::PIKACHU, 12, 14).at(6),
    EncounterSlot::new(S::EEVEE, 5, 7).at(6),
    EncounterSlot::new(S::MAGIKARP, 3, 5).at(8),
];

pub static SLOTS_BDSP: &[EncounterSlot] = &[
    // Trophy Garden
    EncounterSlot::new(S::PIKACHU, 16, 16).at(403),
    // Grand Underground hideaways
    EncounterSlot::new(S::EEVEE, 16, 20).at(508).flags(SlotFlags::UNDERGROUND),
    EncounterSlot::new(S::MARILL, 16, 20).at(508).flags(SlotFlags::UNDERGROUND),
    EncounterSlot::new(S::MAGIKARP, 10, 20).at(242),
];

/// Egg moves a Grand Underground wild creature can already know
pub fn underground_moves(species: S) -> &'static [M] {
    match species {
        S::EEVEE => &[M::WISH, M::CURSE, M::CHARM, M::FLAIL],
        S::MARILL => &[M::AQUA_JET, M::AMNESIA, M::PRESENT, M::BODY_SLAM],
        _ => &[],
    }
}
