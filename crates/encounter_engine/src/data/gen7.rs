//! Sun/Moon/Ultra Sun/Ultra Moon and Let's Go.

use super::TYPE_TUTORS_567;
use crate::encounters::{EncounterGift, EncounterSlot, EncounterStatic, StaticFlags};
use crate::game::{GameVersion, LearnEnvironment};
use crate::learn::generations::Gen7;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

const TUTORS_USUM: &[M] = &[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM, M::AQUA_TAIL, M::DRACO_METEOR];

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ROUND];

const GUMSHOOS_LEVELS: &[(u8, M)] = &[
    (1, M::TACKLE),
    (1, M::LEER),
    (3, M::PURSUIT),
    (7, M::SAND_ATTACK),
    (13, M::BITE),
    (19, M::HYPER_FANG),
    (23, M::CRUNCH),
    (28, M::SUPER_FANG),
    (39, M::TAUNT),
];

pub static LEARN: LearnData = LearnData {
    max_species: 809,
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
            .forms(2)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::THUNDERBOLT)])
            .machines(ELECTRIC_TM)
            .tutors(&[M::IRON_TAIL, M::HELPING_HAND, M::ELECTROWEB, M::SIGNAL_BEAM])
            .unhatchable(),
        LearnInfo::new(S::RAICHU, 1)
            .forms(2)
            .levels(&[(1, M::THUNDER_SHOCK), (1, M::TAIL_WHIP), (1, M::QUICK_ATTACK), (1, M::PSYCHIC)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::PSYCHIC, M::SHADOW_BALL, M::ROUND])
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
            .machines(&[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::WATERFALL, M::ROUND])
            .tutors(&[M::HELPING_HAND, M::AQUA_TAIL]),
        LearnInfo::new(S::YUNGOOS, 0)
            .levels(&[
                (1, M::TACKLE),
                (3, M::LEER),
                (7, M::PURSUIT),
                (10, M::SAND_ATTACK),
                (13, M::BITE),
                (19, M::HYPER_FANG),
                (23, M::CRUNCH),
                (28, M::SUPER_FANG),
            ])
            .eggs(&[M::REVERSAL, M::ENDEAVOR])
            .machines(&[M::SHADOW_BALL, M::ROUND]),
        LearnInfo::new(S::GUMSHOOS, 0)
            .forms(2)
            .levels(GUMSHOOS_LEVELS)
            .machines(&[M::SHADOW_BALL, M::ROUND, M::THUNDERBOLT])
            .unhatchable(),
        // Totem-sized; only ever met in Verdant Cavern
        LearnInfo::new(S::GUMSHOOS, 1)
            .forms(2)
            .levels(GUMSHOOS_LEVELS)
            .machines(&[M::SHADOW_BALL, M::ROUND, M::THUNDERBOLT])
            .unhatchable(),
        LearnInfo::new(S::ROTOM, 0)
            .forms(6)
            .levels(&[(1, M::TRICK), (1, M::ASTONISH), (1, M::THUNDER_WAVE), (1, M::THUNDER_SHOCK), (43, M::DISCHARGE)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ROUND])
            .tutors(&[M::ELECTROWEB, M::SIGNAL_BEAM]),
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
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .unhatchable(),
    ],
};

/// Let's Go only keeps the Kanto 151 and their own move pool
pub static LEARN_GG: LearnData = LearnData {
    max_species: 809,
    entries: &[
        LearnInfo::new(S::PIKACHU, 0)
            .levels(&[
                (1, M::THUNDER_SHOCK),
                (1, M::TAIL_WHIP),
                (5, M::GROWL),
                (10, M::QUICK_ATTACK),
                (15, M::THUNDER_WAVE),
                (21, M::AGILITY),
                (26, M::THUNDERBOLT),
                (31, M::THUNDER),
            ])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::BODY_SLAM, M::FLY, M::SURF]),
        LearnInfo::new(S::EEVEE, 0)
            .levels(&[(1, M::TACKLE), (1, M::TAIL_WHIP), (5, M::SAND_ATTACK), (10, M::QUICK_ATTACK), (15, M::BITE)])
            .machines(&[M::BODY_SLAM, M::SHADOW_BALL]),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (30, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[(1, M::BITE), (20, M::BITE), (35, M::HYDRO_PUMP)])
            .machines(&[M::SURF, M::ICE_BEAM, M::HYPER_BEAM]),
        LearnInfo::new(S::LAPRAS, 0)
            .levels(&[(1, M::WATER_GUN), (1, M::GROWL), (15, M::BODY_SLAM), (30, M::ICE_BEAM)])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD]),
    ],
};

pub static SOURCE_SM: LearnSourceTable<Gen7> = LearnSourceTable {
    rules: Gen7,
    environment: LearnEnvironment::SM,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: TYPE_TUTORS_567,
};

pub static SOURCE_USUM: LearnSourceTable<Gen7> = LearnSourceTable {
    rules: Gen7,
    environment: LearnEnvironment::USUM,
    data: &LEARN,
    special_tutors: TUTORS_USUM,
    type_tutors: TYPE_TUTORS_567,
};

pub static SOURCE_GG: LearnSourceTable<Gen7> = LearnSourceTable {
    rules: Gen7,
    environment: LearnEnvironment::GG,
    data: &LEARN_GG,
    special_tutors: &[],
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_SM: &[EncounterSlot] = &[
    EncounterSlot::new(S::PICHU, 6, 9).at(22),
    EncounterSlot::new(S::YUNGOOS, 2, 3).at(6),
    EncounterSlot::new(S::MAGIKARP, 10, 13).at(14),
    EncounterSlot::new(S::SMEARGLE, 11, 14).at(30),
];

pub static SLOTS_GG: &[EncounterSlot] = &[
    // Viridian Forest
    EncounterSlot::new(S::PIKACHU, 3, 5).at(7),
    EncounterSlot::new(S::EEVEE, 3, 5).at(5),
    EncounterSlot::new(S::MAGIKARP, 3, 5).at(12),
];

pub static STATICS_SM: &[EncounterStatic] = &[
    // Verdant Cavern trial
    EncounterStatic::new(S::GUMSHOOS, 12)
        .form(1)
        .at(46)
        .moves(&[M::LEER, M::PURSUIT, M::SAND_ATTACK, M::BITE])
        .flags(StaticFlags::TOTEM),
];

pub static STATICS_USUM: &[EncounterStatic] = &[
    // Ultra Space Wilds
    EncounterStatic::new(S::HO_OH, 60)
        .at(222)
        .relearn(&[M::SACRED_FIRE]),
];

pub static GIFTS: &[EncounterGift] = &[
    EncounterGift::new(1, "Ash's Pikachu", 7, S::PIKACHU, 10)
        .versions(&[GameVersion::US, GameVersion::UM, GameVersion::SN, GameVersion::MN])
        .moves(&[M::THUNDERBOLT, M::QUICK_ATTACK, M::IRON_TAIL, M::VOLT_TACKLE]),
    EncounterGift::new(2, "Alolan Raichu Event", 7, S::RAICHU, 50)
        .form(1)
        .versions(&[GameVersion::SN, GameVersion::MN])
        .moves(&[M::PSYCHIC, M::THUNDERBOLT, M::QUICK_ATTACK, M::SURF])
        .relearn(&[M::SURF]),
];
