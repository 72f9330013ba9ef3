//! Scarlet/Violet.

use crate::encounters::{EncounterGift, EncounterSlot, SlotFlags};
use crate::game::LearnEnvironment;
use crate::learn::generations::Gen9;
use crate::learn::{LearnData, LearnInfo, LearnSourceTable};
use crate::moves::MoveId as M;
use crate::species::SpeciesId as S;

const ELECTRIC_TM: &[M] = &[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ELECTROWEB, M::HELPING_HAND];

pub static LEARN: LearnData = LearnData {
    max_species: 1025,
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
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::PSYCHIC, M::SHADOW_BALL])
            .unhatchable(),
        LearnInfo::new(S::MAGIKARP, 0).levels(&[(1, M::SPLASH), (15, M::TACKLE), (25, M::FLAIL)]),
        LearnInfo::new(S::GYARADOS, 0)
            .levels(&[(1, M::BITE), (1, M::TACKLE), (21, M::AQUA_TAIL), (36, M::CRUNCH), (48, M::HYDRO_PUMP)])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::HYPER_BEAM, M::THUNDERBOLT, M::WATERFALL])
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
            .eggs(&[M::CHARM, M::FLAIL, M::WISH, M::CURSE])
            .machines(&[M::SHADOW_BALL, M::HELPING_HAND]),
        LearnInfo::new(S::VAPOREON, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (1, M::GROWL),
                (1, M::WATER_GUN),
                (5, M::SAND_ATTACK),
                (10, M::QUICK_ATTACK),
                (15, M::BITE),
                (20, M::HAZE),
                (25, M::AURORA_BEAM),
                (30, M::ACID_ARMOR),
                (45, M::HYDRO_PUMP),
            ])
            .machines(&[M::SURF, M::ICE_BEAM, M::BLIZZARD, M::SHADOW_BALL, M::HELPING_HAND])
            .unhatchable(),
        LearnInfo::new(S::ESPEON, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::TAIL_WHIP),
                (1, M::GROWL),
                (1, M::CONFUSION),
                (5, M::SAND_ATTACK),
                (10, M::QUICK_ATTACK),
                (15, M::SWIFT),
                (20, M::PSYBEAM),
                (25, M::MORNING_SUN),
                (35, M::PSYCH_UP),
                (45, M::PSYCHIC),
            ])
            .machines(&[M::PSYCHIC, M::SHADOW_BALL, M::HELPING_HAND])
            .unhatchable(),
        LearnInfo::new(S::AZURILL, 0)
            .levels(&[(1, M::SPLASH), (1, M::WATER_GUN), (3, M::TAIL_WHIP), (6, M::CHARM)])
            .eggs(&[M::ENCORE, M::SING, M::BODY_SLAM])
            .machines(&[M::ICE_BEAM, M::SURF, M::HELPING_HAND]),
        LearnInfo::new(S::MARILL, 0)
            .levels(&[
                (1, M::TACKLE),
                (1, M::WATER_GUN),
                (3, M::TAIL_WHIP),
                (6, M::DEFENSE_CURL),
                (9, M::ROLLOUT),
                (12, M::BUBBLE_BEAM),
                (21, M::AQUA_TAIL),
                (27, M::DOUBLE_EDGE),
                (33, M::HYDRO_PUMP),
            ])
            .eggs(&[M::AMNESIA, M::AQUA_JET, M::BODY_SLAM, M::ENCORE, M::PRESENT, M::SING])
            .machines(&[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::WATERFALL, M::HELPING_HAND]),
        LearnInfo::new(S::AZUMARILL, 0)
            .levels(&[(1, M::TACKLE), (1, M::WATER_GUN), (1, M::TAIL_WHIP), (1, M::DEFENSE_CURL), (21, M::AQUA_TAIL)])
            .machines(&[M::ICE_BEAM, M::BLIZZARD, M::SURF, M::WATERFALL, M::HELPING_HAND])
            .unhatchable(),
        LearnInfo::new(S::SCATTERBUG, 0)
            .levels(&[(1, M::TACKLE), (1, M::STRING_SHOT), (4, M::STUN_SPORE), (15, M::BUG_BITE)])
            .eggs(&[M::POISON_POWDER, M::RAGE_POWDER])
            .machines(&[M::STRUGGLE_BUG, M::PROTECT]),
        LearnInfo::new(S::SPEWPA, 0)
            .levels(&[(1, M::HARDEN), (1, M::PROTECT)])
            .machines(&[M::STRUGGLE_BUG, M::PROTECT])
            .unhatchable(),
        LearnInfo::new(S::VIVILLON, 0)
            .forms(20)
            .levels(&[(1, M::GUST), (1, M::SLEEP_POWDER), (21, M::CONFUSION), (45, M::QUIVER_DANCE)])
            .machines(&[M::PSYCHIC, M::SUNNY_DAY, M::HYPER_BEAM, M::AIR_SLASH])
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
            .levels(&[(1, M::TRICK), (1, M::ASTONISH), (1, M::THUNDER_WAVE), (1, M::THUNDER_SHOCK), (35, M::DISCHARGE)])
            .machines(&[M::THUNDERBOLT, M::THUNDER, M::SHADOW_BALL, M::ELECTROWEB]),
        LearnInfo::new(S::HO_OH, 0)
            .levels(&[(1, M::WHIRLWIND), (1, M::GUST), (27, M::RECOVER), (63, M::FIRE_BLAST), (72, M::SACRED_FIRE)])
            .machines(&[M::SUNNY_DAY, M::HYPER_BEAM, M::FIRE_BLAST, M::FLY, M::OVERHEAT])
            .unhatchable(),
    ],
};

pub static SOURCE_SV: LearnSourceTable<Gen9> = LearnSourceTable {
    rules: Gen9,
    environment: LearnEnvironment::SV,
    data: &LEARN,
    special_tutors: &[],
    type_tutors: &[],
};

// ============================================================================
// Encounters
// ============================================================================

pub static SLOTS_SV: &[EncounterSlot] = &[
    EncounterSlot::new(S::PIKACHU, 8, 12).at(6),
    EncounterSlot::new(S::SMEARGLE, 14, 18).at(10),
    // Pattern follows the player's region
    EncounterSlot::new(S::VIVILLON, 20, 24)
        .at(4)
        .flags(SlotFlags::RANDOM_UNSPECIFIED_FORM),
    EncounterSlot::new(S::MAGIKARP, 2, 5).at(6),
    EncounterSlot::new(S::MARILL, 10, 14).at(22),
    EncounterSlot::new(S::AZURILL, 5, 8).at(22),
];

pub static GIFTS: &[EncounterGift] = &[
    EncounterGift::new(1, "Flying Pikachu", 9, S::PIKACHU, 25)
        .moves(&[M::THUNDER_SHOCK, M::QUICK_ATTACK, M::THUNDERBOLT, M::FLY])
        .relearn(&[M::FLY]),
    EncounterGift::new(2, "Gift Vivillon", 9, S::VIVILLON, 15)
        .form(18)
        .moves(&[M::GUST, M::SLEEP_POWDER, M::CONFUSION]),
];
