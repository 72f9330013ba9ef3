//! End-to-end resolution properties over the built-in tables.

mod common;

use std::rc::Rc;

use encounter_engine::encounters::generators;
use encounter_engine::encounters::sanity::is_plausible;
use encounter_engine::encounters::{EncounterStatic, GiftFlags, SearchContext};
use encounter_engine::{
    BuiltinTables, CreatureTemplate, Encounter, EncounterMovesetGenerator, EncounterOrder, EntityContext,
    EvoCriteria, GameTables, GameVersion, GeneratorSettings, LanguageId, MoveId, Needs, Origin, SpeciesId,
    TemplateConverter, TrainerInfo,
};

use common::helpers::{of_category, verify_coverage, version_encounters};
use common::tables::{CountingTables, FixtureTables};

fn creature(species: SpeciesId, context: EntityContext, version: GameVersion) -> CreatureTemplate {
    CreatureTemplate::new(species).context(context).version(version)
}

// ============================================================================
// Needs
// ============================================================================

#[test]
fn test_smeargle_needs_nothing_it_can_sketch() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    let cases = [
        (EntityContext::Gen9, GameVersion::SL, vec![MoveId::SACRED_FIRE, MoveId::VOLT_TACKLE]),
        (EntityContext::Gen2, GameVersion::GD, vec![MoveId::SACRED_FIRE, MoveId::SURF]),
        (EntityContext::Gen6, GameVersion::OR, vec![MoveId::VOLT_TACKLE, MoveId::QUIVER_DANCE]),
    ];
    for (context, version, moves) in cases {
        let smeargle = creature(SpeciesId::SMEARGLE, context, version);
        let chain = generator.resolve_chain(&smeargle);
        let needs = generator.compute_needs(&smeargle, &chain, &moves);
        assert!(needs.is_empty(), "{:?}: {:?}", context, needs);
    }

    // Sketch targets need nothing from the origin, so the wild slot qualifies
    let smeargle = creature(SpeciesId::SMEARGLE, EntityContext::Gen9, GameVersion::SL);
    let found = version_encounters(&generator, &smeargle, &[MoveId::SACRED_FIRE], GameVersion::SL);
    assert_eq!(of_category(&found, EncounterOrder::Slot).len(), 1);
}

#[test]
fn test_smeargle_with_unsketchable_move_yields_nothing() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let smeargle = creature(SpeciesId::SMEARGLE, EntityContext::Gen9, GameVersion::SL);

    let found = version_encounters(&generator, &smeargle, &[MoveId::STRUGGLE], GameVersion::SL);
    assert!(found.is_empty());
}

#[test]
fn test_needs_are_idempotent() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let marill = creature(SpeciesId::MARILL, EntityContext::Gen6, GameVersion::OR);
    let moves = [MoveId::PRESENT, MoveId::SURF, MoveId::AMNESIA, MoveId::PRESENT];

    let chain = generator.resolve_chain(&marill);
    let first = generator.compute_needs(&marill, &chain, &moves);
    let second = generator.compute_needs(&marill, &chain, &moves);

    assert_eq!(first, second);
    assert_eq!(first.as_slice(), &[MoveId::PRESENT, MoveId::AMNESIA]);
    assert_eq!(generator.permits().outstanding(), 0);
    assert_eq!(generator.permits().available(), 1);
}

#[test]
fn test_out_of_range_requests_yield_nothing() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    let nothing = creature(SpeciesId::NONE, EntityContext::Gen9, GameVersion::SL);
    assert_eq!(generator.generate_encounters(&nothing, &[], &[]).count(), 0);

    // Volt Tackle does not exist yet in a Gen 2 format
    let pikachu = creature(SpeciesId::PIKACHU, EntityContext::Gen2, GameVersion::C);
    assert_eq!(
        generator
            .generate_encounters(&pikachu, &[MoveId::VOLT_TACKLE], &[])
            .count(),
        0
    );

    let too_many: Vec<MoveId> = (1..=33).map(MoveId).collect();
    let pikachu = creature(SpeciesId::PIKACHU, EntityContext::Gen9, GameVersion::SL);
    assert_eq!(generator.generate_encounters(&pikachu, &too_many, &[]).count(), 0);
}

#[test]
fn test_repeated_moves_count_once_toward_limit() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let pikachu = creature(SpeciesId::PIKACHU, EntityContext::Gen9, GameVersion::SL);

    let mut padded = vec![MoveId::VOLT_TACKLE; 40];
    padded.push(MoveId::NONE);
    let single = version_encounters(&generator, &pikachu, &[MoveId::VOLT_TACKLE], GameVersion::SL);
    let repeated = version_encounters(&generator, &pikachu, &padded, GameVersion::SL);
    assert!(!single.is_empty());
    assert_eq!(repeated, single);
}

// ============================================================================
// Category generators
// ============================================================================

static LAPRAS_FIXTURE: [EncounterStatic; 1] = [EncounterStatic::new(SpeciesId::LAPRAS, 40)
    .at(10)
    .moves(&[MoveId::SURF, MoveId::ICE_BEAM, MoveId::BODY_SLAM, MoveId::SING])];

#[test]
fn test_single_stage_static_covers_intrinsic_move() {
    let tables = FixtureTables::new(GameVersion::SL, &LAPRAS_FIXTURE);
    let generator = EncounterMovesetGenerator::new(&tables);
    let lapras = creature(SpeciesId::LAPRAS, EntityContext::Gen9, GameVersion::SL);

    let chain = generator.resolve_chain(&lapras);
    assert_eq!(chain.len(), 1);

    let found = version_encounters(&generator, &lapras, &[MoveId::ICE_BEAM], GameVersion::SL);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].origin, Origin::Static(&LAPRAS_FIXTURE[0]));
    assert_eq!(found[0].levels(), (40, 40));
}

#[test]
fn test_single_stage_static_rejects_missing_move() {
    let tables = FixtureTables::new(GameVersion::SL, &LAPRAS_FIXTURE);
    let generator = EncounterMovesetGenerator::new(&tables);
    let lapras = creature(SpeciesId::LAPRAS, EntityContext::Gen9, GameVersion::SL);

    let found = version_encounters(&generator, &lapras, &[MoveId::SACRED_FIRE], GameVersion::SL);
    assert!(of_category(&found, EncounterOrder::Static).is_empty());
}

/// Red statics with no listed moves: one met after Confuse Ray (level 31)
/// and one met before it
static RED_LAPRAS_STATICS: [EncounterStatic; 2] = [
    EncounterStatic::new(SpeciesId::LAPRAS, 31).at(30),
    EncounterStatic::new(SpeciesId::LAPRAS, 15).at(30),
];

/// The same late Lapras handed over as a Game Boy gift
static RED_LAPRAS_GIFTS: [EncounterStatic; 1] = [EncounterStatic::new(SpeciesId::LAPRAS, 31).at(30)];

#[test]
fn test_gen1_static_covered_by_level_up_moves() {
    let tables = FixtureTables::new(GameVersion::RD, &RED_LAPRAS_STATICS).with_gb_gifts(&RED_LAPRAS_GIFTS);
    let settings = GeneratorSettings {
        level_ceiling: 30,
        ..Default::default()
    };
    let generator = EncounterMovesetGenerator::with_settings(&tables, settings).unwrap();
    let lapras = creature(SpeciesId::LAPRAS, EntityContext::Gen1, GameVersion::RD);

    // Below level 31 nothing teaches Confuse Ray afterwards
    let chain = generator.resolve_chain(&lapras);
    let needs = generator.compute_needs(&lapras, &chain, &[MoveId::CONFUSE_RAY]);
    assert_eq!(needs.as_slice(), &[MoveId::CONFUSE_RAY]);

    // Only the level 31 static knows it on arrival; the gift gets no level-up moves
    let found = version_encounters(&generator, &lapras, &[MoveId::CONFUSE_RAY], GameVersion::RD);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].origin, Origin::Static(&RED_LAPRAS_STATICS[0]));
    verify_coverage(&tables, &found[0], &needs).unwrap();
}

/// Gold Game Boy gifts: one Eevee that knows Charm, one that does not
static GOLD_EEVEE_GIFTS: [EncounterStatic; 2] = [
    EncounterStatic::new(SpeciesId::EEVEE, 20)
        .at(4)
        .moves(&[MoveId::TACKLE, MoveId::TAIL_WHIP, MoveId::CHARM]),
    EncounterStatic::new(SpeciesId::EEVEE, 20)
        .at(4)
        .moves(&[MoveId::TACKLE, MoveId::TAIL_WHIP, MoveId::SAND_ATTACK]),
];

#[test]
fn test_gb_gift_covers_need_from_secondary_table() {
    let tables = FixtureTables::new(GameVersion::GD, &[]).with_gb_gifts(&GOLD_EEVEE_GIFTS);
    assert!(tables.statics(GameVersion::GD).is_empty());
    let generator = EncounterMovesetGenerator::new(&tables);
    let eevee = creature(SpeciesId::EEVEE, EntityContext::Gen2, GameVersion::GD);

    // Charm is a Gen 2 egg move; nothing teaches it afterwards
    let chain = generator.resolve_chain(&eevee);
    let needs = generator.compute_needs(&eevee, &chain, &[MoveId::CHARM]);
    assert_eq!(needs.as_slice(), &[MoveId::CHARM]);

    let found = version_encounters(&generator, &eevee, &[MoveId::CHARM], GameVersion::GD);
    let statics = of_category(&found, EncounterOrder::Static);
    assert_eq!(statics.len(), 1);
    assert_eq!(statics[0].origin, Origin::Static(&GOLD_EEVEE_GIFTS[0]));

    let found = version_encounters(&generator, &eevee, &[], GameVersion::GD);
    assert_eq!(of_category(&found, EncounterOrder::Static).len(), 2);
}

#[test]
fn test_legacy_trade_requires_base_form() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    // Galarian Farfetch'd claiming a Red origin through Virtual Console
    let galarian = creature(SpeciesId::FARFETCHD, EntityContext::Gen8, GameVersion::RD).form(1);
    let found = version_encounters(&generator, &galarian, &[], GameVersion::RD);
    assert!(of_category(&found, EncounterOrder::Trade).is_empty());

    let kantonian = galarian.clone().form(0);
    let found = version_encounters(&generator, &kantonian, &[], GameVersion::RD);
    let trades = of_category(&found, EncounterOrder::Trade);
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].levels(), (15, 15));
}

#[test]
fn test_eggless_versions_never_touch_tables() {
    for version in [GameVersion::RD, GameVersion::YW, GameVersion::GP, GameVersion::GE, GameVersion::PLA] {
        let tables = CountingTables::new();
        let ctx = Rc::new(SearchContext {
            creature: creature(SpeciesId::PIKACHU, EntityContext::Gen9, version),
            version,
            chain: vec![
                EvoCriteria::new(SpeciesId::PIKACHU, 0, 100),
                EvoCriteria::new(SpeciesId::PICHU, 0, 99),
            ],
            needs: Needs::default(),
            filter_trade_language: false,
        });
        let found = generators::of_type(EncounterOrder::Egg, ctx, &tables).count();
        assert_eq!(found, 0, "{:?}", version);
        assert_eq!(tables.calls(), 0, "{:?}", version);
    }

    // A day care version does consult the learn tables
    let tables = CountingTables::new();
    let ctx = Rc::new(SearchContext {
        creature: creature(SpeciesId::PIKACHU, EntityContext::Gen9, GameVersion::SL),
        version: GameVersion::SL,
        chain: vec![
            EvoCriteria::new(SpeciesId::PIKACHU, 0, 100),
            EvoCriteria::new(SpeciesId::PICHU, 0, 99),
        ],
        needs: Needs::default(),
        filter_trade_language: false,
    });
    let eggs: Vec<Encounter<'_>> = generators::of_type(EncounterOrder::Egg, ctx, &tables).collect();
    assert_eq!(eggs.len(), 1);
    assert_eq!(eggs[0].species(), SpeciesId::PICHU);
    assert!(tables.calls() > 0);
}

#[test]
fn test_egg_hatches_chain_base_species() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    let vivillon = creature(SpeciesId::VIVILLON, EntityContext::Gen9, GameVersion::SL).form(3);
    let chain = generator.resolve_chain(&vivillon);
    assert_eq!(
        chain.iter().map(|evo| (evo.species, evo.form)).collect::<Vec<_>>(),
        vec![(SpeciesId::VIVILLON, 3), (SpeciesId::SPEWPA, 0), (SpeciesId::SCATTERBUG, 0)]
    );

    // Rage Powder is a Scatterbug egg move the wild Vivillon never knows
    let found = version_encounters(&generator, &vivillon, &[MoveId::RAGE_POWDER], GameVersion::SL);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category(), EncounterOrder::Egg);
    assert_eq!((found[0].species(), found[0].form(), found[0].level_min()), (SpeciesId::SCATTERBUG, 0, 1));

    let vaporeon = creature(SpeciesId::VAPOREON, EntityContext::Gen9, GameVersion::SL);
    let found = version_encounters(&generator, &vaporeon, &[], GameVersion::SL);
    let eggs = of_category(&found, EncounterOrder::Egg);
    assert_eq!(eggs.len(), 1);
    assert_eq!(eggs[0].species(), SpeciesId::EEVEE);
}

#[test]
fn test_dexnav_slot_supplies_one_egg_move() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let marill = creature(SpeciesId::MARILL, EntityContext::Gen6, GameVersion::OR);

    let found = version_encounters(&generator, &marill, &[MoveId::AMNESIA], GameVersion::OR);
    let slots = of_category(&found, EncounterOrder::Slot);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].species(), SpeciesId::MARILL);

    // Two egg moves are beyond DexNav; only a bred Marill knows both
    let found = version_encounters(&generator, &marill, &[MoveId::AMNESIA, MoveId::PRESENT], GameVersion::OR);
    assert!(of_category(&found, EncounterOrder::Slot).is_empty());
    let eggs = of_category(&found, EncounterOrder::Egg);
    assert_eq!(eggs.len(), 1);
    assert_eq!(eggs[0].species(), SpeciesId::MARILL);
}

#[test]
fn test_underground_slot_supplies_one_move() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let eevee = creature(SpeciesId::EEVEE, EntityContext::Gen8b, GameVersion::BD);

    // Wish is not an egg move in BDSP, so only the Underground can explain it
    let found = version_encounters(&generator, &eevee, &[MoveId::WISH], GameVersion::BD);
    assert_eq!(found.len(), 1);
    match found[0].origin {
        Origin::Slot(slot) => assert_eq!(slot.location, 508),
        other => panic!("expected an Underground slot, got {:?}", other),
    }
}

#[test]
fn test_totem_form_matches_only_after_transfer() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    let transferred = creature(SpeciesId::GUMSHOOS, EntityContext::Gen8, GameVersion::SN);
    let found = version_encounters(&generator, &transferred, &[], GameVersion::SN);
    let statics = of_category(&found, EncounterOrder::Static);
    assert_eq!(statics.len(), 1);
    assert!(statics[0].is_totem());
    assert_eq!(statics[0].form(), 1);

    let native = creature(SpeciesId::GUMSHOOS, EntityContext::Gen7, GameVersion::SN);
    let found = version_encounters(&generator, &native, &[], GameVersion::SN);
    assert!(of_category(&found, EncounterOrder::Static).is_empty());
}

#[test]
fn test_relearn_section_covers_event_move() {
    let tables = BuiltinTables::new();
    let ho_oh = creature(SpeciesId::HO_OH, EntityContext::Gen7, GameVersion::US);

    // Within the default ceiling Sacred Fire is a plain level-up move
    let generator = EncounterMovesetGenerator::new(&tables);
    let chain = generator.resolve_chain(&ho_oh);
    assert!(generator
        .compute_needs(&ho_oh, &chain, &[MoveId::SACRED_FIRE])
        .is_empty());

    let settings = GeneratorSettings {
        level_ceiling: 60,
        ..Default::default()
    };
    let generator = EncounterMovesetGenerator::with_settings(&tables, settings).unwrap();
    let chain = generator.resolve_chain(&ho_oh);
    assert_eq!(
        generator
            .compute_needs(&ho_oh, &chain, &[MoveId::SACRED_FIRE])
            .as_slice(),
        &[MoveId::SACRED_FIRE]
    );

    let found = version_encounters(&generator, &ho_oh, &[MoveId::SACRED_FIRE], GameVersion::US);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category(), EncounterOrder::Static);
    assert_eq!(found[0].relearn(), &[MoveId::SACRED_FIRE]);
}

#[test]
fn test_trade_language_filter() {
    let tables = BuiltinTables::new();
    let filtering = GeneratorSettings {
        filter_trade_language: true,
        ..Default::default()
    };
    let strict = EncounterMovesetGenerator::with_settings(&tables, filtering).unwrap();
    let lenient = EncounterMovesetGenerator::new(&tables);

    let hacked = creature(SpeciesId::FARFETCHD, EntityContext::Gen3, GameVersion::FR).language(LanguageId::Hacked);
    let trades = |generator: &EncounterMovesetGenerator<'_>, c: &CreatureTemplate, version| {
        of_category(&version_encounters(generator, c, &[], version), EncounterOrder::Trade).len()
    };

    assert_eq!(trades(&strict, &hacked, GameVersion::FR), 0);
    assert_eq!(trades(&lenient, &hacked, GameVersion::FR), 1);

    let english = hacked.clone().language(LanguageId::English);
    assert_eq!(trades(&strict, &english, GameVersion::FR), 1);

    // Japanese Black/White trades carry no language at all
    let magikarp = creature(SpeciesId::MAGIKARP, EntityContext::Gen5, GameVersion::B).language(LanguageId::Hacked);
    assert_eq!(trades(&strict, &magikarp, GameVersion::B), 1);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_every_candidate_covers_every_need() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    let requests = [
        (SpeciesId::PIKACHU, EntityContext::Gen9, vec![MoveId::VOLT_TACKLE]),
        (SpeciesId::PIKACHU, EntityContext::Gen7, vec![MoveId::SURF, MoveId::VOLT_TACKLE]),
        (SpeciesId::MARILL, EntityContext::Gen6, vec![MoveId::AMNESIA]),
        (SpeciesId::MARILL, EntityContext::Gen9, vec![MoveId::AMNESIA, MoveId::PRESENT]),
        (SpeciesId::EEVEE, EntityContext::Gen8b, vec![MoveId::WISH]),
        (SpeciesId::GYARADOS, EntityContext::Gen2, vec![MoveId::BITE, MoveId::HYDRO_PUMP]),
        (SpeciesId::VIVILLON, EntityContext::Gen9, vec![MoveId::RAGE_POWDER]),
    ];

    let mut checked = 0;
    for (species, context, moves) in requests {
        let c = CreatureTemplate::new(species).context(context);
        for enc in generator.generate_encounters(&c, &moves, &[]) {
            let origin = c.clone().version(enc.version);
            let chain = generator.resolve_chain(&origin);
            let needs = generator.compute_needs(&origin, &chain, &moves);
            if let Err(e) = verify_coverage(&tables, &enc, &needs) {
                panic!("{}", e);
            }
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_sanity_depends_on_chain_entry() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);

    for (species, context, version) in [
        (SpeciesId::PIKACHU, EntityContext::Gen9, GameVersion::SL),
        (SpeciesId::GUMSHOOS, EntityContext::Gen8, GameVersion::SN),
        (SpeciesId::AZUMARILL, EntityContext::Gen3, GameVersion::E),
        (SpeciesId::VIVILLON, EntityContext::Gen9, GameVersion::SL),
    ] {
        let c = creature(species, context, version);
        let chain = generator.resolve_chain(&c);
        let format = c.format();
        let found = version_encounters(&generator, &c, &[], version);
        assert!(!found.is_empty());

        for enc in found.iter().filter(|enc| enc.category() != EncounterOrder::Egg) {
            assert!(is_plausible(&chain, enc, format));
            let without: Vec<EvoCriteria> = chain
                .iter()
                .copied()
                .filter(|evo| evo.species != enc.species())
                .collect();
            assert!(!is_plausible(&without, enc, format), "{:?}", enc);
        }
    }
}

#[test]
fn test_empty_request_yields_every_plausible_entry() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let version = GameVersion::SL;
    let pikachu = creature(SpeciesId::PIKACHU, EntityContext::Gen9, version);
    let chain = generator.resolve_chain(&pikachu);
    let found = version_encounters(&generator, &pikachu, &[], version);

    let slots = tables
        .slots(version)
        .iter()
        .filter(|s| is_plausible(&chain, &Encounter::new(version, Origin::Slot(*s)), 9))
        .count();
    let gifts = tables
        .gifts(version.generation())
        .iter()
        .filter(|g| !g.flags.contains(GiftFlags::NOT_DISTRIBUTED) && g.is_receivable_by(version))
        .filter(|g| is_plausible(&chain, &Encounter::new(version, Origin::Gift(*g)), 9))
        .count();

    assert!(slots > 0 && gifts > 0);
    assert_eq!(of_category(&found, EncounterOrder::Slot).len(), slots);
    assert_eq!(of_category(&found, EncounterOrder::Mystery).len(), gifts);
}

#[test]
fn test_abandoned_iteration_releases_permits() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let pikachu = CreatureTemplate::new(SpeciesId::PIKACHU).context(EntityContext::Gen9);

    let first = generator
        .generate_encounters(&pikachu, &[MoveId::VOLT_TACKLE], &[])
        .next();
    assert!(first.is_some());
    assert_eq!(generator.permits().outstanding(), 0);

    // The same generator keeps working afterwards
    let all = generator
        .generate_encounters(&pikachu, &[MoveId::VOLT_TACKLE], &[])
        .count();
    assert!(all >= 1);
    assert_eq!(generator.permits().outstanding(), 0);
}

#[test]
fn test_priority_changes_order_only() {
    let tables = BuiltinTables::new();
    let mut generator = EncounterMovesetGenerator::new(&tables);
    let pikachu = creature(SpeciesId::PIKACHU, EntityContext::Gen9, GameVersion::SL);

    let default_order = version_encounters(&generator, &pikachu, &[], GameVersion::SL);
    assert_eq!(default_order[0].category(), EncounterOrder::Egg);

    let reversed = [
        EncounterOrder::Slot,
        EncounterOrder::Trade,
        EncounterOrder::Static,
        EncounterOrder::Mystery,
        EncounterOrder::Egg,
    ];
    generator.set_priority(&reversed).unwrap();
    let reordered = version_encounters(&generator, &pikachu, &[], GameVersion::SL);

    assert_eq!(reordered.len(), default_order.len());
    assert!(default_order.iter().all(|enc| reordered.contains(enc)));
    assert_eq!(reordered[0].category(), EncounterOrder::Slot);
    assert_eq!(reordered.last().map(Encounter::category), Some(EncounterOrder::Egg));

    assert!(generator.set_priority(&[EncounterOrder::Slot]).is_err());
    assert_eq!(generator.priority(), &reversed);

    generator.reset_filters();
    assert_eq!(generator.priority(), &EncounterOrder::DEFAULT);
}

// ============================================================================
// Entry points
// ============================================================================

#[test]
fn test_generation_entry_point_stays_in_generation() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let pikachu = CreatureTemplate::new(SpeciesId::PIKACHU).context(EntityContext::Gen9);

    let found: Vec<Encounter<'_>> = generator
        .generate_generation_encounters(&pikachu, &[MoveId::VOLT_TACKLE], 7)
        .collect();
    assert!(found.iter().all(|enc| enc.version.generation() == 7));
    assert!(found
        .iter()
        .any(|enc| matches!(enc.origin, Origin::Gift(g) if g.title == "Ash's Pikachu")));
}

#[test]
fn test_generate_creatures_materializes_candidates() {
    let tables = BuiltinTables::new();
    let generator = EncounterMovesetGenerator::new(&tables);
    let pikachu = creature(SpeciesId::PIKACHU, EntityContext::Gen9, GameVersion::SL);
    let trainer = TrainerInfo::new(4242, "Nemona");

    let made: Vec<CreatureTemplate> = generator
        .generate_creatures(&pikachu, &trainer, &[MoveId::VOLT_TACKLE], &[GameVersion::SL], TemplateConverter)
        .collect();

    assert_eq!(made.len(), 1);
    assert_eq!(made[0].species, SpeciesId::PICHU);
    assert_eq!(made[0].level, 1);
    assert_eq!(made[0].trainer_id, 4242);
    assert_eq!(made[0].version, GameVersion::SL);
}
