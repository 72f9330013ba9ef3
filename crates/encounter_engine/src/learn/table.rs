//! The data-driven learn source.

use super::{LearnData, LearnInfo, LearnMethod, LearnOption, LearnResult, LearnRules, LearnSource, MoveSourceType};
use crate::creature::CreatureTemplate;
use crate::evolution::EvoCriteria;
use crate::game::LearnEnvironment;
use crate::moves::MoveId;
use crate::moveset::MovePermitSet;
use crate::species::SpeciesId;

/// Learn source for one environment: static data plus that generation's rules.
#[derive(Debug)]
pub struct LearnSourceTable<R: LearnRules> {
    pub rules: R,
    pub environment: LearnEnvironment,
    pub data: &'static LearnData,
    /// Moves offered by this environment's special tutors
    pub special_tutors: &'static [MoveId],
    /// Moves offered by this environment's type tutors
    pub type_tutors: &'static [MoveId],
}

impl<R: LearnRules> LearnSourceTable<R> {
    fn level_floor(&self, creature: &CreatureTemplate, evo: &EvoCriteria) -> u8 {
        if self.rules.has_move_reminder(creature) {
            1
        } else {
            evo.level_min
        }
    }

    fn is_type_tutor(&self, info: &LearnInfo, mv: MoveId) -> bool {
        self.type_tutors.contains(&mv) && info.type_tutors.contains(&mv)
    }

    fn is_special_tutor(&self, creature: &CreatureTemplate, info: &LearnInfo, mv: MoveId) -> bool {
        self.rules.special_tutors_available(creature)
            && self.special_tutors.contains(&mv)
            && info.special_tutors.contains(&mv)
    }
}

impl<R: LearnRules> LearnSource for LearnSourceTable<R> {
    fn environment(&self) -> LearnEnvironment {
        self.environment
    }

    fn max_species_id(&self) -> u16 {
        self.data.max_species
    }

    fn info(&self, species: SpeciesId, form: u8) -> Option<&LearnInfo> {
        self.data.find(species, form)
    }

    fn can_learn(
        &self,
        creature: &CreatureTemplate,
        info: &LearnInfo,
        evo: &EvoCriteria,
        mv: MoveId,
        types: MoveSourceType,
        option: LearnOption,
    ) -> LearnResult {
        if !self.rules.is_move_in_scope(creature, mv) {
            return LearnResult::NONE;
        }
        let env = self.environment;

        if types.contains(MoveSourceType::LEVEL_UP) {
            let floor = self.rules.query_level_floor(creature, evo);
            if let Some(level) = info.level_moves.level_within(mv, floor, evo.level_max) {
                return LearnResult::level_up(env, level);
            }
        }

        if types.contains(MoveSourceType::MACHINE)
            && info.machines.contains(&mv)
            && self.rules.is_machine_usable(creature, mv)
        {
            return LearnResult::new(LearnMethod::Machine, env);
        }

        if types.contains(MoveSourceType::TYPE_TUTOR) && self.is_type_tutor(info, mv) {
            return LearnResult::new(LearnMethod::TypeTutor, env);
        }

        if types.contains(MoveSourceType::SPECIAL_TUTOR) && self.is_special_tutor(creature, info, mv) {
            return LearnResult::new(LearnMethod::SpecialTutor, env);
        }

        if types.contains(MoveSourceType::ENHANCED_TUTOR)
            && self.rules.is_enhanced_tutor(creature, evo, mv, option)
        {
            return LearnResult::new(LearnMethod::EnhancedTutor, env);
        }

        if types.contains(MoveSourceType::EGG) && info.egg_moves.contains(&mv) {
            return LearnResult::new(LearnMethod::EggMove, env);
        }

        LearnResult::NONE
    }

    fn get_all_moves(
        &self,
        result: &mut MovePermitSet,
        creature: &CreatureTemplate,
        evo: &EvoCriteria,
        types: MoveSourceType,
    ) {
        let Some(info) = self.info(evo.species, evo.form) else {
            return;
        };
        let rules = &self.rules;
        let mut permit = |mv: MoveId| {
            if rules.is_move_in_scope(creature, mv) {
                result.insert(mv);
            }
        };

        if types.contains(MoveSourceType::LEVEL_UP) {
            let floor = self.level_floor(creature, evo);
            info.level_moves
                .moves_within(floor, evo.level_max)
                .for_each(&mut permit);
        }

        if types.contains(MoveSourceType::MACHINE) {
            info.machines
                .iter()
                .copied()
                .filter(|&mv| rules.is_machine_usable(creature, mv))
                .for_each(&mut permit);
        }

        if types.contains(MoveSourceType::TYPE_TUTOR) {
            info.type_tutors
                .iter()
                .copied()
                .filter(|mv| self.type_tutors.contains(mv))
                .for_each(&mut permit);
        }

        if types.contains(MoveSourceType::SPECIAL_TUTOR) && rules.special_tutors_available(creature) {
            info.special_tutors
                .iter()
                .copied()
                .filter(|mv| self.special_tutors.contains(mv))
                .for_each(&mut permit);
        }

        if types.contains(MoveSourceType::EGG) {
            info.egg_moves.iter().copied().for_each(&mut permit);
        }

        if types.contains(MoveSourceType::ENHANCED_TUTOR) {
            rules.enhanced_tutor_moves(evo, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EntityContext, GameVersion};
    use crate::learn::generations::{Gen2, Gen3, Gen5};

    static GEN2_ENTRIES: [LearnInfo; 1] = [LearnInfo::new(SpeciesId::MARILL, 0)
        .levels(&[(1, MoveId::TACKLE), (3, MoveId::DEFENSE_CURL), (15, MoveId::WATER_GUN), (21, MoveId::ROLLOUT)])
        .machines(&[MoveId::CURSE, MoveId::SURF, MoveId::ICE_BEAM])
        .tutors(&[MoveId::ICE_BEAM])
        .eggs(&[MoveId::AMNESIA, MoveId::PRESENT])];

    static GEN2_DATA: LearnData = LearnData {
        max_species: 251,
        entries: &GEN2_ENTRIES,
    };

    static CRYSTAL: LearnSourceTable<Gen2> = LearnSourceTable {
        rules: Gen2,
        environment: LearnEnvironment::C,
        data: &GEN2_DATA,
        special_tutors: &[MoveId::FLAMETHROWER, MoveId::THUNDERBOLT, MoveId::ICE_BEAM],
        type_tutors: &[],
    };

    static GEN3_ENTRIES: [LearnInfo; 1] = [LearnInfo::new(SpeciesId::MARILL, 0)
        .levels(&[(1, MoveId::TACKLE), (15, MoveId::WATER_GUN)])
        .machines(&[MoveId::ICE_BEAM, MoveId::SURF])];

    static GEN3_DATA: LearnData = LearnData {
        max_species: 386,
        entries: &GEN3_ENTRIES,
    };

    static RS: LearnSourceTable<Gen3> = LearnSourceTable {
        rules: Gen3,
        environment: LearnEnvironment::RS,
        data: &GEN3_DATA,
        special_tutors: &[],
        type_tutors: &[],
    };

    static GEN5_ENTRIES: [LearnInfo; 2] = [
        LearnInfo::new(SpeciesId::MARILL, 0)
            .type_tutors(&[MoveId::WATER_PLEDGE])
            .tutors(&[MoveId::AQUA_TAIL, MoveId::ICE_BEAM]),
        LearnInfo::new(SpeciesId::ROTOM, 0).forms(6),
    ];

    static GEN5_DATA: LearnData = LearnData {
        max_species: 649,
        entries: &GEN5_ENTRIES,
    };

    static B2W2: LearnSourceTable<Gen5> = LearnSourceTable {
        rules: Gen5,
        environment: LearnEnvironment::B2W2,
        data: &GEN5_DATA,
        special_tutors: &[MoveId::AQUA_TAIL],
        type_tutors: &[MoveId::WATER_PLEDGE],
    };

    fn stage(species: SpeciesId, form: u8, min: u8, max: u8) -> EvoCriteria {
        EvoCriteria {
            species,
            form,
            level_min: min,
            level_max: max,
            level_up_required: false,
        }
    }

    fn gen2_creature() -> CreatureTemplate {
        CreatureTemplate::new(SpeciesId::MARILL)
            .context(EntityContext::Gen2)
            .version(GameVersion::C)
    }

    #[test]
    fn test_priority_order() {
        let c = gen2_creature();
        let info = &GEN2_ENTRIES[0];
        let evo = stage(SpeciesId::MARILL, 0, 5, 30);
        // Ice Beam is both a machine and a tutor; machine wins
        let result = CRYSTAL.can_learn(&c, info, &evo, MoveId::ICE_BEAM, MoveSourceType::ALL, LearnOption::Current);
        assert_eq!(result.method, LearnMethod::Machine);
        let result = CRYSTAL.can_learn(&c, info, &evo, MoveId::ICE_BEAM, MoveSourceType::SPECIAL_TUTOR, LearnOption::Current);
        assert_eq!(result.method, LearnMethod::SpecialTutor);
        let result = CRYSTAL.can_learn(&c, info, &evo, MoveId::PRESENT, MoveSourceType::ALL_TEACHABLE, LearnOption::Current);
        assert!(!result.is_valid());
        let result = CRYSTAL.can_learn(&c, info, &evo, MoveId::PRESENT, MoveSourceType::ALL, LearnOption::Current);
        assert_eq!(result.method, LearnMethod::EggMove);
    }

    #[test]
    fn test_level_window_without_reminder() {
        // Gen 1 format: no reminder, so moves below the window do not count
        let c = gen2_creature().context(EntityContext::Gen1);
        let info = &GEN2_ENTRIES[0];
        let evo = stage(SpeciesId::MARILL, 0, 10, 30);
        let tackle = CRYSTAL.can_learn(&c, info, &evo, MoveId::TACKLE, MoveSourceType::LEVEL_UP, LearnOption::Current);
        assert!(!tackle.is_valid());
        let gun = CRYSTAL.can_learn(&c, info, &evo, MoveId::WATER_GUN, MoveSourceType::LEVEL_UP, LearnOption::Current);
        assert_eq!(gun, LearnResult::level_up(LearnEnvironment::C, 15));

        // Gen 2 format has the reminder, but a single query still checks the window
        let c = gen2_creature();
        let tackle = CRYSTAL.can_learn(&c, info, &evo, MoveId::TACKLE, MoveSourceType::LEVEL_UP, LearnOption::Current);
        assert!(!tackle.is_valid());
        let mut set = MovePermitSet::new();
        CRYSTAL.get_all_moves(&mut set, &c, &evo, MoveSourceType::LEVEL_UP);
        assert!(set.contains(MoveId::TACKLE));
    }

    #[test]
    fn test_later_generations_query_with_reminder() {
        let c = CreatureTemplate::new(SpeciesId::MARILL).context(EntityContext::Gen3).version(GameVersion::R);
        let info = &GEN3_ENTRIES[0];
        let evo = stage(SpeciesId::MARILL, 0, 20, 30);
        let tackle = RS.can_learn(&c, info, &evo, MoveId::TACKLE, MoveSourceType::LEVEL_UP, LearnOption::Current);
        assert_eq!(tackle, LearnResult::level_up(LearnEnvironment::RS, 1));
    }

    #[test]
    fn test_gen1_format_drops_newer_moves() {
        let c = gen2_creature().context(EntityContext::Gen1);
        let evo = stage(SpeciesId::MARILL, 0, 1, 30);
        let mut set = MovePermitSet::new();
        CRYSTAL.get_all_moves(&mut set, &c, &evo, MoveSourceType::ALL_TEACHABLE);
        assert!(set.contains(MoveId::SURF));
        assert!(set.contains(MoveId::WATER_GUN));
        // Curse and Rollout are Gen 2 moves; Crystal tutors are gone
        assert!(!set.contains(MoveId::CURSE));
        assert!(!set.contains(MoveId::ROLLOUT));
    }

    #[test]
    fn test_all_moves_gen2_format() {
        let c = gen2_creature();
        let evo = stage(SpeciesId::MARILL, 0, 1, 30);
        let mut set = MovePermitSet::new();
        CRYSTAL.get_all_moves(&mut set, &c, &evo, MoveSourceType::ALL_TEACHABLE);
        assert!(set.contains(MoveId::CURSE));
        assert!(set.contains(MoveId::ROLLOUT));
        assert!(!set.contains(MoveId::AMNESIA));
        CRYSTAL.get_all_moves(&mut set, &c, &evo, MoveSourceType::EGG);
        assert!(set.contains(MoveId::AMNESIA));
    }

    #[test]
    fn test_hm_only_in_gen3_format() {
        let evo = stage(SpeciesId::MARILL, 0, 1, 50);
        let info = &GEN3_ENTRIES[0];
        let in_gen3 = CreatureTemplate::new(SpeciesId::MARILL).context(EntityContext::Gen3).version(GameVersion::R);
        let in_gen4 = in_gen3.clone().context(EntityContext::Gen4);
        let surf = |c: &CreatureTemplate| RS.can_learn(c, info, &evo, MoveId::SURF, MoveSourceType::MACHINE, LearnOption::Current);
        assert!(surf(&in_gen3).is_valid());
        assert!(!surf(&in_gen4).is_valid());

        let mut set = MovePermitSet::new();
        RS.get_all_moves(&mut set, &in_gen4, &evo, MoveSourceType::MACHINE);
        assert!(set.contains(MoveId::ICE_BEAM));
        assert!(!set.contains(MoveId::SURF));
    }

    #[test]
    fn test_tutors_require_pool_and_compatibility() {
        let c = CreatureTemplate::new(SpeciesId::MARILL).context(EntityContext::Gen5).version(GameVersion::B2);
        let info = &GEN5_ENTRIES[0];
        let evo = stage(SpeciesId::MARILL, 0, 1, 50);
        let pledge = B2W2.can_learn(&c, info, &evo, MoveId::WATER_PLEDGE, MoveSourceType::ALL, LearnOption::Current);
        assert_eq!(pledge.method, LearnMethod::TypeTutor);
        let tail = B2W2.can_learn(&c, info, &evo, MoveId::AQUA_TAIL, MoveSourceType::ALL, LearnOption::Current);
        assert_eq!(tail.method, LearnMethod::SpecialTutor);
        // Compatible, but no tutor in this environment teaches it
        let beam = B2W2.can_learn(&c, info, &evo, MoveId::ICE_BEAM, MoveSourceType::ALL, LearnOption::Current);
        assert!(!beam.is_valid());
    }

    #[test]
    fn test_rotom_enhanced_tutor() {
        let info = &GEN5_ENTRIES[1];
        let evo = stage(SpeciesId::ROTOM, 2, 1, 50);
        let wash = CreatureTemplate::new(SpeciesId::ROTOM).form(2).context(EntityContext::Gen5).version(GameVersion::B2);
        let heat = wash.clone().form(1);
        let pump = |c: &CreatureTemplate, option| B2W2.can_learn(c, info, &evo, MoveId::HYDRO_PUMP, MoveSourceType::ENHANCED_TUTOR, option);
        assert_eq!(pump(&wash, LearnOption::Current).method, LearnMethod::EnhancedTutor);
        assert!(!pump(&heat, LearnOption::Current).is_valid());
        assert!(pump(&heat, LearnOption::AtAnyTime).is_valid());

        let mut set = MovePermitSet::new();
        B2W2.get_all_moves(&mut set, &wash, &evo, MoveSourceType::ENHANCED_TUTOR);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![MoveId::HYDRO_PUMP]);
    }

    #[test]
    fn test_species_ceiling() {
        assert!(CRYSTAL.info(SpeciesId::ROTOM, 0).is_none());
        assert_eq!(CRYSTAL.learnset(SpeciesId::ROTOM, 0), crate::learn::Learnset::EMPTY);
        assert!(CRYSTAL.egg_moves(SpeciesId::PIKACHU, 0).is_empty());
        assert_eq!(CRYSTAL.max_species_id(), 251);
    }
}
