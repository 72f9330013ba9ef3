//! Shared inputs for one version's generator run.

use crate::creature::CreatureTemplate;
use crate::evolution::EvoCriteria;
use crate::game::GameVersion;
use crate::needs::Needs;
use crate::species::SpeciesId;

/// Everything the category generators read, computed once per version.
#[derive(Clone, Debug)]
pub struct SearchContext {
    /// The creature, with `version` set to the version being searched
    pub creature: CreatureTemplate,
    pub version: GameVersion,
    /// Evolution chain, most evolved first
    pub chain: Vec<EvoCriteria>,
    pub needs: Needs,
    /// Reject trades for creatures whose language no trade could carry
    pub filter_trade_language: bool,
}

impl SearchContext {
    /// Generation of the creature's format
    pub fn format(&self) -> u8 {
        self.creature.format()
    }

    /// Generation of the version being searched
    pub fn generation(&self) -> u8 {
        self.version.generation()
    }

    /// First chain stage of `species`
    pub fn first_match(&self, species: SpeciesId) -> Option<&EvoCriteria> {
        self.chain.iter().find(|evo| evo.species == species)
    }
}
