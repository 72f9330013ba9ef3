//! Evolution links shared by every context. Each link states the generation
//! it first appears in; [`EvolutionTree`](crate::evolution::EvolutionTree)
//! drops links a context cannot see.

use crate::evolution::EvolutionLink;
use crate::evolution::EvolutionMethod::{LevelUp, LevelUpFriendship, UseItem};
use crate::species::SpeciesId as S;

pub static EVOLUTIONS: &[EvolutionLink] = &[
    EvolutionLink::new(S::PICHU, S::PIKACHU, LevelUpFriendship).since(2),
    EvolutionLink::new(S::PIKACHU, S::RAICHU, UseItem),
    EvolutionLink::new(S::PIKACHU, S::RAICHU, UseItem).into_form(1).since(7),
    EvolutionLink::new(S::MAGIKARP, S::GYARADOS, LevelUp).at_level(20),
    EvolutionLink::new(S::EEVEE, S::VAPOREON, UseItem),
    EvolutionLink::new(S::EEVEE, S::ESPEON, LevelUpFriendship).since(2),
    EvolutionLink::new(S::AZURILL, S::MARILL, LevelUpFriendship).since(3),
    EvolutionLink::new(S::MARILL, S::AZUMARILL, LevelUp).at_level(18).since(2),
    EvolutionLink::new(S::SCATTERBUG, S::SPEWPA, LevelUp).at_level(9).since(6),
    EvolutionLink::new(S::SPEWPA, S::VIVILLON, LevelUp).at_level(12).into_any_form().since(6),
    EvolutionLink::new(S::YUNGOOS, S::GUMSHOOS, LevelUp).at_level(20).since(7),
];
