//! Encounter records and the uniform [`Encounter`] view over them.

use bitflags::bitflags;
use serde::Serialize;

use super::EncounterOrder;
use crate::game::GameVersion;
use crate::moves::MoveId;
use crate::species::SpeciesId;

bitflags! {
    /// Wild slot properties.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
    pub struct SlotFlags: u8 {
        /// Form is decided after the encounter (weather, location, season)
        const RANDOM_UNSPECIFIED_FORM = 1 << 0;
        /// ORAS DexNav slot; may carry one of the species' egg moves
        const DEXNAV = 1 << 1;
        /// BDSP Grand Underground slot; may carry one Underground move
        const UNDERGROUND = 1 << 2;
    }
}

bitflags! {
    /// Static encounter properties.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
    pub struct StaticFlags: u8 {
        const RANDOM_UNSPECIFIED_FORM = 1 << 0;
        /// SM/USUM totem; the totem form is dropped on transfer
        const TOTEM = 1 << 1;
    }
}

bitflags! {
    /// Mystery gift properties.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
    pub struct GiftFlags: u8 {
        /// Data exists but the gift was never released
        const NOT_DISTRIBUTED = 1 << 0;
    }
}

// ============================================================================
// Records
// ============================================================================

/// A wild encounter slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncounterSlot {
    pub species: SpeciesId,
    pub form: u8,
    pub level_min: u8,
    pub level_max: u8,
    pub location: u16,
    /// Moves the slot guarantees, if the game records them
    pub moves: &'static [MoveId],
    pub flags: SlotFlags,
}

impl EncounterSlot {
    pub const fn new(species: SpeciesId, level_min: u8, level_max: u8) -> Self {
        Self {
            species,
            form: 0,
            level_min,
            level_max,
            location: 0,
            moves: &[],
            flags: SlotFlags::empty(),
        }
    }

    pub const fn form(self, form: u8) -> Self {
        Self { form, ..self }
    }

    pub const fn at(self, location: u16) -> Self {
        Self { location, ..self }
    }

    pub const fn moves(self, moves: &'static [MoveId]) -> Self {
        Self { moves, ..self }
    }

    pub const fn flags(self, flags: SlotFlags) -> Self {
        Self { flags, ..self }
    }
}

/// A fixed encounter (legendaries, gift Pokémon handed over in-game).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncounterStatic {
    pub species: SpeciesId,
    pub form: u8,
    pub level: u8,
    pub location: u16,
    pub moves: &'static [MoveId],
    /// Moves stored in the relearn section
    pub relearn: &'static [MoveId],
    pub flags: StaticFlags,
}

impl EncounterStatic {
    pub const fn new(species: SpeciesId, level: u8) -> Self {
        Self {
            species,
            form: 0,
            level,
            location: 0,
            moves: &[],
            relearn: &[],
            flags: StaticFlags::empty(),
        }
    }

    pub const fn form(self, form: u8) -> Self {
        Self { form, ..self }
    }

    pub const fn at(self, location: u16) -> Self {
        Self { location, ..self }
    }

    pub const fn moves(self, moves: &'static [MoveId]) -> Self {
        Self { moves, ..self }
    }

    pub const fn relearn(self, relearn: &'static [MoveId]) -> Self {
        Self { relearn, ..self }
    }

    pub const fn flags(self, flags: StaticFlags) -> Self {
        Self { flags, ..self }
    }
}

/// A mystery gift distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncounterGift {
    pub card_id: u16,
    pub title: &'static str,
    pub generation: u8,
    /// Versions that could receive it; empty means all of its generation
    pub versions: &'static [GameVersion],
    pub species: SpeciesId,
    pub form: u8,
    pub level: u8,
    pub moves: &'static [MoveId],
    pub relearn: &'static [MoveId],
    pub flags: GiftFlags,
}

impl EncounterGift {
    pub const fn new(card_id: u16, title: &'static str, generation: u8, species: SpeciesId, level: u8) -> Self {
        Self {
            card_id,
            title,
            generation,
            versions: &[],
            species,
            form: 0,
            level,
            moves: &[],
            relearn: &[],
            flags: GiftFlags::empty(),
        }
    }

    pub const fn form(self, form: u8) -> Self {
        Self { form, ..self }
    }

    pub const fn versions(self, versions: &'static [GameVersion]) -> Self {
        Self { versions, ..self }
    }

    pub const fn moves(self, moves: &'static [MoveId]) -> Self {
        Self { moves, ..self }
    }

    pub const fn relearn(self, relearn: &'static [MoveId]) -> Self {
        Self { relearn, ..self }
    }

    pub const fn flags(self, flags: GiftFlags) -> Self {
        Self { flags, ..self }
    }

    /// Whether `version` could have received this gift
    pub fn is_receivable_by(&self, version: GameVersion) -> bool {
        if self.versions.is_empty() {
            version.generation() == self.generation
        } else {
            self.versions.contains(&version)
        }
    }
}

/// An in-game trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncounterTrade {
    pub species: SpeciesId,
    pub form: u8,
    pub level: u8,
    pub moves: &'static [MoveId],
    pub relearn: &'static [MoveId],
}

impl EncounterTrade {
    pub const fn new(species: SpeciesId, level: u8) -> Self {
        Self {
            species,
            form: 0,
            level,
            moves: &[],
            relearn: &[],
        }
    }

    pub const fn form(self, form: u8) -> Self {
        Self { form, ..self }
    }

    pub const fn moves(self, moves: &'static [MoveId]) -> Self {
        Self { moves, ..self }
    }

    pub const fn relearn(self, relearn: &'static [MoveId]) -> Self {
        Self { relearn, ..self }
    }
}

/// A hatched egg. Built on demand rather than read from a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EncounterEgg {
    pub species: SpeciesId,
    pub form: u8,
    pub level: u8,
    pub version: GameVersion,
    /// Pichu bred from a parent holding a Light Ball
    pub can_have_volt_tackle: bool,
}

// ============================================================================
// Encounter
// ============================================================================

/// Where a candidate came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Origin<'a> {
    Slot(&'a EncounterSlot),
    Static(&'a EncounterStatic),
    Gift(&'a EncounterGift),
    Trade(&'a EncounterTrade),
    Egg(EncounterEgg),
}

/// A candidate origin event in a specific version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Encounter<'a> {
    pub version: GameVersion,
    pub origin: Origin<'a>,
}

impl<'a> Encounter<'a> {
    pub fn new(version: GameVersion, origin: Origin<'a>) -> Self {
        Self { version, origin }
    }

    /// Generator category that produces this kind of encounter
    pub fn category(&self) -> EncounterOrder {
        match self.origin {
            Origin::Slot(_) => EncounterOrder::Slot,
            Origin::Static(_) => EncounterOrder::Static,
            Origin::Gift(_) => EncounterOrder::Mystery,
            Origin::Trade(_) => EncounterOrder::Trade,
            Origin::Egg(_) => EncounterOrder::Egg,
        }
    }

    pub fn species(&self) -> SpeciesId {
        match self.origin {
            Origin::Slot(s) => s.species,
            Origin::Static(s) => s.species,
            Origin::Gift(g) => g.species,
            Origin::Trade(t) => t.species,
            Origin::Egg(e) => e.species,
        }
    }

    pub fn form(&self) -> u8 {
        match self.origin {
            Origin::Slot(s) => s.form,
            Origin::Static(s) => s.form,
            Origin::Gift(g) => g.form,
            Origin::Trade(t) => t.form,
            Origin::Egg(e) => e.form,
        }
    }

    /// Level range the creature is met at
    pub fn levels(&self) -> (u8, u8) {
        match self.origin {
            Origin::Slot(s) => (s.level_min, s.level_max),
            Origin::Static(s) => (s.level, s.level),
            Origin::Gift(g) => (g.level, g.level),
            Origin::Trade(t) => (t.level, t.level),
            Origin::Egg(e) => (e.level, e.level),
        }
    }

    pub fn level_min(&self) -> u8 {
        self.levels().0
    }

    /// Origin generation. Gifts carry their own.
    pub fn generation(&self) -> u8 {
        match self.origin {
            Origin::Gift(g) => g.generation,
            _ => self.version.generation(),
        }
    }

    /// Intrinsic moves
    pub fn moves(&self) -> &'a [MoveId] {
        match self.origin {
            Origin::Slot(s) => s.moves,
            Origin::Static(s) => s.moves,
            Origin::Gift(g) => g.moves,
            Origin::Trade(t) => t.moves,
            Origin::Egg(_) => &[],
        }
    }

    /// Relearn-section moves
    pub fn relearn(&self) -> &'a [MoveId] {
        match self.origin {
            Origin::Static(s) => s.relearn,
            Origin::Gift(g) => g.relearn,
            Origin::Trade(t) => t.relearn,
            Origin::Slot(_) | Origin::Egg(_) => &[],
        }
    }

    pub fn is_random_unspecified_form(&self) -> bool {
        match self.origin {
            Origin::Slot(s) => s.flags.contains(SlotFlags::RANDOM_UNSPECIFIED_FORM),
            Origin::Static(s) => s.flags.contains(StaticFlags::RANDOM_UNSPECIFIED_FORM),
            _ => false,
        }
    }

    pub fn is_totem(&self) -> bool {
        matches!(self.origin, Origin::Static(s) if s.flags.contains(StaticFlags::TOTEM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WORMHOLE_HO_OH: EncounterStatic = EncounterStatic::new(SpeciesId::HO_OH, 60)
        .relearn(&[MoveId::SACRED_FIRE]);

    static EVENT: EncounterGift = EncounterGift::new(1, "Test Gift", 3, SpeciesId::PIKACHU, 10)
        .versions(&[GameVersion::E]);

    #[test]
    fn test_accessors() {
        let enc = Encounter::new(GameVersion::US, Origin::Static(&WORMHOLE_HO_OH));
        assert_eq!(enc.category(), EncounterOrder::Static);
        assert_eq!(enc.species(), SpeciesId::HO_OH);
        assert_eq!(enc.levels(), (60, 60));
        assert_eq!(enc.generation(), 7);
        assert!(enc.moves().is_empty());
        assert_eq!(enc.relearn(), &[MoveId::SACRED_FIRE]);
        assert!(!enc.is_totem());
    }

    #[test]
    fn test_gift_generation_and_versions() {
        // A Gen 3 gift seen from a later version keeps its own generation
        let enc = Encounter::new(GameVersion::SL, Origin::Gift(&EVENT));
        assert_eq!(enc.generation(), 3);
        assert!(EVENT.is_receivable_by(GameVersion::E));
        assert!(!EVENT.is_receivable_by(GameVersion::R));
    }

    #[test]
    fn test_serialize_origin() {
        let enc = Encounter::new(GameVersion::US, Origin::Static(&WORMHOLE_HO_OH));
        let json = serde_json::to_value(enc).unwrap();
        assert_eq!(json["version"], "US");
        assert_eq!(json["origin"]["kind"], "static");
        assert_eq!(json["origin"]["data"]["level"], 60);
    }
}
