//! Game versions, storage contexts and learn-table groupings.
//!
//! A creature is *stored* in an [`EntityContext`] (its format) and *originates*
//! from a [`GameVersion`]. Each version resolves move learnability through one
//! [`LearnEnvironment`], the grouping of versions that share learn tables.

use serde::{Deserialize, Serialize};

/// Highest move id of any supported context
pub const MAX_MOVE_ID: u16 = 919;

/// Highest move id that exists in Generation 1
pub const MAX_MOVE_ID_1: u16 = 165;

// ============================================================================
// Game Versions
// ============================================================================

/// A mainline game version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameVersion {
    RD,
    GN,
    BU,
    YW,
    GD,
    SI,
    C,
    R,
    S,
    E,
    FR,
    LG,
    D,
    P,
    Pt,
    HG,
    SS,
    B,
    W,
    B2,
    W2,
    X,
    Y,
    AS,
    OR,
    SN,
    MN,
    US,
    UM,
    GP,
    GE,
    SW,
    SH,
    PLA,
    BD,
    SP,
    SL,
    VL,
}

impl GameVersion {
    /// Every version in release order
    pub const ALL: [GameVersion; 38] = {
        use GameVersion::*;
        [
            RD, GN, BU, YW, GD, SI, C, R, S, E, FR, LG, D, P, Pt, HG, SS, B, W, B2, W2, X, Y, AS,
            OR, SN, MN, US, UM, GP, GE, SW, SH, PLA, BD, SP, SL, VL,
        ]
    };

    /// Generation the version was released in
    pub const fn generation(self) -> u8 {
        use GameVersion::*;
        match self {
            RD | GN | BU | YW => 1,
            GD | SI | C => 2,
            R | S | E | FR | LG => 3,
            D | P | Pt | HG | SS => 4,
            B | W | B2 | W2 => 5,
            X | Y | AS | OR => 6,
            SN | MN | US | UM | GP | GE => 7,
            SW | SH | PLA | BD | SP => 8,
            SL | VL => 9,
        }
    }

    /// Storage context a creature caught in this version starts in
    pub const fn context(self) -> EntityContext {
        use GameVersion::*;
        match self {
            RD | GN | BU | YW => EntityContext::Gen1,
            GD | SI | C => EntityContext::Gen2,
            R | S | E | FR | LG => EntityContext::Gen3,
            D | P | Pt | HG | SS => EntityContext::Gen4,
            B | W | B2 | W2 => EntityContext::Gen5,
            X | Y | AS | OR => EntityContext::Gen6,
            SN | MN | US | UM => EntityContext::Gen7,
            GP | GE => EntityContext::Gen7b,
            SW | SH => EntityContext::Gen8,
            PLA => EntityContext::Gen8a,
            BD | SP => EntityContext::Gen8b,
            SL | VL => EntityContext::Gen9,
        }
    }

    /// Learn-table grouping consulted for this version
    pub const fn learn_environment(self) -> LearnEnvironment {
        use GameVersion::*;
        match self {
            RD | GN | BU => LearnEnvironment::RB,
            YW => LearnEnvironment::YW,
            GD | SI => LearnEnvironment::GS,
            C => LearnEnvironment::C,
            R | S => LearnEnvironment::RS,
            E => LearnEnvironment::E,
            FR | LG => LearnEnvironment::FRLG,
            D | P | Pt => LearnEnvironment::DPPt,
            HG | SS => LearnEnvironment::HGSS,
            B | W => LearnEnvironment::BW,
            B2 | W2 => LearnEnvironment::B2W2,
            X | Y => LearnEnvironment::XY,
            AS | OR => LearnEnvironment::ORAS,
            SN | MN => LearnEnvironment::SM,
            US | UM => LearnEnvironment::USUM,
            GP | GE => LearnEnvironment::GG,
            SW | SH => LearnEnvironment::SWSH,
            PLA => LearnEnvironment::PLA,
            BD | SP => LearnEnvironment::BDSP,
            SL | VL => LearnEnvironment::SV,
        }
    }

    /// Whether the version has a day care that produces eggs
    pub const fn can_generate_eggs(self) -> bool {
        use GameVersion::*;
        !matches!(self, RD | GN | BU | YW | GP | GE | PLA)
    }

    /// Versions a creature stored in `context` may have originated from, newest first.
    pub fn within_range(context: EntityContext) -> Vec<GameVersion> {
        use GameVersion::*;
        match context {
            EntityContext::Gen7b => return vec![GE, GP],
            EntityContext::Gen8a => return vec![PLA],
            EntityContext::Gen8b => return vec![SP, BD],
            _ => {}
        }
        let format = context.generation();
        Self::ALL
            .iter()
            .rev()
            .copied()
            .filter(|version| version.is_reachable_from(format))
            .collect()
    }

    fn is_reachable_from(self, format: u8) -> bool {
        use GameVersion::*;
        let generation = self.generation();
        if generation > format {
            return false;
        }
        match self {
            GP | GE => format >= 8,
            PLA | BD | SP => format >= 9,
            // Game Boy era transfers skip straight to Virtual Console
            _ if generation <= 2 => format <= 2 || format >= 7,
            _ => format >= 3,
        }
    }

    /// Parse a version abbreviation ("c", "B2", "sl")
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|version| format!("{:?}", version).eq_ignore_ascii_case(s))
    }
}

// ============================================================================
// Storage Contexts
// ============================================================================

/// Format a creature is stored in. Side games carry their own context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EntityContext {
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    Gen5,
    Gen6,
    Gen7,
    Gen8,
    #[default]
    Gen9,
    /// Let's Go, Pikachu! / Eevee!
    Gen7b,
    /// Legends: Arceus
    Gen8a,
    /// Brilliant Diamond / Shining Pearl
    Gen8b,
}

impl EntityContext {
    /// Mainline generation number
    pub const fn generation(self) -> u8 {
        match self {
            EntityContext::Gen1 => 1,
            EntityContext::Gen2 => 2,
            EntityContext::Gen3 => 3,
            EntityContext::Gen4 => 4,
            EntityContext::Gen5 => 5,
            EntityContext::Gen6 => 6,
            EntityContext::Gen7 | EntityContext::Gen7b => 7,
            EntityContext::Gen8 | EntityContext::Gen8a | EntityContext::Gen8b => 8,
            EntityContext::Gen9 => 9,
        }
    }

    /// Highest species id storable in this context
    pub const fn max_species_id(self) -> u16 {
        match self {
            EntityContext::Gen1 => 151,
            EntityContext::Gen2 => 251,
            EntityContext::Gen3 => 386,
            EntityContext::Gen4 | EntityContext::Gen8b => 493,
            EntityContext::Gen5 => 649,
            EntityContext::Gen6 => 721,
            EntityContext::Gen7 | EntityContext::Gen7b => 809,
            EntityContext::Gen8 => 898,
            EntityContext::Gen8a => 905,
            EntityContext::Gen9 => 1025,
        }
    }

    /// Highest move id usable in this context
    pub const fn max_move_id(self) -> u16 {
        match self {
            EntityContext::Gen1 => MAX_MOVE_ID_1,
            EntityContext::Gen2 => 251,
            EntityContext::Gen3 => 354,
            EntityContext::Gen4 => 467,
            EntityContext::Gen5 => 559,
            EntityContext::Gen6 => 621,
            EntityContext::Gen7 | EntityContext::Gen7b => 742,
            EntityContext::Gen8 | EntityContext::Gen8b => 826,
            EntityContext::Gen8a => 850,
            EntityContext::Gen9 => MAX_MOVE_ID,
        }
    }
}

// ============================================================================
// Learn Environments
// ============================================================================

/// Group of versions sharing one set of learn tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LearnEnvironment {
    RB,
    YW,
    GS,
    C,
    RS,
    E,
    FRLG,
    DPPt,
    HGSS,
    BW,
    B2W2,
    XY,
    ORAS,
    SM,
    USUM,
    GG,
    SWSH,
    PLA,
    BDSP,
    SV,
}

impl LearnEnvironment {
    /// Generation of the versions in this grouping
    pub const fn generation(self) -> u8 {
        use LearnEnvironment::*;
        match self {
            RB | YW => 1,
            GS | C => 2,
            RS | E | FRLG => 3,
            DPPt | HGSS => 4,
            BW | B2W2 => 5,
            XY | ORAS => 6,
            SM | USUM | GG => 7,
            SWSH | PLA | BDSP => 8,
            SV => 9,
        }
    }

    /// Mainline environments a creature passes through in `generation`.
    ///
    /// Side games (Let's Go, Legends: Arceus, BDSP) are only ever an origin,
    /// never a stop on the way to a later format.
    pub const fn of_generation(generation: u8) -> &'static [LearnEnvironment] {
        use LearnEnvironment::*;
        match generation {
            1 => &[RB, YW],
            2 => &[GS, C],
            3 => &[RS, E, FRLG],
            4 => &[DPPt, HGSS],
            5 => &[BW, B2W2],
            6 => &[XY, ORAS],
            7 => &[SM, USUM],
            8 => &[SWSH],
            9 => &[SV],
            _ => &[],
        }
    }
}

// ============================================================================
// Languages
// ============================================================================

/// Language tag stored on a creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LanguageId {
    /// Unset; only legitimate for a few early trades
    Hacked = 0,
    Japanese = 1,
    #[default]
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    /// Never assigned by any game
    Unused6 = 6,
    Spanish = 7,
    Korean = 8,
    ChineseS = 9,
    ChineseT = 10,
}
