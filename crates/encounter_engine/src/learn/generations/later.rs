//! Generation 4 onward: the default rules apply.

use super::LearnRules;

macro_rules! default_rules {
    ($($(#[$doc:meta])* $name:ident => $gen:expr),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            impl LearnRules for $name {
                const GEN: u8 = $gen;
            }
        )*
    };
}

default_rules! {
    /// Diamond/Pearl/Platinum/HeartGold/SoulSilver
    Gen4 => 4,
    /// Black/White/Black 2/White 2
    Gen5 => 5,
    /// X/Y/Omega Ruby/Alpha Sapphire
    Gen6 => 6,
    /// Sun/Moon/Ultra Sun/Ultra Moon/Let's Go
    Gen7 => 7,
    /// Sword/Shield/Legends: Arceus/Brilliant Diamond/Shining Pearl
    Gen8 => 8,
    /// Scarlet/Violet
    Gen9 => 9,
}
