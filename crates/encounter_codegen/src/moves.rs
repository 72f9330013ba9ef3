//! Move identifier generation.

use crate::helpers::{const_items, from_name_fn, load_entries, lookup_map, name_arms};
use quote::{format_ident, quote};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::writeln;

/// Generate the `MoveId` newtype, its consts and the name lookup map
pub fn generate(out_dir: &Path, data_dir: &Path) {
    let entries = load_entries(data_dir, "moves.json");
    let type_ident = format_ident!("MoveId");

    let consts = const_items(&entries, &type_ident);
    let names = name_arms(&entries);
    let phf_str = lookup_map(&entries, "MoveId");
    let count = entries.len();
    let from_name = from_name_fn();

    let code = quote! {
        /// Move identifier (0 = empty move slot)
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct MoveId(pub u16);

        impl MoveId {
            /// Sentinel for an empty move slot
            pub const NONE: MoveId = MoveId(0);

            /// Number of named moves in the data set
            pub const COUNT: usize = #count;

            #(#consts)*

            /// Look up a move by normalized name ("thundershock")
            #[inline]
            pub fn from_str(s: &str) -> Option<Self> {
                MOVE_LOOKUP.get(s).copied()
            }

            #from_name

            /// Display name, or "???" for ids outside the data set
            pub fn name(self) -> &'static str {
                match self.0 {
                    0 => "(None)",
                    #(#names,)*
                    _ => "???",
                }
            }
        }
    };

    let dest = out_dir.join("moves.rs");
    let mut file = BufWriter::new(File::create(&dest).expect("create moves.rs"));
    writeln!(file, "{}", code).unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "static MOVE_LOOKUP: phf::Map<&'static str, MoveId> = {};",
        phf_str
    )
    .unwrap();
}
