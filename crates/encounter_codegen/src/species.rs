//! Species identifier generation.

use crate::helpers::{const_items, from_name_fn, load_entries, lookup_map, name_arms};
use quote::{format_ident, quote};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::writeln;

/// Generate the `SpeciesId` newtype, its consts and the name lookup map
pub fn generate(out_dir: &Path, data_dir: &Path) {
    let entries = load_entries(data_dir, "species.json");
    let type_ident = format_ident!("SpeciesId");

    let consts = const_items(&entries, &type_ident);
    let names = name_arms(&entries);
    let phf_str = lookup_map(&entries, "SpeciesId");
    let count = entries.len();
    let from_name = from_name_fn();

    let code = quote! {
        /// National dex species identifier (0 = no species)
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct SpeciesId(pub u16);

        impl SpeciesId {
            /// Sentinel for an empty species slot
            pub const NONE: SpeciesId = SpeciesId(0);

            /// Number of named species in the data set
            pub const COUNT: usize = #count;

            #(#consts)*

            /// Look up species by normalized name ("hooh", "farfetchd")
            #[inline]
            pub fn from_str(s: &str) -> Option<Self> {
                SPECIES_LOOKUP.get(s).copied()
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

    let dest = out_dir.join("species.rs");
    let mut file = BufWriter::new(File::create(&dest).expect("create species.rs"));
    writeln!(file, "{}", code).unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        "static SPECIES_LOOKUP: phf::Map<&'static str, SpeciesId> = {};",
        phf_str
    )
    .unwrap();
}
