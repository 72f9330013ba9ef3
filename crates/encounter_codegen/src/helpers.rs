//! Helper functions for code generation.

use heck::ToShoutySnakeCase;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::models::IdentifierEntry;

/// Convert a snake_case data key into an associated const name.
/// Handles keys starting with digits by prefixing with underscore.
pub fn to_const_ident(key: &str) -> Ident {
    let shouty = key.to_shouty_snake_case();
    if shouty.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        format_ident!("_{}", shouty)
    } else {
        format_ident!("{}", shouty)
    }
}

/// Normalize a display name into a lookup key ("Farfetch'd" -> "farfetchd").
///
/// The generated `from_name` applies the same rule at runtime; change both
/// together.
pub fn to_lookup_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Load an identifier table, sorted by number.
pub fn load_entries(data_dir: &Path, file: &str) -> Vec<(String, IdentifierEntry)> {
    let json = fs::read_to_string(data_dir.join(file)).expect(file);
    let table: BTreeMap<String, IdentifierEntry> =
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("parse {}: {}", file, e));

    let mut entries: Vec<(String, IdentifierEntry)> = table.into_iter().collect();
    entries.sort_by_key(|(_, entry)| entry.num);

    for pair in entries.windows(2) {
        assert!(
            pair[0].1.num != pair[1].1.num,
            "{}: duplicate number {} ({} / {})",
            file,
            pair[0].1.num,
            pair[0].0,
            pair[1].0
        );
    }
    entries
}

/// Associated consts (`pub const PIKACHU: SpeciesId = SpeciesId(25);`) for a newtype.
pub fn const_items(entries: &[(String, IdentifierEntry)], type_ident: &Ident) -> Vec<TokenStream> {
    entries
        .iter()
        .map(|(key, entry)| {
            let ident = to_const_ident(key);
            let num = Literal::u16_unsuffixed(entry.num);
            let doc = format!("{} (#{})", entry.name, entry.num);
            quote! {
                #[doc = #doc]
                pub const #ident: #type_ident = #type_ident(#num);
            }
        })
        .collect()
}

/// `match` arms mapping a raw number to its display name.
pub fn name_arms(entries: &[(String, IdentifierEntry)]) -> Vec<TokenStream> {
    entries
        .iter()
        .map(|(_, entry)| {
            let num = Literal::u16_unsuffixed(entry.num);
            let name = &entry.name;
            quote! { #num => #name }
        })
        .collect()
}

/// `from_name`: normalize like [`to_lookup_key`], then look up the key.
pub fn from_name_fn() -> TokenStream {
    quote! {
        /// Look up by display name, ignoring case and punctuation
        /// ("Farfetch'd", "volt_tackle", "Ho-Oh")
        pub fn from_name(name: &str) -> Option<Self> {
            let key: String = name
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect();
            Self::from_str(&key)
        }
    }
}

/// Build a phf map literal from lookup key to newtype value.
pub fn lookup_map(entries: &[(String, IdentifierEntry)], type_name: &str) -> String {
    let mut phf_map = phf_codegen::Map::new();
    let keys: Vec<(String, u16)> = entries
        .iter()
        .map(|(_, entry)| (to_lookup_key(&entry.name), entry.num))
        .collect();
    for (key, num) in &keys {
        phf_map.entry(key.as_str(), &format!("{}({})", type_name, num));
    }
    phf_map.build().to_string()
}
