//! Symbolic names that font2c gives to the printable ASCII glyphs.
//!
//! The table is generated at build time from `data/ascii-names.txt`.

include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

/// Looks up a symbolic glyph name such as `amp` or `lpar`.
///
/// Names are case sensitive: `A` and `a` are distinct glyphs.
pub fn name_to_char(name: &str) -> Option<char> {
    NAME_MAP.get(name).cloned()
}
