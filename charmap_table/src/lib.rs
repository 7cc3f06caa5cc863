//! Extracts glyph metadata from font2c output and renders the sorted
//! `char_map[]` lookup table used by the display driver.

pub mod emit;
mod entry;
mod error;
pub mod extract;

pub use crate::entry::GlyphEntry;
pub use crate::error::Error;
pub use crate::extract::{Extraction, Extractor, Unresolved, UnresolvedName};
