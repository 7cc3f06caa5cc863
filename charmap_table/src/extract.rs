use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use failure::{Fail, Fallible};
use regex::Regex;

use crate::entry::GlyphEntry;
use crate::error::Error;

/// Symbol prefix font2c uses for the 8px Misaki Gothic font.
pub const DEFAULT_GLYPH_PREFIX: &str = "misaki_gothic8_";

/// Why a glyph comment could not be turned into a character.
#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum Unresolved {
    #[fail(display = "unknown character name")]
    UnknownName,
    #[fail(display = "0x{} is not a Unicode scalar value", _0)]
    InvalidCodePoint(String),
}

/// A glyph comment that was skipped. Its font index is still consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedName {
    pub font_index: usize,
    pub name: String,
    pub reason: Unresolved,
}

impl fmt::Display for UnresolvedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.reason {
            Unresolved::UnknownName => write!(f, "Unknown character name: {}", self.name),
            Unresolved::InvalidCodePoint(hex) => write!(
                f,
                "Invalid code point 0x{} for character name: {}",
                hex, self.name
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct Extraction {
    entries: Vec<GlyphEntry>,
    unresolved: Vec<UnresolvedName>,
}

impl Extraction {
    /// Resolved glyphs in the order they appear in the source.
    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    pub fn unresolved(&self) -> &[UnresolvedName] {
        &self.unresolved
    }
}

/// Scans font2c output for `{ // <prefix><name>[_0x<hex>]` glyph comments.
pub struct Extractor {
    pattern: Regex,
}

impl Extractor {
    pub fn new() -> Fallible<Self> {
        Self::with_prefix(DEFAULT_GLYPH_PREFIX)
    }

    pub fn with_prefix(prefix: &str) -> Fallible<Self> {
        let pattern = Regex::new(&format!(
            r"\{{\s*//\s*{}([^_\s]+)(?:_0x([0-9a-fA-F]+))?",
            regex::escape(prefix)
        ))?;
        Ok(Extractor { pattern })
    }

    pub fn extract(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for (font_index, captures) in self.pattern.captures_iter(text).enumerate() {
            let name = &captures[1];
            let hex = captures.get(2).map(|m| m.as_str());

            match resolve(name, hex) {
                Ok(codepoint) => {
                    log::debug!(
                        "glyph {} {:?} -> U+{:04X}",
                        font_index,
                        name,
                        codepoint as u32
                    );
                    extraction
                        .entries
                        .push(GlyphEntry::new(font_index, name, codepoint));
                }
                Err(reason) => {
                    log::warn!("skipping glyph {} {:?}: {}", font_index, name, reason);
                    extraction.unresolved.push(UnresolvedName {
                        font_index,
                        name: name.to_owned(),
                        reason,
                    });
                }
            }
        }

        extraction
    }

    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction, Error> {
        let path = path.as_ref();
        let text = read_source(path).map_err(|cause| Error::FileAccess {
            path: path.display().to_string(),
            cause,
        })?;
        log::debug!("read {} bytes from {}", text.len(), path.display());
        Ok(self.extract(&text))
    }
}

fn read_source(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

/// An explicit hex suffix wins over the name table.
pub fn resolve(name: &str, hex: Option<&str>) -> Result<char, Unresolved> {
    match hex {
        Some(hex) => u32::from_str_radix(hex, 16)
            .ok()
            .and_then(std::char::from_u32)
            .ok_or_else(|| Unresolved::InvalidCodePoint(hex.to_owned())),
        None => charmap_ascii_names::name_to_char(name).ok_or(Unresolved::UnknownName),
    }
}
