/// One glyph of the font table, resolved to the character it draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphEntry {
    font_index: usize,
    name: String,
    codepoint: char,
}

impl GlyphEntry {
    pub fn new<S: Into<String>>(font_index: usize, name: S, codepoint: char) -> Self {
        GlyphEntry {
            font_index,
            name: name.into(),
            codepoint,
        }
    }

    /// Position of the glyph's bitmap in the font array.
    pub fn font_index(&self) -> usize {
        self.font_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codepoint(&self) -> char {
        self.codepoint
    }

    pub fn code(&self) -> u32 {
        self.codepoint as u32
    }
}
