use std::iter;

use crate::canvas::glyph::{Glyph, GlyphTable, GLYPH_ROWS};

/// Blank column appended after every character.
const SEPARATOR: char = ' ';

/// Horizontal row of scaled glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DigitalRenderer {
    glyphs: GlyphTable,
}

impl DigitalRenderer {
    pub fn new(glyphs: GlyphTable) -> Self {
        Self { glyphs }
    }

    /// Renders `text` with every cell repeated `scale` times in both
    /// directions. A scale of zero renders at scale one.
    pub fn render(&self, text: &str, scale: usize) -> String {
        let scale = scale.max(1);
        let glyphs: Vec<Glyph> = text.chars().map(|ch| self.glyphs.glyph(ch)).collect();

        let mut lines = Vec::with_capacity(GLYPH_ROWS * scale);
        for row in 0..GLYPH_ROWS {
            let mut line = String::new();
            for glyph in &glyphs {
                for cell in glyph.row(row) {
                    line.extend(iter::repeat(cell).take(scale));
                }
                line.push(SEPARATOR);
            }

            lines.extend(iter::repeat(line).take(scale));
        }

        lines.join("\n")
    }

    /// Columns and lines `render` produces for `text` at `scale`.
    pub fn dimensions(&self, text: &str, scale: usize) -> (usize, usize) {
        let scale = scale.max(1);
        let columns = text.chars().map(|ch| self.glyphs.glyph(ch).width() * scale + 1).sum();
        (columns, GLYPH_ROWS * scale)
    }
}
