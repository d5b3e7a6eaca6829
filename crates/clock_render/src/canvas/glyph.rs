/// Number of rows in every glyph bitmap.
pub const GLYPH_ROWS: usize = 5;

const FILLED: char = '#';
const SHADE: char = '+';

type Pattern = [&'static str; GLYPH_ROWS];

static BLANK: Pattern = [" "; GLYPH_ROWS];

static DIGITS: [Pattern; 10] = [
    [" ## ", "#  #", "#  #", "#  #", " ## "],
    ["  # ", " ## ", "  # ", "  # ", " ###"],
    ["### ", "   #", " ## ", "#   ", "####"],
    ["### ", "   #", " ## ", "   #", "### "],
    ["#  #", "#  #", "####", "   #", "   #"],
    ["####", "#   ", "### ", "   #", "### "],
    [" ## ", "#   ", "### ", "#  #", " ## "],
    ["####", "   #", "  # ", " #  ", " #  "],
    [" ## ", "#  #", " ## ", "#  #", " ## "],
    [" ## ", "#  #", " ###", "   #", " ## "],
];

static COLON: Pattern = ["   ", " + ", "   ", " + ", "   "];

/// Concrete characters substituted for the glyph cell markers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Unicode block elements.
    #[default]
    Blocks,
    /// Plain ASCII for terminals without block glyphs.
    Ascii,
}

impl Charset {
    pub fn filled(self) -> char {
        match self {
            Charset::Blocks => '█',
            Charset::Ascii => '#',
        }
    }

    pub fn shade(self) -> char {
        match self {
            Charset::Blocks => '░',
            Charset::Ascii => ':',
        }
    }

    /// Marker for the twelve five-minute ticks of the circular face.
    pub fn major_tick(self) -> char {
        match self {
            Charset::Blocks => '•',
            Charset::Ascii => '*',
        }
    }

    pub fn minor_tick(self) -> char {
        '.'
    }

    fn cell(self, marker: char) -> char {
        match marker {
            FILLED => self.filled(),
            SHADE => self.shade(),
            _ => ' ',
        }
    }
}

/// Five-row bitmap for a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pattern: &'static Pattern,
    charset: Charset,
}

impl Glyph {
    /// Width of the glyph in cells. Every row shares it.
    pub fn width(&self) -> usize {
        self.pattern[0].len()
    }

    /// Cells of a single row, left to right.
    ///
    /// Panics if `index` is not below [`GLYPH_ROWS`].
    pub fn row(&self, index: usize) -> impl Iterator<Item = char> {
        let charset = self.charset;
        let row: &'static str = self.pattern[index];
        row.chars().map(move |marker| charset.cell(marker))
    }

    pub fn is_blank(&self) -> bool {
        self.pattern.iter().all(|row| row.chars().all(|marker| marker == ' '))
    }
}

/// Lookup from characters to their glyph bitmaps.
///
/// Only the digits and `:` have glyphs. Every other character resolves to a
/// one-cell-wide blank glyph, so lookups never fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphTable {
    charset: Charset,
}

impl GlyphTable {
    pub fn new(charset: Charset) -> Self {
        Self { charset }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn contains(&self, ch: char) -> bool {
        ch.is_ascii_digit() || ch == ':'
    }

    pub fn glyph(&self, ch: char) -> Glyph {
        let pattern = match ch {
            '0'..='9' => &DIGITS[ch as usize - '0' as usize],
            ':' => &COLON,
            _ => &BLANK,
        };
        Glyph { pattern, charset: self.charset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(glyph: Glyph) -> Vec<String> {
        (0..GLYPH_ROWS).map(|row| glyph.row(row).collect()).collect()
    }

    #[test]
    fn zero_uses_block_cells() {
        let table = GlyphTable::default();
        assert_eq!(rows(table.glyph('0')), vec![" ██ ", "█  █", "█  █", "█  █", " ██ "]);
    }

    #[test]
    fn colon_is_narrow_and_shaded() {
        let table = GlyphTable::default();
        let colon = table.glyph(':');
        assert_eq!(colon.width(), 3);
        assert_eq!(rows(colon)[1], " ░ ");
    }

    #[test]
    fn digits_share_dimensions() {
        let table = GlyphTable::default();
        for ch in '0'..='9' {
            let glyph = table.glyph(ch);
            assert_eq!(glyph.width(), 4, "digit {ch}");
            for row in rows(glyph) {
                assert_eq!(row.chars().count(), 4, "digit {ch}");
            }
        }
    }

    #[test]
    fn unknown_characters_fall_back_to_blank() {
        let table = GlyphTable::default();
        for ch in ['a', ' ', '-', 'é'] {
            let glyph = table.glyph(ch);
            assert!(!table.contains(ch));
            assert!(glyph.is_blank());
            assert_eq!(glyph.width(), 1);
            assert_eq!(rows(glyph), vec![" "; GLYPH_ROWS]);
        }
    }

    #[test]
    fn ascii_charset_substitutes_markers() {
        let table = GlyphTable::new(Charset::Ascii);
        assert_eq!(rows(table.glyph('4'))[2], "####");
        assert_eq!(rows(table.glyph(':'))[3], " : ");
    }
}
