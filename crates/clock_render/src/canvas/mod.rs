pub mod glyph;
pub mod grid;
