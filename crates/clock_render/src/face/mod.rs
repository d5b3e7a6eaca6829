pub mod circular;
pub mod digital;
pub mod geometry;
pub mod style;
