use std::f64::consts::PI;

use super::style::CircularStyle;
use crate::clock::time::TimeValue;

/// Face radius in rows for each unit of scale.
pub const RADIUS_PER_SCALE: usize = 6;

/// Blank rows kept around the outermost ring.
const EDGE_MARGIN: usize = 2;

/// Rounds halves toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Screen-space angle of hour numeral `n` (1-12), with 12 pointing up.
pub fn numeral_angle(n: u32) -> f64 {
    (PI / 6.0) * (f64::from(n) - 3.0)
}

/// Screen-space angle of the tick at second position `s`.
pub fn tick_angle(s: u32) -> f64 {
    (PI / 30.0) * f64::from(s) - PI / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    pub fn marker(self) -> char {
        match self {
            HandKind::Hour => 'H',
            HandKind::Minute => 'M',
            HandKind::Second => 'S',
        }
    }

    /// Hand length as a fraction of the face radius.
    pub fn length_ratio(self) -> f64 {
        match self {
            HandKind::Hour => 0.5,
            HandKind::Minute => 0.7,
            HandKind::Second => 0.9,
        }
    }

    /// Angle in radians: zero points right, growing clockwise on screen.
    pub fn angle(self, time: TimeValue) -> f64 {
        match self {
            HandKind::Second => (PI / 30.0) * f64::from(time.second()) - PI / 2.0,
            HandKind::Minute => (PI / 30.0) * f64::from(time.minute()) - PI / 2.0,
            HandKind::Hour => {
                (PI / 6.0) * f64::from(time.hour() % 12) + (PI / 360.0) * f64::from(time.minute())
                    - PI / 2.0
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandVector {
    pub angle: f64,
    /// Number of unit steps walked from the centre.
    pub length: usize,
    pub marker: char,
}

impl HandVector {
    pub fn new(kind: HandKind, time: TimeValue, radius: usize) -> Self {
        let length = (radius as f64 * kind.length_ratio()).floor() as usize;
        Self { angle: kind.angle(time), length, marker: kind.marker() }
    }
}

/// Grid dimensions and centre of a circular face.
///
/// Everything is derived from the scale and the style before drawing starts;
/// the centre comes from the grid size rather than the other way around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceGeometry {
    pub radius: usize,
    pub width: usize,
    pub height: usize,
    pub center_x: f64,
    pub center_y: f64,
    pub stretch: f64,
}

impl FaceGeometry {
    pub fn new(scale: usize, style: &CircularStyle) -> Self {
        let radius = scale.max(1) * RADIUS_PER_SCALE;
        let stretch = style.stretch.max(1);

        let pad_y = style.rings + EDGE_MARGIN;
        let pad_x = style.rings * stretch + EDGE_MARGIN;

        let diameter = radius * 2 + 1;
        let width = diameter * stretch + pad_x * 2;
        let height = diameter + pad_y * 2;

        Self {
            radius,
            width,
            height,
            center_x: (width / 2) as f64,
            center_y: (radius + pad_y) as f64,
            stretch: stretch as f64,
        }
    }

    /// Cell reached by walking `distance` rows from the centre at `angle`.
    pub fn project(&self, angle: f64, distance: f64) -> (i64, i64) {
        let x = round_half_up(self.center_x + angle.cos() * distance * self.stretch);
        let y = round_half_up(self.center_y + angle.sin() * distance);
        (x, y)
    }

    /// Anchor cell of hour numeral `n` placed `inset` rows inside the radius.
    pub fn numeral_anchor(&self, n: u32, inset: usize) -> (i64, i64) {
        let distance = self.radius as f64 - inset as f64;
        self.project(numeral_angle(n), distance)
    }
}
