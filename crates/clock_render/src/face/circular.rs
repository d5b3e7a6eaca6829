use std::f64::consts::PI;

use log::trace;

use super::geometry::{tick_angle, FaceGeometry, HandKind, HandVector};
use super::style::{BorderMarker, CircularStyle, Layer, NumeralStyle};
use crate::canvas::glyph::{GlyphTable, GLYPH_ROWS};
use crate::canvas::grid::CharGrid;
use crate::clock::time::TimeValue;

const TICK_POSITIONS: u32 = 60;

/// Analog clock face projected onto a character grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CircularRenderer {
    style: CircularStyle,
    glyphs: GlyphTable,
}

impl CircularRenderer {
    pub fn new(style: CircularStyle, glyphs: GlyphTable) -> Self {
        Self { style, glyphs }
    }

    pub fn style(&self) -> &CircularStyle {
        &self.style
    }

    pub fn geometry(&self, scale: usize) -> FaceGeometry {
        FaceGeometry::new(scale, &self.style)
    }

    pub fn render(&self, time: TimeValue, scale: usize) -> String {
        self.render_grid(time, scale).to_text()
    }

    pub fn render_grid(&self, time: TimeValue, scale: usize) -> CharGrid {
        let geometry = self.geometry(scale);
        let mut grid = CharGrid::new(geometry.width, geometry.height);
        trace!(
            "circular face {}x{} radius {} at {time}",
            geometry.width,
            geometry.height,
            geometry.radius
        );

        for layer in &self.style.layers {
            match layer {
                Layer::Hands => draw_hands(&mut grid, &geometry, time),
                Layer::Border => self.draw_border(&mut grid, &geometry),
                Layer::Ticks => self.draw_ticks(&mut grid, &geometry),
                Layer::Numerals => self.draw_numerals(&mut grid, &geometry),
            }
        }

        grid
    }

    fn draw_border(&self, grid: &mut CharGrid, geometry: &FaceGeometry) {
        let step = self.style.effective_border_step();
        let steps = (360.0 / step).ceil() as usize;

        for ring in 0..self.style.rings {
            let ring_radius = (geometry.radius + ring) as f64;
            for index in 0..steps {
                let radians = (index as f64 * step) * PI / 180.0;
                let dx = radians.cos() * ring_radius * geometry.stretch;
                let dy = radians.sin() * ring_radius;
                let x = round_cell(geometry.center_x + dx);
                let y = round_cell(geometry.center_y + dy);

                match self.style.border_marker {
                    BorderMarker::Diagonal => {
                        let marker = if sign(dx) * sign(dy) > 0 { '\\' } else { '/' };
                        grid.set(x, y, marker);
                    },
                    BorderMarker::Uniform(marker) => {
                        grid.set_if_blank(x, y, marker);
                    },
                }
            }
        }
    }

    fn draw_ticks(&self, grid: &mut CharGrid, geometry: &FaceGeometry) {
        let charset = self.glyphs.charset();
        let distance = geometry.radius as f64 - 1.0;
        for position in 0..TICK_POSITIONS {
            let (x, y) = geometry.project(tick_angle(position), distance);
            let marker =
                if position % 5 == 0 { charset.major_tick() } else { charset.minor_tick() };
            grid.set(x, y, marker);
        }
    }

    fn draw_numerals(&self, grid: &mut CharGrid, geometry: &FaceGeometry) {
        for numeral in 1..=12u32 {
            let (x, y) = geometry.numeral_anchor(numeral, self.style.numeral_inset);
            match self.style.numerals {
                NumeralStyle::Glyph => self.stamp_glyph_numeral(grid, numeral, x, y),
                NumeralStyle::Plain => stamp_plain_numeral(grid, numeral, x, y),
            }
        }
    }

    /// Stamps the numeral's glyphs centred on `(x, y)`, leaving blank glyph
    /// cells untouched.
    fn stamp_glyph_numeral(&self, grid: &mut CharGrid, numeral: u32, x: i64, y: i64) {
        let digits: Vec<_> = numeral.to_string().chars().map(|d| self.glyphs.glyph(d)).collect();
        let top = y - (GLYPH_ROWS / 2) as i64;

        for row in 0..GLYPH_ROWS {
            let mut line: Vec<char> = Vec::new();
            for (index, glyph) in digits.iter().enumerate() {
                if index > 0 {
                    line.push(CharGrid::BLANK);
                }
                line.extend(glyph.row(row));
            }

            let left = x - (line.len() / 2) as i64;
            for (col, &ch) in line.iter().enumerate() {
                if ch != CharGrid::BLANK {
                    grid.set(left + col as i64, top + row as i64, ch);
                }
            }
        }
    }
}

fn draw_hands(grid: &mut CharGrid, geometry: &FaceGeometry, time: TimeValue) {
    for kind in HandKind::ALL {
        let hand = HandVector::new(kind, time, geometry.radius);
        for step in 1..=hand.length {
            let (x, y) = geometry.project(hand.angle, step as f64);
            grid.set(x, y, hand.marker);
        }
    }
}

fn stamp_plain_numeral(grid: &mut CharGrid, numeral: u32, x: i64, y: i64) {
    let text: Vec<char> = numeral.to_string().chars().collect();
    let left = x - (text.len() / 2) as i64;
    for (col, &ch) in text.iter().enumerate() {
        grid.set(left + col as i64, y, ch);
    }
}

fn round_cell(value: f64) -> i64 {
    super::geometry::round_half_up(value)
}

/// Sign with zero counted as positive.
fn sign(value: f64) -> i32 {
    if value < 0.0 {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::glyph::Charset;

    fn time(hour: u32, minute: u32, second: u32) -> TimeValue {
        TimeValue::new(hour, minute, second).unwrap()
    }

    fn hands_only(style: CircularStyle) -> CircularRenderer {
        CircularRenderer::new(style.with_layers([Layer::Hands]), GlyphTable::default())
    }

    #[test]
    fn output_is_rectangular() {
        let renderer = CircularRenderer::default();
        let text = renderer.render(time(10, 9, 30), 2);
        let geometry = renderer.geometry(2);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), geometry.height);
        for line in lines {
            assert_eq!(line.chars().count(), geometry.width);
        }
    }

    #[test]
    fn hands_walk_from_the_centre() {
        let renderer = hands_only(CircularStyle::detailed());
        // 03:00:15 puts hour and second hands on the same ray, pointing right.
        let grid = renderer.render_grid(time(3, 0, 15), 1);
        let (cx, cy) = (21, 11);

        assert_eq!(grid.get(cx, cy), Some(' '));
        // Hour hand (3 steps) is overdrawn by the longer second hand (5 steps).
        for step in 1..=5 {
            assert_eq!(grid.get(cx + step * 2, cy), Some('S'), "step {step}");
        }
        // Minute hand points up four rows.
        for step in 1..=4 {
            assert_eq!(grid.get(cx, cy - step), Some('M'), "step {step}");
        }
        assert_eq!(grid.count('H'), 0);
    }

    #[test]
    fn hour_hand_drawn_when_not_covered() {
        let renderer = hands_only(CircularStyle::detailed());
        let grid = renderer.render_grid(time(6, 0, 0), 1);
        let (cx, cy) = (21, 11);
        for step in 1..=3 {
            assert_eq!(grid.get(cx, cy + step), Some('H'));
        }
    }

    #[test]
    fn diagonal_border_uses_quadrant_markers() {
        let style = CircularStyle::detailed().with_layers([Layer::Border]);
        let renderer = CircularRenderer::new(style, GlyphTable::default());
        let grid = renderer.render_grid(TimeValue::MIDNIGHT, 1);
        let (cx, cy) = (21, 11);

        // Bottom-right quadrant: dx and dy share a sign.
        assert_eq!(grid.get(cx + 8, cy + 4), Some('\\'));
        // Top-right quadrant: dy is negative.
        assert_eq!(grid.get(cx + 8, cy - 4), Some('/'));
        // The last sweep step below 360 degrees leaves the rightmost cell as '/'.
        assert_eq!(grid.get(cx + 12, cy), Some('/'));
        assert_eq!(grid.get(cx, cy), Some(' '));
    }

    #[test]
    fn uniform_border_never_overwrites() {
        let style = CircularStyle::simple().with_layers([Layer::Hands, Layer::Border]);
        let renderer = CircularRenderer::new(style, GlyphTable::default());
        let with_border = renderer.render_grid(time(9, 15, 40), 1);
        let hands = hands_only(CircularStyle::simple()).render_grid(time(9, 15, 40), 1);

        assert_eq!(with_border.count('S'), hands.count('S'));
        assert_eq!(with_border.count('M'), hands.count('M'));
        assert!(with_border.count('*') > 0);
    }

    #[test]
    fn ticks_mark_five_minute_positions() {
        let style = CircularStyle::detailed().with_layers([Layer::Ticks]);
        let renderer = CircularRenderer::new(style, GlyphTable::default());
        let grid = renderer.render_grid(TimeValue::MIDNIGHT, 3);
        let geometry = renderer.geometry(3);

        assert_eq!(grid.count('•'), 12);
        assert!(grid.count('.') > 0);
        let (x, y) = geometry.project(tick_angle(0), geometry.radius as f64 - 1.0);
        assert_eq!(grid.get(x, y), Some('•'));
    }

    #[test]
    fn ascii_charset_changes_major_ticks() {
        let style = CircularStyle::detailed().with_layers([Layer::Ticks]);
        let renderer = CircularRenderer::new(style, GlyphTable::new(Charset::Ascii));
        let grid = renderer.render_grid(TimeValue::MIDNIGHT, 3);
        assert_eq!(grid.count('•'), 0);
        assert_eq!(grid.count('*'), 12);
    }

    #[test]
    fn glyph_numerals_are_centred_on_the_anchor() {
        let style = CircularStyle::detailed().with_layers([Layer::Numerals]);
        let renderer = CircularRenderer::new(style, GlyphTable::default());
        let grid = renderer.render_grid(TimeValue::MIDNIGHT, 5);
        let geometry = renderer.geometry(5);

        // "6" is 4 cells wide; its glyph row 0 is " ██ ".
        let (x, y) = geometry.numeral_anchor(6, 3);
        assert_eq!(grid.get(x - 2, y - 2), Some(' '));
        assert_eq!(grid.get(x - 1, y - 2), Some('█'));
        assert_eq!(grid.get(x, y - 2), Some('█'));
        assert_eq!(grid.get(x + 1, y - 2), Some(' '));
    }

    #[test]
    fn plain_numerals_are_bare_digits() {
        let style = CircularStyle::simple().with_layers([Layer::Numerals]);
        let renderer = CircularRenderer::new(style, GlyphTable::default());
        let grid = renderer.render_grid(TimeValue::MIDNIGHT, 2);
        let geometry = renderer.geometry(2);

        let (x, y) = geometry.numeral_anchor(12, 2);
        assert_eq!(grid.get(x - 1, y), Some('1'));
        assert_eq!(grid.get(x, y), Some('2'));
        let (x, y) = geometry.numeral_anchor(3, 2);
        assert_eq!(grid.get(x, y), Some('3'));
        assert_eq!(grid.count('█'), 0);
    }

    #[test]
    fn later_layers_cover_hands() {
        let time = time(0, 0, 0);
        let covered = CircularRenderer::default().render_grid(time, 1);
        let hands_last = CircularRenderer::new(
            CircularStyle::detailed().with_layers([
                Layer::Border,
                Layer::Ticks,
                Layer::Numerals,
                Layer::Hands,
            ]),
            GlyphTable::default(),
        )
        .render_grid(time, 1);

        // At midnight every hand points at 12 and runs under the numeral.
        assert!(hands_last.count('S') > covered.count('S'));
    }

    #[test]
    fn dimensions_do_not_depend_on_time() {
        let renderer = CircularRenderer::default();
        for scale in 1..=5 {
            let a = renderer.render_grid(time(0, 0, 0), scale);
            let b = renderer.render_grid(time(17, 43, 12), scale);
            assert_eq!((a.width(), a.height()), (b.width(), b.height()));
        }
    }
}
