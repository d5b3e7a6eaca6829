mod canvas;
mod clock;
mod face;

pub use canvas::{
    glyph::{Charset, Glyph, GlyphTable, GLYPH_ROWS},
    grid::CharGrid,
};
pub use clock::{
    controller::{ClockController, ControlAction},
    source::{from_timelike, FixedClock, SystemClock, TimeSource},
    time::TimeValue,
};
pub use face::{
    circular::CircularRenderer,
    digital::DigitalRenderer,
    geometry::{numeral_angle, tick_angle, FaceGeometry, HandKind, HandVector, RADIUS_PER_SCALE},
    style::{BorderMarker, CircularStyle, Layer, NumeralStyle},
};

/// Smallest scale a `RenderOptions` accepts.
pub const MIN_SCALE: usize = 1;
/// Largest scale a `RenderOptions` accepts.
pub const MAX_SCALE: usize = 5;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("time out of range: {hour}:{minute}:{second}")]
    OutOfRange { hour: u32, minute: u32, second: u32 },
    #[error("invalid time {0:?}, expected HH:MM or HH:MM:SS")]
    Parse(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Digital,
    Circular,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Digital => DisplayMode::Circular,
            DisplayMode::Circular => DisplayMode::Digital,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub mode: DisplayMode,
    /// 24-hour formatting. Digital mode only.
    pub use_24_hour: bool,
    /// Include the seconds field. Digital mode only.
    pub show_seconds: bool,
    pub charset: Charset,
    /// Detail level of the circular face.
    pub style: CircularStyle,
    scale: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Digital,
            use_24_hour: true,
            show_seconds: true,
            charset: Charset::Blocks,
            style: CircularStyle::detailed(),
            scale: 3,
        }
    }
}

impl RenderOptions {
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Sets the scale, clamped into `[MIN_SCALE, MAX_SCALE]`.
    pub fn set_scale(&mut self, scale: usize) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn with_scale(mut self, scale: usize) -> Self {
        self.set_scale(scale);
        self
    }

    /// Text fed to the digital renderer for `time`.
    pub fn digital_text(&self, time: TimeValue) -> String {
        time.format(self.use_24_hour, self.show_seconds)
    }
}

/// Renders a clock face for the mode selected in the options.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockRenderer;

impl ClockRenderer {
    pub fn render(&self, time: TimeValue, options: &RenderOptions) -> String {
        let glyphs = GlyphTable::new(options.charset);
        match options.mode {
            DisplayMode::Digital => {
                DigitalRenderer::new(glyphs).render(&options.digital_text(time), options.scale())
            },
            DisplayMode::Circular => {
                CircularRenderer::new(options.style.clone(), glyphs).render(time, options.scale())
            },
        }
    }
}

/// Renders pre-formatted time text with the default block glyphs.
pub fn render_digital(text: &str, scale: usize) -> String {
    DigitalRenderer::default().render(text, scale)
}

/// Renders the detailed circular face with the default block glyphs.
pub fn render_circular(time: TimeValue, scale: usize) -> String {
    CircularRenderer::default().render(time, scale)
}
