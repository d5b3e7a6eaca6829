/// One drawing pass of the circular face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Hands,
    Border,
    Ticks,
    Numerals,
}

/// How border rings are stamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderMarker {
    /// `\` or `/` depending on the quadrant, overwriting whatever is below.
    Diagonal,
    /// A single character, written only on blank cells.
    Uniform(char),
}

/// How the hour numerals are stamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumeralStyle {
    /// Full five-row glyphs centred on the anchor point.
    Glyph,
    /// Bare decimal digits on the anchor row.
    Plain,
}

/// Detail level of the circular face.
///
/// Layers are drawn in order, so later layers overwrite earlier ones. The
/// detailed preset draws hands first: the border, ticks and numerals stamp
/// over any hand cell they share.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularStyle {
    /// Number of concentric border rings, starting at the face radius.
    pub rings: usize,
    /// Angle increment in degrees when tracing a ring.
    pub border_step: f64,
    pub border_marker: BorderMarker,
    pub numerals: NumeralStyle,
    /// Distance from the face radius to the numeral anchors.
    pub numeral_inset: usize,
    /// Horizontal multiplier compensating for cells taller than wide.
    pub stretch: usize,
    pub layers: Vec<Layer>,
}

impl CircularStyle {
    pub fn detailed() -> Self {
        Self {
            rings: 3,
            border_step: 0.25,
            border_marker: BorderMarker::Diagonal,
            numerals: NumeralStyle::Glyph,
            numeral_inset: 3,
            stretch: 2,
            layers: vec![Layer::Hands, Layer::Border, Layer::Ticks, Layer::Numerals],
        }
    }

    pub fn simple() -> Self {
        Self {
            rings: 1,
            border_step: 1.0,
            border_marker: BorderMarker::Uniform('*'),
            numerals: NumeralStyle::Plain,
            numeral_inset: 2,
            stretch: 1,
            layers: vec![Layer::Hands, Layer::Border, Layer::Numerals],
        }
    }

    pub fn with_layers(mut self, layers: impl Into<Vec<Layer>>) -> Self {
        self.layers = layers.into();
        self
    }

    pub fn has_layer(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }

    /// Ring step in degrees, falling back to whole degrees for non-positive
    /// or non-finite values.
    pub fn effective_border_step(&self) -> f64 {
        if self.border_step.is_finite() && self.border_step > 0.0 {
            self.border_step
        } else {
            1.0
        }
    }
}

impl Default for CircularStyle {
    fn default() -> Self {
        Self::detailed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_draws_hands_first() {
        let style = CircularStyle::default();
        assert_eq!(style.layers.first(), Some(&Layer::Hands));
        assert!(style.has_layer(Layer::Ticks));
    }

    #[test]
    fn simple_has_no_ticks() {
        assert!(!CircularStyle::simple().has_layer(Layer::Ticks));
    }

    #[test]
    fn invalid_step_falls_back() {
        let mut style = CircularStyle::detailed();
        style.border_step = 0.0;
        assert_eq!(style.effective_border_step(), 1.0);
        style.border_step = f64::NAN;
        assert_eq!(style.effective_border_step(), 1.0);
    }

    #[test]
    fn layers_can_be_reordered() {
        let style = CircularStyle::detailed().with_layers([Layer::Border, Layer::Hands]);
        assert_eq!(style.layers, vec![Layer::Border, Layer::Hands]);
    }
}
