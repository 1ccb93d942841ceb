use std::fmt;

/// A CSS colour value as handed to the 2D canvas.
///
/// `Display` renders the functional CSS notation (`rgba(..)` / `hsla(..)`),
/// which is what `fillStyle`, `shadowColor` and gradient stops accept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// Channels 0..=255, alpha 0..1.
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Hue in degrees, saturation/lightness in percent, alpha 0..1.
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{})", r, g, b, a),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}
