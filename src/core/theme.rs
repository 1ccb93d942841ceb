use super::color::Color;

/// Site colour scheme. Dark is the default for first visits and for any
/// stored value other than `"light"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything but `"light"` means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Class toggled on `<body>` for this theme.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn style(self) -> &'static ThemeStyle {
        match self {
            Theme::Light => &LIGHT_STYLE,
            Theme::Dark => &DARK_STYLE,
        }
    }
}

/// Which trig function maps a hue seed onto a palette slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteTrig {
    Sin,
    Cos,
}

impl PaletteTrig {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            PaletteTrig::Sin => x.sin(),
            PaletteTrig::Cos => x.cos(),
        }
    }
}

/// One palette entry. Hue is `hue_base + seed % hue_spread` (fixed when
/// `hue_spread` is 0); alpha is the particle alpha times `alpha_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swatch {
    pub hue_base: f64,
    pub hue_spread: u32,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha_scale: f64,
}

impl Swatch {
    const fn new(
        hue_base: f64,
        hue_spread: u32,
        saturation: f64,
        lightness: f64,
        alpha_scale: f64,
    ) -> Self {
        Self {
            hue_base,
            hue_spread,
            saturation,
            lightness,
            alpha_scale,
        }
    }

    pub fn color(&self, hue_seed: u32, alpha: f64) -> Color {
        let offset = if self.hue_spread == 0 {
            0
        } else {
            hue_seed % self.hue_spread
        };
        Color::hsla(
            self.hue_base + offset as f64,
            self.saturation,
            self.lightness,
            alpha * self.alpha_scale,
        )
    }
}

pub const PALETTE_LEN: usize = 3;

/// Everything theme-dependent about a frame: vignette stops, particle
/// palette and the palette selector.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeStyle {
    pub gradient: [Color; 2],
    pub palette: [Swatch; PALETTE_LEN],
    pub trig: PaletteTrig,
}

// olive, pale cyan, dark ink
pub static LIGHT_STYLE: ThemeStyle = ThemeStyle {
    gradient: [
        Color::rgba(255, 255, 255, 0.02),
        Color::rgba(240, 250, 240, 0.03),
    ],
    palette: [
        Swatch::new(100.0, 30, 45.0, 35.0, 1.0),
        Swatch::new(200.0, 40, 70.0, 65.0, 0.85),
        Swatch::new(0.0, 0, 0.0, 10.0, 0.95),
    ],
    trig: PaletteTrig::Sin,
};

// maroon, purple/pink, bluish glow
pub static DARK_STYLE: ThemeStyle = ThemeStyle {
    gradient: [Color::rgba(6, 6, 10, 0.05), Color::rgba(0, 0, 0, 0.15)],
    palette: [
        Swatch::new(350.0, 20, 75.0, 48.0, 1.0),
        Swatch::new(320.0, 30, 60.0, 60.0, 0.8),
        Swatch::new(200.0, 30, 70.0, 60.0, 0.5),
    ],
    trig: PaletteTrig::Cos,
};

/// Palette slot for a hue seed: `floor(|trig(hue)| * 3) mod 3`.
#[inline]
pub fn palette_index(theme: Theme, hue_seed: u32) -> usize {
    let t = theme.style().trig.apply(hue_seed as f64).abs();
    ((t * PALETTE_LEN as f64).floor() as usize) % PALETTE_LEN
}

/// Fill colour for a particle under `theme`.
pub fn particle_color(theme: Theme, hue_seed: u32, alpha: f64) -> Color {
    let swatch = &theme.style().palette[palette_index(theme, hue_seed)];
    swatch.color(hue_seed, alpha)
}
