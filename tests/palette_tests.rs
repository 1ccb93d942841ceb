// Host-side tests for theme lookup, palette selection and CSS colours.

mod common;

use common::core::color::Color;
use common::core::theme::*;

#[test]
fn palette_index_is_pure_and_in_range() {
    for theme in Theme::ALL {
        for hue in 0..360 {
            let a = palette_index(theme, hue);
            let b = palette_index(theme, hue);
            assert_eq!(a, b);
            assert!(a < PALETTE_LEN);
        }
    }
}

#[test]
fn light_selects_with_sine_dark_with_cosine() {
    // sin(0)=0 -> 0, sin(1)=0.84 -> 2, sin(3)=0.14 -> 0
    assert_eq!(palette_index(Theme::Light, 0), 0);
    assert_eq!(palette_index(Theme::Light, 1), 2);
    assert_eq!(palette_index(Theme::Light, 3), 0);
    // cos(0)=1 -> 3 mod 3 = 0, cos(1)=0.54 -> 1, |cos(3)|=0.99 -> 2
    assert_eq!(palette_index(Theme::Dark, 0), 0);
    assert_eq!(palette_index(Theme::Dark, 1), 1);
    assert_eq!(palette_index(Theme::Dark, 3), 2);
}

#[test]
fn themes_cycle_colours_differently() {
    let differing = (0..360)
        .filter(|&h| palette_index(Theme::Light, h) != palette_index(Theme::Dark, h))
        .count();
    assert!(differing > 0);
}

#[test]
fn particle_color_uses_selected_swatch() {
    assert_eq!(
        particle_color(Theme::Light, 0, 0.5),
        Color::hsla(100.0, 45.0, 35.0, 0.5)
    );
    assert_eq!(
        particle_color(Theme::Light, 1, 0.5),
        Color::hsla(0.0, 0.0, 10.0, 0.5 * 0.95)
    );
    assert_eq!(
        particle_color(Theme::Dark, 1, 0.4),
        Color::hsla(321.0, 60.0, 60.0, 0.4 * 0.8)
    );
    assert_eq!(
        particle_color(Theme::Dark, 3, 0.4),
        Color::hsla(203.0, 70.0, 60.0, 0.4 * 0.5)
    );
}

#[test]
fn swatch_hue_wraps_within_spread() {
    let maroon = &DARK_STYLE.palette[0];
    assert_eq!(maroon.color(45, 1.0), Color::hsla(355.0, 75.0, 48.0, 1.0));
    assert_eq!(maroon.color(359, 1.0), Color::hsla(369.0, 75.0, 48.0, 1.0));
    let ink = &LIGHT_STYLE.palette[2];
    assert_eq!(ink.color(359, 1.0), Color::hsla(0.0, 0.0, 10.0, 0.95));
}

#[test]
fn theme_lookup_tables() {
    assert_eq!(Theme::Light.style().trig, PaletteTrig::Sin);
    assert_eq!(Theme::Dark.style().trig, PaletteTrig::Cos);
    assert_eq!(
        Theme::Light.style().gradient,
        [
            Color::rgba(255, 255, 255, 0.02),
            Color::rgba(240, 250, 240, 0.03)
        ]
    );
    assert_eq!(
        Theme::Dark.style().gradient,
        [Color::rgba(6, 6, 10, 0.05), Color::rgba(0, 0, 0, 0.15)]
    );
    // light vignette is the fainter one
    for (l, d) in LIGHT_STYLE.gradient.iter().zip(&DARK_STYLE.gradient) {
        assert!(l.alpha() < d.alpha());
    }
}

#[test]
fn stored_theme_values() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(None), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::default(), Theme::Dark);
    for theme in Theme::ALL {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
    assert_eq!(Theme::Light.body_class(), "theme-light");
    assert_eq!(Theme::Dark.body_class(), "theme-dark");
}

#[test]
fn colors_render_as_css() {
    assert_eq!(Color::rgba(255, 255, 255, 0.02).to_css(), "rgba(255,255,255,0.02)");
    assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0,0,0,0)");
    assert_eq!(
        Color::hsla(321.0, 60.0, 60.0, 0.4).to_css(),
        "hsla(321, 60%, 60%, 0.4)"
    );
    assert_eq!(
        particle_color(Theme::Light, 0, 0.25).to_string(),
        "hsla(100, 45%, 35%, 0.25)"
    );
}
