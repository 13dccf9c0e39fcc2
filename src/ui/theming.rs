// SPDX-License-Identifier: MPL-2.0
//! Theme mode handling plus the palettes drawn by the canvas layers.
//!
//! Widget styles resolve their colors from iced's `Theme` palettes at
//! style time. The canvas layers (loading spinner, particle field) draw
//! raw geometry and cannot, so they read from a `ColorScheme` selected by
//! the effective theme.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors drawn by the ambient particle field, per theme.
#[derive(Debug, Clone)]
pub struct ParticlePalette {
    /// Dot colors, picked at random per particle.
    pub dots: &'static [Color],
    /// Connecting line color between nearby particles.
    pub link: Color,
}

/// Colors consumed by the canvas layers, per theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Brand accent, used by the loading spinner arc.
    pub brand_primary: Color,
    /// Particle field dot and link colors.
    pub particles: ParticlePalette,
}

const LIGHT_PARTICLE_DOTS: &[Color] = &[
    palette::PRIMARY_500,
    palette::ACCENT_INDIGO,
    palette::ACCENT_BLUE,
];

const DARK_PARTICLE_DOTS: &[Color] = &[
    palette::WHITE,
    palette::PRIMARY_500,
    palette::ACCENT_PINK,
    palette::ACCENT_CYAN,
];

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            brand_primary: palette::PRIMARY_500,
            particles: ParticlePalette {
                dots: LIGHT_PARTICLE_DOTS,
                link: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_500
                },
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            brand_primary: palette::PRIMARY_400,
            particles: ParticlePalette {
                dots: DARK_PARTICLE_DOTS,
                link: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::PRIMARY_500
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the opposite explicit mode. Toggling from System resolves
    /// the detected theme first, so the switch is always visible.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_schemes_keep_the_brand_purple() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Red and blue dominate green in a purple
        assert!(light.brand_primary.b > light.brand_primary.g);
        assert!(dark.brand_primary.b > dark.brand_primary.g);
    }

    #[test]
    fn dark_scheme_lightens_the_brand_for_contrast() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(dark.brand_primary.r > light.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggled_flips_between_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn toggled_from_system_lands_on_an_explicit_mode() {
        let toggled = ThemeMode::System.toggled();
        assert_ne!(toggled, ThemeMode::System);
    }

    #[test]
    fn particle_palettes_are_non_empty() {
        assert!(!ColorScheme::light().particles.dots.is_empty());
        assert!(!ColorScheme::dark().particles.dots.is_empty());
    }

    #[test]
    fn particle_links_are_translucent() {
        assert!(ColorScheme::light().particles.link.a < 0.5);
        assert!(ColorScheme::dark().particles.link.a < 0.5);
    }
}
