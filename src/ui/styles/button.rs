// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style for overlay buttons (navigation arrows, close, fullscreen).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for the clickable submission card.
/// The whole card is a button; hovering lifts it with a brand border.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg, text_color, border_color) = if is_light {
        (WHITE, palette::GRAY_900, palette::GRAY_200)
    } else {
        (Color::from_rgb(0.15, 0.15, 0.15), WHITE, palette::GRAY_700)
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Style for inline description links: no surface, brand-colored text.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => {
            if is_light {
                palette::PRIMARY_700
            } else {
                palette::PRIMARY_200
            }
        }
        _ => {
            if is_light {
                palette::PRIMARY_600
            } else {
                palette::PRIMARY_400
            }
        }
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for quiet header actions (theme toggle, reload).
/// Transparent until hovered so they read as chrome, not content.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (text_color, hover_bg) = if is_light {
        (palette::GRAY_700, palette::GRAY_100)
    } else {
        (palette::GRAY_200, palette::GRAY_700)
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover_bg)),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn card_hover_switches_to_brand_border() {
        let theme = Theme::Light;

        let rest = card(&theme, button::Status::Active);
        let hover = card(&theme, button::Status::Hovered);

        assert_ne!(rest.border.color, hover.border.color);
        assert_eq!(hover.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn link_has_no_surface() {
        let theme = Theme::Dark;
        let style = link(&theme, button::Status::Active);
        assert!(style.background.is_none());
    }
}
