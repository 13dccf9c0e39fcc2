// SPDX-License-Identifier: MPL-2.0
//! One submission card in the gallery grid.
//!
//! The whole card surface is a button opening the modal at this card's
//! index. Hovering spawns a sparkle burst drawn by a transparent canvas
//! layer stacked over the surface.

use crate::app::Message;
use crate::gallery::{LoadedSubmission, MediaAsset};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::SparklePool;
use iced::widget::{button, canvas, column, container, image, mouse_area, stack, text, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Longest description preview shown on a card, in characters.
const PREVIEW_LIMIT: usize = 140;

/// Renders the card for the submission at `index`.
pub fn view<'a>(
    index: usize,
    submission: &'a LoadedSubmission,
    i18n: &'a I18n,
    sparkles: &'a SparklePool,
) -> Element<'a, Message> {
    let record = &submission.record;

    let media: Element<'a, Message> = match &submission.media {
        MediaAsset::Image(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        MediaAsset::Video(_) => glyph_face("🎬"),
        MediaAsset::Placeholder => glyph_face("🎨"),
    };
    let media = container(media)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_MEDIA_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::media_well);

    let author = i18n.tr_with_args("card-by-author", &[("name", record.name.as_str())]);

    let body = column![
        media,
        text(&record.project_title).size(typography::TITLE_SM),
        secondary_text(author, typography::BODY_SM),
        secondary_text(preview(&record.description), typography::BODY_SM),
        text(format!("{} →", i18n.tr("card-view-project")))
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().primary.base.color),
            }),
    ]
    .spacing(spacing::XS)
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::CARD_WIDTH));

    let surface = button(body)
        .padding(0)
        .style(styles::button::card)
        .on_press(Message::OpenModal(index));

    let burst_layer = canvas(sparkles.layer(index))
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(stack![surface, burst_layer])
        .on_enter(Message::CardHovered(index))
        .into()
}

/// Large emoji face for cards without a displayable image.
fn glyph_face(glyph: &str) -> Element<'_, Message> {
    text(glyph).size(sizing::ICON_XXL).into()
}

fn secondary_text<'a>(content: String, size: f32) -> Text<'a> {
    text(content)
        .size(size)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.weak.text),
        })
}

/// First characters of the description, with an ellipsis when truncated.
fn preview(description: &str) -> String {
    if description.chars().count() <= PREVIEW_LIMIT {
        return description.to_string();
    }

    let cut: String = description.chars().take(PREVIEW_LIMIT).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_is_not_truncated() {
        assert_eq!(preview("hello"), "hello");
    }

    #[test]
    fn long_description_gets_an_ellipsis() {
        let long = "x".repeat(500);
        let shown = preview(&long);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), PREVIEW_LIMIT + 1);
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let long = "é".repeat(200);
        let shown = preview(&long);
        assert!(shown.ends_with('…'));
        assert_eq!(shown.chars().count(), PREVIEW_LIMIT + 1);
    }
}
