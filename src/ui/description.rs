// SPDX-License-Identifier: MPL-2.0
//! Rendering of submission descriptions.
//!
//! Descriptions go through the restricted markup parser and render as rich
//! text: literal segments stay literal (text widgets never interpret their
//! content), recognized `[label](url)` links become activatable spans. The
//! font size shrinks with the description tier so long text keeps the
//! overlay controls on screen.

use crate::app::Message;
use crate::gallery::markup::{self, Segment};
use crate::gallery::record::{DescriptionTier, SubmissionRecord};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{rich_text, span, text};
use iced::{Element, Theme};

/// Font size for a description tier.
#[must_use]
pub fn tier_size(tier: DescriptionTier) -> f32 {
    match tier {
        DescriptionTier::Normal => typography::BODY,
        DescriptionTier::Compact => typography::BODY_SM,
        DescriptionTier::Condensed => typography::CAPTION,
    }
}

/// Renders a record's description with inline links.
pub fn view<'a>(record: &'a SubmissionRecord, i18n: &'a I18n) -> Element<'a, Message> {
    if record.description.is_empty() {
        return text(i18n.tr("card-no-description"))
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            })
            .into();
    }

    let size = tier_size(record.description_tier());
    let spans = markup::parse(&record.description)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(content) => span(content).size(size),
            Segment::Link { label, url } => span(label)
                .size(size)
                .color(palette::PRIMARY_400)
                .underline(true)
                .link(url),
        })
        .collect::<Vec<_>>();

    rich_text(spans)
        .on_link_click(Message::OpenExternal)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_descriptions_render_smaller() {
        assert!(tier_size(DescriptionTier::Normal) > tier_size(DescriptionTier::Compact));
        assert!(tier_size(DescriptionTier::Compact) > tier_size(DescriptionTier::Condensed));
    }
}
