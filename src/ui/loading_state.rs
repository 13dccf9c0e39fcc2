// SPDX-License-Identifier: MPL-2.0
//! Centered spinner shown while the manifest is loading.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::Spinner;
use iced::widget::{column, container, text};
use iced::{alignment, Element, Length, Theme};

/// `rotation` is the current spinner angle in radians, advanced each
/// animation tick while loading.
pub fn view<'a>(i18n: &'a I18n, rotation: f32) -> Element<'a, Message> {
    let body = column![
        Spinner::new(rotation).into_element(),
        text(i18n.tr("loading-submissions"))
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
    ]
    .spacing(spacing::MD)
    .align_x(alignment::Horizontal::Center);

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
