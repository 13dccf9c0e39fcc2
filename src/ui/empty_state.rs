// SPDX-License-Identifier: MPL-2.0
//! Centered placeholder shown when no submission loaded successfully.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, column, container, text};
use iced::{alignment, Element, Length, Theme};

use crate::ui::styles;

pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let body = column![
        text("🗂").size(sizing::ICON_XXL),
        text(i18n.tr("empty-state-title")).size(typography::TITLE_MD),
        text(i18n.tr("empty-state-message"))
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
        button(text("⟳").size(typography::BODY_LG))
            .padding(spacing::XS)
            .style(styles::button::ghost)
            .on_press(Message::Reload),
    ]
    .spacing(spacing::SM)
    .align_x(alignment::Horizontal::Center);

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
