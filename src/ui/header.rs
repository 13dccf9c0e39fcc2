// SPDX-License-Identifier: MPL-2.0
//! Gallery header: title, subtitle, submission count, and quick actions.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Space};
use iced::{alignment, Element, Length, Theme};

/// Renders the header bar. `count` is shown as a badge when the grid has
/// submissions.
pub fn view<'a>(i18n: &'a I18n, count: usize) -> Element<'a, Message> {
    let titles = column![
        text(i18n.tr("gallery-title")).size(typography::TITLE_LG),
        text(i18n.tr("gallery-subtitle"))
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
    ]
    .spacing(spacing::XXS);

    let mut bar = row![titles, Space::new().width(Length::Fill).height(Length::Shrink)]
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    if count > 0 {
        bar = bar.push(
            container(text(count.to_string()).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::badge),
        );
    }

    bar = bar
        .push(
            button(text("⟳").size(typography::BODY_LG))
                .padding(spacing::XS)
                .style(styles::button::ghost)
                .on_press(Message::Reload),
        )
        .push(
            button(text("🌓").size(typography::BODY_LG))
                .padding(spacing::XS)
                .style(styles::button::ghost)
                .on_press(Message::ToggleTheme),
        );

    container(bar)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .into()
}
