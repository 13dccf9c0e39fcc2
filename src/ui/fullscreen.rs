// SPDX-License-Identifier: MPL-2.0
//! Fullscreen media viewer layered over the modal.
//!
//! The media fills the window letterboxed; a control strip at the bottom
//! carries the navigation arrows and the position counter. Clicking the
//! backdrop or the close button drops back to the modal.

use crate::app::Message;
use crate::gallery::navigator::NavigationInfo;
use crate::gallery::{LoadedSubmission, MediaAsset};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, image, mouse_area, row, stack, text, Row, Space};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the fullscreen viewer for the focused submission.
pub fn view<'a>(
    submission: &'a LoadedSubmission,
    info: NavigationInfo,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::ExitFullscreen);

    let media: Element<'a, Message> = match &submission.media {
        MediaAsset::Image(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        MediaAsset::Video(location) => column![
            text("🎬").size(sizing::ICON_XXL).color(palette::WHITE),
            button(text(i18n.tr("modal-open-video")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::OpenExternal(location.clone())),
        ]
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .into(),
        MediaAsset::Placeholder => text("🎨")
            .size(sizing::ICON_XXL)
            .color(palette::WHITE)
            .into(),
    };

    let close = container(
        button(text("✕").size(typography::BODY_LG))
            .padding(spacing::SM)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(Message::ExitFullscreen),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(alignment::Horizontal::Right);

    stack![
        backdrop,
        container(media)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XXL),
        close,
        container(controls(info))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG),
    ]
    .into()
}

/// Bottom control strip: arrows when navigation applies, counter always.
fn controls<'a>(info: NavigationInfo) -> Element<'a, Message> {
    let mut strip: Row<'a, Message> = row![]
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    if info.controls_visible {
        strip = strip.push(arrow("◀", Message::PreviousSubmission));
    }
    if let (Some(index), total) = (info.current_index, info.total) {
        strip = strip.push(text(format!("{} / {total}", index + 1)).size(typography::BODY));
    }
    if info.controls_visible {
        strip = strip.push(arrow("▶", Message::NextSubmission));
    }

    container(strip)
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::controls_container)
        .into()
}

fn arrow(glyph: &str, message: Message) -> Element<'_, Message> {
    button(
        text(glyph)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::NAV_ARROW_SIZE))
    .height(Length::Fixed(sizing::NAV_ARROW_SIZE))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message)
    .into()
}
