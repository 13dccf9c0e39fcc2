// SPDX-License-Identifier: MPL-2.0
//! Modal overlay focused on one submission.
//!
//! The dialog floats over a dimmed backdrop; clicking the backdrop closes
//! it, clicking the media enters fullscreen. Previous/next arrows render
//! only when more than one submission is displayed.

use crate::app::Message;
use crate::gallery::markup;
use crate::gallery::navigator::NavigationInfo;
use crate::gallery::{LoadedSubmission, MediaAsset};
use crate::i18n::fluent::I18n;
use crate::ui::description;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, image, mouse_area, row, scrollable, stack, text, Row, Space,
};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Renders the modal overlay for the focused submission.
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
    .on_press(Message::CloseModal);

    let mut strip: Row<'a, Message> = row![]
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    if info.controls_visible {
        strip = strip.push(arrow("◀", Message::PreviousSubmission));
    }
    strip = strip.push(panel(submission, info, i18n));
    if info.controls_visible {
        strip = strip.push(arrow("▶", Message::NextSubmission));
    }

    stack![
        backdrop,
        container(strip)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
    ]
    .into()
}

fn panel<'a>(
    submission: &'a LoadedSubmission,
    info: NavigationInfo,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let record = &submission.record;

    let mut top_bar: Row<'a, Message> = row![]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if let (Some(index), total) = (info.current_index, info.total) {
        if info.controls_visible {
            top_bar = top_bar.push(
                container(text(format!("{} / {total}", index + 1)).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator(radius::FULL)),
            );
        }
    }
    top_bar = top_bar
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(
            button(text("✕").size(typography::BODY_LG))
                .padding(spacing::XS)
                .style(styles::button::ghost)
                .on_press(Message::CloseModal),
        );

    let author = i18n.tr_with_args("card-by-author", &[("name", record.name.as_str())]);

    let mut body = column![
        top_bar,
        media(submission, i18n),
        text(&record.project_title).size(typography::TITLE_MD),
        text(author)
            .size(typography::BODY)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            }),
        container(scrollable(description::view(record, i18n))).max_height(220),
    ]
    .spacing(spacing::SM)
    .padding(spacing::LG)
    .max_width(sizing::MODAL_MAX_WIDTH);

    if let Some(url) = record.project_url.as_deref() {
        if markup::is_activatable(url) {
            body = body.push(
                button(text(i18n.tr("modal-visit-project")).size(typography::BODY))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::link)
                    .on_press(Message::OpenExternal(url.to_string())),
            );
        }
    }

    container(body).style(styles::container::panel).into()
}

/// The media area of the dialog. Images are click-to-fullscreen; videos
/// hand off to the system player.
fn media<'a>(submission: &'a LoadedSubmission, i18n: &'a I18n) -> Element<'a, Message> {
    match &submission.media {
        MediaAsset::Image(handle) => mouse_area(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MODAL_MEDIA_HEIGHT))
                .content_fit(ContentFit::Contain),
        )
        .on_press(Message::EnterFullscreen)
        .into(),
        MediaAsset::Video(location) => well(
            column![
                text("🎬").size(sizing::ICON_XXL),
                button(text(i18n.tr("modal-open-video")).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary)
                    .on_press(Message::OpenExternal(location.clone())),
            ]
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .into(),
        ),
        MediaAsset::Placeholder => well(text("🎨").size(sizing::ICON_XXL).into()),
    }
}

fn well(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_MEDIA_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::media_well)
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
