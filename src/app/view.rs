// SPDX-License-Identifier: MPL-2.0
//! View composition for the application.
//!
//! The window is a stack of layers: the decorative particle field at the
//! bottom, the header and grid above it, then the modal and fullscreen
//! overlays, and toasts on top of everything.

use super::phase::LoadPhase;
use super::Message;
use crate::gallery::navigator::NavigationInfo;
use crate::gallery::LoadedSubmission;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::widgets::{ParticleField, SparklePool};
use crate::ui::{empty_state, fullscreen, grid, header, loading_state, modal};
use iced::widget::{canvas, column, Stack};
use iced::{Element, Length, Size};

/// Read-only snapshot of the application state for rendering.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub phase: LoadPhase,
    pub submissions: &'a [LoadedSubmission],
    pub navigation: NavigationInfo,
    pub particles: &'a ParticleField,
    pub particles_enabled: bool,
    pub sparkles: &'a SparklePool,
    pub revealed: usize,
    pub spinner_rotation: f32,
    pub window_size: Size,
    pub notifications: &'a Manager,
}

/// Renders the whole window from a state snapshot.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.phase {
        LoadPhase::Loading => loading_state::view(ctx.i18n, ctx.spinner_rotation),
        LoadPhase::Empty => empty_state::view(ctx.i18n),
        LoadPhase::Ready => grid::view(
            ctx.submissions,
            ctx.i18n,
            ctx.sparkles,
            ctx.revealed,
            ctx.window_size.width,
        ),
    };

    let base = column![header::view(ctx.i18n, ctx.submissions.len()), body]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    if ctx.particles_enabled {
        layers = layers.push(
            canvas(ctx.particles)
                .width(Length::Fill)
                .height(Length::Fill),
        );
    }
    layers = layers.push(base);

    if let Some(submission) = ctx
        .navigation
        .current_index
        .and_then(|index| ctx.submissions.get(index))
    {
        if ctx.navigation.fullscreen {
            layers = layers.push(fullscreen::view(submission, ctx.navigation, ctx.i18n));
        } else {
            layers = layers.push(modal::view(submission, ctx.navigation, ctx.i18n));
        }
    }

    layers =
        layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    layers.into()
}
