// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! `App::update` builds an [`UpdateContext`] over its fields and dispatches
//! to the handlers here, keeping the state struct and the transition logic
//! in separate files.

use super::Message;
use crate::config::{self, Config};
use crate::gallery::{self, navigator, LoadOutcome, LoadedSubmission};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::{ParticleField, SparklePool};
use iced::{keyboard, Size, Task};
use std::time::Instant;

use super::phase::LoadPhase;

/// Spinner advance per animation tick, in radians.
const SPINNER_STEP: f32 = 0.15;

/// One more card becomes visible every interval after a load completes.
const REVEAL_INTERVAL_MS: u128 = 100;

/// Mutable borrows of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub phase: &'a mut LoadPhase,
    pub submissions: &'a mut Vec<LoadedSubmission>,
    pub navigator: &'a mut navigator::State,
    pub particles: &'a mut ParticleField,
    pub sparkles: &'a mut SparklePool,
    pub revealed: &'a mut usize,
    pub loaded_at: &'a mut Option<Instant>,
    pub spinner_rotation: &'a mut f32,
    pub last_tick: &'a mut Option<Instant>,
    pub window_size: &'a mut Size,
    pub notifications: &'a mut notifications::Manager,
    pub manifest_path: &'a str,
    pub media_prefix: &'a str,
}

/// Starts a fresh load pass over the configured manifest.
pub fn handle_reload(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.phase = LoadPhase::Loading;
    let manifest = ctx.manifest_path.to_string();
    let prefix = ctx.media_prefix.to_string();
    Task::perform(
        gallery::load_submissions(manifest, prefix),
        Message::SubmissionsLoaded,
    )
}

/// Applies a finished load pass to the displayed collection.
pub fn handle_submissions_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<LoadOutcome, crate::error::Error>,
) -> Task<Message> {
    match result {
        Ok(outcome) => {
            if !outcome.failures.is_empty() {
                for identifier in &outcome.failures {
                    eprintln!("Dropped submission: {identifier}");
                }
                ctx.notifications.push(
                    Notification::warning("notification-submissions-failed")
                        .with_arg("count", outcome.failures.len().to_string()),
                );
            }

            *ctx.phase = if outcome.is_empty() {
                LoadPhase::Empty
            } else {
                LoadPhase::Ready
            };
            ctx.navigator
                .handle(navigator::Message::CollectionChanged(
                    outcome.submissions.len(),
                ));
            *ctx.submissions = outcome.submissions;
            *ctx.revealed = 0;
            *ctx.loaded_at = Some(Instant::now());
        }
        Err(error) => {
            eprintln!("Failed to load submission manifest: {error}");
            *ctx.phase = LoadPhase::Empty;
            *ctx.submissions = Vec::new();
            ctx.navigator
                .handle(navigator::Message::CollectionChanged(0));
            ctx.notifications.push(
                Notification::error("notification-manifest-load-error")
                    .with_arg("reason", error.to_string()),
            );
        }
    }
    Task::none()
}

/// Forwards an overlay transition to the navigator.
pub fn handle_navigation(
    ctx: &mut UpdateContext<'_>,
    message: navigator::Message,
) -> Task<Message> {
    let _ = ctx.navigator.handle(message);
    Task::none()
}

/// Advances every animation by one frame.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let elapsed = ctx
        .last_tick
        .map(|previous| now.duration_since(previous))
        .unwrap_or_default();
    *ctx.last_tick = Some(now);

    if ctx.config.gallery.particles_enabled {
        ctx.particles.tick();
    }
    ctx.sparkles.tick(elapsed);

    if ctx.phase.is_loading() {
        *ctx.spinner_rotation += SPINNER_STEP;
    }

    if let Some(loaded_at) = *ctx.loaded_at {
        if *ctx.revealed < ctx.submissions.len() {
            let steps = now.duration_since(loaded_at).as_millis() / REVEAL_INTERVAL_MS + 1;
            *ctx.revealed = usize::try_from(steps)
                .unwrap_or(usize::MAX)
                .min(ctx.submissions.len());
        }
    }

    Task::none()
}

/// Flips between light and dark and persists the choice.
pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    ctx.config.general.theme_mode = *ctx.theme_mode;

    if let Err(error) = config::save(ctx.config) {
        eprintln!("Failed to save settings: {error}");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
    Task::none()
}

/// Spawns a sparkle burst over the hovered card.
pub fn handle_card_hovered(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    ctx.sparkles.spawn_burst(index);
    Task::none()
}

/// Opens a link or video location with the system handler.
pub fn handle_open_external(ctx: &mut UpdateContext<'_>, target: String) -> Task<Message> {
    if let Err(error) = open::that(&target) {
        eprintln!("Failed to open {target}: {error}");
        ctx.notifications
            .push(Notification::error("notification-open-link-error").with_arg("target", target));
    }
    Task::none()
}

/// Keeps the particle field sized to the window.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    ctx.particles.resize(size);
    Task::none()
}

/// Routes uncaptured keyboard events to gallery shortcuts.
pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: iced::Event) -> Task<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return Task::none();
    };

    match key.as_ref() {
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            handle_navigation(ctx, navigator::Message::Cancel)
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
            handle_navigation(ctx, navigator::Message::Next)
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
            handle_navigation(ctx, navigator::Message::Previous)
        }
        keyboard::Key::Character(c) if !modifiers.command() && !modifiers.alt() => match c {
            "t" | "T" => handle_toggle_theme(ctx),
            "r" | "R" => handle_reload(ctx),
            _ => Task::none(),
        },
        _ => Task::none(),
    }
}
