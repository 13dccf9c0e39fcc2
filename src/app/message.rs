// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::LoadOutcome;
use crate::ui::notifications;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The manifest load pass finished (successfully or not).
    SubmissionsLoaded(Result<LoadOutcome, Error>),
    /// Replace the displayed submissions with a fresh load pass.
    Reload,
    /// A card was activated; focus the modal on its index.
    OpenModal(usize),
    CloseModal,
    NextSubmission,
    PreviousSubmission,
    EnterFullscreen,
    ExitFullscreen,
    /// The pointer entered a card; spawn a sparkle burst over it.
    CardHovered(usize),
    /// Open a link or video location with the system handler.
    OpenExternal(String),
    ToggleTheme,
    Notification(notifications::NotificationMessage),
    /// Animation tick (~60fps while anything is animating).
    Tick(Instant),
    /// Keyboard event no widget captured.
    RawEvent(iced::Event),
    /// The window was resized; the particle field follows.
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional manifest path or http(s) URL, overriding the config.
    pub manifest: Option<String>,
    /// Optional media prefix, overriding the config.
    pub media_prefix: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
