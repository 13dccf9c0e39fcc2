// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery domain (loading, overlay
//! navigation), localization, theming, and the animation state, and
//! translates messages into side effects like manifest loads or config
//! persistence. Policy decisions (minimum window size, keyboard shortcuts,
//! persistence on theme toggle) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod phase;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use phase::LoadPhase;

use crate::config::{self, Config};
use crate::gallery::{self, navigator, LoadedSubmission};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::{ParticleField, SparklePool};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state bridging the gallery domain, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    phase: LoadPhase,
    /// Displayed submissions, in manifest order.
    submissions: Vec<LoadedSubmission>,
    navigator: navigator::State,
    particles: ParticleField,
    sparkles: SparklePool,
    /// Number of cards currently shown by the entrance reveal.
    revealed: usize,
    /// When the last load pass finished; drives the reveal pacing.
    loaded_at: Option<Instant>,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
    window_size: Size,
    notifications: notifications::Manager,
    /// Effective manifest location (CLI flag wins over config).
    manifest_path: String,
    /// Effective media prefix (CLI flag wins over config).
    media_prefix: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.phase)
            .field("submissions", &self.submissions.len())
            .field("navigation", &self.navigator.info())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(
            config::DEFAULT_WINDOW_WIDTH,
            config::DEFAULT_WINDOW_HEIGHT,
        ),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let window_size = Size::new(
            config::DEFAULT_WINDOW_WIDTH,
            config::DEFAULT_WINDOW_HEIGHT,
        );

        Self {
            i18n: I18n::default(),
            theme_mode: config.general.theme_mode,
            manifest_path: config.gallery.manifest_path.clone(),
            media_prefix: config.gallery.media_prefix.clone(),
            config,
            phase: LoadPhase::default(),
            submissions: Vec::new(),
            navigator: navigator::State::default(),
            particles: ParticleField::new(window_size),
            sparkles: SparklePool::new(),
            revealed: 0,
            loaded_at: None,
            spinner_rotation: 0.0,
            last_tick: None,
            window_size,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and kicks off the first
    /// manifest load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            manifest_path: flags
                .manifest
                .unwrap_or_else(|| config.gallery.manifest_path.clone()),
            media_prefix: flags
                .media_prefix
                .unwrap_or_else(|| config.gallery.media_prefix.clone()),
            config,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        let manifest = app.manifest_path.clone();
        let prefix = app.media_prefix.clone();
        let task = Task::perform(
            gallery::load_submissions(manifest, prefix),
            Message::SubmissionsLoaded,
        );

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// True while anything on screen is moving and needs ~60fps ticks.
    fn is_animating(&self) -> bool {
        self.config.gallery.particles_enabled
            || self.sparkles.is_active()
            || self.phase.is_loading()
            || (self.phase == LoadPhase::Ready && self.revealed < self.submissions.len())
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.is_animating(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            phase: &mut self.phase,
            submissions: &mut self.submissions,
            navigator: &mut self.navigator,
            particles: &mut self.particles,
            sparkles: &mut self.sparkles,
            revealed: &mut self.revealed,
            loaded_at: &mut self.loaded_at,
            spinner_rotation: &mut self.spinner_rotation,
            last_tick: &mut self.last_tick,
            window_size: &mut self.window_size,
            notifications: &mut self.notifications,
            manifest_path: &self.manifest_path,
            media_prefix: &self.media_prefix,
        };

        match message {
            Message::SubmissionsLoaded(result) => {
                update::handle_submissions_loaded(&mut ctx, result)
            }
            Message::Reload => update::handle_reload(&mut ctx),
            Message::OpenModal(index) => {
                update::handle_navigation(&mut ctx, navigator::Message::Open(index))
            }
            Message::CloseModal => update::handle_navigation(&mut ctx, navigator::Message::Close),
            Message::NextSubmission => {
                update::handle_navigation(&mut ctx, navigator::Message::Next)
            }
            Message::PreviousSubmission => {
                update::handle_navigation(&mut ctx, navigator::Message::Previous)
            }
            Message::EnterFullscreen => {
                update::handle_navigation(&mut ctx, navigator::Message::EnterFullscreen)
            }
            Message::ExitFullscreen => {
                update::handle_navigation(&mut ctx, navigator::Message::ExitFullscreen)
            }
            Message::CardHovered(index) => update::handle_card_hovered(&mut ctx, index),
            Message::OpenExternal(target) => update::handle_open_external(&mut ctx, target),
            Message::ToggleTheme => update::handle_toggle_theme(&mut ctx),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::RawEvent(event) => update::handle_raw_event(&mut ctx, event),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::WindowCloseRequested(id) => window::close(id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            phase: self.phase,
            submissions: &self.submissions,
            navigation: self.navigator.info(),
            particles: &self.particles,
            particles_enabled: self.config.gallery.particles_enabled,
            sparkles: &self.sparkles,
            revealed: self.revealed,
            spinner_rotation: self.spinner_rotation,
            window_size: self.window_size,
            notifications: &self.notifications,
        })
    }
}
