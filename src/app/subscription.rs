// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) into top-level
//! messages and drives the animation and notification timers.

use super::Message;
use crate::ui::notifications;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Animation tick interval (~60fps).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Notification auto-dismiss polling interval.
pub const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Creates the native event subscription.
///
/// Window close and resize events are always routed. Keyboard events are
/// forwarded only when no widget captured them, so typing into a future
/// focused widget can never trigger gallery shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        if let event::Event::Keyboard(..) = &event {
            match status {
                event::Status::Ignored => Some(Message::RawEvent(event.clone())),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}

/// Creates the periodic tick subscriptions.
///
/// The fast tick runs only while something on screen is actually moving
/// (particles, sparkles, entrance reveal, or the loading spinner); the
/// slower tick runs only while toasts are visible. Both stop entirely on
/// an idle gallery.
pub fn create_tick_subscription(
    animating: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    let animation = if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    };

    let notification = if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|_| Message::Notification(notifications::NotificationMessage::Tick))
    } else {
        Subscription::none()
    };

    Subscription::batch([animation, notification])
}
