// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Views
//!
//! - [`header`] - Gallery title bar with count badge and quick actions
//! - [`grid`] - Scrollable card grid ([`card`] renders one submission)
//! - [`modal`] - Detail dialog with prev/next navigation
//! - [`fullscreen`] - Fullscreen media viewer layered over the modal
//! - [`loading_state`] / [`empty_state`] - Phase placeholders
//!
//! # Shared Infrastructure
//!
//! - [`description`] - Restricted-markup description rendering
//! - [`widgets`] - Custom canvas widgets (particles, sparkles, spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod card;
pub mod description;
pub mod design_tokens;
pub mod empty_state;
pub mod fullscreen;
pub mod grid;
pub mod header;
pub mod loading_state;
pub mod modal;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
