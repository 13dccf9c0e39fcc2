// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop gallery for student project submissions,
//! built with the Iced GUI framework.
//!
//! It loads a JSON submission manifest, fetches every entry in parallel
//! with graceful partial failure, and presents the results as an animated
//! card grid with a modal viewer, fullscreen mode, Fluent localization,
//! and light/dark theming.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod ui;
