// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation catalogs embedded into the binary at build time
//! - Interpolated messages with plural support
//! - `MISSING: <key>` fallbacks instead of panics for absent translations

pub mod fluent;
