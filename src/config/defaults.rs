// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! This module is the single source of truth for defaults used across the
//! application, organized by category.

// ==========================================================================
// Gallery Sources
// ==========================================================================

/// Default manifest location, relative to the working directory unless an
/// absolute path or http(s) URL is configured.
pub const DEFAULT_MANIFEST_PATH: &str = "submissions/submissions.json";

/// Default prefix prepended to per-submission resources. The prefix is
/// concatenated, not joined, so URL prefixes work unchanged.
pub const DEFAULT_MEDIA_PREFIX: &str = "submissions/";

/// Whether the decorative particle background is enabled by default.
pub const DEFAULT_PARTICLES_ENABLED: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 768.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 800.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);

    // The prefix is concatenated with identifiers, so an empty default
    // would silently fetch from the working directory root.
    assert!(!DEFAULT_MEDIA_PREFIX.is_empty());
    assert!(!DEFAULT_MANIFEST_PATH.is_empty());
};
