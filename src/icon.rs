// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Decodes the embedded PNG into an RGBA buffer for the window title bar.
//! Falls back to `None` if decoding fails.

use iced::window::{icon, Icon};

/// Decode the embedded 128x128 PNG icon.
/// Returns `None` if decoding fails.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the PNG so packaging does not need to locate assets on disk.
    const PNG_SOURCE: &[u8] = include_bytes!("../assets/branding/iced_gallery-128.png");

    let image = image_rs::load_from_memory(PNG_SOURCE).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    icon::from_rgba(image.into_raw(), width, height).ok()
}
