// SPDX-License-Identifier: MPL-2.0
//! Load phases of the gallery.

/// What the main surface is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// A load pass is in flight; the animated spinner is shown.
    #[default]
    Loading,
    /// At least one submission loaded; the card grid is shown.
    Ready,
    /// The load pass finished with nothing to display.
    Empty,
}

impl LoadPhase {
    /// True while the loading spinner should animate.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, LoadPhase::Loading)
    }
}
