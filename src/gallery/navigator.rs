// SPDX-License-Identifier: MPL-2.0
//! Overlay navigation state machine for the modal and fullscreen viewers.
//!
//! Pure state with no I/O. The shell forwards messages and reads a
//! [`NavigationInfo`] snapshot for rendering. Two rules are load-bearing:
//! fullscreen can only be shown while the modal is open, and closing the
//! modal always hides fullscreen with it.

/// Modal viewer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No overlay; the grid has the whole window.
    #[default]
    Closed,
    /// Focused on the submission at this index.
    Open(usize),
}

/// Fullscreen media viewer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenState {
    #[default]
    Hidden,
    Shown,
}

/// Overlay navigation state.
#[derive(Debug, Clone, Default)]
pub struct State {
    modal: ModalState,
    fullscreen: FullscreenState,
    /// Number of submissions currently displayed; the wraparound modulus.
    total: usize,
}

/// Messages for the overlay navigator.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Open the modal on the submission at the given index.
    Open(usize),
    /// Close the modal (and fullscreen with it).
    Close,
    /// Advance to the next submission, wrapping past the end.
    Next,
    /// Go back to the previous submission, wrapping past the start.
    Previous,
    /// Show the focused submission's media fullscreen.
    EnterFullscreen,
    /// Leave fullscreen, back to the modal.
    ExitFullscreen,
    /// Dismiss the topmost overlay (Escape): fullscreen first, then the
    /// modal.
    Cancel,
    /// The submission collection was replaced. Overlays close and the
    /// wraparound modulus changes.
    CollectionChanged(usize),
}

/// Effects produced by overlay transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// A different submission came into focus; transient overlay view
    /// state (description scroll position) should reset.
    FocusChanged,
}

/// Read-only snapshot of the navigator for the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInfo {
    pub modal_open: bool,
    pub fullscreen: bool,
    /// Index of the focused submission while the modal is open.
    pub current_index: Option<usize>,
    pub total: usize,
    /// Previous/next controls render only for more than one submission.
    pub controls_visible: bool,
}

impl State {
    /// Handle a navigation message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) => {
                if index >= self.total {
                    return Effect::None;
                }
                self.modal = ModalState::Open(index);
                self.fullscreen = FullscreenState::Hidden;
                Effect::FocusChanged
            }
            Message::Close => {
                self.modal = ModalState::Closed;
                // Fullscreen cannot outlive the modal.
                self.fullscreen = FullscreenState::Hidden;
                Effect::None
            }
            Message::Next => self.step(1),
            Message::Previous => self.step(self.total.saturating_sub(1)),
            Message::EnterFullscreen => {
                if matches!(self.modal, ModalState::Open(_)) {
                    self.fullscreen = FullscreenState::Shown;
                }
                Effect::None
            }
            Message::ExitFullscreen => {
                self.fullscreen = FullscreenState::Hidden;
                Effect::None
            }
            Message::Cancel => {
                match (self.fullscreen, self.modal) {
                    (FullscreenState::Shown, _) => {
                        self.fullscreen = FullscreenState::Hidden;
                    }
                    (FullscreenState::Hidden, ModalState::Open(_)) => {
                        self.modal = ModalState::Closed;
                    }
                    (FullscreenState::Hidden, ModalState::Closed) => {}
                }
                Effect::None
            }
            Message::CollectionChanged(total) => {
                self.total = total;
                self.modal = ModalState::Closed;
                self.fullscreen = FullscreenState::Hidden;
                Effect::None
            }
        }
    }

    /// Returns a rendering snapshot of the current overlay state.
    #[must_use]
    pub fn info(&self) -> NavigationInfo {
        let current_index = match self.modal {
            ModalState::Open(index) => Some(index),
            ModalState::Closed => None,
        };

        NavigationInfo {
            modal_open: current_index.is_some(),
            fullscreen: matches!(self.fullscreen, FullscreenState::Shown),
            current_index,
            total: self.total,
            controls_visible: current_index.is_some() && self.total > 1,
        }
    }

    /// Moves the focus by `offset` modulo the collection size. A no-op
    /// unless the modal is open over more than one submission.
    fn step(&mut self, offset: usize) -> Effect {
        let ModalState::Open(index) = self.modal else {
            return Effect::None;
        };
        if self.total < 2 {
            return Effect::None;
        }

        self.modal = ModalState::Open((index + offset) % self.total);
        Effect::FocusChanged
    }
}
