// SPDX-License-Identifier: MPL-2.0
//! Submission gallery domain: wire records, media classification, restricted
//! description markup, loading, and overlay navigation.

pub mod loader;
pub mod markup;
pub mod media;
pub mod navigator;
pub mod record;

// Re-export commonly used types
pub use loader::{load_submissions, LoadOutcome, LoadedSubmission};
pub use media::{MediaAsset, MediaKind};
pub use record::{DescriptionTier, SubmissionRecord};
