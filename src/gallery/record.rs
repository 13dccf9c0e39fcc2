// SPDX-License-Identifier: MPL-2.0
//! Wire format of a submission record.
//!
//! Each record is fetched from `{media_prefix}{identifier}.json`. Field
//! names on the wire are camelCase; `imagePath` is accepted as an older
//! spelling of `projectPath`.

use serde::Deserialize;

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    /// Manifest identifier for this record. Always assigned from the
    /// manifest entry after parsing; anything the record body claims about
    /// its own identity is disregarded.
    #[serde(skip)]
    pub identifier: String,

    /// Author display name.
    pub name: String,

    /// Project title shown on the card and in the overlay.
    pub project_title: String,

    /// Free-form description. Absent on the wire becomes empty.
    #[serde(default)]
    pub description: String,

    /// External project link, if the author provided one.
    #[serde(default)]
    pub project_url: Option<String>,

    /// Media path relative to the media prefix.
    #[serde(default, rename = "projectPath", alias = "imagePath")]
    pub media_path: Option<String>,
}

impl SubmissionRecord {
    /// Returns the display tier for this record's description.
    #[must_use]
    pub fn description_tier(&self) -> DescriptionTier {
        DescriptionTier::for_description(&self.description)
    }
}

/// Visual density of a description, chosen by length so long text still
/// fits the overlay without scrolling away the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionTier {
    /// Up to 300 characters.
    #[default]
    Normal,
    /// More than 300 characters.
    Compact,
    /// More than 500 characters.
    Condensed,
}

impl DescriptionTier {
    /// Classifies a description by its number of Unicode scalar values,
    /// so multibyte text does not change tier earlier than visible length
    /// would suggest.
    #[must_use]
    pub fn for_description(description: &str) -> Self {
        let length = description.chars().count();
        if length > 500 {
            Self::Condensed
        } else if length > 300 {
            Self::Compact
        } else {
            Self::Normal
        }
    }
}
