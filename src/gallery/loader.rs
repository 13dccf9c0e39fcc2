// SPDX-License-Identifier: MPL-2.0
//! Asynchronous loading of the submission manifest and its records.
//!
//! The manifest is a JSON array of string identifiers. Every identifier is
//! fetched in parallel; a failed or malformed record drops only that entry
//! and is reported in the outcome. Locations starting with `http://` or
//! `https://` are fetched over HTTP, everything else is read from the
//! filesystem.

use crate::error::{Error, Result};
use crate::gallery::media::{self, MediaAsset, MediaKind};
use crate::gallery::record::SubmissionRecord;
use futures_util::future::join_all;

/// One successfully loaded submission with its display-ready media.
#[derive(Debug, Clone)]
pub struct LoadedSubmission {
    pub record: SubmissionRecord,
    pub media: MediaAsset,
}

/// Result of one load pass over the manifest.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Loaded submissions, in manifest order.
    pub submissions: Vec<LoadedSubmission>,
    /// Identifiers whose record could not be fetched or parsed.
    pub failures: Vec<String>,
}

impl LoadOutcome {
    /// True when nothing could be displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

/// Loads the manifest and every submission it names.
///
/// Fails only when the manifest itself cannot be fetched or parsed. A
/// manifest that is valid JSON but not an array yields an empty outcome.
/// Per-identifier failures never abort the load; they surface in
/// [`LoadOutcome::failures`] while every other entry is kept, in manifest
/// order. Duplicate identifiers are fetched once each and produce
/// duplicate entries, matching the manifest as written.
pub async fn load_submissions(manifest_path: String, media_prefix: String) -> Result<LoadOutcome> {
    let client = build_client()?;

    let manifest_body = fetch_text(&client, &manifest_path).await?;
    let manifest: serde_json::Value = serde_json::from_str(&manifest_body)?;

    let Some(entries) = manifest.as_array() else {
        return Ok(LoadOutcome::default());
    };

    let identifiers: Vec<String> = entries
        .iter()
        .filter_map(|entry| match entry.as_str() {
            Some(identifier) => Some(identifier.to_string()),
            None => {
                eprintln!("Skipping non-string manifest entry: {entry}");
                None
            }
        })
        .collect();

    if identifiers.is_empty() {
        return Ok(LoadOutcome::default());
    }

    let fetches = identifiers
        .iter()
        .map(|identifier| load_one(&client, &media_prefix, identifier));
    let results = join_all(fetches).await;

    let mut outcome = LoadOutcome::default();
    for (identifier, loaded) in identifiers.into_iter().zip(results) {
        match loaded {
            Some(submission) => outcome.submissions.push(submission),
            None => outcome.failures.push(identifier),
        }
    }
    Ok(outcome)
}

/// HTTP client shared by all fetches of one load pass.
fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent("IcedGallery/0.1.0")
        .build()
        .map_err(Error::from)
}

/// Loads one record and its media. Any failure drops only this entry.
async fn load_one(
    client: &reqwest::Client,
    media_prefix: &str,
    identifier: &str,
) -> Option<LoadedSubmission> {
    let location = media::resolve(media_prefix, &format!("{identifier}.json"));

    let body = match fetch_text(client, &location).await {
        Ok(body) => body,
        Err(error) => {
            eprintln!("Failed to load submission for {identifier}: {error}");
            return None;
        }
    };

    let mut record: SubmissionRecord = match serde_json::from_str(&body) {
        Ok(record) => record,
        Err(error) => {
            eprintln!("Malformed submission record for {identifier}: {error}");
            return None;
        }
    };
    // The manifest entry is authoritative, whatever the body claims.
    record.identifier = identifier.to_string();

    let media = load_media(client, media_prefix, &record).await;
    Some(LoadedSubmission { record, media })
}

/// Resolves the record's media into a display-ready asset.
///
/// Image bytes are fetched and decoded here; a fetch or decode failure
/// falls back to the placeholder without failing the record. Videos are
/// not fetched, only resolved for external playback.
async fn load_media(
    client: &reqwest::Client,
    media_prefix: &str,
    record: &SubmissionRecord,
) -> MediaAsset {
    let Some(path) = record.media_path.as_deref() else {
        return MediaAsset::Placeholder;
    };

    let location = media::resolve(media_prefix, path);
    match media::classify(path) {
        MediaKind::Video => MediaAsset::Video(location),
        MediaKind::Image => match fetch_bytes(client, &location).await {
            Ok(bytes) => {
                media::decode_image(&bytes).map_or(MediaAsset::Placeholder, MediaAsset::Image)
            }
            Err(error) => {
                eprintln!("Failed to load media for {}: {error}", record.identifier);
                MediaAsset::Placeholder
            }
        },
    }
}

async fn fetch_text(client: &reqwest::Client, location: &str) -> Result<String> {
    if media::is_remote(location) {
        let response = client.get(location).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "HTTP status: {} for {}",
                response.status(),
                location
            )));
        }
        Ok(response.text().await?)
    } else {
        Ok(tokio::fs::read_to_string(location).await?)
    }
}

async fn fetch_bytes(client: &reqwest::Client, location: &str) -> Result<Vec<u8>> {
    if media::is_remote(location) {
        let response = client.get(location).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "HTTP status: {} for {}",
                response.status(),
                location
            )));
        }
        Ok(response.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(location).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_manifest(dir: &Path, content: &str) -> String {
        let path = dir.join("submissions.json");
        fs::write(&path, content).expect("write manifest");
        path.display().to_string()
    }

    fn write_record(dir: &Path, identifier: &str, content: &str) {
        fs::write(dir.join(format!("{identifier}.json")), content).expect("write record");
    }

    fn prefix_for(dir: &Path) -> String {
        format!("{}/", dir.display())
    }

    #[tokio::test]
    async fn loads_all_records_in_manifest_order() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["beta", "alpha"]"#);
        write_record(
            dir.path(),
            "beta",
            r#"{ "name": "B", "projectTitle": "Second" }"#,
        );
        write_record(
            dir.path(),
            "alpha",
            r#"{ "name": "A", "projectTitle": "First" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert!(outcome.failures.is_empty());
        let identifiers: Vec<&str> = outcome
            .submissions
            .iter()
            .map(|s| s.record.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["beta", "alpha"]);
    }

    #[tokio::test]
    async fn missing_record_is_reported_not_fatal() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["good", "missing"]"#);
        write_record(
            dir.path(),
            "good",
            r#"{ "name": "G", "projectTitle": "Works" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert_eq!(outcome.submissions.len(), 1);
        assert_eq!(outcome.submissions[0].record.identifier, "good");
        assert_eq!(outcome.failures, vec!["missing".to_string()]);
    }

    #[tokio::test]
    async fn malformed_record_is_reported_not_fatal() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["broken", "fine"]"#);
        write_record(dir.path(), "broken", "{ this is not json");
        write_record(
            dir.path(),
            "fine",
            r#"{ "name": "F", "projectTitle": "Fine" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert_eq!(outcome.submissions.len(), 1);
        assert_eq!(outcome.failures, vec!["broken".to_string()]);
    }

    #[tokio::test]
    async fn missing_manifest_is_an_error() {
        let dir = tempdir().expect("create temp dir");
        let manifest = format!("{}/does-not-exist.json", dir.path().display());

        let result = load_submissions(manifest, prefix_for(dir.path())).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn invalid_manifest_json_is_an_error() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), "[not json");

        let result = load_submissions(manifest, prefix_for(dir.path())).await;
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn non_array_manifest_yields_empty_outcome() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"{ "oops": true }"#);

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert!(outcome.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn empty_manifest_yields_empty_outcome() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), "[]");

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert!(outcome.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn non_string_manifest_entries_are_skipped() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["real", 42, null]"#);
        write_record(
            dir.path(),
            "real",
            r#"{ "name": "R", "projectTitle": "Real" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert_eq!(outcome.submissions.len(), 1);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn duplicate_identifiers_produce_duplicate_entries() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["twin", "twin"]"#);
        write_record(
            dir.path(),
            "twin",
            r#"{ "name": "T", "projectTitle": "Twice" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert_eq!(outcome.submissions.len(), 2);
    }

    #[tokio::test]
    async fn record_without_media_gets_placeholder() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["plain"]"#);
        write_record(
            dir.path(),
            "plain",
            r#"{ "name": "P", "projectTitle": "No media" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert!(matches!(
            outcome.submissions[0].media,
            MediaAsset::Placeholder
        ));
    }

    #[tokio::test]
    async fn unfetchable_image_falls_back_to_placeholder() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["lost"]"#);
        write_record(
            dir.path(),
            "lost",
            r#"{ "name": "L", "projectTitle": "Gone", "projectPath": "nowhere.png" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        // The record survives; only its media degrades.
        assert!(outcome.failures.is_empty());
        assert!(matches!(
            outcome.submissions[0].media,
            MediaAsset::Placeholder
        ));
    }

    #[tokio::test]
    async fn decodable_image_is_loaded() {
        let dir = tempdir().expect("create temp dir");
        let image = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([0, 128, 255, 255]));
        image
            .save_with_format(dir.path().join("pic.png"), image_rs::ImageFormat::Png)
            .expect("write test image");

        let manifest = write_manifest(dir.path(), r#"["painter"]"#);
        write_record(
            dir.path(),
            "painter",
            r#"{ "name": "P", "projectTitle": "Pic", "projectPath": "pic.png" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert!(matches!(outcome.submissions[0].media, MediaAsset::Image(_)));
    }

    #[tokio::test]
    async fn video_media_is_resolved_not_fetched() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["director"]"#);
        // clip.mp4 deliberately does not exist; videos are never fetched here
        write_record(
            dir.path(),
            "director",
            r#"{ "name": "D", "projectTitle": "Clip", "projectPath": "clip.mp4" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        match &outcome.submissions[0].media {
            MediaAsset::Video(location) => assert!(location.ends_with("clip.mp4")),
            other => panic!("expected video asset, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn identifier_comes_from_manifest_not_body() {
        let dir = tempdir().expect("create temp dir");
        let manifest = write_manifest(dir.path(), r#"["honest"]"#);
        write_record(
            dir.path(),
            "honest",
            r#"{ "name": "H", "projectTitle": "Truth", "identifier": "impostor" }"#,
        );

        let outcome = load_submissions(manifest, prefix_for(dir.path()))
            .await
            .expect("load should succeed");

        assert_eq!(outcome.submissions[0].record.identifier, "honest");
    }
}
