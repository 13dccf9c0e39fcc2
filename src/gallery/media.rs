// SPDX-License-Identifier: MPL-2.0
//! Media classification and resource resolution for submissions.

use iced::widget::image;
use std::path::Path;

/// Video file extensions; any other extension renders as an image.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "avi"];

/// Coarse classification of a media path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Display-ready media for one submission.
#[derive(Debug, Clone)]
pub enum MediaAsset {
    /// No media path was given, or the bytes could not be fetched or
    /// decoded. Rendered as the 🎨 placeholder face.
    Placeholder,
    /// A decoded raster image.
    Image(image::Handle),
    /// A video, opened in the system player on activation. Carries the
    /// resolved location.
    Video(String),
}

/// Classifies a media path by its lowercased extension.
#[must_use]
pub fn classify(path: &str) -> MediaKind {
    let extension = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Builds the location of a resource relative to the media prefix.
///
/// The prefix is concatenated, not path-joined, so http(s) prefixes pass
/// through unchanged.
#[must_use]
pub fn resolve(prefix: &str, path: &str) -> String {
    format!("{prefix}{path}")
}

/// Returns true when a location should be fetched over HTTP.
#[must_use]
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Decodes fetched bytes into a displayable image handle.
///
/// Returns `None` when the bytes are not a decodable raster image; the
/// caller falls back to the placeholder face.
#[must_use]
pub fn decode_image(bytes: &[u8]) -> Option<image::Handle> {
    let decoded = image_rs::load_from_memory(bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(image::Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extensions_classify_as_video() {
        assert_eq!(classify("clip.mp4"), MediaKind::Video);
        assert_eq!(classify("clip.webm"), MediaKind::Video);
        assert_eq!(classify("clip.mov"), MediaKind::Video);
        assert_eq!(classify("clip.avi"), MediaKind::Video);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("CLIP.MP4"), MediaKind::Video);
        assert_eq!(classify("Clip.WebM"), MediaKind::Video);
    }

    #[test]
    fn everything_else_classifies_as_image() {
        assert_eq!(classify("photo.jpg"), MediaKind::Image);
        assert_eq!(classify("photo.png"), MediaKind::Image);
        assert_eq!(classify("weird.xyz"), MediaKind::Image);
        assert_eq!(classify("no_extension"), MediaKind::Image);
    }

    #[test]
    fn near_miss_video_extensions_stay_images() {
        // Only the four listed extensions count as video
        assert_eq!(classify("clip.m4v"), MediaKind::Image);
        assert_eq!(classify("clip.mkv"), MediaKind::Image);
        assert_eq!(classify("clip.mpeg"), MediaKind::Image);
    }

    #[test]
    fn resolve_concatenates_prefix() {
        assert_eq!(resolve("submissions/", "ada.png"), "submissions/ada.png");
        assert_eq!(
            resolve("https://example.test/entries/", "ada.json"),
            "https://example.test/entries/ada.json"
        );
        // No separator is inserted
        assert_eq!(resolve("prefix-", "file"), "prefix-file");
    }

    #[test]
    fn remote_detection_only_matches_http_schemes() {
        assert!(is_remote("http://example.test/a.json"));
        assert!(is_remote("https://example.test/a.json"));
        assert!(!is_remote("submissions/a.json"));
        assert!(!is_remote("/absolute/a.json"));
        assert!(!is_remote("ftp://example.test/a.json"));
    }

    #[test]
    fn decode_image_round_trips_png_bytes() {
        use std::io::Cursor;

        let image = image_rs::RgbaImage::from_pixel(2, 3, image_rs::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode test image");

        assert!(decode_image(&bytes).is_some());
    }

    #[test]
    fn decode_image_rejects_garbage() {
        assert!(decode_image(b"definitely not an image").is_none());
        assert!(decode_image(&[]).is_none());
    }
}
