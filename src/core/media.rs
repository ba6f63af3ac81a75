//! Media ingestion: classify incoming files, probe video durations, and
//! build [`MediaItem`]s ready for the store.
//!
//! Probing runs before the item enters the store, so a late or failed probe
//! can never mutate an item that has since been removed.

use std::path::Path;
use std::process::Command;
use std::time::Duration;

use log::warn;
use mime_guess::mime;
use thiserror::Error;

use crate::constants::PROBE_TIMEOUT_SECONDS;
use crate::core::search::RemoteImage;
use crate::state::{MediaItem, MediaKind};

/// Errors surfaced by ingestion. These reach the UI notice area; the store
/// is never touched on the failure path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("could not read media duration from {path}: {reason}")]
    DurationProbeFailed { path: String, reason: String },
}

/// Classify a file by its declared content type: `image/*` is an image,
/// everything else is treated as video.
pub fn classify_media(path: &Path) -> MediaKind {
    let is_image = mime_guess::from_path(path)
        .first()
        .map(|m| m.type_() == mime::IMAGE)
        .unwrap_or(false);
    if is_image {
        MediaKind::Image
    } else {
        MediaKind::Video
    }
}

/// Probe a media file's duration in seconds using ffprobe.
pub fn probe_duration_seconds(path: &Path) -> Option<f64> {
    let output = Command::new("ffprobe")
        .args(["-v", "error"])
        .args(["-show_entries", "format=duration"])
        .args(["-of", "default=noprint_wrappers=1:nokey=1"])
        .arg(path)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout).trim().parse::<f64>().ok()
}

async fn probe_video_duration(path: &Path) -> Result<f64, IngestError> {
    let source = path.to_string_lossy().into_owned();
    let owned = path.to_path_buf();
    let probe = tokio::task::spawn_blocking(move || probe_duration_seconds(&owned));

    let reason = match tokio::time::timeout(Duration::from_secs(PROBE_TIMEOUT_SECONDS), probe).await
    {
        Ok(Ok(Some(duration))) => return Ok(duration),
        Ok(Ok(None)) => "ffprobe reported no duration".to_string(),
        Ok(Err(join_error)) => join_error.to_string(),
        Err(_) => format!("probe timed out after {PROBE_TIMEOUT_SECONDS}s"),
    };

    warn!("duration probe failed for {source}: {reason}");
    Err(IngestError::DurationProbeFailed { path: source, reason })
}

/// Build a media item from a local file.
///
/// Images receive the default still duration; videos are probed
/// asynchronously and fail loudly with
/// [`IngestError::DurationProbeFailed`]. Durations are never silently
/// defaulted on a failed probe.
pub async fn ingest_file(path: &Path) -> Result<MediaItem, IngestError> {
    let source = path.to_string_lossy().into_owned();
    match classify_media(path) {
        MediaKind::Image => Ok(MediaItem::image(source)),
        MediaKind::Video => {
            let duration = probe_video_duration(path).await?;
            Ok(MediaItem::video(source, duration))
        }
    }
}

/// Build an image item from a remote search result. Still images need no
/// probe; the default image duration applies.
pub fn ingest_search_result(image: &RemoteImage) -> MediaItem {
    MediaItem::image(image.full_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_IMAGE_DURATION_SECONDS;

    #[test]
    fn test_classify_by_content_type_prefix() {
        assert_eq!(classify_media(Path::new("shot.jpg")), MediaKind::Image);
        assert_eq!(classify_media(Path::new("shot.PNG")), MediaKind::Image);
        assert_eq!(classify_media(Path::new("clip.mp4")), MediaKind::Video);
        assert_eq!(classify_media(Path::new("clip.mkv")), MediaKind::Video);
        // Unknown types fall through to video.
        assert_eq!(classify_media(Path::new("mystery.xyz")), MediaKind::Video);
        assert_eq!(classify_media(Path::new("no-extension")), MediaKind::Video);
    }

    #[tokio::test]
    async fn test_ingest_image_skips_probing() {
        let item = ingest_file(Path::new("stills/poster.png")).await.unwrap();
        assert!(item.is_image());
        assert_eq!(item.duration, DEFAULT_IMAGE_DURATION_SECONDS);
        assert_eq!(item.source, "stills/poster.png");
    }

    #[tokio::test]
    async fn test_failed_probe_is_an_error_not_a_default() {
        let err = ingest_file(Path::new("/definitely/missing/clip.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::DurationProbeFailed { .. }));
    }

    #[test]
    fn test_search_result_becomes_image_item() {
        let image = RemoteImage {
            id: "abc123".to_string(),
            description: Some("A beach".to_string()),
            thumb_url: "https://images.example/thumb.jpg".to_string(),
            full_url: "https://images.example/full.jpg".to_string(),
        };
        let item = ingest_search_result(&image);
        assert!(item.is_image());
        assert_eq!(item.source, "https://images.example/full.jpg");
        assert_eq!(item.duration, DEFAULT_IMAGE_DURATION_SECONDS);
    }
}
