use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_IMAGE_DURATION_SECONDS, MIN_MEDIA_DURATION_SECONDS};

/// The kind of media a timeline item plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image held on screen for its duration.
    Image,
    /// A video clip played from its source.
    Video,
}

/// One clip (image or video) placed in a project's playback sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier within the owning project.
    pub id: Uuid,
    /// What the source plays as.
    pub kind: MediaKind,
    /// Opaque source reference (local path or remote URL). Never parsed.
    pub source: String,
    /// Playback duration in seconds, always strictly positive.
    pub duration: f64,
    /// Optional caption drawn over this item while it is on screen.
    #[serde(default)]
    pub overlay_text: Option<String>,
}

impl MediaItem {
    /// Create an image item with the default still-image duration.
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: MediaKind::Image,
            source: source.into(),
            duration: DEFAULT_IMAGE_DURATION_SECONDS,
            overlay_text: None,
        }
    }

    /// Create a video item from a probed duration, clamped to the minimum.
    pub fn video(source: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: MediaKind::Video,
            source: source.into(),
            duration: duration_seconds.max(MIN_MEDIA_DURATION_SECONDS),
            overlay_text: None,
        }
    }

    /// Override the playback duration, keeping it strictly positive.
    #[allow(dead_code)]
    pub fn with_duration(mut self, duration_seconds: f64) -> Self {
        self.duration = duration_seconds.max(MIN_MEDIA_DURATION_SECONDS);
        self
    }

    /// Check if this item plays as a still image.
    pub fn is_image(&self) -> bool {
        matches!(self.kind, MediaKind::Image)
    }

    /// Check if this item plays as a video clip.
    #[allow(dead_code)]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, MediaKind::Video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_gets_default_duration() {
        let item = MediaItem::image("photos/beach.png");
        assert!(item.is_image());
        assert_eq!(item.duration, DEFAULT_IMAGE_DURATION_SECONDS);
        assert!(item.overlay_text.is_none());
    }

    #[test]
    fn test_video_duration_clamped_to_minimum() {
        let item = MediaItem::video("clips/blip.mp4", 0.01);
        assert!(item.is_video());
        assert_eq!(item.duration, MIN_MEDIA_DURATION_SECONDS);

        let item = MediaItem::video("clips/long.mp4", 12.5);
        assert_eq!(item.duration, 12.5);
    }

    #[test]
    fn test_media_item_serialization() {
        let item = MediaItem::video("clips/take1.mp4", 3.2);
        let json = serde_json::to_string_pretty(&item).unwrap();
        let parsed: MediaItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, parsed);
    }
}
