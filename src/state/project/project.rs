use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MediaItem, TextOverlay, Transition};

/// The top-level container for one video project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: Uuid,
    /// User-facing project name.
    pub name: String,
    /// Ordered playback sequence; index order is playback order.
    pub media_items: Vec<MediaItem>,
    /// Opaque reference to a background audio source, if any.
    #[serde(default)]
    pub background_audio: Option<String>,
    /// Overlays composited over the whole sequence; index order is z-order.
    #[serde(default)]
    pub text_overlays: Vec<TextOverlay>,
    /// Transition applied between media items at render time.
    #[serde(default)]
    pub transition: Transition,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create an empty project with a fresh identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Create an empty project with an explicit identifier.
    #[allow(dead_code)]
    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            media_items: Vec::new(),
            background_audio: None,
            text_overlays: Vec::new(),
            transition: Transition::default(),
            created_at: Utc::now(),
        }
    }

    /// Find a media item by ID
    pub fn find_media_item(&self, id: Uuid) -> Option<&MediaItem> {
        self.media_items.iter().find(|item| item.id == id)
    }

    /// Find a text overlay by ID
    #[allow(dead_code)]
    pub fn find_overlay(&self, id: Uuid) -> Option<&TextOverlay> {
        self.text_overlays.iter().find(|overlay| overlay.id == id)
    }

    /// Total playback duration in seconds (sum of item durations).
    #[allow(dead_code)]
    pub fn total_duration(&self) -> f64 {
        self.media_items.iter().map(|item| item.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_empty() {
        let project = Project::new("Test Project");
        assert!(project.media_items.is_empty());
        assert!(project.text_overlays.is_empty());
        assert!(project.background_audio.is_none());
        assert_eq!(project.transition, Transition::None);
        assert_eq!(project.total_duration(), 0.0);
    }

    #[test]
    fn test_total_duration_sums_items() {
        let mut project = Project::new("Test Project");
        project.media_items.push(MediaItem::image("a.png"));
        project.media_items.push(MediaItem::video("b.mp4", 3.2));
        assert!((project.total_duration() - 8.2).abs() < 1e-9);
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Test Project");
        project.media_items.push(MediaItem::image("a.png"));
        project.text_overlays.push(TextOverlay::new("Title"));
        let json = serde_json::to_string_pretty(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, parsed);
    }
}
