//! The single source of truth for projects and playback state.
//!
//! `VideoStore` is constructed explicitly at startup and handed to the UI
//! inside a Dioxus signal; the signal is the subscription mechanism through
//! which readers observe mutations. Fields stay private behind accessors so
//! a snapshot cloned out of the store is never affected by later mutations.

use uuid::Uuid;

use super::error::StoreError;
use super::{MediaItem, OverlayUpdate, Project, TextOverlay, Transition};

/// Owns every project plus the transient, project-independent playback state.
#[derive(Debug, Clone, Default)]
pub struct VideoStore {
    projects: Vec<Project>,
    current_project_id: Option<Uuid>,
    current_time: f64,
    playing: bool,
}

impl VideoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All projects, in creation order.
    #[allow(dead_code)]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Find a project by ID
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The active project's id, if one is selected.
    pub fn current_project_id(&self) -> Option<Uuid> {
        self.current_project_id
    }

    /// The active project, if one is selected.
    pub fn current_project(&self) -> Option<&Project> {
        self.current_project_id.and_then(|id| self.project(id))
    }

    /// Playhead position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Whether the preview is playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn project_mut(&mut self, id: Uuid) -> Result<&mut Project, StoreError> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))
    }

    /// Insert a project and make it the active one.
    ///
    /// Id collisions are rejected with [`StoreError::DuplicateProject`].
    pub fn add_project(&mut self, project: Project) -> Result<Uuid, StoreError> {
        if self.projects.iter().any(|p| p.id == project.id) {
            return Err(StoreError::DuplicateProject(project.id));
        }
        let id = project.id;
        self.projects.push(project);
        self.current_project_id = Some(id);
        Ok(id)
    }

    /// Point the UI at another project. Returns `false` when the id is
    /// unknown, leaving the selection unchanged (lenient, UI-facing).
    #[allow(dead_code)]
    pub fn select_project(&mut self, id: Uuid) -> bool {
        if self.projects.iter().any(|p| p.id == id) {
            self.current_project_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Append a media item to the end of a project's playback sequence.
    pub fn add_media_item(&mut self, project_id: Uuid, item: MediaItem) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        if project.media_items.iter().any(|m| m.id == item.id) {
            return Err(StoreError::DuplicateMediaItem(item.id));
        }
        project.media_items.push(item);
        Ok(())
    }

    /// Remove a media item by id. Removing an id that is not present is a
    /// no-op.
    pub fn remove_media_item(&mut self, project_id: Uuid, item_id: Uuid) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        project.media_items.retain(|m| m.id != item_id);
        Ok(())
    }

    /// Move the item at `from` to position `to`, shifting the items between
    /// them. Out-of-range indices are rejected, never clamped.
    pub fn reorder_media_items(
        &mut self,
        project_id: Uuid,
        from: usize,
        to: usize,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        let len = project.media_items.len();
        if from >= len {
            return Err(StoreError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(StoreError::IndexOutOfRange { index: to, len });
        }
        let item = project.media_items.remove(from);
        project.media_items.insert(to, item);
        Ok(())
    }

    /// Replace the project's background audio reference; `None` clears it.
    pub fn set_background_audio(
        &mut self,
        project_id: Uuid,
        audio: Option<String>,
    ) -> Result<(), StoreError> {
        self.project_mut(project_id)?.background_audio = audio;
        Ok(())
    }

    /// Append a text overlay on top of the existing z-order.
    pub fn add_text_overlay(
        &mut self,
        project_id: Uuid,
        overlay: TextOverlay,
    ) -> Result<(), StoreError> {
        self.project_mut(project_id)?.text_overlays.push(overlay);
        Ok(())
    }

    /// Apply a partial update to an overlay, addressed by id.
    pub fn update_text_overlay(
        &mut self,
        project_id: Uuid,
        overlay_id: Uuid,
        update: OverlayUpdate,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        let overlay = project
            .text_overlays
            .iter_mut()
            .find(|o| o.id == overlay_id)
            .ok_or(StoreError::ItemNotFound(overlay_id))?;
        overlay.apply(update);
        Ok(())
    }

    /// Remove an overlay by id; a missing id is a no-op.
    pub fn remove_text_overlay(
        &mut self,
        project_id: Uuid,
        overlay_id: Uuid,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        project.text_overlays.retain(|o| o.id != overlay_id);
        Ok(())
    }

    /// Validate and store the transition kind for a project.
    ///
    /// Unknown names fail with [`StoreError::InvalidTransition`] and leave
    /// the stored transition unchanged.
    pub fn set_transition(&mut self, project_id: Uuid, kind: &str) -> Result<(), StoreError> {
        let transition = Transition::parse(kind)
            .ok_or_else(|| StoreError::InvalidTransition(kind.to_string()))?;
        self.project_mut(project_id)?.transition = transition;
        Ok(())
    }

    /// Set the caption drawn over a single media item; empty text clears it.
    pub fn update_media_item_text(
        &mut self,
        project_id: Uuid,
        item_id: Uuid,
        text: Option<String>,
    ) -> Result<(), StoreError> {
        let project = self.project_mut(project_id)?;
        let item = project
            .media_items
            .iter_mut()
            .find(|m| m.id == item_id)
            .ok_or(StoreError::ItemNotFound(item_id))?;
        item.overlay_text = text.filter(|value| !value.trim().is_empty());
        Ok(())
    }

    /// Move the playhead. Negative times clamp to zero.
    pub fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds.max(0.0);
    }

    /// Start or stop preview playback.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }
}
