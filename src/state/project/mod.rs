//! Project data model
//!
//! This module contains the core data structures for a video project.

mod media_item;
mod overlay;
mod persistence;
mod project;
mod transition;

pub use media_item::{MediaItem, MediaKind};
pub use overlay::{OverlayAnimation, OverlayStyle, OverlayUpdate, TextOverlay};
pub use project::Project;
pub use transition::Transition;
