//! State management module
//!
//! This module contains the core data structures for the application:
//! - Project: The top-level container for a video project
//! - MediaItem: Clips (images and videos) placed in the playback sequence
//! - TextOverlay: Styled text composited over the output
//! - Transition: The effect applied between media items
//! - VideoStore: The state container owning projects and playback state

mod error;
mod project;
mod store;

pub use error::StoreError;
pub use project::*;
pub use store::VideoStore;
