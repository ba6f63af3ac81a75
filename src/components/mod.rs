//! Presentation components. These render store state and issue store
//! mutations; none of them own model state of their own.

mod export_modal;
mod header;
mod media_panel;
mod overlay_editor;
mod player;
mod search_modal;
mod status_bar;
mod timeline_strip;
mod toolbar;

pub use export_modal::ExportModal;
pub use header::Header;
pub use media_panel::MediaPanel;
pub use overlay_editor::OverlayEditor;
pub use player::Player;
pub use search_modal::SearchModal;
pub use status_bar::StatusBar;
pub use timeline_strip::TimelineStrip;
pub use toolbar::Toolbar;

use dioxus::prelude::*;

use crate::state::StoreError;

/// Route a rejected store operation to the notice area instead of a panic;
/// the store is unchanged when an operation errors.
pub(crate) fn report_store_error(
    mut notice: Signal<Option<String>>,
    result: Result<(), StoreError>,
) {
    if let Err(err) = result {
        log::warn!("store rejected operation: {err}");
        notice.set(Some(err.to_string()));
    }
}
