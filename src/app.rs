//! Root application component
//!
//! Defines the main App component, the overall layout, and the explicit
//! startup step that seeds the store before any UI renders against it.

use dioxus::prelude::*;

use crate::components::{
    ExportModal, Header, MediaPanel, OverlayEditor, Player, SearchModal, StatusBar, TimelineStrip,
    Toolbar,
};
use crate::constants::*;
use crate::state::{Project, VideoStore};

/// Build the store the application starts with: one empty default project,
/// created here as an explicit initialization step rather than implicitly
/// during a render pass.
pub fn initial_store() -> VideoStore {
    let mut store = VideoStore::new();
    if let Err(err) = store.add_project(Project::new("My Video Project")) {
        log::error!("could not seed the default project: {err}");
    }
    store
}

#[component]
pub fn App() -> Element {
    let store = use_signal(initial_store);
    let mut show_search = use_signal(|| false);
    let mut show_export = use_signal(|| false);
    let notice = use_signal(|| None::<String>);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; font-family: Inter, sans-serif;",
            Header {
                store,
                on_open_search: move |_| show_search.set(true),
                on_open_export: move |_| show_export.set(true),
            }
            div {
                style: "display: flex; flex: 1; overflow: hidden;",
                MediaPanel { store, notice }
                div {
                    style: "flex: 1; display: flex; flex-direction: column; overflow: hidden;",
                    Player { store }
                    TimelineStrip { store }
                }
                div {
                    style: "width: {PANEL_WIDTH}px; display: flex; flex-direction: column; background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT}; overflow-y: auto;",
                    Toolbar { store, notice }
                    OverlayEditor { store, notice }
                }
            }
            StatusBar { store, notice }
            if show_search() {
                SearchModal {
                    store,
                    notice,
                    on_close: move |_| show_search.set(false),
                }
            }
            if show_export() {
                ExportModal {
                    store,
                    notice,
                    on_close: move |_| show_export.set(false),
                }
            }
        }
    }
}
