use dioxus::prelude::*;

use crate::constants::*;
use crate::state::VideoStore;

#[component]
pub fn Header(
    store: Signal<VideoStore>,
    on_open_search: EventHandler<()>,
    on_open_export: EventHandler<()>,
) -> Element {
    let project_name = store
        .read()
        .current_project()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "No project".to_string());

    rsx! {
        header {
            style: "display: flex; align-items: center; justify-content: space-between; height: 44px; padding: 0 16px; background-color: {BG_ELEVATED}; border-bottom: 1px solid {BORDER_DEFAULT};",
            div {
                style: "display: flex; align-items: baseline; gap: 12px;",
                span { style: "font-size: 15px; font-weight: 600;", "Clipreel" }
                span { style: "font-size: 12px; color: {TEXT_MUTED};", {project_name} }
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    style: "padding: 6px 12px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_SECONDARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| on_open_search.call(()),
                    "Search Photos"
                }
                button {
                    style: "padding: 6px 12px; font-size: 12px; background-color: {ACCENT_PRIMARY}; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| on_open_export.call(()),
                    "Export"
                }
            }
        }
    }
}
