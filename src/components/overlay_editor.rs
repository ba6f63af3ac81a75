use dioxus::prelude::*;
use uuid::Uuid;

use super::report_store_error;
use crate::constants::*;
use crate::state::{OverlayStyle, OverlayUpdate, TextOverlay, VideoStore};
use crate::utils::parse_f32_input;

#[component]
pub fn OverlayEditor(
    mut store: Signal<VideoStore>,
    notice: Signal<Option<String>>,
) -> Element {
    let mut text = use_signal(String::new);
    let mut font_size = use_signal(|| 24.0f32);
    let mut color = use_signal(|| "#ffffff".to_string());

    let Some(project) = store.read().current_project().cloned() else {
        return rsx! { div {} };
    };
    let project_id = project.id;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; padding: 12px;",
            div { style: "font-size: 13px; font-weight: 600;", "Text Overlays" }

            input {
                r#type: "text",
                placeholder: "Enter text",
                value: "{text}",
                style: "padding: 6px 8px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none;",
                oninput: move |e| text.set(e.value()),
            }
            div {
                style: "display: flex; gap: 6px;",
                input {
                    r#type: "number",
                    min: "8",
                    max: "72",
                    value: "{font_size()}",
                    style: "width: 64px; padding: 6px 8px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none;",
                    oninput: move |e| font_size.set(parse_f32_input(&e.value(), 24.0).clamp(8.0, 72.0)),
                }
                input {
                    r#type: "color",
                    value: "{color}",
                    style: "width: 40px; height: 30px; padding: 0; background: none; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; cursor: pointer;",
                    oninput: move |e| color.set(e.value()),
                }
            }
            button {
                style: "padding: 6px 10px; font-size: 12px; background-color: {ACCENT_PRIMARY}; color: white; border: none; border-radius: 6px; cursor: pointer;",
                onclick: move |_| {
                    let value = text();
                    if value.trim().is_empty() {
                        return;
                    }
                    let mut overlay = TextOverlay::new(value);
                    overlay.style = OverlayStyle {
                        font_size: font_size(),
                        color: color(),
                        ..Default::default()
                    };
                    report_store_error(notice, store.write().add_text_overlay(project_id, overlay));
                    text.set(String::new());
                },
                "Add Text Overlay"
            }

            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                for overlay in project.text_overlays.iter() {
                    OverlayRow {
                        key: "{overlay.id}",
                        store,
                        notice,
                        project_id,
                        overlay_id: overlay.id,
                        text: overlay.text.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn OverlayRow(
    mut store: Signal<VideoStore>,
    notice: Signal<Option<String>>,
    project_id: Uuid,
    overlay_id: Uuid,
    text: String,
) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 6px;",
            input {
                r#type: "text",
                value: "{text}",
                style: "flex: 1; min-width: 0; padding: 6px 8px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none;",
                onchange: move |e| report_store_error(
                    notice,
                    store.write().update_text_overlay(
                        project_id,
                        overlay_id,
                        OverlayUpdate {
                            text: Some(e.value()),
                            ..Default::default()
                        },
                    ),
                ),
            }
            button {
                style: "padding: 6px 10px; font-size: 12px; background-color: {BG_SURFACE}; color: {ACCENT_DANGER}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; cursor: pointer;",
                onclick: move |_| report_store_error(
                    notice,
                    store.write().remove_text_overlay(project_id, overlay_id),
                ),
                "Remove"
            }
        }
    }
}
