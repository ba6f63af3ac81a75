use dioxus::prelude::*;

use super::report_store_error;
use crate::constants::*;
use crate::state::{TextOverlay, Transition, VideoStore};

#[component]
pub fn Toolbar(
    mut store: Signal<VideoStore>,
    notice: Signal<Option<String>>,
) -> Element {
    let Some(project) = store.read().current_project().cloned() else {
        return rsx! { div {} };
    };
    let project_id = project.id;
    let current_transition = project.transition;
    let audio_name = project.background_audio.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; padding: 12px; border-bottom: 1px solid {BORDER_SUBTLE};",
            div { style: "font-size: 13px; font-weight: 600;", "Editing Tools" }

            // Background audio
            if let Some(audio) = audio_name {
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; font-size: 11px; color: {TEXT_SECONDARY};",
                    span { style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "♪ {audio}" }
                    button {
                        style: "background: none; border: none; color: {ACCENT_DANGER}; cursor: pointer; font-size: 11px;",
                        onclick: move |_| report_store_error(
                            notice,
                            store.write().set_background_audio(project_id, None),
                        ),
                        "Clear"
                    }
                }
            } else {
                button {
                    style: "padding: 6px 10px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_SECONDARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Audio", &["mp3", "wav", "ogg", "flac"])
                            .set_title("Add Background Audio")
                            .pick_file()
                        {
                            let source = path.to_string_lossy().into_owned();
                            report_store_error(
                                notice,
                                store.write().set_background_audio(project_id, Some(source)),
                            );
                        }
                    },
                    "♪ Add Background Audio"
                }
            }

            button {
                style: "padding: 6px 10px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_SECONDARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px; cursor: pointer;",
                onclick: move |_| report_store_error(
                    notice,
                    store.write().add_text_overlay(project_id, TextOverlay::new("New Text")),
                ),
                "T Add Text Overlay"
            }

            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                span { style: "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Transition" }
                select {
                    style: "padding: 6px 8px; font-size: 12px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; outline: none;",
                    onchange: move |e| report_store_error(
                        notice,
                        store.write().set_transition(project_id, &e.value()),
                    ),
                    for kind in Transition::ALL {
                        option {
                            value: kind.as_str(),
                            selected: kind == current_transition,
                            {kind.label()}
                        }
                    }
                }
            }
        }
    }
}
