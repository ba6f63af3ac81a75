use dioxus::prelude::*;
use uuid::Uuid;

use super::report_store_error;
use crate::constants::*;
use crate::core::media::ingest_file;
use crate::state::{MediaItem, VideoStore};
use crate::utils::display_url;

#[component]
pub fn MediaPanel(
    mut store: Signal<VideoStore>,
    notice: Signal<Option<String>>,
) -> Element {
    let Some(project) = store.read().current_project().cloned() else {
        return rsx! { div {} };
    };
    let project_id = project.id;
    let count = project.media_items.len();

    rsx! {
        aside {
            style: "width: {PANEL_WIDTH}px; display: flex; flex-direction: column; padding: 12px; gap: 8px; background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT}; overflow-y: auto;",
            div { style: "font-size: 13px; font-weight: 600;", "Media" }
            button {
                style: "width: 100%; padding: 8px 12px; background-color: {BG_SURFACE}; border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px; color: {TEXT_SECONDARY}; font-size: 12px; cursor: pointer;",
                onclick: move |_| {
                    if let Some(paths) = rfd::FileDialog::new()
                        .add_filter(
                            "Media Files",
                            &["png", "jpg", "jpeg", "gif", "webp", "mp4", "mov", "avi", "mkv", "webm"],
                        )
                        .set_title("Add Media")
                        .pick_files()
                    {
                        for path in paths {
                            let mut notice = notice;
                            spawn(async move {
                                match ingest_file(&path).await {
                                    Ok(item) => report_store_error(
                                        notice,
                                        store.write().add_media_item(project_id, item),
                                    ),
                                    Err(err) => notice.set(Some(err.to_string())),
                                }
                            });
                        }
                    }
                },
                "+ Add Media…"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                for (index, item) in project.media_items.iter().enumerate() {
                    MediaCard {
                        key: "{item.id}",
                        store,
                        notice,
                        project_id,
                        item: item.clone(),
                        index,
                        count,
                    }
                }
            }
        }
    }
}

#[component]
fn MediaCard(
    mut store: Signal<VideoStore>,
    notice: Signal<Option<String>>,
    project_id: Uuid,
    item: MediaItem,
    index: usize,
    count: usize,
) -> Element {
    let item_id = item.id;
    let url = display_url(&item.source);
    let kind_label = if item.is_image() { "Image" } else { "Video" };
    let caption = item.overlay_text.clone().unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; padding: 8px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;",
            div {
                style: "aspect-ratio: 16/9; background-color: {BG_BASE}; border-radius: 4px; overflow: hidden;",
                if item.is_image() {
                    img {
                        src: "{url}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                } else {
                    video {
                        src: "{url}",
                        muted: true,
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; font-size: 11px; color: {TEXT_MUTED};",
                span { "{kind_label} · {item.duration:.1}s" }
                div {
                    style: "display: flex; gap: 4px;",
                    button {
                        style: "background: none; border: none; color: {TEXT_SECONDARY}; cursor: pointer;",
                        disabled: index == 0,
                        onclick: move |_| report_store_error(
                            notice,
                            store.write().reorder_media_items(project_id, index, index.saturating_sub(1)),
                        ),
                        "◀"
                    }
                    button {
                        style: "background: none; border: none; color: {TEXT_SECONDARY}; cursor: pointer;",
                        disabled: index + 1 >= count,
                        onclick: move |_| report_store_error(
                            notice,
                            store.write().reorder_media_items(project_id, index, index + 1),
                        ),
                        "▶"
                    }
                    button {
                        style: "background: none; border: none; color: {ACCENT_DANGER}; cursor: pointer;",
                        onclick: move |_| report_store_error(
                            notice,
                            store.write().remove_media_item(project_id, item_id),
                        ),
                        "✕"
                    }
                }
            }
            input {
                r#type: "text",
                placeholder: "Caption…",
                value: "{caption}",
                style: "padding: 4px 6px; font-size: 11px; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_SUBTLE}; border-radius: 4px; outline: none;",
                onchange: move |e| report_store_error(
                    notice,
                    store.write().update_media_item_text(project_id, item_id, Some(e.value())),
                ),
            }
        }
    }
}
