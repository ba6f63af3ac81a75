use dioxus::prelude::*;

use super::report_store_error;
use crate::constants::*;
use crate::core::media::ingest_search_result;
use crate::core::search::{ImageSearchClient, RemoteImage};
use crate::state::VideoStore;

#[component]
pub fn SearchModal(
    store: Signal<VideoStore>,
    mut notice: Signal<Option<String>>,
    on_close: EventHandler<()>,
) -> Element {
    let client = use_hook(ImageSearchClient::from_env);
    let mut query = use_signal(String::new);
    let results = use_signal(Vec::<RemoteImage>::new);
    let searching = use_signal(|| false);

    let make_search = || {
        let client = client.clone();
        let query = query.clone();
        let mut results = results.clone();
        let mut searching = searching.clone();
        let mut notice = notice.clone();
        move || {
            let Some(client) = client.clone() else {
                notice.set(Some(format!(
                    "Set {} to enable photo search",
                    crate::core::search::ACCESS_KEY_ENV
                )));
                return;
            };
            let q = query();
            if q.trim().is_empty() {
                return;
            }
            searching.set(true);
            spawn(async move {
                match client.search(&q, SEARCH_PAGE_SIZE).await {
                    Ok(images) => results.set(images),
                    Err(err) => {
                        log::warn!("image search failed: {err}");
                        notice.set(Some(err.to_string()));
                    }
                }
                searching.set(false);
            });
        }
    };
    let mut search_on_click = make_search();
    let mut search_on_key = make_search();

    let result_list = results.read().clone();
    let busy = searching();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background-color: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; z-index: 50;",
            div {
                style: "width: 640px; max-height: 70vh; display: flex; flex-direction: column; gap: 10px; padding: 16px; background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between;",
                    span { style: "font-size: 14px; font-weight: 600;", "Photo Search" }
                    button {
                        style: "background: none; border: none; color: {TEXT_MUTED}; cursor: pointer; font-size: 16px;",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div {
                    style: "display: flex; gap: 6px;",
                    input {
                        r#type: "text",
                        placeholder: "Search photos…",
                        value: "{query}",
                        style: "flex: 1; padding: 8px 10px; font-size: 13px; background-color: {BG_SURFACE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 6px; outline: none;",
                        oninput: move |e| query.set(e.value()),
                        onkeydown: move |e: KeyboardEvent| {
                            if e.key() == Key::Enter {
                                search_on_key();
                            }
                        },
                    }
                    button {
                        style: "padding: 8px 14px; font-size: 13px; background-color: {ACCENT_PRIMARY}; color: white; border: none; border-radius: 6px; cursor: pointer;",
                        disabled: busy,
                        onclick: move |_| search_on_click(),
                        if busy { "Searching…" } else { "Search" }
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px; overflow-y: auto;",
                    for image in result_list {
                        SearchResult {
                            key: "{image.id}",
                            store,
                            notice,
                            image,
                            on_picked: move |_| on_close.call(()),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResult(
    mut store: Signal<VideoStore>,
    notice: Signal<Option<String>>,
    image: RemoteImage,
    on_picked: EventHandler<()>,
) -> Element {
    let thumb = image.thumb_url.clone();
    let alt = image.description.clone().unwrap_or_default();

    rsx! {
        img {
            src: "{thumb}",
            alt: "{alt}",
            title: "{alt}",
            style: "width: 100%; height: 96px; object-fit: cover; border-radius: 4px; cursor: pointer;",
            onclick: move |_| {
                let Some(project_id) = store.read().current_project_id() else {
                    return;
                };
                let item = ingest_search_result(&image);
                report_store_error(notice, store.write().add_media_item(project_id, item));
                on_picked.call(());
            },
        }
    }
}
