use dioxus::prelude::*;

use crate::constants::*;
use crate::core::timeline::derive_timeline;
use crate::utils::format_timecode;

#[component]
pub fn StatusBar(
    store: Signal<crate::state::VideoStore>,
    mut notice: Signal<Option<String>>,
) -> Element {
    let (current, total) = {
        let state = store.read();
        let total = state
            .current_project()
            .map(|p| derive_timeline(&p.media_items, DEFAULT_FPS).total_seconds(DEFAULT_FPS))
            .unwrap_or(0.0);
        (state.current_time(), total)
    };
    let message = notice.read().clone();

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 24px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            if let Some(text) = message {
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "color: {ACCENT_DANGER};", {text} }
                    button {
                        style: "background: none; border: none; color: {TEXT_MUTED}; cursor: pointer; font-size: 11px;",
                        onclick: move |_| notice.set(None),
                        "Dismiss"
                    }
                }
            } else {
                span { "Ready" }
            }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{DEFAULT_FPS} fps" }
                span { {format_timecode(current)} " / " {format_timecode(total)} }
            }
        }
    }
}
