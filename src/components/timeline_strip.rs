use dioxus::prelude::*;

use crate::constants::*;
use crate::core::timeline::{derive_timeline, frame_at_time};
use crate::state::{MediaItem, VideoStore};
use crate::utils::{display_url, format_timecode};

/// Pixels per second of media when laying out clip cards.
const STRIP_SCALE: f64 = 24.0;

#[component]
pub fn TimelineStrip(mut store: Signal<VideoStore>) -> Element {
    let (project, current_time, playing) = {
        let state = store.read();
        (
            state.current_project().cloned(),
            state.current_time(),
            state.is_playing(),
        )
    };
    let Some(project) = project else {
        return rsx! { div {} };
    };

    let plan = derive_timeline(&project.media_items, DEFAULT_FPS);
    let total_seconds = plan.total_seconds(DEFAULT_FPS);
    let active_id = plan
        .segment_at(frame_at_time(current_time, DEFAULT_FPS))
        .map(|s| s.item_id);
    let play_label = if playing { "⏸" } else { "▶" };

    rsx! {
        div {
            style: "height: {TIMELINE_STRIP_HEIGHT}px; display: flex; flex-direction: column; padding: 10px 14px; gap: 8px; background-color: {BG_ELEVATED}; border-top: 1px solid {BORDER_DEFAULT};",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                button {
                    style: "width: 30px; height: 30px; border-radius: 50%; background-color: {ACCENT_PRIMARY}; color: white; border: none; cursor: pointer;",
                    onclick: move |_| {
                        let playing = store.read().is_playing();
                        store.write().set_playing(!playing);
                    },
                    {play_label}
                }
                span {
                    style: "font-size: 12px; color: {TEXT_SECONDARY}; font-family: 'SF Mono', Consolas, monospace;",
                    {format_timecode(current_time)} " / " {format_timecode(total_seconds)}
                }
            }
            div {
                style: "display: flex; gap: 6px; overflow-x: auto; padding-bottom: 4px;",
                if project.media_items.is_empty() {
                    span { style: "font-size: 12px; color: {TEXT_DIM};", "The timeline is empty. Add media to get started." }
                }
                for (item, segment) in project.media_items.iter().zip(plan.segments.iter()) {
                    TimelineClip {
                        key: "{item.id}",
                        store,
                        item: item.clone(),
                        start_seconds: segment.start_seconds(DEFAULT_FPS),
                        active: Some(item.id) == active_id,
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineClip(
    mut store: Signal<VideoStore>,
    item: MediaItem,
    start_seconds: f64,
    active: bool,
) -> Element {
    let url = display_url(&item.source);
    let width = (item.duration * STRIP_SCALE).max(64.0).round() as u32;
    let border = if active { BORDER_ACCENT } else { BORDER_SUBTLE };

    rsx! {
        div {
            style: "flex-shrink: 0; width: {width}px; cursor: pointer; border: 2px solid {border}; border-radius: 6px; overflow: hidden; background-color: {BG_SURFACE};",
            onclick: move |_| store.write().set_current_time(start_seconds),
            div {
                style: "height: 54px; background-color: {BG_BASE};",
                if item.is_image() {
                    img { src: "{url}", style: "width: 100%; height: 100%; object-fit: cover;" }
                } else {
                    video { src: "{url}", muted: true, style: "width: 100%; height: 100%; object-fit: cover;" }
                }
            }
            div {
                style: "padding: 2px 6px; font-size: 10px; color: {TEXT_MUTED};",
                "{item.duration:.1}s"
            }
        }
    }
}
