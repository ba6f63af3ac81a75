use std::time::{Duration, Instant};

use dioxus::prelude::*;

use crate::constants::*;
use crate::core::timeline::{derive_timeline, frame_at_time};
use crate::state::{TextOverlay, VideoStore};
use crate::utils::display_url;

#[component]
pub fn Player(store: Signal<VideoStore>) -> Element {
    // Playback tick: advance the playhead by wall-clock delta while playing,
    // stopping at the end of the composition.
    use_future(move || {
        let mut store = store.clone();
        async move {
            let mut last_tick = Instant::now();
            loop {
                tokio::time::sleep(Duration::from_millis(PLAYBACK_TICK_MS)).await;
                if !store.read().is_playing() {
                    last_tick = Instant::now();
                    continue;
                }

                let now = Instant::now();
                let delta = now.saturating_duration_since(last_tick);
                last_tick = now;

                let (current, total) = {
                    let state = store.read();
                    let total = state
                        .current_project()
                        .map(|p| {
                            derive_timeline(&p.media_items, DEFAULT_FPS)
                                .total_seconds(DEFAULT_FPS)
                        })
                        .unwrap_or(0.0);
                    (state.current_time(), total)
                };

                let next = (current + delta.as_secs_f64()).min(total);
                let mut state = store.write();
                state.set_current_time(next);
                if next >= total {
                    state.set_playing(false);
                }
            }
        }
    });

    let (project, current_time) = {
        let state = store.read();
        (state.current_project().cloned(), state.current_time())
    };
    let Some(project) = project else {
        return rsx! { div {} };
    };

    let plan = derive_timeline(&project.media_items, DEFAULT_FPS);
    let active_item = plan
        .segment_at(frame_at_time(current_time, DEFAULT_FPS))
        .and_then(|segment| project.find_media_item(segment.item_id))
        .cloned();

    rsx! {
        div {
            style: "flex: 1; position: relative; display: flex; align-items: center; justify-content: center; background-color: black; overflow: hidden;",
            if let Some(item) = active_item {
                if item.is_image() {
                    img {
                        src: display_url(&item.source),
                        style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    }
                } else {
                    video {
                        src: display_url(&item.source),
                        muted: true,
                        style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    }
                }
            } else {
                span {
                    style: "font-size: 13px; color: {TEXT_DIM};",
                    "Add media to preview your composition"
                }
            }
            for overlay in project.text_overlays.iter() {
                PlayerOverlay { key: "{overlay.id}", overlay: overlay.clone() }
            }
        }
    }
}

#[component]
fn PlayerOverlay(overlay: TextOverlay) -> Element {
    let left = format!("{:.1}%", overlay.x * 100.0);
    let top = format!("{:.1}%", overlay.y * 100.0);
    let font_size = format!("{}px", overlay.style.font_size.round() as u32);
    let font_family = overlay.style.font_family.clone();
    let color = overlay.style.color.clone();
    let shadow = overlay.style.shadow.clone().unwrap_or_else(|| "none".to_string());

    rsx! {
        div {
            style: "position: absolute; left: {left}; top: {top}; font-size: {font_size}; font-family: {font_family}; color: {color}; text-shadow: {shadow}; pointer-events: none;",
            {overlay.text.clone()}
        }
    }
}
