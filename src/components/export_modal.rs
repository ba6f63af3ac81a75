use dioxus::prelude::*;

use crate::constants::*;
use crate::core::export::{ExportFormat, ExportSettings, FfmpegRenderer, Resolution};
use crate::core::timeline::derive_timeline;
use crate::state::VideoStore;
use crate::utils::format_timecode;

#[component]
pub fn ExportModal(
    store: Signal<VideoStore>,
    mut notice: Signal<Option<String>>,
    on_close: EventHandler<()>,
) -> Element {
    let mut resolution = use_signal(|| EXPORT_RESOLUTIONS[0].to_string());
    let mut fps = use_signal(|| DEFAULT_FPS);
    let mut format = use_signal(ExportFormat::default);
    let mut exporting = use_signal(|| false);
    let mut progress = use_signal(|| 0.0f32);
    let mut result_path = use_signal(|| None::<String>);

    let Some(project) = store.read().current_project().cloned() else {
        return rsx! { div {} };
    };

    // Live readout from the deriver at the chosen frame rate.
    let plan = derive_timeline(&project.media_items, fps());
    let total_frames = plan.total_frames;
    let duration_label = format_timecode(plan.total_seconds(fps()));
    let item_count = project.media_items.len();

    let busy = exporting();
    let percent = (progress() * 100.0).clamp(0.0, 100.0);
    let bar_width = format!("{percent:.0}%");
    let done = result_path.read().clone();

    rsx! {
        div {
            style: "position: fixed; inset: 0; background-color: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; z-index: 50;",
            div {
                style: "width: 480px; display: flex; flex-direction: column; gap: 12px; padding: 16px; background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 8px;",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between;",
                    span { style: "font-size: 14px; font-weight: 600;", "Export Video" }
                    button {
                        style: "background: none; border: none; color: {TEXT_MUTED}; cursor: pointer; font-size: 16px;",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                span {
                    style: "font-size: 12px; color: {TEXT_SECONDARY};",
                    "{item_count} media items · {total_frames} frames · {duration_label}"
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 8px; padding: 12px; background-color: {BG_SURFACE}; border: 1px solid {BORDER_SUBTLE}; border-radius: 6px;",
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        span { style: "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase;", "Resolution" }
                        select {
                            style: "padding: 6px 8px; font-size: 12px; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;",
                            onchange: move |e| resolution.set(e.value()),
                            for choice in EXPORT_RESOLUTIONS {
                                option {
                                    value: choice,
                                    selected: choice == resolution(),
                                    {choice}
                                }
                            }
                        }
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        span { style: "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase;", "FPS" }
                        select {
                            style: "padding: 6px 8px; font-size: 12px; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;",
                            onchange: move |e| fps.set(e.value().parse().unwrap_or(DEFAULT_FPS)),
                            for choice in EXPORT_FPS_CHOICES {
                                option {
                                    value: "{choice}",
                                    selected: choice == fps(),
                                    "{choice}"
                                }
                            }
                        }
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        span { style: "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase;", "Format" }
                        select {
                            style: "padding: 6px 8px; font-size: 12px; background-color: {BG_BASE}; color: {TEXT_PRIMARY}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;",
                            onchange: move |e| {
                                if let Some(parsed) = ExportFormat::parse(&e.value()) {
                                    format.set(parsed);
                                }
                            },
                            for choice in ExportFormat::ALL {
                                option {
                                    value: choice.extension(),
                                    selected: choice == format(),
                                    {choice.label()}
                                }
                            }
                        }
                    }
                }

                if busy {
                    div {
                        style: "display: flex; flex-direction: column; gap: 4px;",
                        div {
                            style: "width: 100%; height: 6px; background-color: {BG_SURFACE}; border-radius: 3px; overflow: hidden;",
                            div {
                                style: "width: {bar_width}; height: 100%; background-color: {ACCENT_PRIMARY};",
                            }
                        }
                        span { style: "font-size: 11px; color: {TEXT_SECONDARY};", "Exporting: {percent:.0}%" }
                    }
                } else {
                    button {
                        style: "padding: 8px 12px; font-size: 13px; background-color: {ACCENT_MEDIA}; color: white; border: none; border-radius: 6px; cursor: pointer;",
                        disabled: item_count == 0,
                        onclick: move |_| {
                            if exporting() {
                                return;
                            }
                            let settings = match Resolution::parse(&resolution()) {
                                Ok(parsed) => ExportSettings {
                                    resolution: parsed,
                                    fps: fps(),
                                    format: format(),
                                },
                                Err(err) => {
                                    notice.set(Some(err.to_string()));
                                    return;
                                }
                            };
                            let Some(out_dir) = rfd::FileDialog::new()
                                .set_title("Choose Export Folder")
                                .pick_folder()
                            else {
                                return;
                            };
                            let Some(snapshot) = store.read().current_project().cloned() else {
                                return;
                            };
                            exporting.set(true);
                            progress.set(0.0);
                            result_path.set(None);
                            spawn(async move {
                                let renderer = FfmpegRenderer::new();
                                let mut progress = progress;
                                let outcome = renderer
                                    .render(&snapshot, &settings, &out_dir, |fraction| {
                                        progress.set(fraction);
                                    })
                                    .await;
                                match outcome {
                                    Ok(path) => result_path.set(Some(path.display().to_string())),
                                    Err(err) => {
                                        log::error!("export failed: {err}");
                                        notice.set(Some(err.to_string()));
                                    }
                                }
                                exporting.set(false);
                            });
                        },
                        "Start Export"
                    }
                }

                if let Some(path) = done {
                    span {
                        style: "font-size: 11px; color: {ACCENT_MEDIA};",
                        "Exported to {path}"
                    }
                }
            }
        }
    }
}
