//! Export collaborator: renders a project snapshot to a video file by
//! delegating composition to the ffmpeg CLI.
//!
//! The renderer consumes a cloned snapshot, so a running export is isolated
//! from later edits and can never corrupt the store. Every failure mode
//! (bad settings, spawn failure, non-zero exit) is terminal and reported as
//! an [`ExportError`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use log::{info, warn};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

use crate::core::timeline::{derive_timeline, TimelinePlan};
use crate::state::{MediaKind, Project};

/// Font size used for per-item captions, in output pixels.
const CAPTION_FONT_SIZE: u32 = 36;

/// Terminal export failures, surfaced to the UI for user notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("invalid resolution {0:?}, expected \"WxH\"")]
    InvalidResolution(String),

    #[error("export failed: {0}")]
    ExportFailed(String),
}

/// Output pixel dimensions, parsed from "WxH" strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Parse a "WxH" string; zero or malformed dimensions are rejected.
    pub fn parse(value: &str) -> Result<Self, ExportError> {
        let invalid = || ExportError::InvalidResolution(value.to_string());
        let (w, h) = value.split_once('x').ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Output container and codec pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Mp4,
    WebM,
}

impl ExportFormat {
    /// Formats offered by the export dialog, in menu order.
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Mp4, ExportFormat::WebM];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Mp4 => "mp4",
            ExportFormat::WebM => "webm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Mp4 => "MP4",
            ExportFormat::WebM => "WebM",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mp4" => Some(ExportFormat::Mp4),
            "webm" => Some(ExportFormat::WebM),
            _ => None,
        }
    }

    fn video_codec_args(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Mp4 => &[
                "-c:v", "libx264", "-pix_fmt", "yuv420p", "-preset", "fast", "-crf", "18",
            ],
            ExportFormat::WebM => &["-c:v", "libvpx-vp9", "-b:v", "0", "-crf", "32"],
        }
    }

    fn audio_codec_args(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Mp4 => &["-c:a", "aac", "-b:a", "128k"],
            ExportFormat::WebM => &["-c:a", "libopus"],
        }
    }
}

/// Settings handed to the renderer alongside the project snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    pub resolution: Resolution,
    pub fps: u32,
    pub format: ExportFormat,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            fps: crate::constants::DEFAULT_FPS,
            format: ExportFormat::default(),
        }
    }
}

/// Renders a project by shelling out to ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegRenderer {
    binary: PathBuf,
}

impl Default for FfmpegRenderer {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("ffmpeg"),
        }
    }
}

impl FfmpegRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `project` into `out_dir`, reporting progress as a 0.0–1.0
    /// fraction of the derived total frame count.
    pub async fn render(
        &self,
        project: &Project,
        settings: &ExportSettings,
        out_dir: &Path,
        mut on_progress: impl FnMut(f32),
    ) -> Result<PathBuf, ExportError> {
        if project.media_items.is_empty() {
            return Err(ExportError::ExportFailed(
                "project has no media items".to_string(),
            ));
        }

        let plan = derive_timeline(&project.media_items, settings.fps);
        let total_us = (plan.total_frames as f64 / settings.fps as f64) * 1_000_000.0;

        let out_path = out_dir.join(format!(
            "{}.{}",
            sanitize_file_name(&project.name),
            settings.format.extension()
        ));
        let args = build_args(project, settings, &plan, &out_path);

        info!(
            "exporting {} media items ({} frames) to {}",
            project.media_items.len(),
            plan.total_frames,
            out_path.display()
        );

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ExportError::ExportFailed(format!(
                    "could not launch {}: {e}",
                    self.binary.display()
                ))
            })?;

        let Some(stdout) = child.stdout.take() else {
            return Err(ExportError::ExportFailed(
                "renderer stdout was not captured".to_string(),
            ));
        };
        let Some(mut stderr) = child.stderr.take() else {
            return Err(ExportError::ExportFailed(
                "renderer stderr was not captured".to_string(),
            ));
        };

        // Drain stderr concurrently so a chatty encoder cannot stall on a
        // full pipe while we read progress from stdout.
        let stderr_task = tokio::spawn(async move {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf).await;
            buf
        });

        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if let Some(us) = parse_progress_line(&line) {
                on_progress((us as f64 / total_us).clamp(0.0, 1.0) as f32);
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ExportError::ExportFailed(e.to_string()))?;
        let stderr_text = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let tail = error_tail(&stderr_text);
            warn!("ffmpeg exited with {status}: {tail}");
            return Err(ExportError::ExportFailed(format!(
                "ffmpeg exited with {status}: {tail}"
            )));
        }

        on_progress(1.0);
        Ok(out_path)
    }
}

/// Assemble the full ffmpeg argument list for one export job.
fn build_args(
    project: &Project,
    settings: &ExportSettings,
    plan: &TimelinePlan,
    out_path: &Path,
) -> Vec<String> {
    let mut args: Vec<String> = vec!["-y".to_string()];

    for item in &project.media_items {
        if item.kind == MediaKind::Image {
            args.push("-loop".to_string());
            args.push("1".to_string());
        }
        args.push("-t".to_string());
        args.push(format!("{}", item.duration));
        args.push("-i".to_string());
        args.push(item.source.clone());
    }

    let audio_input = project.background_audio.as_ref().map(|audio| {
        args.push("-i".to_string());
        args.push(audio.clone());
        project.media_items.len()
    });

    let (graph, final_label) = build_filter_graph(project, settings, plan);
    args.push("-filter_complex".to_string());
    args.push(graph);
    args.push("-map".to_string());
    args.push(format!("[{final_label}]"));

    if let Some(index) = audio_input {
        args.push("-map".to_string());
        args.push(format!("{index}:a"));
        args.extend(settings.format.audio_codec_args().iter().map(|s| s.to_string()));
        args.push("-shortest".to_string());
    }

    args.push("-r".to_string());
    args.push(settings.fps.to_string());
    args.extend(settings.format.video_codec_args().iter().map(|s| s.to_string()));

    args.push("-progress".to_string());
    args.push("pipe:1".to_string());
    args.push("-nostats".to_string());
    args.push(out_path.to_string_lossy().into_owned());

    args
}

/// Build the filter graph: scale/pad every input to the target resolution,
/// concatenate, then draw per-item captions (windowed to their derived time
/// ranges) and the project-wide text overlays.
fn build_filter_graph(
    project: &Project,
    settings: &ExportSettings,
    plan: &TimelinePlan,
) -> (String, String) {
    let Resolution { width, height } = settings.resolution;
    let fps = settings.fps;
    let count = project.media_items.len();

    let mut graph = String::new();
    for i in 0..count {
        graph.push_str(&format!(
            "[{i}:v]scale={width}:{height}:force_original_aspect_ratio=decrease,\
             pad={width}:{height}:(ow-iw)/2:(oh-ih)/2,setsar=1,fps={fps}[v{i}];"
        ));
    }
    for i in 0..count {
        graph.push_str(&format!("[v{i}]"));
    }
    graph.push_str(&format!("concat=n={count}:v=1:a=0[vcat]"));

    let mut current = "vcat".to_string();
    let mut label = 0usize;

    for (item, segment) in project.media_items.iter().zip(&plan.segments) {
        let Some(text) = item.overlay_text.as_deref() else {
            continue;
        };
        let next = format!("txt{label}");
        graph.push_str(&format!(
            ";[{current}]drawtext=text='{}':x=(w-text_w)/2:y=h-2.5*text_h:\
             fontsize={CAPTION_FONT_SIZE}:fontcolor=white:\
             enable='between(t,{:.3},{:.3})'[{next}]",
            escape_drawtext(text),
            segment.start_seconds(fps),
            segment.end_seconds(fps),
        ));
        current = next;
        label += 1;
    }

    for overlay in &project.text_overlays {
        let next = format!("txt{label}");
        graph.push_str(&format!(
            ";[{current}]drawtext=text='{}':x=w*{:.4}:y=h*{:.4}:fontsize={}:fontcolor={}[{next}]",
            escape_drawtext(&overlay.text),
            overlay.x,
            overlay.y,
            overlay.style.font_size.round() as u32,
            overlay.style.color,
        ));
        current = next;
        label += 1;
    }

    (graph, current)
}

/// Escape text for use inside a quoted drawtext argument.
fn escape_drawtext(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', r"'\''")
        .replace(':', "\\:")
}

/// Extract the microsecond playhead from an ffmpeg `-progress` line.
fn parse_progress_line(line: &str) -> Option<u64> {
    line.strip_prefix("out_time_us=")?.trim().parse().ok()
}

/// The last non-empty stderr line, which is where ffmpeg puts its actual
/// diagnostic.
fn error_tail(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("no diagnostic output")
        .to_string()
}

fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "export".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MediaItem, TextOverlay};

    fn sample_project() -> Project {
        let mut project = Project::new("My Video Project");
        project.media_items.push(MediaItem::image("beach.png"));
        project.media_items.push(MediaItem::video("take1.mp4", 3.2));
        project
    }

    fn settings() -> ExportSettings {
        ExportSettings::default()
    }

    fn args_for(project: &Project) -> Vec<String> {
        let s = settings();
        let plan = derive_timeline(&project.media_items, s.fps);
        build_args(project, &s, &plan, Path::new("out/My_Video_Project.mp4"))
    }

    #[test]
    fn test_resolution_parse() {
        assert_eq!(
            Resolution::parse("1920x1080").unwrap(),
            Resolution {
                width: 1920,
                height: 1080
            }
        );
        assert_eq!(Resolution::parse("1280x720").unwrap().to_string(), "1280x720");
        assert!(Resolution::parse("1920").is_err());
        assert!(Resolution::parse("0x1080").is_err());
        assert!(Resolution::parse("widexhigh").is_err());
    }

    #[test]
    fn test_images_loop_and_videos_trim() {
        let args = args_for(&sample_project());
        let loop_at = args.iter().position(|a| a == "-loop").unwrap();
        assert_eq!(args[loop_at + 1], "1");
        // Both inputs carry their item duration as an input limit.
        assert_eq!(args.iter().filter(|a| *a == "-t").count(), 2);
        assert!(args.contains(&"beach.png".to_string()));
        assert!(args.contains(&"take1.mp4".to_string()));
    }

    #[test]
    fn test_filter_graph_concatenates_all_items() {
        let project = sample_project();
        let s = settings();
        let plan = derive_timeline(&project.media_items, s.fps);
        let (graph, label) = build_filter_graph(&project, &s, &plan);
        assert!(graph.contains("concat=n=2:v=1:a=0[vcat]"));
        assert!(graph.contains("scale=1920:1080"));
        assert_eq!(label, "vcat");
    }

    #[test]
    fn test_caption_is_windowed_to_its_segment() {
        let mut project = sample_project();
        project.media_items[1].overlay_text = Some("Take one".to_string());
        let s = settings();
        let plan = derive_timeline(&project.media_items, s.fps);
        let (graph, label) = build_filter_graph(&project, &s, &plan);
        // Second item starts at frame 150 -> 5.0s, ends at 246 -> 8.2s.
        assert!(graph.contains("between(t,5.000,8.200)"));
        assert_eq!(label, "txt0");
    }

    #[test]
    fn test_overlays_draw_after_concat() {
        let mut project = sample_project();
        project.text_overlays.push(TextOverlay::at("Title", 0.25, 0.1));
        let s = settings();
        let plan = derive_timeline(&project.media_items, s.fps);
        let (graph, label) = build_filter_graph(&project, &s, &plan);
        assert!(graph.contains("x=w*0.2500:y=h*0.1000"));
        assert!(graph.contains("fontcolor=#ffffff"));
        assert_eq!(label, "txt0");

        let args = args_for(&project);
        assert!(args.contains(&"[txt0]".to_string()));
    }

    #[test]
    fn test_background_audio_is_mapped_and_shortened() {
        let mut project = sample_project();
        project.background_audio = Some("music.mp3".to_string());
        let args = args_for(&project);
        assert!(args.contains(&"music.mp3".to_string()));
        assert!(args.contains(&"2:a".to_string()));
        assert!(args.contains(&"-shortest".to_string()));
    }

    #[test]
    fn test_progress_line_parsing() {
        assert_eq!(parse_progress_line("out_time_us=1500000"), Some(1_500_000));
        assert_eq!(parse_progress_line("frame=12"), None);
        assert_eq!(parse_progress_line("progress=end"), None);
        assert_eq!(parse_progress_line("out_time_us=nope"), None);
    }

    #[test]
    fn test_drawtext_escaping() {
        assert_eq!(escape_drawtext("it's 5:00"), r"it'\''s 5\:00");
    }

    #[test]
    fn test_error_tail_takes_last_diagnostic_line() {
        let stderr = "frame=  10\nConversion failed!\n\n";
        assert_eq!(error_tail(stderr), "Conversion failed!");
        assert_eq!(error_tail(""), "no diagnostic output");
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("My Video Project"), "My_Video_Project");
        assert_eq!(sanitize_file_name("  "), "export");
        assert_eq!(sanitize_file_name("a/b:c"), "a_b_c");
    }
}
