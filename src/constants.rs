//! Shared UI constants (colors, panel sizing) and model defaults.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_PRIMARY: &str = "#3b82f6";
pub const ACCENT_MEDIA: &str = "#22c55e";
pub const ACCENT_DANGER: &str = "#ef4444";

/// Sidebar and tool panel width in pixels.
pub const PANEL_WIDTH: f64 = 260.0;
/// Height of the timeline strip along the bottom edge.
pub const TIMELINE_STRIP_HEIGHT: f64 = 150.0;

/// Duration assigned to still images when they enter the timeline.
pub const DEFAULT_IMAGE_DURATION_SECONDS: f64 = 5.0;
/// Floor applied to every media duration; nothing plays shorter than this.
pub const MIN_MEDIA_DURATION_SECONDS: f64 = 0.1;

/// Frame rate used for the preview player and as the export default.
pub const DEFAULT_FPS: u32 = 30;
/// Preview playhead update interval.
pub const PLAYBACK_TICK_MS: u64 = 16;

/// Results requested per image search.
pub const SEARCH_PAGE_SIZE: u32 = 20;
/// Upper bound on a single video metadata probe.
pub const PROBE_TIMEOUT_SECONDS: u64 = 10;

/// Resolutions offered by the export dialog, as "WxH" strings.
pub const EXPORT_RESOLUTIONS: [&str; 3] = ["1920x1080", "3840x2160", "1280x720"];
/// Frame rates offered by the export dialog.
pub const EXPORT_FPS_CHOICES: [u32; 3] = [24, 30, 60];
