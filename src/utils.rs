use std::path::Path;

/// Generates a URL for a local file that is compatible with the webview's
/// custom protocol handler, hiding the scheme and encoding requirements.
pub fn local_media_url(path: &Path) -> String {
    let p_str = path.to_string_lossy().replace('\\', "/");
    format!("http://clipreel.localhost/{}", urlencoding::encode(&p_str))
}

/// Resolve a media source reference to something the webview can display.
/// Remote URLs pass through untouched; everything else is treated as a local
/// path.
pub fn display_url(source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        source.to_string()
    } else {
        local_media_url(Path::new(source))
    }
}

/// Format seconds as `mm:ss` for the transport readout.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

pub fn parse_f32_input(value: &str, fallback: f32) -> f32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f32>().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0.0), "00:00");
        assert_eq!(format_timecode(65.4), "01:05");
        assert_eq!(format_timecode(-3.0), "00:00");
    }

    #[test]
    fn test_display_url_passes_remote_through() {
        assert_eq!(
            display_url("https://images.example/photo.jpg"),
            "https://images.example/photo.jpg"
        );
    }

    #[test]
    fn test_display_url_encodes_local_paths() {
        let url = display_url("/media/my clip.mp4");
        assert!(url.starts_with("http://clipreel.localhost/"));
        assert!(url.contains("my%20clip.mp4"));
    }
}
