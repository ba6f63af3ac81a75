use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry animation applied to a text overlay when the composition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlayAnimation {
    None,
    #[default]
    Fade,
    Slide,
    Zoom,
    Rotate,
}

/// Visual styling for a text overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels at the composition's native resolution.
    pub font_size: f32,
    /// Text color (hex string, e.g. "#ffffff").
    pub color: String,
    /// Optional CSS-style text shadow.
    #[serde(default)]
    pub shadow: Option<String>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".to_string(),
            font_size: 24.0,
            color: "#ffffff".to_string(),
            shadow: Some("2px 2px 2px rgba(0,0,0,0.5)".to_string()),
        }
    }
}

/// A positioned, styled text element composited over the whole video output.
///
/// Positions are normalized to [0, 1] so they are resolution-independent;
/// overlays are not tied to any media item's time range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Unique identifier.
    pub id: Uuid,
    /// The text to draw.
    pub text: String,
    /// Normalized horizontal position in [0, 1].
    pub x: f32,
    /// Normalized vertical position in [0, 1].
    pub y: f32,
    #[serde(default)]
    pub style: OverlayStyle,
    #[serde(default)]
    pub animation: OverlayAnimation,
}

impl TextOverlay {
    /// Create a centered overlay with default styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, 0.5, 0.5)
    }

    /// Create an overlay at a normalized position.
    #[allow(dead_code)]
    pub fn at(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
            style: OverlayStyle::default(),
            animation: OverlayAnimation::default(),
        }
    }

    /// Apply a partial update; `None` fields are left unchanged.
    pub(crate) fn apply(&mut self, update: OverlayUpdate) {
        if let Some(text) = update.text {
            self.text = text;
        }
        if let Some((x, y)) = update.position {
            self.x = x.clamp(0.0, 1.0);
            self.y = y.clamp(0.0, 1.0);
        }
        if let Some(style) = update.style {
            self.style = style;
        }
        if let Some(animation) = update.animation {
            self.animation = animation;
        }
    }
}

/// A partial overlay update, addressed by overlay id at the store boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayUpdate {
    pub text: Option<String>,
    /// New normalized position; values are clamped into [0, 1].
    pub position: Option<(f32, f32)>,
    pub style: Option<OverlayStyle>,
    pub animation: Option<OverlayAnimation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_overlay_is_centered() {
        let overlay = TextOverlay::new("Hello");
        assert_eq!(overlay.x, 0.5);
        assert_eq!(overlay.y, 0.5);
        assert_eq!(overlay.animation, OverlayAnimation::Fade);
    }

    #[test]
    fn test_apply_clamps_position() {
        let mut overlay = TextOverlay::new("Hello");
        overlay.apply(OverlayUpdate {
            position: Some((1.5, -0.25)),
            ..Default::default()
        });
        assert_eq!(overlay.x, 1.0);
        assert_eq!(overlay.y, 0.0);
        assert_eq!(overlay.text, "Hello");
    }

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let mut overlay = TextOverlay::new("Hello");
        let style_before = overlay.style.clone();
        overlay.apply(OverlayUpdate {
            text: Some("Goodbye".to_string()),
            ..Default::default()
        });
        assert_eq!(overlay.text, "Goodbye");
        assert_eq!(overlay.style, style_before);
    }
}
