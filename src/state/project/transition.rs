use serde::{Deserialize, Serialize};

/// A named visual effect applied between media items during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    #[default]
    None,
    Fade,
    Slide,
    Zoom,
    Rotate,
    Wipe,
}

impl Transition {
    /// Every transition the renderer understands, in menu order.
    pub const ALL: [Transition; 6] = [
        Transition::None,
        Transition::Fade,
        Transition::Slide,
        Transition::Zoom,
        Transition::Rotate,
        Transition::Wipe,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Fade => "fade",
            Transition::Slide => "slide",
            Transition::Zoom => "zoom",
            Transition::Rotate => "rotate",
            Transition::Wipe => "wipe",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Transition::None => "None",
            Transition::Fade => "Fade",
            Transition::Slide => "Slide",
            Transition::Zoom => "Zoom",
            Transition::Rotate => "Rotate",
            Transition::Wipe => "Wipe",
        }
    }

    /// Parse a transition name. The empty string reads as `None`, matching
    /// the value a select control reports when nothing is chosen.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" | "none" => Some(Transition::None),
            "fade" => Some(Transition::Fade),
            "slide" => Some(Transition::Slide),
            "zoom" => Some(Transition::Zoom),
            "rotate" => Some(Transition::Rotate),
            "wipe" => Some(Transition::Wipe),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_kind() {
        for kind in Transition::ALL {
            assert_eq!(Transition::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Transition::parse("dissolve"), None);
        assert_eq!(Transition::parse("Fade"), None);
    }

    #[test]
    fn test_empty_string_is_none() {
        assert_eq!(Transition::parse(""), Some(Transition::None));
    }
}
