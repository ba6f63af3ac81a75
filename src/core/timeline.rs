//! Timeline derivation: the pure computation mapping a media sequence and a
//! frame rate onto per-item frame ranges for the player and the renderer.
//!
//! The derivation walks the sequence once, accumulating a running frame
//! counter: each item's start frame is the end of the previous one, so the
//! resulting ranges are contiguous and non-overlapping by construction.
//! Rounding happens per item, never on prefix sums.

use uuid::Uuid;

use crate::state::MediaItem;

/// The frame range one media item occupies in the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSegment {
    /// Id of the media item this range belongs to.
    pub item_id: Uuid,
    /// First frame of the range.
    pub start_frame: u64,
    /// Number of frames, always at least 1.
    pub frame_count: u64,
}

impl TimelineSegment {
    /// One past the last frame of this range.
    pub fn end_frame(&self) -> u64 {
        self.start_frame + self.frame_count
    }

    /// Start of the range in seconds.
    pub fn start_seconds(&self, fps: u32) -> f64 {
        self.start_frame as f64 / fps as f64
    }

    /// End of the range in seconds.
    pub fn end_seconds(&self, fps: u32) -> f64 {
        self.end_frame() as f64 / fps as f64
    }
}

/// The derived playback plan for a whole media sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelinePlan {
    /// One segment per media item, in playback order.
    pub segments: Vec<TimelineSegment>,
    /// Total composition length in frames, never zero.
    pub total_frames: u64,
}

impl TimelinePlan {
    /// The segment covering `frame`, if any item does.
    pub fn segment_at(&self, frame: u64) -> Option<&TimelineSegment> {
        self.segments
            .iter()
            .find(|s| frame >= s.start_frame && frame < s.end_frame())
    }

    /// The segment belonging to a media item.
    #[allow(dead_code)]
    pub fn segment_for(&self, item_id: Uuid) -> Option<&TimelineSegment> {
        self.segments.iter().find(|s| s.item_id == item_id)
    }

    /// Composition length in seconds at the derivation frame rate.
    pub fn total_seconds(&self, fps: u32) -> f64 {
        self.total_frames as f64 / fps as f64
    }
}

/// Convert a playhead time to a frame index.
pub fn frame_at_time(seconds: f64, fps: u32) -> u64 {
    (seconds.max(0.0) * fps as f64).floor() as u64
}

/// Derive the frame ranges for `items` at the given frame rate.
///
/// Guarantees, for any input:
/// - deterministic: same items and fps always yield the same plan;
/// - contiguous: each segment starts where the previous one ends, beginning
///   at frame 0;
/// - every segment spans at least one frame, even for sub-frame durations;
/// - `total_frames >= 1`, so a downstream renderer never sees a
///   zero-duration composition (an empty sequence yields one frame and no
///   segments).
pub fn derive_timeline(items: &[MediaItem], fps: u32) -> TimelinePlan {
    debug_assert!(fps > 0, "frame rate must be positive");

    let mut segments = Vec::with_capacity(items.len());
    let mut cursor = 0u64;

    for item in items {
        let frame_count = ((item.duration * fps as f64).round() as u64).max(1);
        segments.push(TimelineSegment {
            item_id: item.id,
            start_frame: cursor,
            frame_count,
        });
        cursor += frame_count;
    }

    TimelinePlan {
        segments,
        total_frames: cursor.max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MediaItem;

    fn items(durations: &[f64]) -> Vec<MediaItem> {
        durations
            .iter()
            .map(|d| MediaItem::image("x.png").with_duration(*d))
            .collect()
    }

    #[test]
    fn test_image_then_video_at_30fps() {
        let sequence = vec![
            MediaItem::image("beach.png"),
            MediaItem::video("take1.mp4", 3.2),
        ];
        let plan = derive_timeline(&sequence, 30);

        assert_eq!(plan.segments.len(), 2);
        assert_eq!(plan.segments[0].start_frame, 0);
        assert_eq!(plan.segments[0].frame_count, 150);
        assert_eq!(plan.segments[1].start_frame, 150);
        assert_eq!(plan.segments[1].frame_count, 96);
        assert_eq!(plan.total_frames, 246);
    }

    #[test]
    fn test_empty_sequence_yields_one_frame() {
        let plan = derive_timeline(&[], 30);
        assert!(plan.segments.is_empty());
        assert_eq!(plan.total_frames, 1);
    }

    #[test]
    fn test_segments_are_contiguous() {
        let sequence = items(&[0.5, 2.75, 0.01, 1.2, 0.34]);
        let plan = derive_timeline(&sequence, 24);

        let mut expected_start = 0u64;
        for segment in &plan.segments {
            assert_eq!(segment.start_frame, expected_start);
            assert!(segment.frame_count >= 1);
            expected_start = segment.end_frame();
        }
        assert_eq!(plan.total_frames, expected_start);
    }

    #[test]
    fn test_sub_frame_duration_still_gets_a_frame() {
        // 0.1s is the model's duration floor; at 1 fps it rounds to zero
        // frames and must be bumped to one.
        let plan = derive_timeline(&items(&[0.1, 0.1]), 1);
        assert_eq!(plan.segments[0].frame_count, 1);
        assert_eq!(plan.segments[1].start_frame, 1);
        assert_eq!(plan.total_frames, 2);
    }

    #[test]
    fn test_per_item_rounding_stays_within_tolerance() {
        let durations = [1.017, 2.49, 0.51, 3.999];
        let fps = 30u32;
        let plan = derive_timeline(&items(&durations), fps);

        for (segment, duration) in plan.segments.iter().zip(durations) {
            let exact = duration * fps as f64;
            assert!((segment.frame_count as f64 - exact).abs() <= 1.0);
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let sequence = items(&[1.3, 0.7, 4.4]);
        assert_eq!(derive_timeline(&sequence, 60), derive_timeline(&sequence, 60));
    }

    #[test]
    fn test_segment_lookup_by_frame_and_item() {
        let sequence = items(&[1.0, 1.0]);
        let plan = derive_timeline(&sequence, 30);

        assert_eq!(plan.segment_at(0).unwrap().item_id, sequence[0].id);
        assert_eq!(plan.segment_at(29).unwrap().item_id, sequence[0].id);
        assert_eq!(plan.segment_at(30).unwrap().item_id, sequence[1].id);
        assert!(plan.segment_at(60).is_none());

        let second = plan.segment_for(sequence[1].id).unwrap();
        assert_eq!(second.start_frame, 30);
        assert_eq!(second.start_seconds(30), 1.0);
        assert_eq!(second.end_seconds(30), 2.0);
    }

    #[test]
    fn test_frame_at_time() {
        assert_eq!(frame_at_time(0.0, 30), 0);
        assert_eq!(frame_at_time(1.0, 30), 30);
        assert_eq!(frame_at_time(0.999, 30), 29);
        assert_eq!(frame_at_time(-1.0, 30), 0);
    }
}
