//! Project events: the flat, ordered form of the tracks and items a project
//! file is rendered from.

use crate::media::MediaKind;

/// One media file placed on a track.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Start within the track, in seconds
    pub position_s: f64,
    /// Length on the track, in seconds
    pub length_s: f64,
    /// Trim-in offset within the source media, in seconds
    pub source_offset_s: f64,
    /// Last component of the media path
    pub file_name: String,
    /// Full media path
    pub absolute_path: String,
    /// Source block type
    pub media_kind: MediaKind,
}

/// A step of the project tree, in document order.
///
/// Events of one track are contiguous: `TrackBegin`, its items, `TrackEnd`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectEvent {
    TrackBegin { display_name: String },
    MediaItem(MediaItem),
    TrackEnd,
}

impl ProjectEvent {
    /// Number of tracks in an event sequence.
    pub fn count_tracks(events: &[ProjectEvent]) -> usize {
        events
            .iter()
            .filter(|event| matches!(event, ProjectEvent::TrackBegin { .. }))
            .count()
    }

    /// Number of media items in an event sequence.
    pub fn count_items(events: &[ProjectEvent]) -> usize {
        events
            .iter()
            .filter(|event| matches!(event, ProjectEvent::MediaItem(_)))
            .count()
    }
}
