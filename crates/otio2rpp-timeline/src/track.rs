//! Track types for the timeline.

use otio2rpp_core::{RationalTime, TimeRange};
use std::fmt;

use crate::clip::Clip;

/// Kind of track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackKind {
    Video,
    Audio,
    /// Any kind string other than `Video` or `Audio`, kept verbatim.
    Other(String),
}

impl TrackKind {
    /// Parse an interchange kind string.
    pub fn from_kind_str(kind: &str) -> Self {
        match kind {
            "Video" => Self::Video,
            "Audio" => Self::Audio,
            other => Self::Other(other.to_string()),
        }
    }

    /// Kind string as written in the interchange document.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Other(kind) => kind,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item in a track.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackItem {
    Clip(Clip),
    Gap {
        duration: RationalTime,
    },
    /// Overlaps its neighbours, so it takes no room of its own.
    Transition {
        transition_name: String,
        in_offset: RationalTime,
        out_offset: RationalTime,
    },
    /// A nested stack or track.
    Nested {
        schema: String,
        duration: RationalTime,
    },
    /// An item of a schema this model does not know.
    Other {
        schema: String,
        duration: RationalTime,
    },
}

impl TrackItem {
    /// Get the duration of this item.
    pub fn duration(&self) -> RationalTime {
        match self {
            TrackItem::Clip(clip) => clip.duration(),
            TrackItem::Gap { duration } => *duration,
            TrackItem::Transition {
                in_offset,
                out_offset,
                ..
            } => *in_offset + *out_offset,
            TrackItem::Nested { duration, .. } => *duration,
            TrackItem::Other { duration, .. } => *duration,
        }
    }

    /// Whether the item sits on top of its neighbours instead of after them.
    pub fn is_overlapping(&self) -> bool {
        matches!(self, TrackItem::Transition { .. })
    }
}

/// A track containing clips and gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Track name, if the document gave one
    pub name: Option<String>,
    /// Track kind
    pub kind: TrackKind,
    /// Items in this track
    pub items: Vec<TrackItem>,
}

impl Track {
    /// Create a new empty track.
    pub fn new(name: Option<String>, kind: TrackKind) -> Self {
        Self {
            name,
            kind,
            items: Vec::new(),
        }
    }

    /// Create a new video track.
    pub fn new_video(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), TrackKind::Video)
    }

    /// Create a new audio track.
    pub fn new_audio(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), TrackKind::Audio)
    }

    /// Name to display, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Get the total duration of this track.
    pub fn duration(&self) -> RationalTime {
        self.items
            .iter()
            .filter(|item| !item.is_overlapping())
            .fold(RationalTime::ZERO, |acc, item| acc + item.duration())
    }

    /// Add an item to the end of the track.
    pub fn append_item(&mut self, item: TrackItem) {
        self.items.push(item);
    }

    /// Add a clip to the end of the track.
    pub fn append_clip(&mut self, clip: Clip) {
        self.items.push(TrackItem::Clip(clip));
    }

    /// Add a gap to the end of the track.
    pub fn append_gap(&mut self, duration: RationalTime) {
        self.items.push(TrackItem::Gap { duration });
    }

    /// Each item with its range in the track, in order.
    ///
    /// An item starts where the previous non-overlapping item ended; a
    /// transition starts `in_offset` before that point.
    pub fn items_with_ranges(&self) -> impl Iterator<Item = (&TrackItem, TimeRange)> + '_ {
        self.items.iter().scan(RationalTime::ZERO, |cursor, item| {
            let start = *cursor;
            let range = match item {
                TrackItem::Transition { in_offset, .. } => {
                    TimeRange::new(start - *in_offset, item.duration())
                }
                _ => {
                    *cursor = start + item.duration();
                    TimeRange::new(start, item.duration())
                }
            };
            Some((item, range))
        })
    }

    /// Clips with their range in this track, in order.
    pub fn clips_with_ranges(&self) -> impl Iterator<Item = (&Clip, TimeRange)> + '_ {
        self.items_with_ranges().filter_map(|(item, range)| match item {
            TrackItem::Clip(clip) => Some((clip, range)),
            _ => None,
        })
    }

    /// Whether the track holds at least one clip.
    pub fn has_clips(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, TrackItem::Clip(_)))
    }
}
