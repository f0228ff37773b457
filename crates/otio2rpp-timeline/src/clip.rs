//! Clip types for the timeline.

use otio2rpp_core::{RationalTime, TimeRange};

/// Reference to the media a clip plays.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaReference {
    /// The edit knows a clip was here but not which file it came from.
    Missing,
    /// Media stored outside the timeline document.
    External {
        /// Location of the media (plain path or `file://` URL)
        target_url: String,
    },
}

impl MediaReference {
    /// Create a reference to an external media file.
    pub fn external(target_url: impl Into<String>) -> Self {
        Self::External {
            target_url: target_url.into(),
        }
    }

    /// Check whether this reference points at nothing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// A clip on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    /// Clip name
    pub name: String,
    /// Reference to source media
    pub media_reference: MediaReference,
    /// Span of the source media used by the clip
    pub source_range: TimeRange,
}

impl Clip {
    /// Create a new clip from a source.
    pub fn new(
        name: impl Into<String>,
        media_reference: MediaReference,
        source_range: TimeRange,
    ) -> Self {
        Self {
            name: name.into(),
            media_reference,
            source_range,
        }
    }

    /// Duration on the timeline.
    #[inline]
    pub fn duration(&self) -> RationalTime {
        self.source_range.duration
    }

    /// Source in point (trim-in offset within the media).
    #[inline]
    pub fn source_in(&self) -> RationalTime {
        self.source_range.start_time
    }
}
