//! Timeline types.

use crate::track::Track;

/// A child of the timeline's top-level stack.
#[derive(Debug, Clone, PartialEq)]
pub enum StackChild {
    Track(Track),
    /// Anything stacked at the top level that is not a track.
    Other { schema: String },
}

/// An edit: an ordered stack of tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Timeline name
    pub name: String,
    /// Top-level stack children, in document order
    pub children: Vec<StackChild>,
}

impl Timeline {
    /// Create a new empty timeline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a track on top of the stack.
    pub fn add_track(&mut self, track: Track) {
        self.children.push(StackChild::Track(track));
    }
}
