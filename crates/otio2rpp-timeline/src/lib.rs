//! otio2rpp Timeline - Timeline data model
//!
//! Implements the editorial timeline read from interchange documents:
//! - Timelines stacking tracks
//! - Tracks containing clips, gaps, transitions and nested compositions
//! - Clips pointing at media through media references
//! - The OpenTimelineIO JSON reader

pub mod clip;
pub mod otio;
pub mod timeline;
pub mod track;

pub use clip::{Clip, MediaReference};
pub use timeline::{StackChild, Timeline};
pub use track::{Track, TrackItem, TrackKind};
