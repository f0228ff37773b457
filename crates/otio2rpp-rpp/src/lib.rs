//! otio2rpp RPP - timeline to REAPER project conversion
//!
//! This crate handles:
//! - Reducing a timeline to project events (track and clip selection,
//!   timing, media classification)
//! - Rendering events as a REAPER project file
//! - The file-to-file conversion pipeline

pub mod event;
pub mod media;
pub mod reduce;
pub mod rpp;

use std::path::Path;

use otio2rpp_core::Result;
use otio2rpp_timeline::{otio, Timeline};
use tracing::info;

pub use event::{MediaItem, ProjectEvent};
pub use media::MediaKind;
pub use reduce::reduce;
pub use rpp::serialize;

/// What a conversion wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub tracks: usize,
    pub items: usize,
}

/// Convert a timeline to project file text.
pub fn convert(timeline: &Timeline) -> Result<(String, ConversionSummary)> {
    let events = reduce(timeline)?;
    let summary = ConversionSummary {
        tracks: ProjectEvent::count_tracks(&events),
        items: ProjectEvent::count_items(&events),
    };
    Ok((serialize(&events), summary))
}

/// Convert an `.otio` file into a project file.
///
/// The output is written once, after the whole project has been rendered;
/// on any error it is left untouched.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let timeline = otio::load_from_file(input)?;
    let (text, summary) = convert(&timeline)?;
    std::fs::write(output, text)?;
    info!(
        output = %output.display(),
        tracks = summary.tracks,
        items = summary.items,
        "Project written"
    );
    Ok(summary)
}
