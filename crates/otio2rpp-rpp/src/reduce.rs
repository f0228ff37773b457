//! Timeline reduction: picks the tracks and clips that make it into the
//! project and flattens them into project events.

use otio2rpp_core::{Result, TimeRange};
use otio2rpp_timeline::{Clip, MediaReference, StackChild, Timeline, Track, TrackKind};
use tracing::{debug, info, warn};

use crate::event::{MediaItem, ProjectEvent};
use crate::media::{file_name, resolve_target_url, MediaKind};

/// Reduce a timeline to the events of the project tree.
///
/// Only audio tracks holding at least one clip with media are kept. Kept
/// tracks are numbered from 1 in stack order; unnamed ones are called
/// `A<number>`. A media file of an unknown type aborts the whole reduction.
pub fn reduce(timeline: &Timeline) -> Result<Vec<ProjectEvent>> {
    let mut events = Vec::new();
    let mut track_number = 0usize;

    for (index, child) in timeline.children.iter().enumerate() {
        let track = match child {
            StackChild::Track(track) => track,
            StackChild::Other { schema } => {
                debug!(track = index, schema = %schema, "Ignoring stack child that is not a track");
                continue;
            }
        };

        match &track.kind {
            TrackKind::Audio => {}
            TrackKind::Video => {
                debug!(track = index, "Ignoring video track");
                continue;
            }
            TrackKind::Other(kind) => {
                warn!(track = index, kind = %kind, "Unsupported track type, ignoring entire track");
                continue;
            }
        }

        if !track.has_clips() {
            debug!(track = index, "Ignoring empty track");
            continue;
        }
        let items = track_items(index, track)?;
        if items.is_empty() {
            debug!(track = index, "Ignoring track without media");
            continue;
        }

        track_number += 1;
        let display_name = track
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("A{}", track_number));
        debug!(track = index, number = track_number, name = %display_name, "Keeping track");
        warn_if_quoted("track name", &display_name);

        events.push(ProjectEvent::TrackBegin { display_name });
        events.extend(items.into_iter().map(ProjectEvent::MediaItem));
        events.push(ProjectEvent::TrackEnd);
    }

    Ok(events)
}

fn track_items(index: usize, track: &Track) -> Result<Vec<MediaItem>> {
    let mut items = Vec::new();
    for (clip, range) in track.clips_with_ranges() {
        debug!(clip = %clip.name, "Item");
        let target_url = match &clip.media_reference {
            MediaReference::Missing => {
                info!(
                    clip = %clip.name,
                    track = index,
                    "Ignoring item as it has no reference to a media file"
                );
                continue;
            }
            MediaReference::External { target_url } => target_url,
        };
        items.push(media_item(clip, range, target_url)?);
    }
    Ok(items)
}

/// Place one clip, found at `range` in its track, pointing at `target_url`.
pub fn media_item(clip: &Clip, range: TimeRange, target_url: &str) -> Result<MediaItem> {
    let path = resolve_target_url(target_url);
    let media_kind = MediaKind::from_path(&path)?;
    let item = MediaItem {
        position_s: range.start_time.to_seconds(),
        length_s: clip.duration().to_seconds(),
        source_offset_s: clip.source_in().to_seconds(),
        file_name: file_name(&path),
        absolute_path: path.to_string_lossy().into_owned(),
        media_kind,
    };
    warn_if_quoted("media path", &item.absolute_path);
    Ok(item)
}

/// Quoted directives cannot hold a `"`; the value is written as is.
fn warn_if_quoted(what: &str, value: &str) {
    if value.contains('"') {
        warn!(value = %value, "{} contains a double quote, the project may not load", what);
    }
}
