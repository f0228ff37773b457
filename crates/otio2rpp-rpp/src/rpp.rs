//! REAPER project (`.rpp`) rendering.
//!
//! A project is a tree of `<TAG ...` / `>` blocks holding one directive per
//! line. Nesting is carried by the brackets; indentation only mirrors it.

use std::iter;

use crate::event::{MediaItem, ProjectEvent};
use crate::media::MediaKind;

/// Fixed project preamble: root tag, empty notes, grid hidden, ruler in time
/// rather than bars.
pub const HEADER: [&str; 5] = [
    "<REAPER_PROJECT 0.1 \"6.75/linux-x64\" 1683103437",
    "  <NOTES 0 0",
    "  >",
    "  GRID 3198 8 1 8 1 0 0 0",
    "  TIMEMODE 0 5 -1 30 0 0 -1",
];

/// Closes the project root block.
pub const FOOTER: &str = ">";

/// Render events as the lines of a project file.
pub fn render_lines(events: &[ProjectEvent]) -> Vec<String> {
    HEADER
        .iter()
        .map(|line| line.to_string())
        .chain(events.iter().flat_map(event_lines))
        .chain(iter::once(FOOTER.to_string()))
        .collect()
}

/// Render events as a complete project file.
pub fn serialize(events: &[ProjectEvent]) -> String {
    render_lines(events).join("\n")
}

fn event_lines(event: &ProjectEvent) -> Vec<String> {
    match event {
        ProjectEvent::TrackBegin { display_name } => vec![
            "  <TRACK".to_string(),
            format!("    NAME \"{}\"", display_name),
        ],
        ProjectEvent::MediaItem(item) => item_lines(item),
        ProjectEvent::TrackEnd => vec!["  >".to_string()],
    }
}

fn item_lines(item: &MediaItem) -> Vec<String> {
    let mut lines = vec![
        "    <ITEM".to_string(),
        format!("      POSITION {}", format_seconds(item.position_s)),
        format!("      LENGTH {}", format_seconds(item.length_s)),
        format!("      SOFFS {}", format_seconds(item.source_offset_s)),
        format!("      NAME {}", item.file_name),
        format!("      <SOURCE {}", item.media_kind.source_tag()),
    ];
    if item.media_kind == MediaKind::Video {
        // Have REAPER build high resolution peaks for the video's audio.
        lines.push("        HIRESPEAKS 1".to_string());
    }
    lines.push(format!("        FILE \"{}\"", item.absolute_path));
    lines.push("      >".to_string());
    lines.push("    >".to_string());
    lines
}

/// Format seconds as a plain decimal with the shortest digits that read back
/// to the same value, always with a fractional part: `0.0`, `2.0`, `1.25`.
pub fn format_seconds(seconds: f64) -> String {
    // -0.0 == 0.0, this drops the sign
    let seconds = if seconds == 0.0 { 0.0 } else { seconds };
    let text = seconds.to_string();
    if text.contains('.') || !seconds.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}
