//! Integration tests for OTIO documents converted to project text.
//!
//! Exercises otio2rpp-timeline's reader feeding otio2rpp-rpp's reducer and
//! serializer.

use otio2rpp_core::ConversionError;
use otio2rpp_rpp::{convert, rpp::HEADER};
use otio2rpp_timeline::otio;
use serde_json::{json, Value};

use crate::fixtures::{clip, gap, missing_clip, timeline, track};

fn convert_doc(doc: Value) -> Result<String, ConversionError> {
    let timeline = otio::from_value(doc)?;
    convert(&timeline).map(|(text, _)| text)
}

fn header_and_footer() -> String {
    format!("{}\n>", HEADER.join("\n"))
}

// ── Track selection ────────────────────────────────────────────

#[test]
fn no_usable_tracks_gives_bare_project() {
    let doc = timeline(vec![
        track(Some("V1"), "Video", vec![clip("shot", "/m/shot.mov", 0.0, 48.0, 24.0)]),
        track(Some("A1"), "Audio", vec![]),
        track(Some("A2"), "Audio", vec![gap(24.0, 24.0), missing_clip("lost")]),
        track(Some("Subs"), "Subtitle", vec![clip("line", "/m/line.wav", 0.0, 24.0, 24.0)]),
    ]);
    assert_eq!(convert_doc(doc).unwrap(), header_and_footer());
}

#[test]
fn video_tracks_never_reach_the_project() {
    let doc = timeline(vec![
        track(Some("V1"), "Video", vec![clip("shot", "/m/shot.wav", 0.0, 48.0, 24.0)]),
        track(Some("A1"), "Audio", vec![clip("line", "/m/line.wav", 0.0, 24.0, 24.0)]),
    ]);
    let text = convert_doc(doc).unwrap();
    assert_eq!(text.matches("<TRACK").count(), 1);
    assert!(!text.contains("shot.wav"));
}

#[test]
fn unnamed_tracks_are_numbered_among_kept_tracks() {
    let doc = timeline(vec![
        track(Some("Dialogue"), "Audio", vec![clip("a", "/m/a.wav", 0.0, 24.0, 24.0)]),
        track(None, "Audio", vec![]),
        track(Some(""), "Audio", vec![clip("b", "/m/b.wav", 0.0, 24.0, 24.0)]),
    ]);
    let text = convert_doc(doc).unwrap();
    assert!(text.contains("    NAME \"Dialogue\""));
    assert!(text.contains("    NAME \"A2\""));
    assert!(!text.contains("NAME \"A1\""));
}

#[test]
fn unplaced_missing_clip_keeps_its_track() {
    let unplaced = json!({
        "OTIO_SCHEMA": "Clip.1",
        "name": "Clip.1",
        "source_range": null,
        "media_reference": { "OTIO_SCHEMA": "MissingReference.1", "available_range": null },
    });
    let doc = timeline(vec![track(
        Some("Mix"),
        "Audio",
        vec![clip("a", "/m/a.wav", 0.0, 24.0, 24.0), unplaced],
    )]);
    let text = convert_doc(doc).unwrap();
    assert_eq!(text.matches("<TRACK").count(), 1);
    assert_eq!(text.matches("<ITEM").count(), 1);
    assert!(text.contains("      POSITION 0.0"));
    assert!(text.contains("        FILE \"/m/a.wav\""));
}

#[test]
fn clip_without_any_range_is_rejected() {
    let mut unplaced = clip("a", "/m/a.wav", 0.0, 24.0, 24.0);
    unplaced["source_range"] = Value::Null;
    let doc = timeline(vec![track(Some("Mix"), "Audio", vec![unplaced])]);
    match convert_doc(doc) {
        Err(ConversionError::MissingRange { clip }) => assert_eq!(clip, "a"),
        other => panic!("expected MissingRange, got {:?}", other),
    }
}

// ── Timing ─────────────────────────────────────────────────────

#[test]
fn positions_follow_the_track_layout() {
    let doc = timeline(vec![track(
        Some("Mix"),
        "Audio",
        vec![
            gap(90.0, 30.0),
            clip("a", "/m/a.wav", 15.0, 45.0, 30.0),
            clip("b", "/m/b.wav", 0.0, 48000.0, 48000.0),
        ],
    )]);
    let text = convert_doc(doc).unwrap();
    let positions: Vec<&str> = text
        .lines()
        .filter_map(|line| line.trim().strip_prefix("POSITION "))
        .collect();
    assert_eq!(positions, vec!["3.0", "4.5"]);
    assert!(text.contains("      SOFFS 0.5"));
    assert!(text.contains("      LENGTH 1.5"));
    assert!(text.contains("      LENGTH 1.0"));
}

// ── Media classification ───────────────────────────────────────

#[test]
fn video_sources_request_hires_peaks() {
    let doc = timeline(vec![track(
        Some("Mix"),
        "Audio",
        vec![clip("clip", "/m/clip.MOV", 0.0, 24.0, 24.0)],
    )]);
    let text = convert_doc(doc).unwrap();
    assert!(text.contains("      NAME clip.MOV\n      <SOURCE VIDEO\n        HIRESPEAKS 1\n"));
}

#[test]
fn unknown_media_aborts_conversion() {
    let doc = timeline(vec![track(
        Some("Mix"),
        "Audio",
        vec![
            clip("a", "/m/a.wav", 0.0, 24.0, 24.0),
            clip("b", "/m/audio.flac", 0.0, 24.0, 24.0),
        ],
    )]);
    match convert_doc(doc) {
        Err(ConversionError::UnsupportedMediaType(ext)) => assert_eq!(ext, "flac"),
        other => panic!("expected UnsupportedMediaType, got {:?}", other),
    }
}

// ── End to end ─────────────────────────────────────────────────

#[test]
fn single_audio_clip_project() {
    let doc = timeline(vec![
        track(Some("Mix"), "Audio", vec![clip("a", "/media/a.wav", 0.0, 48.0, 24.0)]),
        track(Some("Picture"), "Video", vec![clip("p", "/media/p.mov", 0.0, 48.0, 24.0)]),
    ]);
    let text = convert_doc(doc).unwrap();
    let expected = [
        HEADER.join("\n").as_str(),
        "  <TRACK",
        "    NAME \"Mix\"",
        "    <ITEM",
        "      POSITION 0.0",
        "      LENGTH 2.0",
        "      SOFFS 0.0",
        "      NAME a.wav",
        "      <SOURCE WAV",
        "        FILE \"/media/a.wav\"",
        "      >",
        "    >",
        "  >",
        ">",
    ]
    .join("\n");
    assert_eq!(text, expected);
}
