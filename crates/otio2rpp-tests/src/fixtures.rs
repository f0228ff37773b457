//! OTIO JSON builders shared by the integration tests.

use serde_json::{json, Value};

pub fn rt(value: f64, rate: f64) -> Value {
    json!({ "OTIO_SCHEMA": "RationalTime.1", "rate": rate, "value": value })
}

pub fn range(start: f64, duration: f64, rate: f64) -> Value {
    json!({
        "OTIO_SCHEMA": "TimeRange.1",
        "duration": rt(duration, rate),
        "start_time": rt(start, rate),
    })
}

pub fn clip(name: &str, target_url: &str, start: f64, duration: f64, rate: f64) -> Value {
    json!({
        "OTIO_SCHEMA": "Clip.2",
        "name": name,
        "source_range": range(start, duration, rate),
        "media_references": {
            "DEFAULT_MEDIA": {
                "OTIO_SCHEMA": "ExternalReference.1",
                "available_range": null,
                "target_url": target_url,
            },
        },
        "active_media_reference_key": "DEFAULT_MEDIA",
    })
}

pub fn missing_clip(name: &str) -> Value {
    json!({
        "OTIO_SCHEMA": "Clip.1",
        "name": name,
        "source_range": range(0.0, 24.0, 24.0),
        "media_reference": { "OTIO_SCHEMA": "MissingReference.1", "available_range": null },
    })
}

pub fn gap(duration: f64, rate: f64) -> Value {
    json!({ "OTIO_SCHEMA": "Gap.1", "name": "", "source_range": range(0.0, duration, rate) })
}

pub fn track(name: Option<&str>, kind: &str, children: Vec<Value>) -> Value {
    json!({
        "OTIO_SCHEMA": "Track.1",
        "name": name,
        "kind": kind,
        "source_range": null,
        "children": children,
    })
}

pub fn timeline(tracks: Vec<Value>) -> Value {
    json!({
        "OTIO_SCHEMA": "Timeline.1",
        "name": "Edit",
        "global_start_time": rt(86400.0, 24.0),
        "tracks": {
            "OTIO_SCHEMA": "Stack.1",
            "name": "tracks",
            "source_range": null,
            "children": tracks,
        },
    })
}
