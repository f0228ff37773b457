//! OpenTimelineIO JSON reader.
//!
//! Every object in an `.otio` document carries an `OTIO_SCHEMA` tag of the
//! form `Name.Version`. Known schemas newer than this reader are rejected,
//! unknown ones are kept as opaque items so the rest of the edit survives.

use std::collections::BTreeMap;
use std::path::Path;

use otio2rpp_core::{ConversionError, RationalTime, Result, TimeRange};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::clip::{Clip, MediaReference};
use crate::timeline::{StackChild, Timeline};
use crate::track::{Track, TrackItem, TrackKind};

/// Key holding the schema tag of every serialized object.
pub const SCHEMA_KEY: &str = "OTIO_SCHEMA";

/// Media reference key used by single-reference clips.
pub const DEFAULT_MEDIA_KEY: &str = "DEFAULT_MEDIA";

/// Newest version of each schema this reader understands.
const KNOWN_SCHEMAS: &[(&str, u32)] = &[
    ("SerializableCollection", 1),
    ("Timeline", 1),
    ("Stack", 1),
    ("Track", 1),
    ("Clip", 2),
    ("Gap", 1),
    ("Transition", 1),
    ("ExternalReference", 1),
    ("MissingReference", 1),
];

/// A parsed `Name.Version` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SchemaTag {
    name: String,
    version: u32,
}

impl SchemaTag {
    fn of(value: &Value) -> Result<Self> {
        let tag = value
            .get(SCHEMA_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ConversionError::Serialization(format!("Object without {}", SCHEMA_KEY))
            })?;
        let (name, version) = tag.rsplit_once('.').unwrap_or((tag, "1"));
        let version = version.parse().map_err(|_| {
            ConversionError::UnsupportedSchema(format!("Malformed schema tag \"{}\"", tag))
        })?;
        let tag = Self {
            name: name.to_string(),
            version,
        };
        tag.check_version()?;
        Ok(tag)
    }

    fn check_version(&self) -> Result<()> {
        match KNOWN_SCHEMAS.iter().find(|(name, _)| *name == self.name) {
            Some((_, newest)) if self.version > *newest => {
                Err(ConversionError::UnsupportedSchema(format!(
                    "{} version {} is newer than supported version {}",
                    self.name, self.version, newest
                )))
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.name, self.version)
    }
}

#[derive(Deserialize)]
struct RawTimeline {
    name: Option<String>,
    tracks: Option<Value>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    children: Vec<Value>,
}

#[derive(Deserialize)]
struct RawComposition {
    name: Option<String>,
    kind: Option<String>,
    source_range: Option<TimeRange>,
    #[serde(default)]
    children: Vec<Value>,
}

#[derive(Deserialize)]
struct RawClip {
    name: Option<String>,
    source_range: Option<TimeRange>,
    media_reference: Option<Value>,
    media_references: Option<BTreeMap<String, Value>>,
    active_media_reference_key: Option<String>,
}

#[derive(Deserialize)]
struct RawTransition {
    name: Option<String>,
    transition_type: Option<String>,
    in_offset: RationalTime,
    out_offset: RationalTime,
}

#[derive(Deserialize)]
struct RawReference {
    target_url: Option<String>,
    available_range: Option<TimeRange>,
}

/// Any item; only its span matters.
#[derive(Deserialize)]
struct RawItem {
    source_range: Option<TimeRange>,
}

fn decode<T: DeserializeOwned>(value: Value, tag: &SchemaTag) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| ConversionError::Serialization(format!("Invalid {}: {}", tag, e)))
}

/// Parse a timeline from OTIO JSON bytes.
pub fn from_json(data: &[u8]) -> Result<Timeline> {
    let raw: Value = serde_json::from_slice(data)
        .map_err(|e| ConversionError::Serialization(format!("Invalid JSON: {}", e)))?;
    from_value(raw)
}

/// Load a timeline from an `.otio` file.
pub fn load_from_file(path: &Path) -> Result<Timeline> {
    let data = std::fs::read(path)?;
    let timeline = from_json(&data)?;
    debug!(
        path = %path.display(),
        name = %timeline.name,
        children = timeline.children.len(),
        "Read timeline"
    );
    Ok(timeline)
}

/// Parse a timeline from an already decoded JSON document.
pub fn from_value(value: Value) -> Result<Timeline> {
    let tag = SchemaTag::of(&value)?;
    match tag.name.as_str() {
        "Timeline" => parse_timeline(value, &tag),
        "SerializableCollection" => {
            let collection: RawCollection = decode(value, &tag)?;
            first_timeline(collection.children)?.ok_or_else(|| {
                ConversionError::UnsupportedSchema("Collection holds no timeline".to_string())
            })
        }
        _ => Err(ConversionError::UnsupportedSchema(format!(
            "Document root is {}, expected a Timeline",
            tag
        ))),
    }
}

/// Depth-first search for the first timeline in a collection.
fn first_timeline(children: Vec<Value>) -> Result<Option<Timeline>> {
    for child in children {
        let tag = SchemaTag::of(&child)?;
        match tag.name.as_str() {
            "Timeline" => return parse_timeline(child, &tag).map(Some),
            "SerializableCollection" => {
                let nested: RawCollection = decode(child, &tag)?;
                if let Some(timeline) = first_timeline(nested.children)? {
                    return Ok(Some(timeline));
                }
            }
            _ => {}
        }
    }
    Ok(None)
}

fn parse_timeline(value: Value, tag: &SchemaTag) -> Result<Timeline> {
    let raw: RawTimeline = decode(value, tag)?;
    let mut timeline = Timeline::new(raw.name.unwrap_or_default());

    let Some(stack) = raw.tracks else {
        return Ok(timeline);
    };
    let stack_tag = SchemaTag::of(&stack)?;
    let stack: RawComposition = decode(stack, &stack_tag)?;

    for child in stack.children {
        let child_tag = SchemaTag::of(&child)?;
        if child_tag.name == "Track" {
            timeline.add_track(parse_track(decode(child, &child_tag)?)?);
        } else {
            timeline.children.push(StackChild::Other {
                schema: child_tag.to_string(),
            });
        }
    }
    Ok(timeline)
}

fn parse_track(raw: RawComposition) -> Result<Track> {
    // Tracks without a kind are video tracks.
    let kind = TrackKind::from_kind_str(raw.kind.as_deref().unwrap_or("Video"));
    let mut track = Track::new(raw.name, kind);
    for child in raw.children {
        track.append_item(parse_item(child)?);
    }
    Ok(track)
}

fn parse_item(value: Value) -> Result<TrackItem> {
    let tag = SchemaTag::of(&value)?;
    let item = match tag.name.as_str() {
        "Clip" => TrackItem::Clip(parse_clip(decode(value, &tag)?)?),
        "Gap" => {
            let raw: RawItem = decode(value, &tag)?;
            TrackItem::Gap {
                duration: span(raw.source_range)?,
            }
        }
        "Transition" => {
            let raw: RawTransition = decode(value, &tag)?;
            TrackItem::Transition {
                transition_name: raw.transition_type.or(raw.name).unwrap_or_default(),
                in_offset: raw.in_offset.validate()?,
                out_offset: raw.out_offset.validate()?,
            }
        }
        "Track" | "Stack" => {
            let duration = composition_duration(&tag, decode(value, &tag)?)?;
            TrackItem::Nested {
                schema: tag.to_string(),
                duration,
            }
        }
        _ => {
            let raw: RawItem = decode(value, &tag)?;
            TrackItem::Other {
                schema: tag.to_string(),
                duration: span(raw.source_range)?,
            }
        }
    };
    Ok(item)
}

/// Duration of a trimmed span, zero when untrimmed.
fn span(range: Option<TimeRange>) -> Result<RationalTime> {
    match range {
        Some(range) => Ok(range.validate()?.duration),
        None => Ok(RationalTime::ZERO),
    }
}

/// A nested track lasts as long as its items laid end to end; a nested
/// stack as long as its longest child.
fn composition_duration(tag: &SchemaTag, raw: RawComposition) -> Result<RationalTime> {
    if let Some(range) = raw.source_range {
        return Ok(range.validate()?.duration);
    }
    let items = raw
        .children
        .into_iter()
        .map(parse_item)
        .collect::<Result<Vec<_>>>()?;
    if tag.name == "Track" {
        let track = Track {
            name: raw.name,
            kind: TrackKind::from_kind_str(raw.kind.as_deref().unwrap_or("Video")),
            items,
        };
        Ok(track.duration())
    } else {
        Ok(items
            .iter()
            .map(TrackItem::duration)
            .fold(RationalTime::ZERO, |longest, duration| {
                if duration > longest {
                    duration
                } else {
                    longest
                }
            }))
    }
}

fn parse_clip(raw: RawClip) -> Result<Clip> {
    let name = raw.name.unwrap_or_default();
    let reference = match raw.media_references {
        Some(mut references) => {
            let key = raw
                .active_media_reference_key
                .unwrap_or_else(|| DEFAULT_MEDIA_KEY.to_string());
            references.remove(&key)
        }
        None => raw.media_reference,
    };
    let (media_reference, available_range) = parse_reference(reference)?;

    let source_range = match raw.source_range.or(available_range) {
        Some(range) => range.validate()?,
        // Never placed, so it takes no room in the track.
        None if media_reference.is_missing() => TimeRange::EMPTY,
        None => return Err(ConversionError::MissingRange { clip: name }),
    };

    Ok(Clip::new(name, media_reference, source_range))
}

fn parse_reference(value: Option<Value>) -> Result<(MediaReference, Option<TimeRange>)> {
    let value = match value {
        None | Some(Value::Null) => return Ok((MediaReference::Missing, None)),
        Some(value) => value,
    };
    let tag = SchemaTag::of(&value)?;
    let raw: RawReference = decode(value, &tag)?;
    let reference = match tag.name.as_str() {
        "MissingReference" => MediaReference::Missing,
        "ExternalReference" => MediaReference::external(raw.target_url.unwrap_or_default()),
        _ => {
            return Err(ConversionError::UnsupportedSchema(format!(
                "Media reference {} cannot be placed in a project",
                tag
            )))
        }
    };
    Ok((reference, raw.available_range))
}
