//! Media location and type resolution.

use std::path::{Path, PathBuf};

use otio2rpp_core::{ConversionError, Result};

/// Kind of source block a media file is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Wav,
}

impl MediaKind {
    /// Classify a file by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "mp4" | "mov" => Ok(Self::Video),
            "wav" => Ok(Self::Wav),
            _ => Err(ConversionError::UnsupportedMediaType(extension)),
        }
    }

    /// Source type tag in the project file.
    pub fn source_tag(self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Wav => "WAV",
        }
    }
}

/// Turn a media reference target into a filesystem path.
///
/// Local `file://` URLs (no host, or `localhost`) lose their scheme and
/// percent escapes; anything else is taken as a path already.
pub fn resolve_target_url(target_url: &str) -> PathBuf {
    let Some(rest) = target_url.strip_prefix("file://") else {
        return PathBuf::from(target_url);
    };
    let path = match rest.strip_prefix("localhost") {
        Some(path) if path.starts_with('/') => path,
        _ if rest.starts_with('/') => rest,
        _ => return PathBuf::from(target_url),
    };
    PathBuf::from(percent_decode(path))
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|hex| std::str::from_utf8(hex).ok());
            if let Some(byte) = hex.and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                decoded.push(byte);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Final path component, as written in the item name.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
