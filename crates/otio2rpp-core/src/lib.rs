//! otio2rpp Core - Foundation types for timeline conversion
//!
//! This crate provides the fundamental types shared by the converter:
//! - Time representation (RationalTime, TimeRange)
//! - The conversion error type

pub mod error;
pub mod time;

pub use error::{ConversionError, Result};
pub use time::{RationalTime, TimeRange};
