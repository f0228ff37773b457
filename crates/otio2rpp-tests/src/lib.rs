//! Integration test crate for otio2rpp.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the otio2rpp crates to verify they work together.

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod conversion;
