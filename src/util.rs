//! Shared utility modules.

pub mod sequence_matcher;
