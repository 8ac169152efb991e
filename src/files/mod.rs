//! Filesystem naming helpers.

pub mod filename;
