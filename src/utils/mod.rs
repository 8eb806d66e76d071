//! Utility modules: file-backed storage.

pub mod persistence;

pub use persistence::{default_save_dir, JsonFileStorage};
