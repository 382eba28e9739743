//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the console keeps its configuration, persisted state and log
//! files, using the platform directories reported by `dirs`.

pub mod paths;

pub use paths::{expand_tilde, get_config_dir, get_data_dir};
