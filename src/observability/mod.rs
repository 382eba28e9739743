//! Logging setup.
//!
//! The terminal belongs to the console UI, so log output goes to a rotating
//! file in the data directory instead of stdout or stderr.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → huelio-console.log
//! ```
//!
//! # Configuration
//!
//! The filter is resolved from, in order:
//! 1. `RUST_LOG` environment variable
//! 2. `trace_level` config option (or `HUELIO_LOG`)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{filter_directive, init_tracing, LOG_FILE_NAME};
