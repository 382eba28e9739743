//! Backend client layer.
//!
//! The console talks to the huelio service through two endpoints on one base
//! URL: `GET <base>?query=<term>` returns candidate actions and `POST <base>`
//! executes one. [`LightingBackend`] abstracts both so the runtime can be driven
//! by the real [`HttpBackend`] or by a test double.
//!
//! # Modules
//!
//! - [`backend`]: The [`LightingBackend`] trait
//! - [`http`]: reqwest-based implementation

pub mod backend;
pub mod http;

pub use backend::LightingBackend;
pub use http::HttpBackend;
