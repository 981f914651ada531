//! Error types for the Listwright library.
//!
//! This crate provides the foundation error types used throughout the Listwright workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use listwright_error::{BackendError, ListwrightResult};
//!
//! fn call_backend() -> ListwrightResult<String> {
//!     Err(BackendError::new("Connection refused"))?
//! }
//!
//! match call_backend() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod backend;
mod builder;
mod catalog;
mod config;
mod error;
mod http;
mod json;
mod keyword;
mod merge;
mod parse;
mod render;

pub use auth::AuthError;
pub use backend::BackendError;
pub use builder::{BuilderError, BuilderErrorKind};
pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
pub use error::{ListwrightError, ListwrightErrorKind, ListwrightResult};
pub use http::HttpError;
pub use json::JsonError;
pub use keyword::KeywordError;
pub use merge::{MergeError, MergeErrorKind, MergeResult};
pub use parse::ParseError;
pub use render::{RenderError, RenderErrorKind, RenderResult};
