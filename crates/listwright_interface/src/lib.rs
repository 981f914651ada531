//! Trait definitions for the upstream capabilities the listing pipeline consumes.
//!
//! Each capability is a single request/response call with no retry. Callers
//! impose timeouts or cancellation from outside; a cancelled call leaves no
//! state behind.

mod traits;

pub use traits::{AudioTranscriber, ImageAnalyzer, TextGeneration};
