//! Rendering utilities for human-facing surfaces (Markdown summaries).

#![forbid(unsafe_code)]

mod markdown;

pub use markdown::render_markdown;
