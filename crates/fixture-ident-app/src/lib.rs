//! Use case orchestration for fixture-ident.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod encode;
mod inspect;
mod render;
mod report;
mod schema;

pub use encode::{EncodeInput, EncodeOutput, resolve_encoder_config, run_encode};
pub use inspect::{InspectOutput, format_inspection, run_inspect};
pub use render::render_markdown;
pub use report::{parse_report_json, serialize_report};
pub use schema::{SchemaSpec, schema_specs, serialize_schema};
