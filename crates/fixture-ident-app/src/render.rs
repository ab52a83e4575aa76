//! Render use cases: markdown from in-memory reports.

use fixture_ident_types::EncodeReport;

pub fn render_markdown(report: &EncodeReport) -> String {
    fixture_ident_render::render_markdown(report)
}
