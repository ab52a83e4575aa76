use fixture_ident_types::{EncodeReport, EncodedFixture};

/// Hash prefix shown in tables; the full digest lives in the JSON report.
const HASH_DISPLAY_LEN: usize = 12;

pub fn render_markdown(report: &EncodeReport) -> String {
    let mut out = String::new();
    let data = &report.data;

    out.push_str("# Fixture identity report\n\n");
    out.push_str(&format!(
        "- Profile: **{}**\n- Requests: {} / unique configurations: {} / reused: {}\n",
        data.profile, data.requests, data.unique_configurations, data.reused
    ));
    if data.disambiguated > 0 {
        out.push_str(&format!(
            "- Disambiguated part numbers: {}\n",
            data.disambiguated
        ));
    }
    out.push('\n');

    if report.fixtures.is_empty() {
        out.push_str("No fixtures.\n");
        return out;
    }

    out.push_str("## Fixtures\n\n");
    out.push_str("| # | Label | Part number | Item code | Hash | Reused |\n");
    out.push_str("|---|-------|-------------|-----------|------|--------|\n");
    for f in &report.fixtures {
        out.push_str(&format!(
            "| {} | {} | `{}` | `{}` | `{}` | {} |\n",
            f.index,
            escape_cell(f.label.as_deref().unwrap_or("")),
            f.part_number,
            f.item_code,
            short_hash(&f.config_hash),
            if f.reused { "yes" } else { "no" },
        ));
    }

    let first_of_each: Vec<&EncodedFixture> =
        report.fixtures.iter().filter(|f| !f.reused).collect();
    out.push_str("\n## Segments\n\n");
    out.push_str("| Part number | Profile | LED | Env | CCT | Output | Lens | Mount | Finish | Length (in) |\n");
    out.push_str("|-------------|---------|-----|-----|-----|--------|------|-------|--------|-------------|\n");
    for f in first_of_each {
        let s = &f.segments;
        out.push_str(&format!(
            "| `{}` | {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            f.part_number,
            s.profile,
            s.led_package,
            s.environment,
            s.cct,
            s.fixture_output,
            s.lens,
            s.mounting,
            s.finish,
            s.length_inches,
        ));
    }

    out
}

fn short_hash(hash: &str) -> &str {
    hash.get(..HASH_DISPLAY_LEN).unwrap_or(hash)
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
