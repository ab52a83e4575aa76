//! CLI entry point for fixture-ident.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `fixture-ident-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fixture_ident_app::{
    EncodeInput, format_inspection, parse_report_json, render_markdown, resolve_encoder_config,
    run_encode, run_inspect, schema_specs, serialize_report, serialize_schema,
};
use fixture_ident_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "fixture-ident",
    version,
    about = "Part numbers and configuration hashes for configured lighting fixtures"
)]
struct Cli {
    /// Attribute catalog (TOML, or JSON by extension).
    #[arg(long, default_value = "catalog.toml", global = true)]
    catalog: Utf8PathBuf,

    /// Path to fixture-ident config TOML (missing file: defaults apply).
    #[arg(long, default_value = "fixture-ident.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (standard|preview).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the part number prefix.
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Override the placeholder used for absent attribute codes.
    #[arg(long, global = true)]
    placeholder: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode every fixture request and write a JSON report.
    Encode {
        /// Fixture requests (`[[fixture]]` TOML, or a JSON array).
        #[arg(long)]
        fixtures: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/fixture-ident/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/fixture-ident/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Show the canonical JSON, hash, and segment breakdown of fixture requests.
    Inspect {
        /// Fixture requests (`[[fixture]]` TOML, or a JSON array).
        #[arg(long)]
        fixtures: Utf8PathBuf,

        /// Only inspect the request at this 0-based position.
        #[arg(long)]
        index: Option<usize>,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/fixture-ident/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Write JSON Schemas for the report and config formats.
    Schema {
        /// Directory to write `<schema-id>.json` files into.
        #[arg(long, default_value = "schemas")]
        out_dir: Utf8PathBuf,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match &cli.cmd {
        Commands::Encode {
            fixtures,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_encode(&cli, fixtures, report_out, *write_markdown, markdown_out),
        Commands::Inspect { fixtures, index } => cmd_inspect(&cli, fixtures, *index),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Schema { out_dir } => cmd_schema(out_dir),
    };

    if let Err(err) = result {
        eprintln!("fixture-ident error: {err:#}");
        std::process::exit(1);
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        prefix: cli.prefix.clone(),
        placeholder: cli.placeholder.clone(),
    }
}

/// Missing config file is allowed (defaults apply).
fn read_config_text(path: &Utf8Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

fn cmd_encode(
    cli: &Cli,
    fixtures: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let catalog = fixture_ident_catalog::load_catalog(&cli.catalog)?;
    let requests = fixture_ident_catalog::load_requests(fixtures)?;
    let config_text = read_config_text(&cli.config);

    let output = run_encode(EncodeInput {
        source: &catalog,
        requests: &requests,
        config_text: &config_text,
        overrides: overrides(cli),
    })?;

    let data = serialize_report(&output.report)?;
    write_file(report_out, &data).context("write report json")?;
    tracing::debug!(path = %report_out, "wrote report");

    if write_markdown {
        let md = render_markdown(&output.report);
        write_file(markdown_out, md.as_bytes()).context("write markdown")?;
    }

    for f in &output.report.fixtures {
        println!(
            "{}\t{}\t{}",
            f.part_number,
            f.item_code,
            f.label.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

fn cmd_inspect(cli: &Cli, fixtures: &Utf8Path, index: Option<usize>) -> anyhow::Result<()> {
    let catalog = fixture_ident_catalog::load_catalog(&cli.catalog)?;
    let requests = fixture_ident_catalog::load_requests(fixtures)?;
    let resolved = resolve_encoder_config(&read_config_text(&cli.config), overrides(cli))?;

    let selected = match index {
        Some(i) => {
            let request = requests.get(i).with_context(|| {
                format!("index {i} out of range ({} requests)", requests.len())
            })?;
            std::slice::from_ref(request)
        }
        None => requests.as_slice(),
    };

    let blocks: Vec<String> = selected
        .iter()
        .map(|r| format_inspection(&run_inspect(r, &catalog, &resolved.encoder)))
        .collect();
    print!("{}", blocks.join("\n"));

    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_file(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_schema(out_dir: &Utf8Path) -> anyhow::Result<()> {
    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = out_dir.join(spec.filename);
        write_file(&path, json.as_bytes())?;
        println!("{path}");
    }
    Ok(())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {path}"))?;
    Ok(())
}
