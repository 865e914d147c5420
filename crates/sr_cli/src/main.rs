//! `sr` — offline, deterministic seller performance report CLI.
//!
//! Flow: parse args → load dataset (shape-checked) → run the pipeline with
//! the standard policies → wrap in a run summary → render. Exit codes are
//! stable for scripting: 0 OK, 2 validation, 4 I/O.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
}

use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};
use chrono::{SecondsFormat, Utc};
use sr_pipeline::Policies;
use sr_report::{EngineMeta, ReportDoc, RunSummary};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Input shape/emptiness defects and absent policies.
    Validation(String),
    /// Filesystem and JSON transport errors.
    Io(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("sr: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    init_tracing(args.quiet);

    let outcome = if args.validate_only {
        validate_only(&args)
    } else {
        run_once(&args)
    };

    let rc = match outcome {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("sr: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// Validate-only path: load + shape + emptiness + policy presence, no report.
fn validate_only(args: &Args) -> Result<(), MainError> {
    let data = sr_io::loader::load_dataset(&args.data).map_err(map_io_err)?;
    sr_pipeline::validate::validate(&data, &Policies::standard())
        .map_err(|e| MainError::Validation(e.to_string()))?;
    if !args.quiet {
        eprintln!("sr: validate-only: inputs OK");
    }
    Ok(())
}

/// Full run: digest → load → analyze → summarize → render.
fn run_once(args: &Args) -> Result<(), MainError> {
    let dataset_sha256 = sr_io::hasher::sha256_file(&args.data).map_err(map_io_err)?;
    let data = sr_io::loader::load_dataset(&args.data).map_err(map_io_err)?;

    let outputs = sr_pipeline::run(&data, &Policies::standard())
        .map_err(|e| MainError::Validation(e.to_string()))?;
    tracing::debug!(
        entries = outputs.report.len(),
        records_ignored = outputs.skips.records_ignored(),
        items_ignored = outputs.skips.items_ignored(),
        "analysis complete"
    );

    let summary = RunSummary {
        engine: EngineMeta::current(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        dataset_sha256,
        seller_count: data.sellers.len() as u64,
        product_count: data.products.len() as u64,
        record_count: data.purchase_records.len() as u64,
        records_ignored: outputs.skips.records_ignored(),
        items_ignored: outputs.skips.items_ignored(),
    };
    let doc = ReportDoc::new(summary, outputs.report)
        .map_err(|e| MainError::Io(e.to_string()))?;

    for renderer in &args.render {
        match renderer.as_str() {
            "json" => {
                let value = sr_report::render_report_json(&doc);
                let path = args.out.join("report.json");
                sr_io::canonical_json::write_canonical_file(&path, &value).map_err(map_io_err)?;
                if !args.quiet {
                    eprintln!("sr: wrote {}", path.display());
                }
            }
            "text" => print!("{}", sr_report::render_report_text(&doc)),
            other => unreachable!("clap restricts renderers, got {other}"),
        }
    }

    if !args.quiet {
        let s = &doc.run_summary;
        eprintln!(
            "sr: {} sellers ranked from {} records ({} records ignored, {} items ignored)",
            s.seller_count, s.record_count, s.records_ignored, s.items_ignored
        );
    }
    Ok(())
}

/// Map typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
    }
}

/// Translate sr_io errors into MainError buckets.
fn map_io_err(e: sr_io::IoError) -> MainError {
    use sr_io::IoError::*;
    match e {
        Shape(inner) => MainError::Validation(inner.to_string()),
        Json { pointer, msg } => MainError::Io(format!("json {pointer}: {msg}")),
        Path(m) => MainError::Io(format!("path: {m}")),
    }
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) | MainError::Io(m) => f.write_str(m),
        }
    }
}

fn init_tracing(quiet: bool) {
    use tracing_subscriber::EnvFilter;
    let default_filter = if quiet { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
