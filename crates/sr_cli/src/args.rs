//! CLI argument parsing surface.
//!
//! Offline posture: dataset paths must be local files; any `scheme://` path
//! is rejected before touching the filesystem.

use std::path::PathBuf;

use clap::Parser;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sr",
    disable_help_subcommand = true,
    about = "Offline, deterministic seller performance report CLI"
)]
pub struct Args {
    /// Dataset JSON path ({sellers, products, purchase_records}).
    #[arg(long)]
    pub data: PathBuf,

    /// Output directory for rendered artifacts.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    /// Renderer(s) to emit. Choose up to 2 (json writes report.json to --out;
    /// text prints to stdout). Omit to skip rendering.
    #[arg(long, value_parser = ["json", "text"], num_args = 0..=2)]
    pub render: Vec<String>,

    /// Load + structural checks only; do not run the engine.
    #[arg(long)]
    pub validate_only: bool,

    /// Suppress non-essential stderr output.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation. Messages are short and stable.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NonLocalPath(p) => write!(f, "path must be a local file (no scheme): {p}"),
            NotFound(p) => write!(f, "file not found: {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Returns true if `s` looks like a URL (any `<scheme>://`, including `file://`).
fn looks_like_url(s: &str) -> bool {
    s.contains("://")
}

/// Parse argv and apply the offline-path checks.
pub fn parse_and_validate() -> Result<Args, CliError> {
    validate(Args::parse())
}

fn validate(args: Args) -> Result<Args, CliError> {
    let data_str = args.data.to_string_lossy();
    if looks_like_url(&data_str) {
        return Err(CliError::NonLocalPath(data_str.into_owned()));
    }
    if !args.data.is_file() {
        return Err(CliError::NotFound(data_str.into_owned()));
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(data: &str) -> Args {
        Args {
            data: PathBuf::from(data),
            out: PathBuf::from("."),
            render: vec![],
            validate_only: false,
            quiet: false,
        }
    }

    #[test]
    fn rejects_url_like_paths() {
        let err = validate(args("https://example.com/data.json")).unwrap_err();
        assert!(matches!(err, CliError::NonLocalPath(_)));
    }

    #[test]
    fn rejects_missing_files() {
        let err = validate(args("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }

    #[test]
    fn accepts_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(validate(args(path.to_str().unwrap())).is_ok());
    }
}
