//! termkeys-gen — entry point.
//!
//! Reads a terminal capability database (e.g. the ncurses `Caps` file) and
//! writes a dense key code → name table as Rust, C or JSON source.
//!
//! # Usage
//!
//! ```text
//! termkeys-gen [OPTIONS] <CAPS_FILE>
//!
//! Options:
//!   -o, --output-prefix <PATH>  Output path without extension [default: src/keycode]
//!       --format <FORMAT>       rust, c or json [default: rust]
//!       --comment-width <N>     Column for description comments [default: 30]
//!       --config <PATH>         Config file [default: termkeys.toml]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                  | Description                   |
//! |---------------------------|-------------------------------|
//! | `TERMKEYS_OUTPUT_PREFIX`  | Output path without extension |
//! | `TERMKEYS_FORMAT`         | Output format                 |
//! | `TERMKEYS_CONFIG`         | Config file path              |
//! | `RUST_LOG`                | Log filter                    |
//!
//! Precedence: command line, then environment, then config file, then the
//! built-in defaults.
//!
//! On a malformed capability file the offending line is printed to stderr and
//! the process exits with a non-zero status; no output file is written.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use termkeys_core::emit::EmitFormat;
use termkeys_gen::application::generate::{self, GenerateRequest};
use termkeys_gen::infrastructure::config::{load_config, GenConfig, DEFAULT_CONFIG_FILE};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Generate a key code lookup table from a terminal capability database.
#[derive(Debug, Parser)]
#[command(
    name = "termkeys-gen",
    about = "Generates static key code lookup tables from a terminal capability database",
    version
)]
struct Cli {
    /// Capability database to read (ncurses `Caps` format).
    caps_file: PathBuf,

    /// Output path without extension; `src/keycode` writes `src/keycode.rs`.
    #[arg(short = 'o', long, env = "TERMKEYS_OUTPUT_PREFIX")]
    output_prefix: Option<PathBuf>,

    /// Output language: rust, c or json.
    #[arg(long, env = "TERMKEYS_FORMAT")]
    format: Option<EmitFormat>,

    /// Column at which description comments start.
    #[arg(long)]
    comment_width: Option<usize>,

    /// TOML config file.  A missing file means built-in defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "TERMKEYS_CONFIG")]
    config: PathBuf,
}

impl Cli {
    /// Merges the command line over the loaded config.
    fn into_request(self, config: &GenConfig) -> GenerateRequest {
        GenerateRequest {
            caps_path: self.caps_file,
            output_prefix: self
                .output_prefix
                .unwrap_or_else(|| config.output.prefix.clone()),
            format: self.format.unwrap_or(config.output.format),
            comment_width: self.comment_width.unwrap_or(config.style.comment_width),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;

    // `RUST_LOG` wins; otherwise use the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = cli.into_request(&config);
    info!(
        caps = %request.caps_path.display(),
        prefix = %request.output_prefix.display(),
        format = %request.format,
        "termkeys-gen starting"
    );

    let summary = generate::run(&request)
        .map_err(|e| {
            error!("generation failed: {e}");
            e
        })
        .with_context(|| {
            format!(
                "failed to generate key code table from {}",
                request.caps_path.display()
            )
        })?;

    for path in &summary.written {
        info!("wrote {}", path.display());
    }
    info!(
        records = summary.records,
        named = summary.named,
        max_code = summary.max_code,
        "termkeys-gen finished"
    );
    Ok(())
}
