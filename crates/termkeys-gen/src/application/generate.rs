//! The generation pipeline: parse → build → emit → write.
//!
//! Every step before writing is pure and in-memory, so a bad capability file
//! leaves the output directory untouched.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use termkeys_core::emit::{EmitError, EmitFormat, EmitOptions, DEFAULT_COMMENT_WIDTH};
use termkeys_core::{parse_capabilities, CapabilityError, CodeTableBuilder, TableEmitter};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::write_generated;

/// Errors from a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The capability file could not be opened.
    #[error("failed to open capabilities file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The capability file is malformed or has no key records.
    #[error("{path}: {source}")]
    Capability {
        path: PathBuf,
        #[source]
        source: CapabilityError,
    },

    /// The table could not be rendered.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Inputs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub caps_path: PathBuf,
    /// Output path without extension.
    pub output_prefix: PathBuf,
    pub format: EmitFormat,
    pub comment_width: usize,
}

impl GenerateRequest {
    /// A request with the default prefix, format and comment width.
    pub fn new(caps_path: impl Into<PathBuf>) -> Self {
        Self {
            caps_path: caps_path.into(),
            output_prefix: PathBuf::from("src/keycode"),
            format: EmitFormat::default(),
            comment_width: DEFAULT_COMMENT_WIDTH,
        }
    }

    fn emit_options(&self) -> EmitOptions {
        let module_name = self
            .output_prefix
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "keycode".to_string());
        EmitOptions {
            module_name,
            comment_width: self.comment_width,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    /// `key_` records parsed, including those without a code.
    pub records: usize,
    /// Slots bound to a capability name.
    pub named: usize,
    pub max_code: u32,
    pub written: Vec<PathBuf>,
}

/// Runs the whole pipeline for `request`.
///
/// # Errors
///
/// Returns [`GenerateError`] for the first failing step.  Nothing is written
/// unless parsing, building and emitting all succeed.
pub fn run(request: &GenerateRequest) -> Result<GenerateSummary, GenerateError> {
    let capability_error = |source: CapabilityError| GenerateError::Capability {
        path: request.caps_path.clone(),
        source,
    };

    let file = File::open(&request.caps_path).map_err(|source| GenerateError::Open {
        path: request.caps_path.clone(),
        source,
    })?;
    let records = parse_capabilities(BufReader::new(file)).map_err(capability_error)?;
    let record_count = records.len();

    let builder: CodeTableBuilder = records.into_iter().collect();
    let table = builder.build().map_err(capability_error)?;
    debug!(
        records = record_count,
        max_code = table.max_code(),
        "key code table ready"
    );

    let files = request.format.emitter().emit(&table, &request.emit_options())?;
    let written = write_generated(&request.output_prefix, &files)?;

    info!(
        format = %request.format,
        files = written.len(),
        "generated key code table from {}",
        request.caps_path.display()
    );

    Ok(GenerateSummary {
        records: record_count,
        named: table.named_count(),
        max_code: table.max_code(),
        written,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
