//! termkeys-gen library crate.
//!
//! Reads a terminal capability database, builds the dense key code table with
//! `termkeys-core`, and writes it out as Rust, C or JSON source.
//!
//! # Layout
//!
//! ```text
//! termkeys-gen
//!   ├── application/     generate::run, the parse → build → emit → write pipeline
//!   └── infrastructure/
//!         ├── config/    termkeys.toml loading (serde + toml)
//!         └── output/    writing generated files under the output prefix
//! ```
//!
//! `main.rs` only parses the command line, sets up logging, and calls
//! [`application::generate::run`].

/// Application layer: the generation pipeline.
pub mod application;

/// Infrastructure layer: configuration file and output files.
pub mod infrastructure;
