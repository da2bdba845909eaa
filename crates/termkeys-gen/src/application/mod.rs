//! Application layer for termkeys-gen.
//!
//! Coordinates the core library and the infrastructure layer; holds no
//! format or file-system details itself.

pub mod generate;
