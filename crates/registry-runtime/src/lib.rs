//! # Registry Runtime Library
//!
//! Exposes the pieces of the `vaccine-registry` binary for testing. The
//! entry point is `main.rs`.
//!
//! - `config`: command-line arguments, `VR_*` environment overrides
//! - `loader`: record file parsing with per-line error reporting
//! - `shell`: `check` / `list` / `levels` / `stats` command loop
//!
//! ## Startup Sequence
//!
//! 1. Parse arguments and apply environment overrides
//! 2. Validate configuration
//! 3. Load the record file into a `CategoryRegistry`
//! 4. Serve shell commands from stdin until `exit` or end of input

pub mod config;
pub mod loader;
pub mod shell;

pub use config::{Args, ConfigError, RuntimeConfig};
pub use loader::{
    load_file, load_records, parse_record_line, LineError, LoadError, LoadReport, ParseError,
};
pub use shell::{run, Command};
