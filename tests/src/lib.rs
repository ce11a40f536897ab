//! # Vaccine Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Cross-crate flows: file → registry → shell
//! └── benches/           # Filter check, index search, category lookup
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vr-tests
//! cargo test -p vr-tests integration::
//!
//! # Benchmarks
//! cargo bench -p vr-tests
//! ```

#![allow(dead_code)]

pub mod integration;
