//! Ports Layer - Trait definitions
//!
//! - `inbound`: API exposed to the loader and the shell (driving port)

pub mod inbound;

pub use inbound::VaccinationRegistryApi;
