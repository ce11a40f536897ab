//! Runtime configuration
//!
//! Built in three steps: command-line arguments, then `VR_*` environment
//! overrides, then validation. A malformed override is logged and ignored.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use vr_01_membership_filter::FilterConfig;
use vr_02_ordered_index::IndexConfig;
use vr_03_category_index::{RegistryConfig, RegistryError};

/// Filter size override, in bits
pub const ENV_BLOOM_SIZE: &str = "VR_BLOOM_SIZE";
/// Hash function count override
pub const ENV_HASH_COUNT: &str = "VR_HASH_COUNT";
/// Ordered index level ceiling override
pub const ENV_MAX_LEVEL: &str = "VR_MAX_LEVEL";
/// Level generator seed override
pub const ENV_SEED: &str = "VR_SEED";

#[derive(Parser, Debug, Clone)]
#[command(name = "vaccine-registry")]
#[command(about = "Vaccination registry with per-virus membership filters and ordered indexes")]
pub struct Args {
    /// Record file, one citizen per line
    pub input: PathBuf,

    /// Membership filter size in bits
    #[arg(long, default_value = "10000")]
    pub bloom_size: usize,

    /// Number of hash functions per key (1 to 3)
    #[arg(long, default_value = "3")]
    pub hash_count: usize,

    /// Highest level of the ordered index
    #[arg(long, default_value = "5")]
    pub max_level: usize,

    /// Seed for reproducible index shapes
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid registry configuration: {0}")]
    Registry(#[from] RegistryError),

    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub registry: RegistryConfig,
}

impl RuntimeConfig {
    pub fn from_args(args: Args) -> Self {
        let filter = FilterConfig::default()
            .with_size_bits(args.bloom_size)
            .with_hash_count(args.hash_count);
        let index = IndexConfig::default().with_max_level(args.max_level);

        let mut registry = RegistryConfig::default().with_filter(filter).with_index(index);
        registry.seed = args.seed;

        Self {
            input: args.input,
            registry,
        }
    }

    /// Apply `VR_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply `VR_*` overrides from any variable source
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bits) = parse_override(&lookup, ENV_BLOOM_SIZE) {
            self.registry.filter.size_bits = bits;
        }
        if let Some(count) = parse_override(&lookup, ENV_HASH_COUNT) {
            self.registry.filter.hash_count = count;
        }
        if let Some(level) = parse_override(&lookup, ENV_MAX_LEVEL) {
            self.registry.index.max_level = level;
        }
        if let Some(seed) = parse_override(&lookup, ENV_SEED) {
            self.registry.seed = Some(seed);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.validate()?;
        if !self.input.is_file() {
            return Err(ConfigError::MissingInput(self.input.clone()));
        }
        Ok(())
    }
}

fn parse_override<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => {
            info!(variable = name, value = %raw, "Applied environment override");
            Some(value)
        }
        Err(_) => {
            warn!(variable = name, value = %raw, "Ignoring malformed environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["vaccine-registry", "records.txt"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    fn lookup_in(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_match_reference_program() {
        let config = RuntimeConfig::from_args(args(&[]));
        assert_eq!(config.input, PathBuf::from("records.txt"));
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_command_line_flags() {
        let config = RuntimeConfig::from_args(args(&[
            "--bloom-size",
            "2048",
            "--hash-count",
            "2",
            "--max-level",
            "8",
            "--seed",
            "17",
        ]));
        assert_eq!(config.registry.filter.size_bits, 2048);
        assert_eq!(config.registry.filter.hash_count, 2);
        assert_eq!(config.registry.index.max_level, 8);
        assert_eq!(config.registry.seed, Some(17));
    }

    #[test]
    fn test_environment_overrides_command_line() {
        let mut config = RuntimeConfig::from_args(args(&["--bloom-size", "2048"]));
        config.apply_overrides(lookup_in(HashMap::from([
            (ENV_BLOOM_SIZE, "4096"),
            (ENV_MAX_LEVEL, "3"),
            (ENV_SEED, "99"),
        ])));

        assert_eq!(config.registry.filter.size_bits, 4096);
        assert_eq!(config.registry.filter.hash_count, 3);
        assert_eq!(config.registry.index.max_level, 3);
        assert_eq!(config.registry.seed, Some(99));
    }

    #[test]
    fn test_malformed_override_ignored() {
        let mut config = RuntimeConfig::from_args(args(&[]));
        config.apply_overrides(lookup_in(HashMap::from([
            (ENV_HASH_COUNT, "three"),
            (ENV_BLOOM_SIZE, "-5"),
        ])));
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_registry_parameters() {
        let config = RuntimeConfig::from_args(args(&["--hash-count", "4"]));
        assert!(matches!(config.validate(), Err(ConfigError::Registry(_))));
    }

    #[test]
    fn test_validate_requires_existing_input() {
        let config = RuntimeConfig::from_args(args(&[]));
        let missing = std::env::temp_dir().join("vr-runtime-definitely-missing.txt");
        let config = RuntimeConfig {
            input: missing.clone(),
            ..config
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingInput(path)) if path == missing
        ));

        let file = tempfile::NamedTempFile::new().unwrap();
        let config = RuntimeConfig {
            input: file.path().to_path_buf(),
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
