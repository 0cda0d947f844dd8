// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Generator configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! distribution = "uniform"
//! seed = 42
//! ```
//!
//! Leaving out `seed` yields a time-seeded generator.

use std::path::Path;

use crate::{Distribution, RandomGenerator, RngError};

/// Settings for building a [`RandomGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    /// Distribution to sample from.
    #[serde(default)]
    pub distribution: Distribution,
    /// Fixed seed for reproducible runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, RngError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RngError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, RngError> {
        toml::from_str(toml_str).map_err(|e| RngError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, RngError> {
        toml::to_string_pretty(self)
            .map_err(|e| RngError::Config(format!("TOML serialise error: {e}")))
    }

    /// Builds the generator described by this config.
    pub fn build(&self) -> RandomGenerator {
        match self.seed {
            Some(seed) => RandomGenerator::with_seed(self.distribution, seed),
            None => RandomGenerator::new(self.distribution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Draw;

    #[test]
    fn test_default() {
        let c = GeneratorConfig::default();
        assert_eq!(c.distribution, Distribution::Uniform);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn test_from_toml() {
        let c = GeneratorConfig::from_toml("distribution = \"normal\"\nseed = 42\n").unwrap();
        assert_eq!(c.distribution, Distribution::Normal);
        assert_eq!(c.seed, Some(42));
    }

    #[test]
    fn test_from_toml_gaussian_alias() {
        let c = GeneratorConfig::from_toml("distribution = \"gaussian\"").unwrap();
        assert_eq!(c.distribution, Distribution::Normal);
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        let c = GeneratorConfig::from_toml("").unwrap();
        assert_eq!(c, GeneratorConfig::default());
    }

    #[test]
    fn test_from_toml_unknown_distribution() {
        let err = GeneratorConfig::from_toml("distribution = \"poisson\"").unwrap_err();
        assert!(matches!(err, RngError::Config(_)));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = GeneratorConfig {
            distribution: Distribution::Uniform,
            seed: Some(7),
        };
        let back = GeneratorConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_file_missing() {
        let err = GeneratorConfig::from_file(Path::new("/nonexistent/prng.toml")).unwrap_err();
        assert!(matches!(err, RngError::Config(_)));
    }

    #[test]
    fn test_build_seeded() {
        let c = GeneratorConfig {
            distribution: Distribution::Uniform,
            seed: Some(21),
        };
        let mut a = c.build();
        let mut b = RandomGenerator::with_seed(Distribution::Uniform, 21);
        assert_eq!(a.seed(), 21);
        assert_eq!(a.draw().unwrap(), b.draw().unwrap());
    }
}
