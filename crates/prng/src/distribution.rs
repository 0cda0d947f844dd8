// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sampling distributions a generator can be configured with.

use std::fmt;
use std::str::FromStr;

use crate::RngError;

/// The statistical shape of values produced by a [`crate::RandomGenerator`].
///
/// Only [`Distribution::Uniform`] has a sampling rule. Drawing from a
/// [`Distribution::Normal`] generator fails with
/// [`RngError::UnsupportedDistribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Uniform over `[0, 1)`.
    #[default]
    Uniform,
    /// Gaussian. Accepted at construction, rejected at draw time.
    #[serde(alias = "gaussian")]
    Normal,
}

impl Distribution {
    /// Returns the lowercase name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Normal => "normal",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(Distribution::Uniform),
            "normal" | "gaussian" => Ok(Distribution::Normal),
            other => Err(RngError::InvalidArgument(format!(
                "unknown distribution '{other}'; expected 'uniform' or 'normal'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("uniform".parse::<Distribution>().unwrap(), Distribution::Uniform);
        assert_eq!("Normal".parse::<Distribution>().unwrap(), Distribution::Normal);
        assert_eq!(" gaussian ".parse::<Distribution>().unwrap(), Distribution::Normal);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "poisson".parse::<Distribution>().unwrap_err();
        assert!(matches!(err, RngError::InvalidArgument(_)));
    }

    #[test]
    fn test_display_matches_parse() {
        for d in [Distribution::Uniform, Distribution::Normal] {
            assert_eq!(d.to_string().parse::<Distribution>().unwrap(), d);
        }
    }
}
