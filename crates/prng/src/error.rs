// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for random generation.

use crate::Distribution;

/// Errors that can occur while configuring or drawing from a generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RngError {
    /// The generator has no sampling rule for its distribution.
    #[error("unsupported distribution: {distribution}")]
    UnsupportedDistribution { distribution: Distribution },

    /// An argument could not be interpreted (e.g., an unknown distribution name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read, parsed, or serialised.
    #[error("configuration error: {0}")]
    Config(String),
}
