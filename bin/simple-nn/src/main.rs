// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # simple-nn
//!
//! Demo driver for `tensor-core` and `prng`.
//!
//! Builds the four-sample, three-feature dataset of a single-layer
//! perceptron, prints it next to its labels, and prints a randomly
//! initialized weight column for it.
//!
//! ## Usage
//! ```bash
//! simple-nn
//!
//! # Reproducible weights
//! SIMPLE_NN_CONFIG=./simple-nn.toml simple-nn
//!
//! # Show allocation and seeding events
//! RUST_LOG=debug simple-nn
//! ```
//!
//! The perceptron this data is meant for computes
//! `y_hat = activation(X · W)` with `X` 4×3, `W` 3×1 and `y_hat` 4×1.

mod dataset;

use std::path::PathBuf;

use anyhow::Context;
use prng::GeneratorConfig;
use tensor_core::Tensor;
use tracing_subscriber::EnvFilter;

use crate::dataset::Dataset;

/// Environment variable naming an optional generator config file.
const CONFIG_ENV: &str = "SIMPLE_NN_CONFIG";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config()?;
    let dataset = Dataset::sample().context("cannot build sample dataset")?;

    let mut rng = config.build();
    let weights = Tensor::random(dataset.num_features(), 1, &mut rng)
        .context("cannot initialize weights")?;

    // Render everything first so a failure prints nothing.
    let mut out = dataset.render()?;
    out.push('\n');
    out.push_str(&dataset::render_column("W", &weights)?);

    print!("{out}");
    Ok(())
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> anyhow::Result<GeneratorConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = GeneratorConfig::from_file(&path)
                .with_context(|| format!("failed to load {CONFIG_ENV}"))?;
            tracing::info!("loaded generator config from '{}'", path.display());
            Ok(config)
        }
        None => Ok(GeneratorConfig::default()),
    }
}
