// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # prng
//!
//! Seedable pseudorandom source used to populate tensors.
//!
//! This crate provides:
//! - [`RandomGenerator`] - a PCG32 engine paired with a fixed [`Distribution`].
//! - [`Draw`] - the single capability consumers rely on: "give me the next value".
//! - [`GeneratorConfig`] - TOML-backed generator settings.
//!
//! # Example
//! ```
//! use prng::{Distribution, Draw, RandomGenerator};
//!
//! let mut rng = RandomGenerator::with_seed(Distribution::Uniform, 42);
//! let x = rng.draw().unwrap();
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! A generator is a single-owner value: drawing takes `&mut self`, so sharing
//! one across threads needs an external lock.

mod config;
mod distribution;
mod error;
mod generator;

pub use config::GeneratorConfig;
pub use distribution::Distribution;
pub use error::RngError;
pub use generator::{Draw, RandomGenerator};
