// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! PCG32-backed generator and the [`Draw`] capability.
//!
//! The engine is an implementation detail: callers only see "seed" and
//! "next value in distribution". A freshly constructed generator takes its
//! state from the wall clock and its stream selector from the address of its
//! heap-allocated engine, so two generators created in the same second still
//! walk different streams. None of this is meant to be secure.
//!
//! # Seeding
//! [`RandomGenerator::set_seed`] re-initializes the engine immediately on a
//! fixed stream. After seeding, the sequence depends on the seed alone.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;
use rand_pcg::Pcg32;

use crate::{Distribution, RngError};

/// Stream selector used once a generator has been explicitly seeded.
const SEEDED_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;

/// `2^-32`: maps a `u32` onto `[0, 1)`.
const U32_SCALE: f64 = 1.0 / 4_294_967_296.0;

/// A source of sample values.
///
/// Every successful call advances the source exactly once.
pub trait Draw {
    /// Produces the next value.
    fn draw(&mut self) -> Result<f64, RngError>;
}

/// A seedable random generator bound to one [`Distribution`].
///
/// # Examples
/// ```
/// use prng::{Distribution, Draw, RandomGenerator};
///
/// let mut a = RandomGenerator::with_seed(Distribution::Uniform, 7);
/// let mut b = RandomGenerator::with_seed(Distribution::Uniform, 7);
/// assert_eq!(a.draw().unwrap(), b.draw().unwrap());
/// ```
pub struct RandomGenerator {
    engine: Box<Pcg32>,
    distribution: Distribution,
    seed: u64,
    stream: u64,
}

impl RandomGenerator {
    /// Creates a generator seeded from the current time.
    ///
    /// The stream selector is derived from the engine's heap address.
    pub fn new(distribution: Distribution) -> Self {
        let seed = time_seed();
        let mut engine = Box::new(Pcg32::new(seed, 0));
        let stream = &*engine as *const Pcg32 as usize as u64;
        *engine = Pcg32::new(seed, stream);

        tracing::debug!(%distribution, seed, stream, "random generator created");

        Self {
            engine,
            distribution,
            seed,
            stream,
        }
    }

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn with_seed(distribution: Distribution, seed: u64) -> Self {
        let mut rng = Self::new(distribution);
        rng.set_seed(seed);
        rng
    }

    /// Re-seeds the engine.
    ///
    /// Takes effect on the next draw. Two generators seeded with the same
    /// value yield the same sequence regardless of how they were created.
    pub fn set_seed(&mut self, seed: u64) {
        *self.engine = Pcg32::new(seed, SEEDED_STREAM);
        self.seed = seed;
        self.stream = SEEDED_STREAM;
        tracing::debug!(seed, "random generator re-seeded");
    }

    /// Returns the seed the engine was last initialized with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the configured distribution.
    pub fn distribution(&self) -> Distribution {
        self.distribution
    }
}

impl Draw for RandomGenerator {
    /// Draws one value.
    ///
    /// `Uniform` scales one 32-bit engine output into `[0, 1)`. `Normal`
    /// fails without touching the engine.
    fn draw(&mut self) -> Result<f64, RngError> {
        match self.distribution {
            Distribution::Uniform => Ok(f64::from(self.engine.next_u32()) * U32_SCALE),
            Distribution::Normal => Err(RngError::UnsupportedDistribution {
                distribution: self.distribution,
            }),
        }
    }
}

// Engine state stays opaque.
impl fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomGenerator")
            .field("distribution", &self.distribution)
            .field("seed", &self.seed)
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
