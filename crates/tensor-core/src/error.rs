// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor operations.

use crate::Shape;

/// Errors that can occur during tensor construction and access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    /// A tensor was requested with a zero row or column count.
    #[error("invalid dimensions: {rows}x{cols} (both must be non-zero)")]
    InvalidDimensions { rows: usize, cols: usize },

    /// The element buffer could not be allocated.
    #[error("out of memory allocating a {rows}x{cols} tensor")]
    OutOfMemory { rows: usize, cols: usize },

    /// A read or write addressed a cell outside the tensor.
    #[error("index ({row}, {col}) out of bounds for shape {shape}")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    /// A supplied buffer does not hold exactly `rows * cols` values.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The random source failed while populating a tensor.
    #[error("random fill failed: {0}")]
    Draw(#[from] prng::RngError),
}
