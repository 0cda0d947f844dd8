// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tensor-core
//!
//! Dense two-dimensional tensors with bounds-checked access.
//!
//! This crate provides:
//! - [`Tensor`] - an owned, row-major `rows × cols` buffer of `f64`.
//! - [`Shape`] - the dimensions plus row-major offset arithmetic.
//! - [`TensorError`] - every failure is a returned value, never a panic.
//!
//! Tensors can be populated cell by cell with [`Tensor::set`] or drawn from
//! any [`prng::Draw`] source with [`Tensor::random`].
//!
//! # Example
//! ```
//! use tensor_core::Tensor;
//!
//! let mut x = Tensor::zeros(4, 3).unwrap();
//! x.set(0, 2, 1.0).unwrap();
//! assert_eq!(x.get(0, 2).unwrap(), 1.0);
//! assert!(x.get(4, 0).is_err());
//! ```

mod error;
mod shape;
mod tensor;

pub use error::TensorError;
pub use shape::Shape;
pub use tensor::Tensor;
