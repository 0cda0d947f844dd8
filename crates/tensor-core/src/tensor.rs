// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type.

use prng::Draw;

use crate::{Shape, TensorError};

/// An owned, dense 2-D tensor of `f64` stored in contiguous memory.
///
/// # Memory Layout
/// Data is stored in row-major (C) order: element `(i, j)` lives at offset
/// `i * cols + j`. Offsets are never exposed; every element access goes
/// through a bounds-checked accessor.
///
/// # Ownership
/// Reads borrow the tensor immutably (`&Tensor`), writes borrow it
/// exclusively (`&mut Tensor`). The buffer is released when the tensor is
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f64>,
}

impl Tensor {
    /// Creates a new tensor filled with zeros.
    ///
    /// Fails with [`TensorError::InvalidDimensions`] if either dimension is
    /// zero and with [`TensorError::OutOfMemory`] if the buffer cannot be
    /// allocated.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Tensor;
    /// let t = Tensor::zeros(2, 3).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert_eq!(t.get(1, 2).unwrap(), 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, TensorError> {
        let shape = checked_shape(rows, cols)?;
        let len = shape
            .num_elements()
            .ok_or(TensorError::OutOfMemory { rows, cols })?;

        let mut data = Vec::new();
        if let Err(e) = data.try_reserve_exact(len) {
            tracing::warn!("allocation of {shape} tensor failed: {e}");
            return Err(TensorError::OutOfMemory { rows, cols });
        }
        data.resize(len, 0.0);

        tracing::debug!("allocated {shape} tensor ({len} elements)");
        Ok(Self { shape, data })
    }

    /// Creates a tensor with every cell drawn from `source`.
    ///
    /// Cells are filled in row-major order (row outer, column inner), so a
    /// seeded source always feeds the same value to the same cell. If a draw
    /// fails, the partially filled tensor is dropped and the error returned.
    ///
    /// # Examples
    /// ```
    /// use prng::{Distribution, RandomGenerator};
    /// use tensor_core::Tensor;
    ///
    /// let mut rng = RandomGenerator::with_seed(Distribution::Uniform, 1);
    /// let w = Tensor::random(3, 1, &mut rng).unwrap();
    /// assert!(w.as_slice().iter().all(|x| (0.0..1.0).contains(x)));
    /// ```
    pub fn random<D>(rows: usize, cols: usize, source: &mut D) -> Result<Self, TensorError>
    where
        D: Draw + ?Sized,
    {
        let mut tensor = Self::zeros(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                let value = source.draw()?;
                tensor.set(row, col, value)?;
            }
        }
        Ok(tensor)
    }

    /// Creates a tensor that takes ownership of a row-major buffer.
    ///
    /// Returns an error if either dimension is zero or if
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, TensorError> {
        let shape = checked_shape(rows, cols)?;
        let expected = shape
            .num_elements()
            .ok_or(TensorError::OutOfMemory { rows, cols })?;
        if data.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Total number of elements.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Reads the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, TensorError> {
        let offset = self.offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Overwrites the value at `(row, col)`.
    ///
    /// On error the tensor is left untouched.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), TensorError> {
        let offset = self.offset(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns row `row` as a contiguous slice.
    pub fn row(&self, row: usize) -> Result<&[f64], TensorError> {
        if row >= self.rows() {
            return Err(self.out_of_bounds(row, 0));
        }
        let start = row * self.cols();
        Ok(&self.data[start..start + self.cols()])
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols())
    }

    /// Returns the row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, TensorError> {
        self.shape
            .offset(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> TensorError {
        TensorError::IndexOutOfBounds {
            row,
            col,
            shape: self.shape,
        }
    }
}

fn checked_shape(rows: usize, cols: usize) -> Result<Shape, TensorError> {
    let shape = Shape::new(rows, cols);
    if shape.is_empty() {
        return Err(TensorError::InvalidDimensions { rows, cols });
    }
    Ok(shape)
}
