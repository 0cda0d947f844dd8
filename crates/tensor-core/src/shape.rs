// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Two-dimensional shape descriptor and row-major index arithmetic.

use std::fmt;

/// Describes the dimensions of a [`crate::Tensor`].
///
/// A shape only maps `(row, col)` pairs onto flat offsets. It does not
/// reject zero dimensions; [`crate::Tensor`] constructors do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Creates a `rows × cols` shape.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Shape;
    /// let s = Shape::new(4, 3);
    /// assert_eq!(s.num_elements(), Some(12));
    /// assert_eq!(s.offset(1, 2), Some(5));
    /// ```
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Total element count, or `None` if `rows * cols` overflows `usize`.
    pub fn num_elements(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Returns `true` if `(row, col)` lies inside this shape.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major offset of `(row, col)`: `row * cols + col`.
    ///
    /// Returns `None` when the index is out of range or the offset does not
    /// fit in `usize`.
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if !self.contains(row, col) {
            return None;
        }
        row.checked_mul(self.cols)?.checked_add(col)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}

/// Convenience: `Shape::from((4, 3))`.
impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let s = Shape::new(3, 4);
        assert_eq!(s.rows(), 3);
        assert_eq!(s.cols(), 4);
        assert_eq!(s.num_elements(), Some(12));
    }

    #[test]
    fn test_offsets_are_row_major() {
        let s = Shape::new(2, 3);
        let offsets: Vec<usize> = (0..2)
            .flat_map(|i| (0..3).map(move |j| (i, j)))
            .map(|(i, j)| s.offset(i, j).unwrap())
            .collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_offset_out_of_range() {
        let s = Shape::new(2, 3);
        assert_eq!(s.offset(2, 0), None);
        assert_eq!(s.offset(0, 3), None);
        assert!(!s.contains(usize::MAX, usize::MAX));
    }

    #[test]
    fn test_empty() {
        assert!(Shape::new(0, 3).is_empty());
        assert!(Shape::new(3, 0).is_empty());
        assert!(!Shape::new(1, 1).is_empty());
    }

    #[test]
    fn test_overflow() {
        assert_eq!(Shape::new(usize::MAX, 2).num_elements(), None);
    }

    #[test]
    fn test_offset_overflow() {
        let s = Shape::new(usize::MAX, 2);
        assert!(s.contains(usize::MAX - 1, 0));
        assert_eq!(s.offset(usize::MAX - 1, 0), None);
        assert_eq!(s.offset(0, 1), Some(1));
        assert_eq!(s.offset(1, 1), Some(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Shape::new(4, 1)), "[4, 1]");
    }

    #[test]
    fn test_from_tuple() {
        let s: Shape = (4, 3).into();
        assert_eq!(s, Shape::new(4, 3));
    }
}
