// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The sample perceptron dataset and its text rendering.

use tensor_core::{Tensor, TensorError};

const SAMPLES: [[f64; 3]; 4] = [
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
];

const LABELS: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

/// Inputs `x` (one row per sample) and targets `y` (one row per sample,
/// single column).
#[derive(Debug)]
pub struct Dataset {
    pub x: Tensor,
    pub y: Tensor,
}

impl Dataset {
    /// Builds the 4×3 / 4×1 sample set cell by cell.
    pub fn sample() -> Result<Self, TensorError> {
        let mut x = Tensor::zeros(SAMPLES.len(), SAMPLES[0].len())?;
        for (i, sample) in SAMPLES.iter().enumerate() {
            for (j, &value) in sample.iter().enumerate() {
                x.set(i, j, value)?;
            }
        }

        let mut y = Tensor::zeros(LABELS.len(), 1)?;
        for (i, &label) in LABELS.iter().enumerate() {
            y.set(i, 0, label)?;
        }

        Ok(Self { x, y })
    }

    pub fn num_samples(&self) -> usize {
        self.x.rows()
    }

    pub fn num_features(&self) -> usize {
        self.x.cols()
    }

    /// Renders the header and one line per sample: features, then label.
    ///
    /// ```text
    /// X                 y
    /// 0.00 0.00 1.00    0.00
    /// ```
    pub fn render(&self) -> Result<String, TensorError> {
        let mut out = String::from("X                 y\n");
        for i in 0..self.num_samples() {
            for j in 0..self.num_features() {
                out.push_str(&format!("{:.2} ", self.x.get(i, j)?));
            }
            out.push_str(&format!("   {:.2}\n", self.y.get(i, 0)?));
        }
        Ok(out)
    }
}

/// Renders `label` followed by the first column of `t`, one value per line.
pub fn render_column(label: &str, t: &Tensor) -> Result<String, TensorError> {
    let mut out = format!("{label}\n");
    for i in 0..t.rows() {
        out.push_str(&format!("{:.2}\n", t.get(i, 0)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng::{Distribution, RandomGenerator};

    #[test]
    fn test_sample_shapes() {
        let d = Dataset::sample().unwrap();
        assert_eq!((d.x.rows(), d.x.cols()), (4, 3));
        assert_eq!((d.y.rows(), d.y.cols()), (4, 1));
    }

    #[test]
    fn test_sample_values_read_back() {
        let d = Dataset::sample().unwrap();
        for (i, sample) in SAMPLES.iter().enumerate() {
            for (j, &v) in sample.iter().enumerate() {
                assert_eq!(d.x.get(i, j).unwrap(), v);
            }
            assert_eq!(d.y.get(i, 0).unwrap(), LABELS[i]);
        }
    }

    #[test]
    fn test_render() {
        let d = Dataset::sample().unwrap();
        let expected = "\
X                 y
0.00 0.00 1.00    0.00
1.00 1.00 1.00    1.00
1.00 0.00 1.00    1.00
0.00 1.00 1.00    0.00
";
        assert_eq!(d.render().unwrap(), expected);
    }

    #[test]
    fn test_render_column() {
        let w = Tensor::from_vec(3, 1, vec![0.124, 0.5, 0.999]).unwrap();
        assert_eq!(render_column("W", &w).unwrap(), "W\n0.12\n0.50\n1.00\n");
    }

    #[test]
    fn test_weights_match_feature_count() {
        let d = Dataset::sample().unwrap();
        let mut rng = RandomGenerator::with_seed(Distribution::Uniform, 1);
        let w = Tensor::random(d.num_features(), 1, &mut rng).unwrap();
        assert_eq!(w.rows(), 3);
        assert_eq!(render_column("W", &w).unwrap().lines().count(), 4);
    }
}
