//! Correlation matrices and their Cholesky factors.
//!
//! Given `n` independent standard normals `z`, correlated normals are obtained as
//!
//! ```text
//! w = L * z,    C = L * L^T
//! ```
//!
//! where `L` is the lower triangular Cholesky factor of the correlation matrix `C`.
//! The factor is computed once at setup; a matrix that is not positive definite
//! is rejected there and never patched up afterwards.
//!
//! ## Usage
//!
//! ```
//! use macro_core::math::CorrelationMatrix;
//!
//! let corr = CorrelationMatrix::from_rows(&[
//!     [1.0_f64, 0.5],
//!     [0.5, 1.0],
//! ]).unwrap();
//!
//! let l = corr.cholesky().unwrap();
//! let w = l.transform(&[1.0, 0.0]);
//! assert!((w[1] - 0.5).abs() < 1e-12);
//! ```

use crate::traits::Float;
use crate::types::CorrelationError;

/// Correlation matrix with validation and Cholesky decomposition.
///
/// A correlation matrix must satisfy:
/// - Square and symmetric
/// - Diagonal elements equal to 1.0
/// - Off-diagonal elements in [-1, 1]
///
/// Positive definiteness is checked by [`CorrelationMatrix::cholesky`].
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix<T: Float> {
    /// Matrix elements in row-major order
    data: Vec<T>,
    /// Matrix dimension (n x n)
    dim: usize,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Create a new correlation matrix from a flat row-major slice.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` unless `data.len() == dim * dim`
    /// - `InvalidDiagonal` if a diagonal entry differs from 1.0 or is NaN
    /// - `OutOfRange` if an off-diagonal entry lies outside [-1, 1] or is NaN
    /// - `NotSymmetric` if `C[i][j] != C[j][i]`
    pub fn new(data: &[T], dim: usize) -> Result<Self, CorrelationError> {
        let expected = dim * dim;
        if data.len() != expected {
            return Err(CorrelationError::InvalidDimensions {
                expected,
                got: data.len(),
            });
        }

        let one = T::one();
        let epsilon = T::from(1e-10).unwrap_or_else(T::epsilon);

        for i in 0..dim {
            let diag = data[i * dim + i];
            if diag.is_nan() || (diag - one).abs() > epsilon {
                return Err(CorrelationError::InvalidDiagonal {
                    index: i,
                    value: diag.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        for i in 0..dim {
            for j in (i + 1)..dim {
                let val_ij = data[i * dim + j];
                let val_ji = data[j * dim + i];

                // NaN fails the range check on either side of the diagonal.
                for (row, col, value) in [(i, j, val_ij), (j, i, val_ji)] {
                    if !(value >= -one && value <= one) {
                        return Err(CorrelationError::OutOfRange {
                            i: row,
                            j: col,
                            value: value.to_f64().unwrap_or(f64::NAN),
                        });
                    }
                }

                if (val_ij - val_ji).abs() > epsilon {
                    return Err(CorrelationError::NotSymmetric { i, j });
                }
            }
        }

        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Create a correlation matrix from fixed-size rows.
    pub fn from_rows<const N: usize>(rows: &[[T; N]; N]) -> Result<Self, CorrelationError> {
        let flat: Vec<T> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::new(&flat, N)
    }

    /// Create an identity correlation matrix (no correlation).
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![T::zero(); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = T::one();
        }
        Self { data, dim }
    }

    /// Get matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get element at (i, j).
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.dim + j]
    }

    /// Compute the lower triangular factor `L` with `C = L * L^T`.
    ///
    /// # Errors
    ///
    /// `CorrelationError::NotPositiveDefinite` when a pivot is not strictly positive.
    pub fn cholesky(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let n = self.dim;
        let mut lower = vec![T::zero(); n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::zero();

                if j == i {
                    for k in 0..j {
                        let l_jk = lower[j * n + k];
                        sum = sum + l_jk * l_jk;
                    }
                    let pivot = self.get(j, j) - sum;
                    if !(pivot > T::zero()) {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[j * n + j] = pivot.sqrt();
                } else {
                    for k in 0..j {
                        sum = sum + lower[i * n + k] * lower[j * n + k];
                    }
                    // Diagonal of row j was set on an earlier pass and is > 0.
                    lower[i * n + j] = (self.get(i, j) - sum) / lower[j * n + j];
                }
            }
        }

        Ok(CholeskyFactor { data: lower, dim: n })
    }
}

/// Lower triangular Cholesky factor of a correlation matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor<T: Float> {
    /// Lower triangular matrix elements (row-major)
    data: Vec<T>,
    /// Matrix dimension
    dim: usize,
}

impl<T: Float> CholeskyFactor<T> {
    /// Get matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get element at (i, j). Upper triangular elements are zero.
    pub fn get(&self, i: usize, j: usize) -> T {
        if j > i {
            T::zero()
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// Transform independent standard normals into correlated normals (`w = L * z`).
    ///
    /// # Panics
    ///
    /// Panics if `z.len() < self.dim()`. Use [`CholeskyFactor::try_transform`]
    /// when the input length is not known statically.
    pub fn transform(&self, z: &[T]) -> Vec<T> {
        assert!(
            z.len() >= self.dim,
            "Input vector length {} is less than matrix dimension {}",
            z.len(),
            self.dim
        );
        self.lower_times(z)
    }

    /// Checked variant of [`CholeskyFactor::transform`].
    ///
    /// Returns `None` if `z` is shorter than the matrix dimension.
    pub fn try_transform(&self, z: &[T]) -> Option<Vec<T>> {
        if z.len() < self.dim {
            return None;
        }
        Some(self.lower_times(z))
    }

    /// Rebuild `L * L^T`, mainly for diagnostics.
    pub fn reconstruct(&self) -> CorrelationMatrix<T> {
        let n = self.dim;
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..=i.min(j) {
                    sum = sum + self.get(i, k) * self.get(j, k);
                }
                data[i * n + j] = sum;
            }
        }
        CorrelationMatrix { data, dim: n }
    }

    fn lower_times(&self, z: &[T]) -> Vec<T> {
        (0..self.dim)
            .map(|i| {
                (0..=i).fold(T::zero(), |acc, j| acc + self.data[i * self.dim + j] * z[j])
            })
            .collect()
    }
}
