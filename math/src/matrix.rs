use std::ops::{Deref, Index};

use num_bigint::BigUint;

use crate::{
    error::{MatrixError, Result},
    traits::PrimeField,
};

/// A rectangular matrix over a prime field.
///
/// The field travels with the matrix so that every operation reduces modulo
/// the same prime. Entries are expected to be canonical elements of `field`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F: PrimeField> {
    field: F,
    rows: Vec<Vec<F::Element>>,
}

const MATRIX_PRODUCT_OP: &str = "matrix multiplication";
const MATRIX_INVERSE_OP: &str = "matrix inversion";

impl<F: PrimeField> Matrix<F> {
    /// Fallible constructor that validates the matrix shape.
    pub fn try_new(field: F, rows: Vec<Vec<F::Element>>) -> Result<Self> {
        Self::ensure_rectangular_rows(&rows)?;
        Ok(Self { field, rows })
    }

    /// Build a matrix from integer rows, reducing every entry into `field`.
    pub fn from_biguint_rows(field: F, rows: &[Vec<BigUint>]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|v| field.reduce(v)).collect())
            .collect();
        Self::try_new(field, rows)
    }

    /// Create a zero matrix of size (rows x cols).
    pub fn zeros(field: F, rows: usize, cols: usize) -> Self {
        let data = vec![vec![field.zero(); cols]; rows];
        Self { field, rows: data }
    }

    pub fn identity(field: F, size: usize) -> Self {
        let mut m = Self::zeros(field, size, size);
        for i in 0..size {
            m.rows[i][i] = m.field.one();
        }
        m
    }

    /// Borrow the underlying rows.
    pub fn as_slice(&self) -> &[Vec<F::Element>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<F::Element>> {
        self.rows
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 if empty).
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn row(&self, index: usize) -> Option<&[F::Element]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Rows lifted back to integers, mostly for display and comparison.
    pub fn to_biguint_rows(&self) -> Vec<Vec<BigUint>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|e| self.field.lift(e)).collect())
            .collect()
    }

    /// Sub-matrix made of the given rows, in the given order.
    ///
    /// Panics if an index is out of bounds.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
        Self {
            field: self.field.clone(),
            rows,
        }
    }

    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let data = (0..cols)
            .map(|j| (0..rows).map(|i| self.rows[i][j].clone()).collect())
            .collect();
        Self {
            field: self.field.clone(),
            rows: data,
        }
    }

    /// Matrix product `self * rhs` with shape checks.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::ShapeMismatch {
                operation: MATRIX_PRODUCT_OP,
                left: self.shape(),
                right: rhs.shape(),
            }
            .into());
        }

        let f = &self.field;
        let rows = self
            .rows
            .iter()
            .map(|lhs_row| {
                (0..rhs.cols())
                    .map(|j| {
                        lhs_row.iter().zip(&rhs.rows).fold(
                            f.zero(),
                            |acc, (a_ik, rhs_row)| {
                                f.add(&acc, &f.mul(a_ik, &rhs_row[j]))
                            },
                        )
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            field: f.clone(),
            rows,
        })
    }

    /// Determinant via Gaussian elimination. The empty matrix has determinant 1.
    pub fn determinant(&self) -> Result<F::Element> {
        self.ensure_square()?;
        let f = &self.field;
        let n = self.rows();
        let mut work = self.rows.clone();
        let mut det = f.one();

        for col in 0..n {
            let Some(pivot) = (col..n).find(|&r| !f.is_zero(&work[r][col]))
            else {
                return Ok(f.zero());
            };
            if pivot != col {
                work.swap(pivot, col);
                det = f.neg(&det);
            }
            det = f.mul(&det, &work[col][col]);

            let inv = f.inverse(&work[col][col]).ok_or(MatrixError::NotInvertible)?;
            for r in (col + 1)..n {
                if f.is_zero(&work[r][col]) {
                    continue;
                }
                let factor = f.mul(&work[r][col], &inv);
                for c in col..n {
                    let delta = f.mul(&factor, &work[col][c]);
                    work[r][c] = f.sub(&work[r][c], &delta);
                }
            }
        }

        Ok(det)
    }

    /// `true` iff the matrix is square with a nonzero determinant.
    pub fn is_invertible(&self) -> bool {
        self.determinant()
            .map(|det| !self.field.is_zero(&det))
            .unwrap_or(false)
    }

    /// Gauss–Jordan inverse.
    pub fn inverse(&self) -> Result<Self> {
        self.ensure_square()?;
        if self.rows.is_empty() {
            return Err(MatrixError::Empty {
                operation: MATRIX_INVERSE_OP,
            }
            .into());
        }

        let f = &self.field;
        let n = self.rows();
        let mut work = self.rows.clone();
        let mut inv = Self::identity(f.clone(), n).rows;

        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| !f.is_zero(&work[r][col]))
                .ok_or(MatrixError::NotInvertible)?;
            work.swap(pivot, col);
            inv.swap(pivot, col);

            let scale = f.inverse(&work[col][col]).ok_or(MatrixError::NotInvertible)?;
            for c in 0..n {
                work[col][c] = f.mul(&work[col][c], &scale);
                inv[col][c] = f.mul(&inv[col][c], &scale);
            }

            for r in 0..n {
                if r == col || f.is_zero(&work[r][col]) {
                    continue;
                }
                let factor = work[r][col].clone();
                for c in 0..n {
                    let w = f.mul(&factor, &work[col][c]);
                    work[r][c] = f.sub(&work[r][c], &w);
                    let v = f.mul(&factor, &inv[col][c]);
                    inv[r][c] = f.sub(&inv[r][c], &v);
                }
            }
        }

        Ok(Self {
            field: f.clone(),
            rows: inv,
        })
    }

    /// Left pseudoinverse `(AᵀA)⁻¹Aᵀ`.
    ///
    /// For a matrix with full column rank whose Gram matrix is invertible the
    /// result `P` satisfies `P * A = I`. Fails with
    /// [`MatrixError::NotInvertible`] when `AᵀA` is singular.
    pub fn pseudoinverse(&self) -> Result<Self> {
        let transpose = self.transpose();
        let gram = transpose.try_mul(self)?;
        gram.inverse()?.try_mul(&transpose)
    }

    fn ensure_square(&self) -> core::result::Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }

    fn ensure_rectangular_rows(
        rows: &[Vec<F::Element>],
    ) -> core::result::Result<usize, MatrixError> {
        if let Some((first, rest)) = rows.split_first() {
            let expected = first.len();
            for (offset, row) in rest.iter().enumerate() {
                if row.len() != expected {
                    return Err(MatrixError::Ragged {
                        row: offset + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
            Ok(expected)
        } else {
            Ok(0)
        }
    }
}

/// Immutable indexing by row.
impl<F: PrimeField> Index<usize> for Matrix<F> {
    type Output = Vec<F::Element>;
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

/// Immutable indexing by `(row, col)`.
impl<F: PrimeField> Index<(usize, usize)> for Matrix<F> {
    type Output = F::Element;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

/// Deref to a slice of rows.
impl<F: PrimeField> Deref for Matrix<F> {
    type Target = [Vec<F::Element>];
    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}
