//! Dense `f64` matrices
//!
//! Stored row-major. Rows are plain slices; columns are strided views. Both
//! kinds of view write straight through to the matrix.

use serde::{Deserialize, Serialize};

use super::vector::distance::safe_divide;
use super::vector::DenseVector;
use super::{AlgebraError, AlgebraResult};

/// Fixed-shape matrix of `f64`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Zero matrix of shape `rows × cols`
    pub fn zeros(rows: usize, cols: usize) -> Self {
        DenseMatrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Row count
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.offset(row, col)]
    }

    /// Overwrite value at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let i = self.offset(row, col);
        self.data[i] = value;
    }

    /// Add `delta` to `(row, col)`
    pub fn add_at(&mut self, row: usize, col: usize, delta: f64) {
        let i = self.offset(row, col);
        self.data[i] += delta;
    }

    /// Borrow a row
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow a row
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Copy a row out as a vector
    pub fn row_vector(&self, row: usize) -> DenseVector {
        DenseVector::from_vec(self.row(row).to_vec())
    }

    /// Overwrite a row from a vector of matching length
    pub fn set_row(&mut self, row: usize, values: &DenseVector) -> AlgebraResult<()> {
        if values.len() != self.cols {
            return Err(AlgebraError::LengthMismatch {
                expected: self.cols,
                actual: values.len(),
            });
        }
        self.row_mut(row).copy_from_slice(values.as_slice());
        Ok(())
    }

    /// Borrow a column as a strided view
    pub fn column(&self, col: usize) -> ColumnView<'_> {
        ColumnView { matrix: self, col }
    }

    /// Mutably borrow a column as a strided view
    pub fn column_mut(&mut self, col: usize) -> ColumnViewMut<'_> {
        ColumnViewMut { matrix: self, col }
    }

    /// Copy a column out as a vector
    pub fn column_vector(&self, col: usize) -> DenseVector {
        self.column(col).to_vector()
    }

    /// Overwrite a column from a vector of matching length
    pub fn set_column(&mut self, col: usize, values: &DenseVector) -> AlgebraResult<()> {
        if values.len() != self.rows {
            return Err(AlgebraError::LengthMismatch {
                expected: self.rows,
                actual: values.len(),
            });
        }
        let mut view = self.column_mut(col);
        for (row, value) in values.iter().enumerate() {
            view.set(row, *value);
        }
        Ok(())
    }

    /// Element-wise product with a matrix of the same shape
    pub fn ebe_multiply(&self, other: &DenseMatrix) -> AlgebraResult<DenseMatrix> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise quotient, 0 wherever the divisor is 0
    pub fn ebe_divide(&self, other: &DenseMatrix) -> AlgebraResult<DenseMatrix> {
        self.zip_with(other, safe_divide)
    }

    /// Element-wise base-10 logarithm; non-positive cells become 0
    pub fn log10(&self) -> DenseMatrix {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .map(|v| if *v > 0.0 { v.log10() } else { 0.0 })
                .collect(),
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell out of bounds");
        row * self.cols + col
    }

    fn zip_with(
        &self,
        other: &DenseMatrix,
        f: impl Fn(f64, f64) -> f64,
    ) -> AlgebraResult<DenseMatrix> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(AlgebraError::ShapeMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }
        Ok(DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        })
    }
}

/// Read-only column view
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a> {
    matrix: &'a DenseMatrix,
    col: usize,
}

impl<'a> ColumnView<'a> {
    /// Number of entries (the matrix row count)
    pub fn len(&self) -> usize {
        self.matrix.rows
    }

    /// Whether the column is empty
    pub fn is_empty(&self) -> bool {
        self.matrix.rows == 0
    }

    /// Entry at `row`
    pub fn get(&self, row: usize) -> f64 {
        self.matrix.get(row, self.col)
    }

    /// Iterate entries top to bottom
    pub fn iter(&self) -> impl Iterator<Item = f64> + 'a {
        let matrix = self.matrix;
        let col = self.col;
        (0..matrix.rows).map(move |row| matrix.get(row, col))
    }

    /// True when every entry is 0
    pub fn is_null_vector(&self) -> bool {
        self.iter().all(|v| v == 0.0)
    }

    /// Copy out as a vector
    pub fn to_vector(&self) -> DenseVector {
        DenseVector::from_vec(self.iter().collect())
    }
}

/// Mutable column view; writes land in the matrix
#[derive(Debug)]
pub struct ColumnViewMut<'a> {
    matrix: &'a mut DenseMatrix,
    col: usize,
}

impl ColumnViewMut<'_> {
    /// Number of entries (the matrix row count)
    pub fn len(&self) -> usize {
        self.matrix.rows
    }

    /// Whether the column is empty
    pub fn is_empty(&self) -> bool {
        self.matrix.rows == 0
    }

    /// Entry at `row`
    pub fn get(&self, row: usize) -> f64 {
        self.matrix.get(row, self.col)
    }

    /// Overwrite entry at `row`
    pub fn set(&mut self, row: usize, value: f64) {
        self.matrix.set(row, self.col, value);
    }

    /// Broadcast `value` into the whole column
    pub fn fill(&mut self, value: f64) {
        for row in 0..self.matrix.rows {
            self.matrix.set(row, self.col, value);
        }
    }

    /// Multiply the column element-wise by `other`, in place
    pub fn ebe_multiply_assign(&mut self, other: &DenseVector) {
        debug_assert_eq!(self.len(), other.len(), "Dimension mismatch");
        for (row, factor) in other.iter().enumerate() {
            let i = self.matrix.offset(row, self.col);
            self.matrix.data[i] *= factor;
        }
    }
}
