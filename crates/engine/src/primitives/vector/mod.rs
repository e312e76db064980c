//! Dense `f64` vectors
//!
//! Element-wise operations never produce NaN from a zero divisor: `x / 0`
//! and `0 / 0` are both 0.

pub mod distance;

use serde::{Deserialize, Serialize};

use distance::{cosine_similarity, dot_product, euclidean_norm, safe_divide};

/// Fixed-length vector of `f64`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DenseVector {
    values: Vec<f64>,
}

impl DenseVector {
    /// Zero vector of the given length
    pub fn zeros(len: usize) -> Self {
        DenseVector {
            values: vec![0.0; len],
        }
    }

    /// Vector with every entry set to `value`
    pub fn filled(len: usize, value: f64) -> Self {
        DenseVector {
            values: vec![value; len],
        }
    }

    /// Wrap existing values
    pub fn from_vec(values: Vec<f64>) -> Self {
        DenseVector { values }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Overwrite entry at `index`
    pub fn set(&mut self, index: usize, value: f64) {
        self.values[index] = value;
    }

    /// Add `delta` to entry at `index`
    pub fn add_at(&mut self, index: usize, delta: f64) {
        self.values[index] += delta;
    }

    /// Broadcast `value` into every entry
    pub fn fill(&mut self, value: f64) {
        self.values.iter_mut().for_each(|v| *v = value);
    }

    /// Raw values
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate entries in order
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.values.iter()
    }

    /// Element-wise sum
    pub fn ebe_add(&self, other: &DenseVector) -> DenseVector {
        self.zip_with(other, |a, b| a + b)
    }

    /// Add a scalar to every entry
    pub fn add_scalar(&self, value: f64) -> DenseVector {
        DenseVector {
            values: self.values.iter().map(|v| v + value).collect(),
        }
    }

    /// Element-wise product
    pub fn ebe_multiply(&self, other: &DenseVector) -> DenseVector {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise product, in place
    pub fn ebe_multiply_assign(&mut self, other: &DenseVector) {
        debug_assert_eq!(self.len(), other.len(), "Dimension mismatch");
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            *a *= b;
        }
    }

    /// Element-wise quotient, 0 wherever the divisor is 0
    pub fn ebe_divide(&self, other: &DenseVector) -> DenseVector {
        self.zip_with(other, safe_divide)
    }

    /// True when every entry is 0
    pub fn is_null_vector(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Number of non-zero entries
    pub fn nonzero_count(&self) -> usize {
        self.values.iter().filter(|v| **v != 0.0).count()
    }

    /// Indices of non-zero entries, ascending
    pub fn nonzero_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, _)| i)
    }

    /// Dot product
    pub fn dot(&self, other: &DenseVector) -> f64 {
        dot_product(&self.values, &other.values)
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        euclidean_norm(&self.values)
    }

    /// Cosine similarity, 0 if either vector has zero norm
    pub fn cosine(&self, other: &DenseVector) -> f64 {
        cosine_similarity(&self.values, &other.values)
    }

    fn zip_with(&self, other: &DenseVector, f: impl Fn(f64, f64) -> f64) -> DenseVector {
        debug_assert_eq!(self.len(), other.len(), "Dimension mismatch");
        DenseVector {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        DenseVector::from_vec(values)
    }
}
