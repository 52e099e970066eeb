//! LearningDataset — the growable (X, y) pair handed to the model.
//!
//! The column count is fixed by the first appended row; any later width
//! disagreement is a configuration error and aborts the build. Nothing is
//! ever truncated or padded to fit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("feature row has {got} columns, dataset is fixed at {expected}")]
    WidthMismatch { expected: usize, got: usize },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningDataset {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
    columns: Option<usize>,
}

impl LearningDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one (feature vector, label) pair.
    pub fn append(&mut self, features: Vec<f64>, label: f64) -> Result<(), DatasetError> {
        match self.columns {
            None => self.columns = Some(features.len()),
            Some(expected) if expected != features.len() => {
                return Err(DatasetError::WidthMismatch {
                    expected,
                    got: features.len(),
                });
            }
            Some(_) => {}
        }
        self.x.push(features);
        self.y.push(label);
        Ok(())
    }

    /// Append every row of `other`, preserving its order. Width rules are
    /// the same as for `append`, so merging partial datasets built with a
    /// different configuration fails rather than mixing shapes.
    pub fn merge(&mut self, other: LearningDataset) -> Result<(), DatasetError> {
        for (row, label) in other.x.into_iter().zip(other.y) {
            self.append(row, label)?;
        }
        Ok(())
    }

    /// Number of rows (m).
    pub fn rows(&self) -> usize {
        self.y.len()
    }

    /// Number of columns (n); 0 until the first row lands.
    pub fn columns(&self) -> usize {
        self.columns.unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn x(&self) -> &[Vec<f64>] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Hand the matrices to the model collaborator.
    pub fn into_xy(self) -> (Vec<Vec<f64>>, Vec<f64>) {
        (self.x, self.y)
    }

    /// Deterministic BLAKE3 fingerprint over all rows and labels, in order.
    /// Two builds over identical inputs and configuration hash identically.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (row, label) in self.x.iter().zip(&self.y) {
            for value in row {
                hasher.update(&value.to_le_bytes());
            }
            hasher.update(&label.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}
