//! Multi-lead sample storage.

use thiserror::Error;

/// Column length does not match the row count fixed by the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("column {column} has {actual} samples, expected {expected}")]
pub struct ColumnLengthError {
    /// Zero-based index the column would have occupied.
    pub column: usize,
    /// Row count fixed by the first column.
    pub expected: usize,
    /// Length of the rejected column.
    pub actual: usize,
}

/// Samples × leads matrix of raw digit values.
///
/// Stored column-major: each lead's samples are contiguous. The first column
/// pushed fixes the row count, and every later column must match it exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleMatrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl SampleMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of samples per lead.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of leads.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_empty(&self) -> bool {
        self.ncols == 0
    }

    /// Append one lead column.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnLengthError`] when a column after the first has a
    /// different length. The matrix is left unchanged in that case.
    pub fn push_column(&mut self, column: Vec<f64>) -> Result<(), ColumnLengthError> {
        if self.ncols == 0 {
            self.nrows = column.len();
        } else if column.len() != self.nrows {
            return Err(ColumnLengthError {
                column: self.ncols,
                expected: self.nrows,
                actual: column.len(),
            });
        }
        self.data.extend(column);
        self.ncols += 1;
        Ok(())
    }

    /// Samples for one lead.
    pub fn column(&self, index: usize) -> Option<&[f64]> {
        if index >= self.ncols {
            return None;
        }
        let start = index * self.nrows;
        self.data.get(start..start + self.nrows)
    }

    /// Iterate lead columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.ncols).filter_map(|index| self.column(index))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.data.get(col * self.nrows + row).copied()
    }

    /// One sample instant across all leads.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.nrows {
            return None;
        }
        Some(
            (0..self.ncols)
                .map(|col| self.data[col * self.nrows + row])
                .collect(),
        )
    }
}
