use bytemuck::Pod;

use crate::error::{Result, SolverError};

/// Upper bound on the number of cells of a dynamic-programming table.
pub const MAX_TABLE_CELLS: usize = 1 << 27;

/// Row-major 2D matrix over a flat Vec.
#[derive(Debug, Clone)]
pub struct Matrix2<T> {
    pub data: Vec<T>,
    pub rows: usize,
    pub cols: usize,
}

impl<T: Clone> Matrix2<T> {
    pub fn new(rows: usize, cols: usize, init: T) -> Self {
        Self {
            data: vec![init; rows * cols],
            rows,
            cols,
        }
    }

    /// Like `new`, but refuses tables above `MAX_TABLE_CELLS`.
    pub fn try_new(rows: usize, cols: usize, init: T) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_TABLE_CELLS => Ok(Self::new(rows, cols, init)),
            _ => Err(SolverError::TableTooLarge { rows, cols }),
        }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }
}

// Byte-wise comparison, so float tables compare by bit pattern.
impl<T: Pod> PartialEq for Matrix2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && bytemuck::cast_slice::<T, u8>(&self.data)
                == bytemuck::cast_slice::<T, u8>(&other.data)
    }
}
