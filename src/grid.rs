use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Redraw notification recorded by every mutating call.
/// Drained by the renderer so it can repaint only what changed
/// instead of rescanning the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChange {
    One { row: usize, col: usize },
    All,
}

/// The board: a fixed rows x cols array of alive/dead cells.
/// All cells start dead. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>,
    changes: Vec<CellChange>,
}

impl CellGrid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![false; cols]; rows],
            changes: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.set(row, col, true)
    }

    pub fn set_dead(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.set(row, col, false)
    }

    fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = alive;
        self.changes.push(CellChange::One { row, col });
        Ok(())
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Kills every cell. Total: cannot fail, regardless of prior state.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
        self.changes.push(CellChange::All);
    }

    /// Drains the pending redraw notifications accumulated since the
    /// last call. One entry per mutating call, in mutation order.
    pub fn take_changes(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_starts_dead() {
        let grid = CellGrid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        for row in 0..3 {
            for col in 0..4 {
                assert!(!grid.is_alive(row, col).unwrap());
            }
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(
            CellGrid::new(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            CellGrid::new(5, 0),
            Err(GridError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn set_alive_then_query() {
        let mut grid = CellGrid::new(3, 3).unwrap();
        grid.set_alive(1, 2).unwrap();
        assert!(grid.is_alive(1, 2).unwrap());
        grid.set_dead(1, 2).unwrap();
        assert!(!grid.is_alive(1, 2).unwrap());
    }

    #[test]
    fn set_alive_is_idempotent() {
        let mut grid = CellGrid::new(2, 2).unwrap();
        grid.set_alive(0, 0).unwrap();
        grid.set_alive(0, 0).unwrap();
        assert!(grid.is_alive(0, 0).unwrap());
        assert!(!grid.is_alive(0, 1).unwrap());
    }

    #[test]
    fn out_of_bounds_surfaces_error() {
        let mut grid = CellGrid::new(2, 2).unwrap();
        assert_eq!(
            grid.set_alive(2, 0),
            Err(GridError::OutOfBounds { row: 2, col: 0 })
        );
        assert_eq!(
            grid.is_alive(0, 2),
            Err(GridError::OutOfBounds { row: 0, col: 2 })
        );
    }

    #[test]
    fn reset_kills_everything() {
        let mut grid = CellGrid::new(4, 4).unwrap();
        grid.set_alive(0, 0).unwrap();
        grid.set_alive(3, 3).unwrap();
        grid.set_alive(1, 2).unwrap();
        grid.reset();
        for row in 0..4 {
            for col in 0..4 {
                assert!(!grid.is_alive(row, col).unwrap());
            }
        }
    }

    #[test]
    fn mutations_record_changes() {
        let mut grid = CellGrid::new(2, 2).unwrap();
        grid.set_alive(0, 1).unwrap();
        grid.reset();
        assert_eq!(
            grid.take_changes(),
            vec![CellChange::One { row: 0, col: 1 }, CellChange::All]
        );
        // Drained: nothing left.
        assert!(grid.take_changes().is_empty());
    }
}
