use crate::grid::{CellGrid, GridError};
use crate::tool::{Tool, ToolState};

/// Translates pointer gestures on cells into grid mutations, gated by
/// the active tool. A press begins a drag; every cell the pointer
/// enters while the drag is live gets painted with the same stroke, so
/// a sweep from cell A to cell B touches everything in between instead
/// of only the cell the press landed on.
#[derive(Debug, Default)]
pub struct PaintController {
    dragging: bool,
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(
        &mut self,
        grid: &mut CellGrid,
        tools: &ToolState,
        row: usize,
        col: usize,
    ) -> Result<(), GridError> {
        self.dragging = true;
        self.paint(grid, tools, row, col)
    }

    /// Called when the pointer crosses into a new cell. Paints only
    /// while a drag begun by `pointer_down` is still live.
    pub fn drag_enter(
        &mut self,
        grid: &mut CellGrid,
        tools: &ToolState,
        row: usize,
        col: usize,
    ) -> Result<(), GridError> {
        if !self.dragging {
            return Ok(());
        }
        self.paint(grid, tools, row, col)
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn paint(
        &self,
        grid: &mut CellGrid,
        tools: &ToolState,
        row: usize,
        col: usize,
    ) -> Result<(), GridError> {
        match tools.current() {
            None => Ok(()),
            Some(Tool::Pen) => grid.set_alive(row, col),
            Some(Tool::Eraser) => grid.set_dead(row, col),
        }
    }
}
