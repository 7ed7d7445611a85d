use crate::generation::GenerationCounter;
use crate::graphics::Layout;
use crate::grid::{CellGrid, GridError};
use crate::paint::PaintController;
use crate::tool::{Tool, ToolState};
use crate::toolbar::{ButtonKind, Toolbar};

pub const STATUS_HINT: &str = "Press and Hold Space.";

/// What the shell wants done after an escape press.
#[derive(Debug, PartialEq, Eq)]
pub enum EscapeOutcome {
    /// The info overlay was open and has been closed.
    Redraw,
    /// Nothing consumed the key; shut the editor down.
    Exit,
}

/// Composes the grid, tool state, paint controller and generation
/// counter behind a pixel-coordinate interface: callers hand it buffer
/// positions and key commands, and it routes them to the toolbar, the
/// cells or the info overlay. Every collaborator is injected at
/// construction; the shell owns them for the editor's lifetime.
pub struct EditorShell {
    grid: CellGrid,
    tools: ToolState,
    paint: PaintController,
    generation: GenerationCounter,
    toolbar: Toolbar,
    layout: Layout,
    credit_text: String,
    info_open: bool,
}

impl EditorShell {
    pub fn new(
        grid: CellGrid,
        tools: ToolState,
        paint: PaintController,
        generation: GenerationCounter,
        credit_text: String,
    ) -> Self {
        let layout = Layout::new(grid.rows(), grid.cols());
        let toolbar = Toolbar::new(layout.width());
        Self {
            grid,
            tools,
            paint,
            generation,
            toolbar,
            layout,
            credit_text,
            info_open: false,
        }
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut CellGrid {
        &mut self.grid
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn generation(&self) -> &GenerationCounter {
        &self.generation
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn credit_text(&self) -> &str {
        &self.credit_text
    }

    pub fn status_line(&self) -> String {
        format!("Generation: {}", self.generation.value())
    }

    /// Pointer press at a buffer position. Returns whether anything
    /// visible changed.
    pub fn pointer_down(&mut self, x: u32, y: u32) -> Result<bool, GridError> {
        if self.info_open {
            // A click anywhere dismisses the overlay and is consumed.
            self.info_open = false;
            return Ok(true);
        }
        if self.layout.in_toolbar(y) {
            if let Some(kind) = self.toolbar.hit(x, y) {
                self.activate(kind);
                return Ok(true);
            }
            return Ok(false);
        }
        if let Some((row, col)) = self.layout.cell_at(x, y) {
            self.paint.pointer_down(&mut self.grid, &self.tools, row, col)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Pointer motion with the button held. Cells entered mid-drag get
    /// the same stroke as the cell the press landed on.
    pub fn pointer_moved(&mut self, x: u32, y: u32) -> Result<bool, GridError> {
        if self.info_open || !self.paint.is_dragging() {
            return Ok(false);
        }
        if let Some((row, col)) = self.layout.cell_at(x, y) {
            self.paint.drag_enter(&mut self.grid, &self.tools, row, col)?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn pointer_up(&mut self) {
        self.paint.pointer_up();
    }

    pub fn advance_generation(&mut self) {
        self.generation.advance();
        log::debug!("generation advanced to {}", self.generation.value());
    }

    pub fn escape(&mut self) -> EscapeOutcome {
        if self.info_open {
            self.info_open = false;
            EscapeOutcome::Redraw
        } else {
            EscapeOutcome::Exit
        }
    }

    fn activate(&mut self, kind: ButtonKind) {
        match kind {
            ButtonKind::Pen => self.toggle_tool(Tool::Pen),
            ButtonKind::Eraser => self.toggle_tool(Tool::Eraser),
            ButtonKind::Reset => {
                log::debug!("resetting the board");
                self.grid.reset();
            }
            ButtonKind::Info => self.info_open = true,
        }
    }

    /// Toggle-button behavior: picking the pressed tool again releases
    /// it, returning to the idle no-tool state.
    fn toggle_tool(&mut self, tool: Tool) {
        if self.tools.current() == Some(tool) {
            self.tools.clear();
        } else {
            self.tools.select(tool);
        }
    }
}
