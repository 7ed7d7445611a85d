use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::editor::{EditorShell, STATUS_HINT};
use crate::font;
use crate::grid::CellChange;
use crate::resources::{Rgba, Theme};
use crate::tool::Tool;
use crate::toolbar::{Rect, Toolbar, BUTTON_MARGIN};

pub const CELL_SIZE: u32 = 10;
pub const TOOLBAR_HEIGHT: u32 = 32;
pub const STATUS_HEIGHT: u32 = 24;

const TEXT_PADDING: u32 = 8;
const OVERLAY_MARGIN: u32 = 60;
const OVERLAY_PADDING: u32 = 16;

/// Fixed pixel geometry of the editor canvas: toolbar strip on top,
/// the cell board in the middle, status bar at the bottom. The buffer
/// never changes size; window resizes only rescale the surface.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    rows: usize,
    cols: usize,
}

impl Layout {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn width(&self) -> u32 {
        self.cols as u32 * CELL_SIZE
    }

    pub fn height(&self) -> u32 {
        TOOLBAR_HEIGHT + self.rows as u32 * CELL_SIZE + STATUS_HEIGHT
    }

    pub fn grid_top(&self) -> u32 {
        TOOLBAR_HEIGHT
    }

    pub fn status_top(&self) -> u32 {
        TOOLBAR_HEIGHT + self.rows as u32 * CELL_SIZE
    }

    pub fn in_toolbar(&self, y: u32) -> bool {
        y < TOOLBAR_HEIGHT
    }

    /// Maps a buffer pixel to the cell under it, if any.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        if y < self.grid_top() || y >= self.status_top() {
            return None;
        }
        let col = (x / CELL_SIZE) as usize;
        let row = ((y - self.grid_top()) / CELL_SIZE) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row, col))
    }

    /// Top-left buffer pixel of a cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (
            col as u32 * CELL_SIZE,
            self.grid_top() + row as u32 * CELL_SIZE,
        )
    }
}

pub struct Renderer {
    pixels: Pixels,
    layout: Layout,
    theme: Theme,
    full_redraw: bool,
    overlay_open: bool,
}

impl Renderer {
    pub fn new(window: &Window, layout: Layout, theme: Theme) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(layout.width(), layout.height(), surface_texture)?;
        Ok(Self {
            pixels,
            layout,
            theme,
            full_redraw: true,
            overlay_open: false,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("failed to resize surface: {err}");
        }
        self.full_redraw = true;
    }

    /// Forces the next draw to repaint everything (expose events).
    pub fn request_full_redraw(&mut self) {
        self.full_redraw = true;
    }

    /// Translates a window-space cursor position into buffer pixels.
    /// None when the cursor is outside the scaled canvas.
    pub fn window_to_buffer(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        self.pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()
            .map(|(px, py)| (px as u32, py as u32))
    }

    pub fn draw(&mut self, shell: &mut EditorShell) {
        let changes = shell.grid_mut().take_changes();
        if shell.info_open() != self.overlay_open {
            // Opening or closing the overlay invalidates whatever was
            // underneath it.
            self.overlay_open = shell.info_open();
            self.full_redraw = true;
        }
        if changes.iter().any(|c| matches!(c, CellChange::All)) {
            self.full_redraw = true;
        }

        let layout = self.layout;
        let frame = self.pixels.frame_mut();
        let theme = &self.theme;

        if self.full_redraw {
            fill_rect(
                frame,
                layout,
                Rect {
                    x: 0,
                    y: 0,
                    w: layout.width(),
                    h: layout.height(),
                },
                theme.background,
            );
            draw_grid_lines(frame, layout, theme);
            for row in 0..shell.grid().rows() {
                for col in 0..shell.grid().cols() {
                    let alive = shell.grid().is_alive(row, col).unwrap_or(false);
                    draw_cell(frame, layout, theme, row, col, alive);
                }
            }
            self.full_redraw = false;
        } else {
            for change in &changes {
                if let CellChange::One { row, col } = *change {
                    let alive = shell.grid().is_alive(row, col).unwrap_or(false);
                    draw_cell(frame, layout, theme, row, col, alive);
                }
            }
        }

        draw_toolbar(frame, layout, theme, shell.toolbar(), shell.tools().current());
        draw_status_bar(frame, layout, theme, &shell.status_line());
        if shell.info_open() {
            draw_overlay(frame, layout, theme, shell.credit_text());
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

fn fill_rect(frame: &mut [u8], layout: Layout, rect: Rect, color: Rgba) {
    let width = layout.width();
    let height = layout.height();
    for y in rect.y..(rect.y + rect.h).min(height) {
        for x in rect.x..(rect.x + rect.w).min(width) {
            let idx = ((y * width + x) * 4) as usize;
            frame[idx..idx + 4].copy_from_slice(&color);
        }
    }
}

/// Cells own their top and left border line; the interior starts one
/// pixel in, so repainting a single cell never disturbs the lattice.
fn draw_cell(frame: &mut [u8], layout: Layout, theme: &Theme, row: usize, col: usize, alive: bool) {
    let (x, y) = layout.cell_origin(row, col);
    let color = if alive { theme.cell_selected } else { theme.cell };
    fill_rect(
        frame,
        layout,
        Rect {
            x: x + 1,
            y: y + 1,
            w: CELL_SIZE - 1,
            h: CELL_SIZE - 1,
        },
        color,
    );
}

fn draw_grid_lines(frame: &mut [u8], layout: Layout, theme: &Theme) {
    let width = layout.width();
    for col in 0..(width / CELL_SIZE) {
        let x = col * CELL_SIZE;
        fill_rect(
            frame,
            layout,
            Rect {
                x,
                y: layout.grid_top(),
                w: 1,
                h: layout.status_top() - layout.grid_top(),
            },
            theme.grid_line,
        );
    }
    for row in 0..((layout.status_top() - layout.grid_top()) / CELL_SIZE) {
        let y = layout.grid_top() + row * CELL_SIZE;
        fill_rect(
            frame,
            layout,
            Rect {
                x: 0,
                y,
                w: width,
                h: 1,
            },
            theme.grid_line,
        );
    }
}

fn draw_toolbar(
    frame: &mut [u8],
    layout: Layout,
    theme: &Theme,
    toolbar: &Toolbar,
    active_tool: Option<Tool>,
) {
    fill_rect(
        frame,
        layout,
        Rect {
            x: 0,
            y: 0,
            w: layout.width(),
            h: TOOLBAR_HEIGHT,
        },
        theme.toolbar_background,
    );

    let renderer = font::get_font();
    let (char_w, char_h) = renderer.char_dimensions(1.0);
    for button in toolbar.buttons() {
        let pressed = button.kind.tool().is_some() && button.kind.tool() == active_tool;
        let color = if pressed {
            theme.button_pressed
        } else {
            theme.button
        };
        fill_rect(frame, layout, button.rect, color);
        let text_x = button.rect.x + (button.rect.w.saturating_sub(char_w as u32)) / 2;
        let baseline = text_baseline(button.rect.y, button.rect.h, char_h);
        renderer.draw_text(
            frame,
            button.kind.label(),
            text_x as usize,
            baseline as usize,
            theme.button_text,
            layout.width() as usize,
            1.0,
        );
    }

    fill_rect(
        frame,
        layout,
        Rect {
            x: toolbar.separator_x(),
            y: BUTTON_MARGIN,
            w: 1,
            h: TOOLBAR_HEIGHT - 2 * BUTTON_MARGIN,
        },
        theme.grid_line,
    );
}

fn draw_status_bar(frame: &mut [u8], layout: Layout, theme: &Theme, status_line: &str) {
    fill_rect(
        frame,
        layout,
        Rect {
            x: 0,
            y: layout.status_top(),
            w: layout.width(),
            h: STATUS_HEIGHT,
        },
        theme.toolbar_background,
    );

    let renderer = font::get_font();
    let (_, char_h) = renderer.char_dimensions(1.0);
    let baseline = text_baseline(layout.status_top(), STATUS_HEIGHT, char_h);
    renderer.draw_text(
        frame,
        status_line,
        TEXT_PADDING as usize,
        baseline as usize,
        theme.status_text,
        layout.width() as usize,
        1.0,
    );
    let hint_width = renderer.text_width(STATUS_HINT, 1.0) as u32;
    let hint_x = layout.width().saturating_sub(hint_width + TEXT_PADDING);
    renderer.draw_text(
        frame,
        STATUS_HINT,
        hint_x as usize,
        baseline as usize,
        theme.status_text,
        layout.width() as usize,
        1.0,
    );
}

fn draw_overlay(frame: &mut [u8], layout: Layout, theme: &Theme, text: &str) {
    let renderer = font::get_font();
    let (char_w, _) = renderer.char_dimensions(1.0);
    let line_height = renderer.line_height(1.0) as u32;

    let panel_w = layout.width().saturating_sub(2 * OVERLAY_MARGIN);
    let max_chars = ((panel_w - 2 * OVERLAY_PADDING) / char_w as u32).max(1) as usize;
    let lines = wrap_text(text, max_chars);
    let panel_h = lines.len() as u32 * line_height + 2 * OVERLAY_PADDING;

    let grid_h = layout.status_top() - layout.grid_top();
    let panel_x = OVERLAY_MARGIN;
    let panel_y = layout.grid_top() + grid_h.saturating_sub(panel_h) / 2;
    fill_rect(
        frame,
        layout,
        Rect {
            x: panel_x,
            y: panel_y,
            w: panel_w,
            h: panel_h,
        },
        theme.overlay_background,
    );

    for (i, line) in lines.iter().enumerate() {
        let baseline = panel_y + OVERLAY_PADDING + (i as u32 + 1) * line_height;
        renderer.draw_text(
            frame,
            line,
            (panel_x + OVERLAY_PADDING) as usize,
            baseline as usize,
            theme.overlay_text,
            layout.width() as usize,
            1.0,
        );
    }
}

/// Baseline for text vertically centered in a box of height `box_h`.
fn text_baseline(box_y: u32, box_h: u32, char_h: usize) -> u32 {
    box_y + (box_h + char_h as u32) / 2 - char_h as u32 / 5
}

/// Greedy word wrap against a monospace column limit. Words longer
/// than the limit are hard-split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > max_chars {
                    lines.push(rest.drain(..max_chars).collect());
                }
                current = rest.into_iter().collect();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_dimensions() {
        let layout = Layout::new(60, 60);
        assert_eq!(layout.width(), 600);
        assert_eq!(
            layout.height(),
            TOOLBAR_HEIGHT + 600 + STATUS_HEIGHT
        );
    }

    #[test]
    fn cell_at_maps_pixels_to_cells() {
        let layout = Layout::new(60, 60);
        assert_eq!(layout.cell_at(0, layout.grid_top()), Some((0, 0)));
        assert_eq!(
            layout.cell_at(CELL_SIZE, layout.grid_top() + CELL_SIZE),
            Some((1, 1))
        );
        assert_eq!(
            layout.cell_at(5, layout.status_top() - 1),
            Some((59, 0))
        );
    }

    #[test]
    fn toolbar_and_status_are_not_cells() {
        let layout = Layout::new(60, 60);
        assert_eq!(layout.cell_at(5, 0), None);
        assert_eq!(layout.cell_at(5, TOOLBAR_HEIGHT - 1), None);
        assert_eq!(layout.cell_at(5, layout.status_top()), None);
        assert!(layout.in_toolbar(0));
        assert!(!layout.in_toolbar(TOOLBAR_HEIGHT));
    }

    #[test]
    fn cell_origin_inverts_cell_at() {
        let layout = Layout::new(60, 60);
        let (x, y) = layout.cell_origin(7, 11);
        assert_eq!(layout.cell_at(x, y), Some((7, 11)));
        assert_eq!(
            layout.cell_at(x + CELL_SIZE - 1, y + CELL_SIZE - 1),
            Some((7, 11))
        );
    }

    #[test]
    fn wrap_respects_column_limit() {
        let lines = wrap_text("alpha beta gamma", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);
        for line in &lines {
            assert!(line.chars().count() <= 11);
        }
    }

    #[test]
    fn wrap_splits_oversized_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_keeps_blank_lines() {
        let lines = wrap_text("one\n\ntwo", 10);
        assert_eq!(lines, vec!["one", "", "two"]);
    }
}
