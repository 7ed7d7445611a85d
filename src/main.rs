mod editor;
mod font;
mod generation;
mod graphics;
mod grid;
mod input;
mod paint;
mod resources;
mod tool;
mod toolbar;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::editor::{EditorShell, EscapeOutcome};
use crate::generation::GenerationCounter;
use crate::graphics::Renderer;
use crate::grid::CellGrid;
use crate::input::{EditorAction, InputHandler};
use crate::paint::PaintController;
use crate::resources::Resources;
use crate::tool::ToolState;

const GRID_ROWS: usize = 60;
const GRID_COLS: usize = 60;
const TITLE: &str = "Conway's Game of Life";

enum Applied {
    Nothing,
    Redraw,
    Exit,
}

fn apply_action(action: EditorAction, shell: &mut EditorShell, renderer: &Renderer) -> Applied {
    match action {
        EditorAction::None => Applied::Nothing,
        EditorAction::PointerDown { x, y } => match renderer.window_to_buffer(x, y) {
            Some((bx, by)) => match shell.pointer_down(bx, by) {
                Ok(true) => Applied::Redraw,
                Ok(false) => Applied::Nothing,
                Err(err) => {
                    // Hit-tested coordinates are always in bounds; this
                    // is a caller defect worth shouting about.
                    log::error!("paint rejected: {err}");
                    Applied::Nothing
                }
            },
            None => Applied::Nothing,
        },
        EditorAction::PointerMoved { x, y } => match renderer.window_to_buffer(x, y) {
            Some((bx, by)) => match shell.pointer_moved(bx, by) {
                Ok(true) => Applied::Redraw,
                Ok(false) => Applied::Nothing,
                Err(err) => {
                    log::error!("paint rejected: {err}");
                    Applied::Nothing
                }
            },
            None => Applied::Nothing,
        },
        EditorAction::PointerUp => {
            shell.pointer_up();
            Applied::Nothing
        }
        EditorAction::AdvanceGeneration => {
            shell.advance_generation();
            Applied::Redraw
        }
        EditorAction::Escape => match shell.escape() {
            EscapeOutcome::Redraw => Applied::Redraw,
            EscapeOutcome::Exit => Applied::Exit,
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let resources = Resources::load();
    let grid = CellGrid::new(GRID_ROWS, GRID_COLS)?;
    let mut shell = EditorShell::new(
        grid,
        ToolState::new(),
        PaintController::new(),
        GenerationCounter::new(),
        resources.credit_text.clone(),
    );
    let layout = shell.layout();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(layout.width(), layout.height()))
        .with_resizable(true)
        .build(&event_loop)?;

    let mut renderer = Renderer::new(&window, layout, resources.theme.clone())?;
    let mut input_handler = InputHandler::new();
    let mut redraw_requested = true;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => {
                let action = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    WindowEvent::Resized(size) => {
                        renderer.resize(size.width, size.height);
                        redraw_requested = true;
                        return;
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        input_handler.handle_key(input.state, input.virtual_keycode)
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input_handler.handle_cursor_moved(position.x, position.y)
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        input_handler.handle_mouse_button(state, button)
                    }
                    _ => return,
                };
                match apply_action(action, &mut shell, &renderer) {
                    Applied::Nothing => {}
                    Applied::Redraw => redraw_requested = true,
                    Applied::Exit => *control_flow = ControlFlow::Exit,
                }
            }
            Event::RedrawRequested(_) => {
                // Expose event: the OS lost our frame, repaint it all.
                renderer.request_full_redraw();
                redraw_requested = true;
            }
            Event::MainEventsCleared | Event::RedrawEventsCleared => {
                if redraw_requested {
                    renderer.draw(&mut shell);
                    if let Err(err) = renderer.present() {
                        log::error!("render error: {err}");
                        *control_flow = ControlFlow::Exit;
                    }
                    redraw_requested = false;
                }
            }
            _ => {}
        }
    });
}
