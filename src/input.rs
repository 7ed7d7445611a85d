use winit::event::{ElementState, MouseButton, VirtualKeyCode};

/// Editor commands distilled from raw window events. Pointer positions
/// are in window space; the caller translates them to buffer pixels
/// before handing them to the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    None,
    PointerDown { x: f64, y: f64 },
    PointerMoved { x: f64, y: f64 },
    PointerUp,
    AdvanceGeneration,
    Escape,
}

/// Tracks the little bit of input state winit does not hand us per
/// event: the last cursor position and whether the left button is held.
#[derive(Debug, Default)]
pub struct InputHandler {
    cursor: Option<(f64, f64)>,
    left_held: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) -> EditorAction {
        self.cursor = Some((x, y));
        if self.left_held {
            EditorAction::PointerMoved { x, y }
        } else {
            EditorAction::None
        }
    }

    pub fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) -> EditorAction {
        if button != MouseButton::Left {
            return EditorAction::None;
        }
        match state {
            ElementState::Pressed => {
                self.left_held = true;
                match self.cursor {
                    Some((x, y)) => EditorAction::PointerDown { x, y },
                    None => EditorAction::None,
                }
            }
            ElementState::Released => {
                self.left_held = false;
                EditorAction::PointerUp
            }
        }
    }

    /// Space advances the generation; held space auto-repeats through
    /// the platform's key repeat, so each repeat press advances again.
    pub fn handle_key(
        &mut self,
        state: ElementState,
        keycode: Option<VirtualKeyCode>,
    ) -> EditorAction {
        if state != ElementState::Pressed {
            return EditorAction::None;
        }
        match keycode {
            Some(VirtualKeyCode::Space) => EditorAction::AdvanceGeneration,
            Some(VirtualKeyCode::Escape) => EditorAction::Escape,
            _ => EditorAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_uses_last_cursor_position() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_mouse_button(ElementState::Pressed, MouseButton::Left),
            EditorAction::None
        );
        input.handle_cursor_moved(10.0, 20.0);
        assert_eq!(
            input.handle_mouse_button(ElementState::Pressed, MouseButton::Left),
            EditorAction::PointerDown { x: 10.0, y: 20.0 }
        );
    }

    #[test]
    fn motion_only_reports_while_held() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_cursor_moved(1.0, 1.0), EditorAction::None);
        input.handle_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert_eq!(
            input.handle_cursor_moved(2.0, 2.0),
            EditorAction::PointerMoved { x: 2.0, y: 2.0 }
        );
        assert_eq!(
            input.handle_mouse_button(ElementState::Released, MouseButton::Left),
            EditorAction::PointerUp
        );
        assert_eq!(input.handle_cursor_moved(3.0, 3.0), EditorAction::None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputHandler::new();
        input.handle_cursor_moved(5.0, 5.0);
        assert_eq!(
            input.handle_mouse_button(ElementState::Pressed, MouseButton::Right),
            EditorAction::None
        );
    }

    #[test]
    fn space_advances_and_escape_escapes() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_key(ElementState::Pressed, Some(VirtualKeyCode::Space)),
            EditorAction::AdvanceGeneration
        );
        assert_eq!(
            input.handle_key(ElementState::Released, Some(VirtualKeyCode::Space)),
            EditorAction::None
        );
        assert_eq!(
            input.handle_key(ElementState::Pressed, Some(VirtualKeyCode::Escape)),
            EditorAction::Escape
        );
        assert_eq!(
            input.handle_key(ElementState::Pressed, Some(VirtualKeyCode::A)),
            EditorAction::None
        );
    }
}
