use crate::tool::Tool;

pub const BUTTON_SIZE: u32 = 24;
pub const BUTTON_GAP: u32 = 8;
pub const BUTTON_MARGIN: u32 = 4;

/// The fixed set of toolbar controls. Buttons are constructed from this
/// enum by `Toolbar::new`; each kind knows its own label, behavior and
/// whether it is a toggle, so no generic construction machinery is
/// needed anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Pen,
    Eraser,
    Reset,
    Info,
}

impl ButtonKind {
    /// The tool a toggle button stands for; push buttons carry none.
    pub fn tool(self) -> Option<Tool> {
        match self {
            ButtonKind::Pen => Some(Tool::Pen),
            ButtonKind::Eraser => Some(Tool::Eraser),
            ButtonKind::Reset | ButtonKind::Info => None,
        }
    }

    pub fn is_toggle(self) -> bool {
        self.tool().is_some()
    }

    pub fn label(self) -> &'static str {
        match self {
            ButtonKind::Pen => "P",
            ButtonKind::Eraser => "E",
            ButtonKind::Reset => "R",
            ButtonKind::Info => "i",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub kind: ButtonKind,
    pub rect: Rect,
}

fn make_button(kind: ButtonKind, x: u32) -> Button {
    Button {
        kind,
        rect: Rect {
            x,
            y: BUTTON_MARGIN,
            w: BUTTON_SIZE,
            h: BUTTON_SIZE,
        },
    }
}

/// Toolbar layout: Pen and Eraser toggles, Reset, a stretch of empty
/// space, then a separator and the Info button flush right.
#[derive(Debug)]
pub struct Toolbar {
    buttons: Vec<Button>,
    separator_x: u32,
}

impl Toolbar {
    pub fn new(width: u32) -> Self {
        let mut buttons = Vec::new();
        let mut x = BUTTON_GAP;
        for kind in [ButtonKind::Pen, ButtonKind::Eraser, ButtonKind::Reset] {
            buttons.push(make_button(kind, x));
            x += BUTTON_SIZE + BUTTON_GAP;
        }
        let info_x = width.saturating_sub(BUTTON_SIZE + BUTTON_GAP);
        buttons.push(make_button(ButtonKind::Info, info_x));
        Self {
            buttons,
            separator_x: info_x.saturating_sub(BUTTON_GAP),
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn separator_x(&self) -> u32 {
        self.separator_x
    }

    pub fn hit(&self, x: u32, y: u32) -> Option<ButtonKind> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains(x, y))
            .map(|button| button.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_appear_in_toolbar_order() {
        let toolbar = Toolbar::new(600);
        let kinds: Vec<ButtonKind> = toolbar.buttons().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ButtonKind::Pen,
                ButtonKind::Eraser,
                ButtonKind::Reset,
                ButtonKind::Info
            ]
        );
    }

    #[test]
    fn hit_testing_finds_buttons() {
        let toolbar = Toolbar::new(600);
        let pen = toolbar.buttons()[0].rect;
        assert_eq!(toolbar.hit(pen.x + 1, pen.y + 1), Some(ButtonKind::Pen));
        // Between buttons: nothing.
        assert_eq!(toolbar.hit(pen.x + pen.w + 1, pen.y + 1), None);
    }

    #[test]
    fn info_sits_flush_right() {
        let toolbar = Toolbar::new(600);
        let info = toolbar.buttons().last().unwrap();
        assert_eq!(info.kind, ButtonKind::Info);
        assert_eq!(info.rect.x, 600 - BUTTON_SIZE - BUTTON_GAP);
    }

    #[test]
    fn only_tool_buttons_are_toggles() {
        assert!(ButtonKind::Pen.is_toggle());
        assert!(ButtonKind::Eraser.is_toggle());
        assert!(!ButtonKind::Reset.is_toggle());
        assert!(!ButtonKind::Info.is_toggle());
    }
}
