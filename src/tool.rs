/// The paint mode a toolbar toggle stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pen,
    Eraser,
}

/// Holds the active tool. Exclusive by construction: selecting one tool
/// implicitly deselects any other, and the idle state (no tool) is a
/// valid resting point, not an error.
#[derive(Debug, Default)]
pub struct ToolState {
    current: Option<Tool>,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, tool: Tool) {
        self.current = Some(tool);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<Tool> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_tool() {
        assert_eq!(ToolState::new().current(), None);
    }

    #[test]
    fn selection_is_exclusive() {
        let mut tools = ToolState::new();
        tools.select(Tool::Pen);
        assert_eq!(tools.current(), Some(Tool::Pen));
        tools.select(Tool::Eraser);
        assert_eq!(tools.current(), Some(Tool::Eraser));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut tools = ToolState::new();
        tools.select(Tool::Pen);
        tools.clear();
        assert_eq!(tools.current(), None);
    }
}
