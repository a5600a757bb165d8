/// Which pane receives key presses that are not global bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Editor,
    Search,
}

impl Focus {
    /// Next pane for focus cycling; search is only entered through its own binding
    pub fn next(self) -> Self {
        match self {
            Focus::Tree => Focus::Editor,
            Focus::Editor => Focus::Tree,
            Focus::Search => Focus::Search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Tree.next(), Focus::Editor);
        assert_eq!(Focus::Editor.next(), Focus::Tree);
        assert_eq!(Focus::Search.next(), Focus::Search);
    }
}
