/// Everything a key press can ask for, after the keymap has resolved it
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Cursor movement in the editor
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    // Text input; in the search panel these edit the query
    InsertChar(char),
    Newline,
    DeleteBackward,
    DeleteForward,
    // Lists: tree rows and search results
    SelectPrev,
    SelectNext,
    Expand,
    Collapse,
    Activate,
    // Global
    SaveFile,
    ActivateSearch,
    CancelSearch,
    CycleFocus,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_variants() {
        assert_eq!(Command::MoveLeft, Command::MoveLeft);
        assert_ne!(Command::SelectNext, Command::SelectPrev);
        let cmd = Command::InsertChar('a');
        if let Command::InsertChar(c) = cmd {
            assert_eq!(c, 'a');
        } else {
            panic!("Expected InsertChar");
        }
    }
}
