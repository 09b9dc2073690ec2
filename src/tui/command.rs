use crate::tui::element::FocusId;

/// Side effects apps want performed, returned from update() and executed by
/// the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Do nothing
    None,

    /// Execute multiple commands in sequence
    Batch(Vec<Command>),

    /// Set focus to a specific element
    SetFocus(FocusId),

    /// Clear focus from all elements
    ClearFocus,

    /// Quit the application
    Quit,
}

impl Command {
    /// Helper to batch multiple commands
    pub fn batch(commands: Vec<Command>) -> Self {
        Command::Batch(commands)
    }

    /// Helper to set focus to an element
    pub fn set_focus(id: FocusId) -> Self {
        Command::SetFocus(id)
    }

    /// Helper to clear focus from all elements
    pub fn clear_focus() -> Self {
        Command::ClearFocus
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::None
    }
}
