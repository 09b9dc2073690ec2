use crossterm::event::KeyCode;

/// Inputs an app wants to receive. Re-read by the runtime after every
/// update so bindings can depend on state.
pub enum Subscription<Msg> {
    /// Subscribe to a specific keyboard key
    Keyboard {
        key: KeyCode,
        msg: Msg,
        description: String,
    },
}

impl<Msg> Subscription<Msg> {
    /// Helper to create a keyboard subscription
    pub fn keyboard(key: KeyCode, description: impl Into<String>, msg: Msg) -> Self {
        Subscription::Keyboard {
            key,
            msg,
            description: description.into(),
        }
    }
}
