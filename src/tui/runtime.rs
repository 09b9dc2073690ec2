use std::collections::HashMap;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::Frame;

use crate::tui::app::App;
use crate::tui::command::Command;
use crate::tui::element::FocusId;
use crate::tui::renderer::{FocusRegistry, InteractionRegistry, Renderer};
use crate::tui::subscription::Subscription;
use crate::tui::theme::Theme;

/// Drives one app: routes events into update(), executes the returned
/// commands, and renders view(). Handlers return Ok(false) when the app
/// asked to quit.
pub struct Runtime<A: App> {
    state: A::State,
    theme: Theme,
    registry: InteractionRegistry<A::Msg>,
    focus_registry: FocusRegistry<A::Msg>,
    focused_id: Option<FocusId>,
    key_bindings: HashMap<KeyCode, A::Msg>,
}

impl<A: App> Runtime<A> {
    pub fn new(flags: A::Flags, theme: Theme) -> Self {
        let (state, init_command) = A::init(flags);

        let mut runtime = Self {
            state,
            theme,
            registry: InteractionRegistry::new(),
            focus_registry: FocusRegistry::new(),
            focused_id: None,
            key_bindings: HashMap::new(),
        };

        runtime.refresh_subscriptions();
        let _ = runtime.execute_command(init_command);

        runtime
    }

    pub fn state(&self) -> &A::State {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn focused_id(&self) -> Option<&FocusId> {
        self.focused_id.as_ref()
    }

    /// Current keyboard bindings with their descriptions
    pub fn key_bindings(&self) -> Vec<(KeyCode, String)> {
        A::subscriptions(&self.state)
            .into_iter()
            .map(|sub| match sub {
                Subscription::Keyboard {
                    key, description, ..
                } => (key, description),
            })
            .collect()
    }

    fn refresh_subscriptions(&mut self) {
        self.key_bindings.clear();
        for sub in A::subscriptions(&self.state) {
            match sub {
                Subscription::Keyboard { key, msg, .. } => {
                    self.key_bindings.insert(key, msg);
                }
            }
        }
    }

    fn dispatch(&mut self, msg: A::Msg) -> Result<bool> {
        let command = A::update(&mut self.state, msg);
        self.refresh_subscriptions();
        self.execute_command(command)
    }

    fn execute_command(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::None => Ok(true),

            Command::Batch(commands) => {
                for command in commands {
                    if !self.execute_command(command)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }

            Command::SetFocus(id) => {
                debug!("focus set to {:?}", id);
                self.focused_id = Some(id);
                Ok(true)
            }

            Command::ClearFocus => {
                self.focused_id = None;
                Ok(true)
            }

            Command::Quit => Ok(false),
        }
    }

    /// Handle a keyboard event. Focused elements see keys first, then the
    /// app's subscriptions.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Tab => {
                self.focus_next();
                return Ok(true);
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return Ok(true);
            }
            KeyCode::Esc if self.focused_id.is_some() => {
                self.focused_id = None;
                return Ok(true);
            }
            _ => {}
        }

        let focused_msg = self
            .focused_id
            .as_ref()
            .and_then(|id| self.focus_registry.find(id))
            .and_then(|info| (info.on_key)(key_event.code));
        if let Some(msg) = focused_msg {
            return self.dispatch(msg);
        }

        if let Some(msg) = self.key_bindings.get(&key_event.code).cloned() {
            return self.dispatch(msg);
        }

        Ok(true)
    }

    /// Handle a mouse event. Left click focuses the element under the
    /// cursor (or clears focus) and fires its click message.
    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<bool> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            let (x, y) = (mouse_event.column, mouse_event.row);

            match self.focus_registry.find_at_position(x, y) {
                Some(id) => {
                    if self.focused_id.as_ref() != Some(&id) {
                        debug!("focus set to {:?} by click", id);
                        self.focused_id = Some(id);
                    }
                }
                None => {
                    self.focused_id = None;
                }
            }

            if let Some(msg) = self.registry.find_click(x, y) {
                return self.dispatch(msg);
            }
        }

        Ok(true)
    }

    /// Focus the next element (Tab)
    pub fn focus_next(&mut self) {
        let ids = self.focus_registry.ids();
        if ids.is_empty() {
            return;
        }

        let next = match &self.focused_id {
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(pos) => ids[(pos + 1) % ids.len()].clone(),
                None => ids[0].clone(),
            },
            None => ids[0].clone(),
        };
        self.focused_id = Some(next);
    }

    /// Focus the previous element (Shift-Tab)
    pub fn focus_previous(&mut self) {
        let ids = self.focus_registry.ids();
        if ids.is_empty() {
            return;
        }

        let previous = match &self.focused_id {
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(0) => ids[ids.len() - 1].clone(),
                Some(pos) => ids[pos - 1].clone(),
                None => ids[0].clone(),
            },
            None => ids[ids.len() - 1].clone(),
        };
        self.focused_id = Some(previous);
    }

    /// Render the current view, rebuilding the interaction and focus
    /// registries for this frame
    pub fn render(&mut self, frame: &mut Frame) {
        self.registry.clear();
        self.focus_registry.clear();

        let view = A::view(&self.state, &self.theme);

        Renderer::render(
            frame,
            &self.theme,
            &mut self.registry,
            &mut self.focus_registry,
            self.focused_id.as_ref(),
            &view,
            frame.area(),
        );

        // Element removed from the tree while focused: drop the focus
        if let Some(focused_id) = &self.focused_id {
            if !self.focus_registry.contains(focused_id) {
                self.focused_id = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::element::Element;

    struct Counter;

    #[derive(Clone)]
    enum Msg {
        Increment,
        Quit,
    }

    #[derive(Default)]
    struct State {
        count: u32,
    }

    impl App for Counter {
        type Flags = ();
        type State = State;
        type Msg = Msg;

        fn init(_flags: ()) -> (State, Command) {
            (State::default(), Command::None)
        }

        fn update(state: &mut State, msg: Msg) -> Command {
            match msg {
                Msg::Increment => {
                    state.count += 1;
                    Command::None
                }
                Msg::Quit => Command::Quit,
            }
        }

        fn view(state: &State, _theme: &Theme) -> Element<Msg> {
            Element::text(format!("count: {}", state.count))
        }

        fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
            vec![
                Subscription::keyboard(KeyCode::Char('i'), "Increment", Msg::Increment),
                Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
            ]
        }

        fn title() -> &'static str {
            "counter"
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, crossterm::event::KeyModifiers::NONE)
    }

    #[test]
    fn subscribed_keys_dispatch_messages() {
        let mut runtime = Runtime::<Counter>::new((), Theme::default());

        assert!(runtime.handle_key(press(KeyCode::Char('i'))).unwrap());
        assert!(runtime.handle_key(press(KeyCode::Char('i'))).unwrap());
        assert_eq!(runtime.state().count, 2);
    }

    #[test]
    fn quit_command_stops_the_loop() {
        let mut runtime = Runtime::<Counter>::new((), Theme::default());

        assert!(!runtime.handle_key(press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut runtime = Runtime::<Counter>::new((), Theme::default());

        assert!(runtime.handle_key(press(KeyCode::Char('x'))).unwrap());
        assert_eq!(runtime.state().count, 0);
    }

    #[test]
    fn key_bindings_carry_descriptions() {
        let runtime = Runtime::<Counter>::new((), Theme::default());

        let bindings = runtime.key_bindings();
        assert_eq!(bindings.len(), 2);
        assert!(bindings
            .iter()
            .any(|(key, desc)| *key == KeyCode::Char('i') && desc == "Increment"));
    }
}
