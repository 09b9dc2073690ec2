use crate::tui::command::Command;
use crate::tui::element::Element;
use crate::tui::subscription::Subscription;
use crate::tui::theme::Theme;

/// Message-driven application contract: the view is a pure function of
/// state, and state changes only through update().
pub trait App {
    /// Boot configuration handed to init() by the caller
    type Flags;
    type State;
    type Msg: Clone + Send + 'static;

    fn init(flags: Self::Flags) -> (Self::State, Command);
    fn update(state: &mut Self::State, msg: Self::Msg) -> Command;
    fn view(state: &Self::State, theme: &Theme) -> Element<Self::Msg>;
    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;
    fn title() -> &'static str;
}
