use crossterm::event::KeyCode;
use ratatui::style::Color;

use crate::tui::element::{ColumnBuilder, FocusId, LayoutConstraint, RowBuilder};
use crate::tui::style::{Font, TitleStyle};
use crate::tui::{App, Command, Element, Subscription, Theme};

/// The single demo screen: a watermarked color block, a coordinate grid,
/// styled text, a toggle button, and a label row showing how style
/// modifiers compose.
pub struct Showcase;

/// Boot options from the command line
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    pub rows: u16,
    pub columns: u16,
    pub watermark: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            watermark: "stylegrid demo".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    ToggleAccent,
    Quit,
}

pub struct State {
    accent_on: bool,
    rows: u16,
    columns: u16,
    watermark: String,
}

impl State {
    pub fn accent_on(&self) -> bool {
        self.accent_on
    }

    /// Button accent is a pure function of the toggle flag
    pub fn accent_color(&self, theme: &Theme) -> Color {
        if self.accent_on { theme.red } else { theme.green }
    }
}

/// Small reusable caption label
pub fn caption_label<Msg>(text: impl Into<String>, theme: &Theme) -> Element<Msg> {
    Element::text(text)
        .font(Font::Caption)
        .foreground(theme.subtext1)
}

impl App for Showcase {
    type Flags = ShowcaseConfig;
    type State = State;
    type Msg = Msg;

    fn init(flags: ShowcaseConfig) -> (State, Command) {
        let state = State {
            accent_on: false,
            rows: flags.rows,
            columns: flags.columns,
            watermark: flags.watermark,
        };
        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command {
        match msg {
            Msg::ToggleAccent => {
                state.accent_on = !state.accent_on;
                Command::None
            }
            Msg::Quit => Command::Quit,
        }
    }

    fn view(state: &State, theme: &Theme) -> Element<Msg> {
        let color_block = Element::text("")
            .background(theme.red)
            .watermark(state.watermark.clone());
        let block_row = RowBuilder::new()
            .add(color_block, LayoutConstraint::Length(24))
            .add(Element::None, LayoutConstraint::Fill(1))
            .spacing(0)
            .build();

        let grid = Element::grid(state.rows as usize, state.columns as usize, |row, col| {
            Element::text(format!("R{row} C{col}")).foreground(theme.subtext0)
        });

        let hello = Element::text("Hello, world!")
            .padding(1)
            .background(theme.red);
        let hello_row = RowBuilder::new()
            .add(hello, LayoutConstraint::Length(15))
            .add(Element::None, LayoutConstraint::Fill(1))
            .spacing(0)
            .build();

        let button = Element::button(FocusId::new("accent-button"), "Click me")
            .on_press(Msg::ToggleAccent)
            .build()
            .foreground(state.accent_color(theme));
        let button_row = RowBuilder::new()
            .add(button, LayoutConstraint::Length(14))
            .add(Element::None, LayoutConstraint::Fill(1))
            .spacing(0)
            .build();

        // The same heading treatment three ways: as a named modifier, via
        // the shorthand, and with a font override applied after it. The
        // row's own font flows into children that don't set one.
        let labels = RowBuilder::new()
            .add(
                Element::text("alpha").modifier(TitleStyle::new(theme)),
                LayoutConstraint::Length(9),
            )
            .add(
                Element::text("beta").title_style(theme),
                LayoutConstraint::Length(8),
            )
            .add(
                Element::text("gamma").title_style(theme).font(Font::Body),
                LayoutConstraint::Length(9),
            )
            .add(caption_label("delta", theme), LayoutConstraint::Length(5))
            .add(
                caption_label("epsilon", theme).foreground(theme.yellow),
                LayoutConstraint::Length(7),
            )
            .add(Element::text("zeta"), LayoutConstraint::Length(4))
            .add(Element::None, LayoutConstraint::Fill(1))
            .spacing(2)
            .build()
            .font(Font::Subheading);

        let footer = Element::text("t toggle accent · tab focus · enter press · q quit")
            .foreground(theme.overlay1);

        let body = ColumnBuilder::new()
            .add(block_row, LayoutConstraint::Length(5))
            .add(grid, LayoutConstraint::Length(state.rows))
            .add(hello_row, LayoutConstraint::Length(3))
            .add(button_row, LayoutConstraint::Length(3))
            .add(labels, LayoutConstraint::Length(5))
            .add(footer, LayoutConstraint::Length(1))
            .spacing(1)
            .build();

        Element::panel(Element::container(body).padding(1).build())
            .title("stylegrid showcase")
            .build()
    }

    fn subscriptions(_state: &State) -> Vec<Subscription<Msg>> {
        vec![
            Subscription::keyboard(
                KeyCode::Char('t'),
                "Toggle the button accent color",
                Msg::ToggleAccent,
            ),
            Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
        ]
    }

    fn title() -> &'static str {
        "stylegrid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_texts<Msg>(element: &Element<Msg>, out: &mut Vec<String>) {
        match element {
            Element::None => {}
            Element::Text { content } => out.push(content.clone()),
            Element::Styled { child, .. } => collect_texts(child, out),
            Element::Button { label, .. } => out.push(label.clone()),
            Element::Column { items, .. } | Element::Row { items, .. } => {
                for (_, child) in items {
                    collect_texts(child, out);
                }
            }
            Element::Container { child, .. } => collect_texts(child, out),
            Element::Panel { child, .. } => collect_texts(child, out),
            Element::Stack { layers } => {
                for layer in layers {
                    collect_texts(&layer.element, out);
                }
            }
        }
    }

    fn boot() -> State {
        Showcase::init(ShowcaseConfig::default()).0
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut state = boot();
        assert!(!state.accent_on());

        Showcase::update(&mut state, Msg::ToggleAccent);
        assert!(state.accent_on());

        Showcase::update(&mut state, Msg::ToggleAccent);
        assert!(!state.accent_on());
    }

    #[test]
    fn accent_color_follows_the_flag() {
        let theme = Theme::default();
        let mut state = boot();

        assert_eq!(state.accent_color(&theme), theme.green);
        Showcase::update(&mut state, Msg::ToggleAccent);
        assert_eq!(state.accent_color(&theme), theme.red);
    }

    #[test]
    fn quit_message_yields_quit_command() {
        let mut state = boot();
        assert_eq!(Showcase::update(&mut state, Msg::Quit), Command::Quit);
    }

    #[test]
    fn view_contains_every_screen_section() {
        let theme = Theme::default();
        let state = boot();

        let mut texts = Vec::new();
        collect_texts(&Showcase::view(&state, &theme), &mut texts);

        assert!(texts.iter().any(|t| t == "stylegrid demo"));
        assert!(texts.iter().any(|t| t == "Hello, world!"));
        assert!(texts.iter().any(|t| t == "Click me"));
        assert!(texts.iter().any(|t| t == "R0 C0"));
        assert!(texts.iter().any(|t| t == "R3 C3"));
        assert!(texts.iter().any(|t| t == "alpha"));
    }

    #[test]
    fn grid_size_follows_config() {
        let theme = Theme::default();
        let config = ShowcaseConfig {
            rows: 2,
            columns: 3,
            ..ShowcaseConfig::default()
        };
        let state = Showcase::init(config).0;

        let mut texts = Vec::new();
        collect_texts(&Showcase::view(&state, &theme), &mut texts);

        assert!(texts.iter().any(|t| t == "R1 C2"));
        assert!(!texts.iter().any(|t| t == "R2 C0"));
        assert!(!texts.iter().any(|t| t == "R0 C3"));
    }
}
