use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use stylegrid::tui::apps::showcase::{Showcase, ShowcaseConfig};
use stylegrid::tui::{Runtime, Theme};

fn boot() -> (Runtime<Showcase>, Terminal<TestBackend>) {
    let runtime = Runtime::<Showcase>::new(ShowcaseConfig::default(), Theme::default());
    let terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    (runtime, terminal)
}

fn draw(runtime: &mut Runtime<Showcase>, terminal: &mut Terminal<TestBackend>) {
    terminal.draw(|frame| runtime.render(frame)).unwrap();
}

/// Rendered buffer as one string per screen row
fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

/// Top-left position of the first occurrence of `needle`
fn find_text(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
    screen_rows(terminal).iter().enumerate().find_map(|(y, row)| {
        row.find(needle)
            .map(|byte_idx| (row[..byte_idx].chars().count() as u16, y as u16))
    })
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn screen_shows_every_section() {
    let (mut runtime, mut terminal) = boot();
    draw(&mut runtime, &mut terminal);

    for needle in [
        "stylegrid demo",
        "R0 C0",
        "R3 C3",
        "Hello, world!",
        "Click me",
        "alpha",
        "beta",
        "gamma",
    ] {
        assert!(
            find_text(&terminal, needle).is_some(),
            "{needle:?} not rendered"
        );
    }
}

#[test]
fn grid_cells_read_left_to_right_top_to_bottom() {
    let (mut runtime, mut terminal) = boot();
    draw(&mut runtime, &mut terminal);

    let first = find_text(&terminal, "R0 C0").unwrap();
    let right = find_text(&terminal, "R0 C1").unwrap();
    let below = find_text(&terminal, "R1 C0").unwrap();

    assert_eq!(first.1, right.1);
    assert!(first.0 < right.0);
    assert_eq!(first.0, below.0);
    assert!(first.1 < below.1);
}

#[test]
fn tab_then_enter_presses_the_button() {
    let (mut runtime, mut terminal) = boot();
    draw(&mut runtime, &mut terminal);

    assert!(!runtime.state().accent_on());

    assert!(runtime.handle_key(press(KeyCode::Tab)).unwrap());
    assert!(runtime.handle_key(press(KeyCode::Enter)).unwrap());
    assert!(runtime.state().accent_on());

    // Esc blurs; Enter no longer reaches the button
    assert!(runtime.handle_key(press(KeyCode::Esc)).unwrap());
    assert!(runtime.handle_key(press(KeyCode::Enter)).unwrap());
    assert!(runtime.state().accent_on());
}

#[test]
fn clicking_the_button_toggles_the_accent() {
    let (mut runtime, mut terminal) = boot();
    draw(&mut runtime, &mut terminal);

    let (x, y) = find_text(&terminal, "Click me").unwrap();
    assert!(runtime.handle_mouse(click(x, y)).unwrap());
    assert!(runtime.state().accent_on());

    draw(&mut runtime, &mut terminal);
    assert!(runtime.handle_mouse(click(x, y)).unwrap());
    assert!(!runtime.state().accent_on());
}

#[test]
fn button_label_color_follows_the_toggle() {
    let (mut runtime, mut terminal) = boot();
    let theme = runtime.theme().clone();
    draw(&mut runtime, &mut terminal);

    let (x, y) = find_text(&terminal, "Click me").unwrap();
    let fg_of = |terminal: &Terminal<TestBackend>| {
        let buffer = terminal.backend().buffer();
        buffer.content[y as usize * buffer.area.width as usize + x as usize].fg
    };
    assert_eq!(fg_of(&terminal), theme.green);

    runtime.handle_key(press(KeyCode::Char('t'))).unwrap();
    draw(&mut runtime, &mut terminal);
    assert_eq!(fg_of(&terminal), theme.red);
}

#[test]
fn quit_key_stops_the_loop() {
    let (mut runtime, mut terminal) = boot();
    draw(&mut runtime, &mut terminal);

    assert!(!runtime.handle_key(press(KeyCode::Char('q'))).unwrap());
}
