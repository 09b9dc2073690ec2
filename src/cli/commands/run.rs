use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Args, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::tui::apps::showcase::{Showcase, ShowcaseConfig};
use crate::tui::{App, Runtime, Theme, ThemeVariant};

const DEFAULT_WATERMARK: &str = "stylegrid demo";

/// Target frame cadence (~60 FPS)
const FRAME_BUDGET: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Mocha,
    Latte,
}

impl From<ThemeChoice> for ThemeVariant {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Mocha => ThemeVariant::Mocha,
            ThemeChoice::Latte => ThemeVariant::Latte,
        }
    }
}

#[derive(Args, Debug)]
pub struct RunCommand {
    /// Color palette for the screen
    #[arg(long, value_enum, default_value = "mocha", env = "STYLEGRID_THEME")]
    pub theme: ThemeChoice,

    /// Number of grid rows
    #[arg(long, default_value_t = 4)]
    pub rows: u16,

    /// Number of grid columns
    #[arg(long, default_value_t = 4)]
    pub columns: u16,

    /// Caption text for the watermark overlay
    #[arg(long, default_value = DEFAULT_WATERMARK)]
    pub watermark: String,
}

impl Default for RunCommand {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Mocha,
            rows: 4,
            columns: 4,
            watermark: DEFAULT_WATERMARK.to_string(),
        }
    }
}

pub fn run_command(args: RunCommand) -> Result<()> {
    let theme = Theme::new(args.theme.into());
    let config = ShowcaseConfig {
        rows: args.rows,
        columns: args.columns,
        watermark: args.watermark,
    };

    let mut runtime = Runtime::<Showcase>::new(config, theme);
    info!("launching {}", Showcase::title());
    for (key, description) in runtime.key_bindings() {
        debug!("key binding {:?}: {}", key, description);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting {}", Showcase::title());
    result
}

fn run_loop<B: Backend, A: App>(
    terminal: &mut Terminal<B>,
    runtime: &mut Runtime<A>,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        // Drain all pending events before drawing for minimal input latency
        let mut should_quit = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('q')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        should_quit = true;
                        break;
                    }
                    if !runtime.handle_key(key)? {
                        should_quit = true;
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    if !runtime.handle_mouse(mouse)? {
                        should_quit = true;
                        break;
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        terminal.draw(|frame| runtime.render(frame))?;

        // Sleep for the remainder of the frame
        if let Some(remaining) = FRAME_BUDGET.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
