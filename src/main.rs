//! Tally - Terminal List Counter
//!
//! A terminal-based list manager: add named items, count them up and
//! down, reset every counter, or clear the list after confirming.
//! Nothing is saved; the list lives for one session.

use std::io;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::info;

use tally::application::App;
use tally::infrastructure::{init_logging, Config};
use tally::presentation::{render_ui, InputHandler, ScreenLayout};

/// Entry point for the tally terminal list counter.
///
/// Loads configuration, sets up the log file and the terminal, and runs
/// the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_logging(&config.log)?;
    info!(mouse = config.mouse, "starting");

    let mut app = App::with_labels(
        config.title.clone(),
        config.placeholder.clone(),
        config.empty_message.clone(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    info!(items = app.manager.items().len(), "exiting");
    Ok(())
}

fn screen_layout<B: Backend>(terminal: &Terminal<B>, app: &App) -> io::Result<ScreenLayout> {
    let size = terminal.size()?;
    Ok(ScreenLayout::compute(Rect::new(0, 0, size.width, size.height), app))
}

/// Main application event loop.
///
/// Redraws after every event. Clicks are resolved against the layout of
/// the frame the user is looking at.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        let layout = screen_layout(terminal, app)?;
        app.update_viewport_size(layout.list_inner.height as usize);
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if InputHandler::should_quit(app, key.code, key.modifiers) {
                    return Ok(());
                }
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Mouse(mouse) => {
                let layout = screen_layout(terminal, app)?;
                InputHandler::handle_mouse_event(app, mouse, &layout);
            }
            Event::Paste(text) => InputHandler::handle_paste(app, &text),
            _ => {}
        }
    }
}
