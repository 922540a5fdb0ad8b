use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{ConfirmApp, SelectApp};

/// Set up the alternate screen, run `body`, and restore the terminal on both
/// the success and the error path.
fn with_terminal<T>(
    body: impl FnOnce(&mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<T>,
) -> Result<T> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = body(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

pub fn run_select(app: &mut SelectApp) -> Result<()> {
    with_terminal(|terminal| {
        loop {
            terminal.draw(|frame| crate::ui::draw_select(frame, app))?;

            if app.outcome().is_some() {
                return Ok(());
            }

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    handle_select_key(app, key);
                }
            }
        }
    })
}

pub fn run_confirm(app: &mut ConfirmApp) -> Result<()> {
    with_terminal(|terminal| {
        loop {
            terminal.draw(|frame| crate::ui::draw_confirm(frame, app))?;

            if app.outcome().is_some() {
                return Ok(());
            }

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    handle_confirm_key(app, key);
                }
            }
        }
    })
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn handle_select_key(app: &mut SelectApp, key: KeyEvent) {
    if is_interrupt(&key) {
        app.abort();
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.abort(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char(' ') => app.toggle_current(),
        KeyCode::Char('a') => app.toggle_all(),
        KeyCode::Enter => app.accept(),
        _ => {}
    }
}

fn handle_confirm_key(app: &mut ConfirmApp, key: KeyEvent) {
    if is_interrupt(&key) {
        app.abort();
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.abort(),
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') => {
            app.toggle();
        }
        KeyCode::Char('y') => app.answer(true),
        KeyCode::Char('n') => app.answer(false),
        KeyCode::Enter => app.accept(),
        _ => {}
    }
}
