use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

use crate::catalog::{self, NEWS_CATEGORIES, PRODUCT_CATEGORIES};
use crate::chat::QUICK_QUESTIONS;
use crate::config::Config;
use crate::routes::Route;
use crate::store::Stores;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{jump_cursor, move_cursor};

pub(crate) fn as_tui(stores: Stores, config: &Config) -> Result<()> {
    let mut app = App::new(stores, config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("tui started");

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => tracing::info!("tui exited"),
        Err(e) => {
            tracing::error!(error = %e, "tui failed");
            eprintln!("Error: {e:?}");
        }
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab, status and prompt bars plus panel borders and table header
            let content_height = f.area().height.saturating_sub(10) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        // Wake up in time for the next chat reply even when no key arrives
        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app)?;
                }
            }
        }
        app.tick(Instant::now());
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app),
        InputMode::Search => {
            handle_search_input(key, app);
            Ok(())
        }
        InputMode::Compose => {
            handle_compose_input(key, app);
            Ok(())
        }
        InputMode::Confirm => {
            handle_confirm_input(key, app);
            Ok(())
        }
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.running = false,
        KeyCode::Char('r') if ctrl => commands::handle_command("redo", app)?,
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            if app.navigate(Route::Business) == Route::Business {
                app.input_mode = InputMode::Search;
                app.search_input.clear();
                app.product_index = 0;
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab => cycle_tab(app, true),
        KeyCode::BackTab => cycle_tab(app, false),
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c as usize - '1' as usize;
            if let Some(screen) = Screen::tabs().get(idx) {
                app.navigate(screen.route());
            }
        }
        KeyCode::Char('j') | KeyCode::Down => move_selection(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_selection(app, -1),
        KeyCode::Char('g') => jump_selection(app, false),
        KeyCode::Char('G') => jump_selection(app, true),
        KeyCode::Enter => handle_enter(app),
        KeyCode::Esc => handle_escape(app),
        KeyCode::Char('u') => commands::handle_command("undo", app)?,
        KeyCode::Char('L') => commands::request_logout(app),
        KeyCode::Char(c) => handle_screen_key(c, app)?,
        _ => {}
    }
    Ok(())
}

/// Single-letter keys whose meaning depends on the screen.
fn handle_screen_key(c: char, app: &mut App) -> Result<()> {
    match (app.screen, c) {
        (Screen::Goals, '+' | '=') => commands::handle_command("contribute", app)?,
        (Screen::Goals, '>') => commands::cycle_preset(app, true),
        (Screen::Goals, '<') => commands::cycle_preset(app, false),
        (Screen::Business, 'c' | 'C') if app.open_product.is_none() => {
            app.product_category = catalog::cycle(PRODUCT_CATEGORIES, app.product_category, c == 'c');
            app.product_index = 0;
            app.set_status(format!("Category: {}", app.product_category));
        }
        (Screen::Business, 'm') => commands::handle_command("message", app)?,
        (Screen::News, 'c' | 'C') => {
            app.news_category = catalog::cycle(NEWS_CATEGORIES, app.news_category, c == 'c');
            app.news_index = 0;
            app.set_status(format!("Category: {}", app.news_category));
        }
        (Screen::Chat, 'i') => {
            app.input_mode = InputMode::Compose;
        }
        (Screen::Chat, 'Q') => {
            if let Some(q) = QUICK_QUESTIONS.get(app.quick_question_index) {
                app.compose_input = (*q).to_string();
                app.input_mode = InputMode::Compose;
            }
        }
        (Screen::Chat, 'x') => commands::request_cancel_replies(app),
        (Screen::Profile, 'e') => commands::toggle_profile_edit(app),
        _ => {}
    }
    Ok(())
}

fn cycle_tab(app: &mut App, forward: bool) {
    let tabs = Screen::tabs();
    let Some(idx) = tabs.iter().position(|s| *s == app.screen) else {
        // Not on a tab (sign-in screen); the guard decides what is reachable
        app.navigate(Route::Dashboard);
        return;
    };
    let next = if forward {
        (idx + 1) % tabs.len()
    } else {
        (idx + tabs.len() - 1) % tabs.len()
    };
    if let Some(screen) = tabs.get(next) {
        app.navigate(screen.route());
    }
}

fn move_selection(app: &mut App, delta: isize) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Expenses => {
            let len = app.ledger().transaction_count();
            move_cursor(&mut app.transaction_index, &mut app.transaction_scroll, len, page, delta);
        }
        Screen::Goals => {
            let len = app.ledger().goals().len();
            move_cursor(&mut app.goal_index, &mut 0, len, len, delta);
        }
        Screen::Business if app.open_product.is_none() => {
            let len = app.visible_products().len();
            move_cursor(&mut app.product_index, &mut 0, len, len, delta);
        }
        Screen::News => {
            let len = app.visible_articles().len();
            move_cursor(&mut app.news_index, &mut 0, len, len, delta);
        }
        Screen::Chat => {
            let len = QUICK_QUESTIONS.len();
            move_cursor(&mut app.quick_question_index, &mut 0, len, len, delta);
        }
        _ => {}
    }
}

fn jump_selection(app: &mut App, to_end: bool) {
    let page = app.visible_rows;
    match app.screen {
        Screen::Expenses => {
            let len = app.ledger().transaction_count();
            jump_cursor(&mut app.transaction_index, &mut app.transaction_scroll, len, page, to_end);
        }
        Screen::Goals => {
            let len = app.ledger().goals().len();
            jump_cursor(&mut app.goal_index, &mut 0, len, len, to_end);
        }
        Screen::Business if app.open_product.is_none() => {
            let len = app.visible_products().len();
            jump_cursor(&mut app.product_index, &mut 0, len, len, to_end);
        }
        Screen::News => {
            let len = app.visible_articles().len();
            jump_cursor(&mut app.news_index, &mut 0, len, len, to_end);
        }
        _ => {}
    }
}

fn handle_enter(app: &mut App) {
    match app.screen {
        Screen::Auth => {
            app.input_mode = InputMode::Command;
            app.command_input = "login ".into();
        }
        Screen::Business if app.open_product.is_none() => {
            if let Some(id) = app.visible_products().get(app.product_index).map(|p| p.id) {
                app.navigate(Route::Product(id));
            }
        }
        Screen::Chat => app.input_mode = InputMode::Compose,
        _ => {}
    }
}

fn handle_escape(app: &mut App) {
    match app.screen {
        Screen::Business if app.open_product.is_some() => {
            app.navigate(Route::Business);
        }
        Screen::Business if !app.search_input.is_empty() => {
            app.search_input.clear();
            app.clamp_cursors();
            app.set_status("Search cleared");
        }
        Screen::Profile if app.profile_draft.is_some() => commands::toggle_profile_edit(app),
        _ => app.status_message.clear(),
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }
    Ok(())
}

/// Live marketplace filter; Enter keeps it, Esc drops it.
fn handle_search_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            let count = app.visible_products().len();
            app.set_status(format!("{count} listing(s) match '{}'", app.search_input));
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => return,
    }
    app.product_index = 0;
}

fn handle_compose_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.compose_input);
            app.input_mode = InputMode::Normal;
            commands::send_chat(app, &text);
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.compose_input.pop();
        }
        KeyCode::Char(c) => app.compose_input.push(c),
        _ => {}
    }
}

fn handle_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => commands::confirm_pending(app),
        _ => {
            app.pending_action = None;
            app.confirm_message.clear();
            app.input_mode = InputMode::Normal;
            app.set_status("Cancelled");
        }
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
