use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::theme;

pub(crate) mod auth;
pub(crate) mod business;
pub(crate) mod challenges;
pub(crate) mod chat;
pub(crate) mod dashboard;
pub(crate) mod expenses;
pub(crate) mod goals;
pub(crate) mod news;
pub(crate) mod profile;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Auth => auth::render(f, area, app),
        Screen::Dashboard => dashboard::render(f, area, app),
        Screen::Expenses => expenses::render(f, area, app),
        Screen::Goals => goals::render(f, area, app),
        Screen::Business => business::render(f, area, app),
        Screen::Challenges => challenges::render(f, area, app),
        Screen::News => news::render(f, area, app),
        Screen::Chat => chat::render(f, area, app),
        Screen::Profile => profile::render(f, area, app),
    }
}

/// Bordered panel with a dim bold title.
pub(crate) fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER))
        .title(Span::styled(format!(" {} ", title.into()), theme::title_style()))
}

/// Centered hint text inside an otherwise empty panel.
pub(crate) fn render_empty(f: &mut Frame, area: Rect, title: &str, lines: &[&str]) {
    let mut text = vec![Line::from("")];
    for line in lines {
        text.push(Line::from(Span::styled(line.to_string(), theme::dim_style())));
        text.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(text).centered().block(panel(title)), area);
}
