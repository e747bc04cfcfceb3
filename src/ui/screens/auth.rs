use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, _app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    let text = vec![
        Line::from(Span::styled("Welcome to Lagom", theme::heading_style())),
        Line::from(Span::styled(
            "Smart money habits for the next generation",
            theme::dim_style(),
        )),
        Line::from(""),
        Line::from(Span::styled("Sign in", theme::normal_style())),
        Line::from(Span::styled(
            "  :login <email> <password>",
            theme::money_style(true),
        )),
        Line::from(""),
        Line::from(Span::styled("New here?", theme::normal_style())),
        Line::from(Span::styled(
            "  :signup <email> <password> <your name>",
            theme::money_style(true),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start a login, ? for help, Ctrl-q to quit.",
            theme::dim_style(),
        )),
    ];

    f.render_widget(
        Paragraph::new(text)
            .centered()
            .wrap(Wrap { trim: true })
            .block(panel("Sign In")),
        cols[1],
    );
}
