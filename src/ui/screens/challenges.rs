use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, Paragraph},
    Frame,
};

use super::panel;
use crate::catalog::{achievements, rank_badge, Challenge, CHALLENGES, LEADERBOARD};
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LEADERBOARD.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(cols[1]);

    render_challenges(f, cols[0]);
    render_leaderboard(f, right[0]);
    render_achievements(f, right[1], app);
}

fn render_challenges(f: &mut Frame, area: Rect) {
    let block = panel("Active Challenges");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); CHALLENGES.len()])
        .split(inner);

    for (challenge, row) in CHALLENGES.iter().zip(rows.iter()) {
        render_challenge(f, *row, challenge);
    }
}

fn render_challenge(f: &mut Frame, area: Rect, c: &Challenge) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(c.title, theme::heading_style()),
            Span::styled(format!("  rank {}", rank_badge(c.my_rank)), theme::normal_style()),
            Span::styled(format!("  prize: {}", c.prize), Style::default().fg(theme::AMBER)),
        ])),
        parts[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "{}  ·  {} participants  ·  {} left",
                c.description, c.participants, c.time_left
            ),
            theme::dim_style(),
        ))),
        parts[1],
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme::BRAND).bg(theme::PANEL))
            .percent(c.progress.min(100)),
        parts[2],
    );
}

fn render_leaderboard(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = LEADERBOARD
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}  ", rank_badge(e.rank)), Style::default().fg(theme::AMBER)),
                Span::styled(format!("{:<18}", e.name), theme::normal_style()),
                Span::styled(format!("{} pts", e.points), theme::dim_style()),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Leaderboard")), area);
}

fn render_achievements(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = achievements(app.ledger())
        .into_iter()
        .map(|a| {
            let (mark, style) = if a.earned {
                ("✔", theme::money_style(true))
            } else {
                ("○", theme::dim_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{mark} {:<20}", a.title), style),
                Span::styled(a.description, theme::dim_style()),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Achievements")), area);
}
