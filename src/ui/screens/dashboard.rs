use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::panel;
use crate::catalog::{Article, INSIGHTS};
use crate::models::TransactionKind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_signed, truncate};

const RECENT_ROWS: usize = 5;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(10)])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(RECENT_ROWS as u16 + 2),
            Constraint::Min(6),
        ])
        .split(body[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(5),
            Constraint::Length(5),
        ])
        .split(body[1]);

    render_recent(f, left[0], app);
    render_spending_chart(f, left[1], app);
    render_goal_progress(f, right[0], app);
    render_insights(f, right[1], app);
    render_headlines(f, right[2]);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let ledger = app.ledger();
    let balance = ledger.balance();
    render_card(
        f,
        cards[0],
        "Balance",
        format_amount(balance),
        if balance >= Decimal::ZERO { theme::GREEN } else { theme::RED },
        "income minus expenses".into(),
    );
    render_card(
        f,
        cards[1],
        "Income",
        format_amount(ledger.total_income()),
        theme::GREEN,
        format!("{} entries", ledger.count_of(TransactionKind::Income)),
    );
    render_card(
        f,
        cards[2],
        "Expenses",
        format_amount(ledger.total_expenses()),
        theme::RED,
        format!("{} entries", ledger.count_of(TransactionKind::Expense)),
    );
    render_card(
        f,
        cards[3],
        "Goals",
        format!("{}/{}", ledger.completed_goals(), ledger.goals().len()),
        theme::BRAND,
        "completed".into(),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color, subtitle: String) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));
    f.render_widget(text, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let txns = app.ledger().transactions();
    if txns.is_empty() {
        super::render_empty(f, area, "Recent Activity", &["Nothing yet. Try :income 20 Job | First pay"]);
        return;
    }

    let width = area.width.saturating_sub(20) as usize;
    let items: Vec<ListItem> = txns
        .iter()
        .take(RECENT_ROWS)
        .map(|t| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<w$}", truncate(&t.description, width), w = width),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>12}", format_signed(t.signed_amount())),
                    theme::money_style(t.is_income()),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(panel("Recent Activity")), area);
}

fn render_spending_chart(f: &mut Frame, area: Rect, app: &App) {
    let spending = app.ledger().spending_by_category();
    if spending.is_empty() {
        super::render_empty(f, area, "Spending by Category", &["No expenses logged"]);
        return;
    }

    let bars: Vec<Bar> = spending
        .iter()
        .map(|(name, amt)| {
            Bar::default()
                .value(amt.to_u64().unwrap_or(0))
                .label(Line::from(truncate(name, 10)))
                .text_value(format_amount(*amt))
                .style(Style::default().fg(theme::RED))
                .value_style(Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending by Category"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);
    f.render_widget(chart, area);
}

fn render_goal_progress(f: &mut Frame, area: Rect, app: &App) {
    let goals = app.ledger().goals();
    if goals.is_empty() {
        super::render_empty(f, area, "Savings Goals", &["Set one up with :goal"]);
        return;
    }

    let block = panel("Savings Goals");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let shown = (inner.height / 2) as usize;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); shown.min(goals.len())])
        .split(inner);

    for (goal, row) in goals.iter().zip(rows.iter()) {
        let pct = goal.progress_percent();
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*row);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(truncate(&goal.title, 24), theme::normal_style()),
                Span::styled(
                    format!(
                        "  {} / {}",
                        format_amount(goal.current_amount),
                        format_amount(goal.target_amount.value())
                    ),
                    theme::dim_style(),
                ),
            ])),
            parts[0],
        );
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme::progress_color(pct)).bg(theme::PANEL))
                .ratio((pct / Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0).clamp(0.0, 1.0))
                .label(format!("{pct:.0}%")),
            parts[1],
        );
    }
}

fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    // Rotate tips daily so the card is not static
    let idx = app.today.ordinal0() as usize % INSIGHTS.len().max(1);
    let tip = INSIGHTS.get(idx).copied().unwrap_or_default();
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(tip, theme::normal_style())))
            .wrap(Wrap { trim: true })
            .block(panel("Money Tip")),
        area,
    );
}

fn render_headlines(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = Article::headlines(area.height.saturating_sub(2) as usize)
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(theme::news_category_color(a.category))),
                Span::styled(a.title, theme::normal_style()),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(panel("Latest News")), area);
}
