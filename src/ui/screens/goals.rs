use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::models::Goal;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{describe_days_left, format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let goals = app.ledger().goals();
    if goals.is_empty() {
        super::render_empty(
            f,
            area,
            "Savings Goals",
            &[
                "No goals yet",
                ":goal <target> <YYYY-MM-DD> <category> | <title>",
                &format!("Categories: {}", Goal::CATEGORIES.join(", ")),
            ],
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_list(f, chunks[0], app, goals);
    if let Some(goal) = app.selected_goal() {
        render_detail(f, chunks[1], app, goal);
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App, goals: &[Goal]) {
    let bar_width = 20;
    let items: Vec<ListItem> = goals
        .iter()
        .enumerate()
        .map(|(i, goal)| {
            let pct = goal.progress_percent();
            let color = theme::progress_color(pct);
            let row_style = if i == app.goal_index {
                theme::cursor_style()
            } else {
                theme::striped_style(i)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<24}", truncate(&goal.title, 23)), row_style),
                Span::styled(progress_bar(pct, bar_width), Style::default().fg(color)),
                Span::styled(
                    format!(" {pct:>3.0}%"),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    f.render_widget(
        List::new(items).block(panel(format!("Savings Goals ({})", goals.len()))),
        area,
    );
}

fn render_detail(f: &mut Frame, area: Rect, app: &App, goal: &Goal) {
    let pct = goal.progress_percent();
    let status = if goal.is_complete() {
        Span::styled("Goal reached!", theme::money_style(true))
    } else {
        Span::styled(
            format!("{} to go", format_amount(goal.remaining())),
            theme::normal_style(),
        )
    };

    let text = vec![
        Line::from(Span::styled(goal.title.clone(), theme::heading_style())),
        Line::from(Span::styled(goal.category.clone(), theme::dim_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Saved    ", theme::dim_style()),
            Span::styled(
                format!(
                    "{} of {}",
                    format_amount(goal.current_amount),
                    format_amount(goal.target_amount.value())
                ),
                theme::normal_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Progress ", theme::dim_style()),
            Span::styled(
                format!("{pct:.0}%"),
                Style::default().fg(theme::progress_color(pct)),
            ),
        ]),
        Line::from(vec![Span::styled("Status   ", theme::dim_style()), status]),
        Line::from(vec![
            Span::styled("Deadline ", theme::dim_style()),
            Span::styled(
                format!(
                    "{} ({})",
                    goal.deadline.format("%b %d, %Y"),
                    describe_days_left(goal.days_left(app.today))
                ),
                theme::normal_style(),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press + to add ", theme::dim_style()),
            Span::styled(
                format!("${}", app.contribution_preset()),
                theme::money_style(true),
            ),
            Span::styled("  (< > to change)", theme::dim_style()),
        ]),
        Line::from(Span::styled(
            ":contribute <amount>  :edit-goal <field> <value>",
            theme::dim_style(),
        )),
    ];

    f.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(panel("Goal Details")),
        area,
    );
}
