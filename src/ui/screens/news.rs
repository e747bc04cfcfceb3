use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::catalog::{Article, ALL};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let articles = app.visible_articles();
    let title = if app.news_category == ALL {
        format!("Financial News ({})", articles.len())
    } else {
        format!("Financial News ({}) [{}]", articles.len(), app.news_category)
    };

    if articles.is_empty() {
        super::render_empty(f, area, &title, &["No articles in this category", "Press c to change category"]);
        return;
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let width = cols[0].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = articles
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let style = if i == app.news_index {
                theme::cursor_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(vec![
                Line::from(Span::styled(truncate(a.title, width), style)),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", a.category),
                        Style::default().fg(theme::news_category_color(a.category)),
                    ),
                    Span::styled(format!("  ·  {}", a.published), theme::dim_style()),
                ]),
            ])
        })
        .collect();
    f.render_widget(List::new(items).block(panel(title)), cols[0]);

    if let Some(article) = articles.get(app.news_index) {
        render_article(f, cols[1], article);
    }
}

fn render_article(f: &mut Frame, area: Rect, a: &Article) {
    let text = vec![
        Line::from(Span::styled(
            a.title,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            a.category,
            Style::default().fg(theme::news_category_color(a.category)),
        )),
        Line::from(""),
        Line::from(Span::styled(a.summary, theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  ·  {} min read  ·  {}", a.source, a.read_minutes, a.published),
            theme::dim_style(),
        )),
    ];
    f.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(panel("Article")),
        area,
    );
}
