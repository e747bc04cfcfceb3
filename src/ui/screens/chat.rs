use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::panel;
use crate::chat::{Sender, QUICK_QUESTIONS};
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(38)])
        .split(area);

    render_transcript(f, cols[0], app);
    render_quick_questions(f, cols[1], app);
}

fn render_transcript(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for msg in app.assistant.messages() {
        let (who, color) = match msg.sender {
            Sender::User => ("You", theme::BLUE),
            Sender::Assistant => ("Lagom AI", theme::BRAND),
        };
        lines.push(Line::from(vec![
            Span::styled(
                who,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", msg.sent_at.format("%H:%M")), theme::dim_style()),
            Span::styled(
                match msg.in_reply_to {
                    Some(question) => format!("  ↳ #{question}"),
                    None => format!("  #{}", msg.id),
                },
                theme::dim_style(),
            ),
        ]));
        lines.push(Line::from(Span::styled(msg.content.clone(), theme::normal_style())));
        lines.push(Line::from(""));
    }
    if app.assistant.is_typing() {
        lines.push(Line::from(Span::styled(
            "Lagom AI is typing…",
            theme::dim_style().add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the newest messages in view; wrapping makes this approximate
    let height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(height) as u16;

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(panel("AI Money Assistant")),
        area,
    );
}

fn render_quick_questions(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = QUICK_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let style = if i == app.quick_question_index {
                theme::cursor_style()
            } else {
                theme::normal_style()
            };
            ListItem::new(Line::from(Span::styled(*q, style)))
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(QUICK_QUESTIONS.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(List::new(items).block(panel("Quick Questions")), chunks[0]);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("j/k pick, Q to ask", theme::dim_style())),
            Line::from(Span::styled("i or Enter to type", theme::dim_style())),
            Line::from(Span::styled(
                format!("{} repl(ies) pending", app.assistant.pending_count()),
                theme::dim_style(),
            )),
        ])
        .block(panel("Keys")),
        chunks[1],
    );
}
