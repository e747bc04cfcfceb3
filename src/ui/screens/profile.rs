use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::panel;
use crate::catalog::achievements;
use crate::models::User;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(user) = app.stores.auth.current_user() else {
        super::render_empty(f, area, "Profile", &["Not signed in"]);
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_account(f, cols[0], app, user);
    render_stats(f, cols[1], app);
}

fn render_account(f: &mut Frame, area: Rect, app: &App, user: &User) {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<8}"), theme::dim_style()),
            Span::styled(value, theme::normal_style()),
        ])
    };

    let mut text = vec![
        Line::from(Span::styled(
            user.avatar.clone().unwrap_or_else(|| format!("({})", user.initials())),
            theme::heading_style(),
        )),
        Line::from(""),
    ];

    match &app.profile_draft {
        Some(draft) => {
            text.push(Line::from(Span::styled("Editing", theme::money_style(true))));
            text.push(row("Name", draft.name.clone()));
            text.push(row("Email", draft.email.clone()));
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                ":name <name>  :email <email>  :save  :cancel",
                theme::dim_style(),
            )));
        }
        None => {
            text.push(row("Name", user.name.clone()));
            text.push(row("Email", user.email.clone()));
            text.push(row("Joined", user.joined.format("%B %Y").to_string()));
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "e edit profile    L log out",
                theme::dim_style(),
            )));
        }
    }

    f.render_widget(Paragraph::new(text).block(panel("Account")), area);
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let ledger = app.ledger();
    let earned = achievements(ledger).iter().filter(|a| a.earned).count();
    let stat = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<20}"), theme::dim_style()),
            Span::styled(value, theme::normal_style()),
        ])
    };

    let text = vec![
        stat("Balance", format_amount(ledger.balance())),
        stat("Transactions logged", ledger.transaction_count().to_string()),
        stat("Savings goals", ledger.goals().len().to_string()),
        stat("Goals completed", ledger.completed_goals().to_string()),
        stat("Achievements", format!("{earned} earned")),
    ];
    f.render_widget(Paragraph::new(text).block(panel("Your Stats")), area);
}
