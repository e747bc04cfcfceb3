use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::panel;
use crate::models::TransactionKind;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_signed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_totals(f, chunks[0], app);
    render_table(f, chunks[1], app);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let ledger = app.ledger();
    let line = Line::from(vec![
        Span::styled(" Income ", theme::dim_style()),
        Span::styled(format_amount(ledger.total_income()), theme::money_style(true)),
        Span::styled("   Expenses ", theme::dim_style()),
        Span::styled(format_amount(ledger.total_expenses()), theme::money_style(false)),
        Span::styled("   Balance ", theme::dim_style()),
        Span::styled(
            format_amount(ledger.balance()),
            theme::money_style(ledger.balance() >= rust_decimal::Decimal::ZERO),
        ),
    ]);
    f.render_widget(Paragraph::new(line).block(panel("Totals")), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let txns = app.ledger().transactions();
    if txns.is_empty() {
        let income = TransactionKind::Income.categories().join(", ");
        let expense = TransactionKind::Expense.categories().join(", ");
        let income_hint = format!("Income categories: {income}");
        let expense_hint = format!("Expense categories: {expense}");
        super::render_empty(
            f,
            area,
            "Transactions (0)",
            &[
                "No transactions yet",
                ":income <amount> <category> | <description>",
                ":expense <amount> <category> | <description>",
                &income_hint,
                &expense_hint,
            ],
        );
        return;
    }

    let header = Row::new(
        ["Date", "Description", "Category", "Type", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_row_style())),
    );

    let rows: Vec<Row> = txns
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(app.visible_rows)
        .map(|(i, t)| {
            let style = if i == app.transaction_index {
                theme::cursor_style()
            } else {
                theme::striped_style(i)
            };
            Row::new(vec![
                Cell::from(t.occurred_at.format("%b %d, %Y").to_string()),
                Cell::from(truncate(&t.description, 40)),
                Cell::from(t.category.clone()),
                Cell::from(format!("{} {}", t.kind.sign(), t.kind)),
                Cell::from(Span::styled(
                    format_signed(t.signed_amount()),
                    theme::money_style(t.is_income()),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(15),
        Constraint::Length(9),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel(format!("Transactions ({})", txns.len())));
    f.render_widget(table, area);
}
