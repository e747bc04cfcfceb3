use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::panel;
use crate::catalog::{Product, ALL};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.open_product.and_then(Product::find) {
        Some(product) => render_product(f, area, product),
        None => render_listing(f, area, app),
    }
}

fn render_listing(f: &mut Frame, area: Rect, app: &App) {
    let products = app.visible_products();
    let mut title = format!("Lagom Business ({})", products.len());
    if app.product_category != ALL {
        title.push_str(&format!(" [{}]", app.product_category));
    }
    if !app.search_input.is_empty() {
        title.push_str(&format!(" search: '{}'", app.search_input));
    }

    if products.is_empty() {
        super::render_empty(
            f,
            area,
            &title,
            &["No listings match", "Press Esc to clear the search or c to change category"],
        );
        return;
    }

    let header = Row::new(
        ["#", "Item", "Price", "Condition", "Seller", "Posted"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_row_style())),
    );

    let rows: Vec<Row> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let style = if i == app.product_index {
                theme::cursor_style()
            } else {
                theme::striped_style(i)
            };
            Row::new(vec![
                Cell::from(p.id.to_string()),
                Cell::from(truncate(p.title, 30)),
                Cell::from(Span::styled(format_amount(p.price()), theme::money_style(true))),
                Cell::from(p.condition),
                Cell::from(p.seller),
                Cell::from(p.posted),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
    ];
    f.render_widget(
        Table::new(rows, widths).header(header).block(panel(title)),
        area,
    );
}

fn render_product(f: &mut Frame, area: Rect, product: &Product) {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<11}"), theme::dim_style()),
            Span::styled(value, theme::normal_style()),
        ])
    };

    let text = vec![
        Line::from(Span::styled(product.title, theme::heading_style())),
        Line::from(Span::styled(
            format_amount(product.price()),
            theme::money_style(true),
        )),
        Line::from(""),
        field("Condition", product.condition.to_string()),
        field("Category", product.category.to_string()),
        field("Seller", product.seller.to_string()),
        field("Location", product.location.to_string()),
        field("Posted", product.posted.to_string()),
        Line::from(""),
        Line::from(Span::styled(product.description, theme::normal_style())),
        Line::from(""),
        Line::from(Span::styled(
            "m  message seller    Esc  back to listings",
            theme::dim_style(),
        )),
    ];

    f.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(panel(format!("Listing #{}", product.id))),
        area,
    );
}
