use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE: Color = Color::Rgb(22, 27, 34);
pub(crate) const PANEL: Color = Color::Rgb(33, 40, 48);
pub(crate) const BORDER: Color = Color::Rgb(61, 72, 84);
pub(crate) const BRAND: Color = Color::Rgb(94, 205, 164);
pub(crate) const TEXT: Color = Color::Rgb(222, 228, 234);
pub(crate) const TEXT_DIM: Color = Color::Rgb(128, 140, 152);
pub(crate) const GREEN: Color = Color::Rgb(126, 217, 87);
pub(crate) const RED: Color = Color::Rgb(240, 113, 120);
pub(crate) const AMBER: Color = Color::Rgb(246, 193, 119);
pub(crate) const BLUE: Color = Color::Rgb(122, 162, 247);
pub(crate) const PURPLE: Color = Color::Rgb(187, 154, 247);
pub(crate) const PROMPT_BG: Color = Color::Rgb(16, 20, 25);

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn heading_style() -> Style {
    Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
}

pub(crate) fn header_row_style() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(PANEL)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn cursor_style() -> Style {
    Style::default().fg(BASE).bg(BRAND)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn striped_style(row: usize) -> Style {
    if row % 2 == 1 {
        Style::default().fg(TEXT).bg(PANEL)
    } else {
        normal_style()
    }
}

pub(crate) fn money_style(income: bool) -> Style {
    Style::default().fg(if income { GREEN } else { RED })
}

pub(crate) fn prompt_style() -> Style {
    Style::default().fg(TEXT).bg(PROMPT_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(PANEL)
}

/// Badge colour for a news category.
pub(crate) fn news_category_color(category: &str) -> Color {
    match category {
        "Personal Finance" => GREEN,
        "Investing" => BLUE,
        "Crypto" => AMBER,
        "Technology" => PURPLE,
        "Entrepreneurship" => RED,
        _ => TEXT_DIM,
    }
}

/// Progress colour: amber until halfway, brand colour after, green once done.
pub(crate) fn progress_color(percent: rust_decimal::Decimal) -> Color {
    if percent >= rust_decimal::Decimal::ONE_HUNDRED {
        GREEN
    } else if percent >= rust_decimal::Decimal::from(50) {
        BRAND
    } else {
        AMBER
    }
}
