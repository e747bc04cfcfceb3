use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::screens;
use super::theme;
use super::util::format_amount;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Prompt
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    screens::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_prompt(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let brand = Span::styled(" Lagom ", theme::heading_style());

    if app.screen == Screen::Auth {
        let bar = Paragraph::new(Line::from(vec![
            brand,
            Span::styled("  Sign in to continue", theme::dim_style()),
        ]))
        .style(Style::default().bg(theme::BASE));
        f.render_widget(bar, area);
        return;
    }

    let titles: Vec<Line> = Screen::tabs()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let key = i + 1;
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{key}:"), theme::dim_style()),
                    Span::styled(
                        s.to_string(),
                        Style::default()
                            .fg(theme::BRAND)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(format!("{key}:{s}"), theme::dim_style()))
            }
        })
        .collect();

    let selected = Screen::tabs()
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default())
        .divider(Span::styled("│", Style::default().fg(theme::BORDER)))
        .style(Style::default().bg(theme::BASE));

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(7), Constraint::Min(10)])
        .split(area);
    f.render_widget(
        Paragraph::new(Line::from(brand)).style(Style::default().bg(theme::BASE)),
        halves[0],
    );
    f.render_widget(tabs, halves[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::BRAND,
        InputMode::Command => theme::GREEN,
        InputMode::Search => theme::AMBER,
        InputMode::Compose => theme::BLUE,
        InputMode::Confirm => theme::RED,
    };
    let mode_style = Style::default()
        .fg(theme::BASE)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let who = app
        .stores
        .auth
        .current_user()
        .map_or("guest", |u| u.name.as_str());
    let mut info = format!(
        " {} | {who} | balance {}",
        app.current_route().path(),
        format_amount(app.ledger().balance())
    );
    match (app.stores.ledger.can_undo(), app.stores.ledger.can_redo()) {
        (true, true) => info.push_str(" | undo/redo"),
        (true, false) => info.push_str(" | undo"),
        (false, true) => info.push_str(" | redo"),
        (false, false) => {}
    }
    if app.assistant.is_typing() {
        info.push_str(" | assistant typing…");
    }

    let right = match app.screen {
        Screen::Auth => " :login | :signup | Enter fill login ",
        Screen::Dashboard => " u undo | ^r redo | ? help ",
        Screen::Expenses => " :income | :expense | j/k move ",
        Screen::Goals => " + add | </> amount | :goal | :edit-goal ",
        Screen::Business if app.open_product.is_some() => " m message seller | Esc back ",
        Screen::Business => " Enter open | / search | c category ",
        Screen::Challenges => " :leaderboard in CLI | ? help ",
        Screen::News => " c category | j/k move ",
        Screen::Chat => " i type | Q quick question | x cancel replies ",
        Screen::Profile if app.profile_draft.is_some() => " :name | :email | :save | :cancel ",
        Screen::Profile => " e edit | L logout ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_prompt(f: &mut Frame, area: Rect, app: &App) {
    let input_line = |prefix: &'static str, color, text: &str| {
        (
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::styled(text.to_string(), theme::prompt_style()),
            ]),
            Some((prefix.chars().count() + text.chars().count()) as u16),
        )
    };

    let (content, cursor) = match app.input_mode {
        InputMode::Command => input_line(":", theme::BRAND, &app.command_input),
        InputMode::Search => input_line("/", theme::AMBER, &app.search_input),
        InputMode::Compose => input_line("you> ", theme::BLUE, &app.compose_input),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(app.confirm_message.clone(), Style::default().fg(theme::AMBER)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal if app.status_message.is_empty() => (
            Line::from(Span::styled(
                " Press : for commands, / to search listings, ? for help",
                theme::dim_style(),
            )),
            None,
        ),
        InputMode::Normal => (
            Line::from(Span::styled(
                format!(" {}", app.status_message),
                theme::prompt_style(),
            )),
            None,
        ),
    };

    f.render_widget(
        Paragraph::new(content).style(Style::default().bg(theme::PROMPT_BG)),
        area,
    );
    if let Some(offset) = cursor {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(theme::AMBER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let keys = [
        "  j/k, Up/Down     Move cursor           1-8        Switch tabs",
        "  Tab/Shift-Tab    Cycle tabs            g/G        Top/Bottom",
        "  Enter            Open / compose        Esc        Back / cancel",
        "  + (Goals)        Quick contribution    </>        Change amount",
        "  c/C              Cycle category        m          Message seller",
        "  i, Q (Chat)      Type, quick question  x          Cancel replies",
        "  u / Ctrl-r       Undo / redo           L          Log out",
        "  e (Profile)      Edit profile          Ctrl-q     Quit",
    ];

    let mut help_text = vec![
        Line::from(Span::styled(" Lagom Help ", theme::heading_style())),
        Line::from(""),
        section("Keys"),
    ];
    help_text.extend(
        keys.iter()
            .map(|k| Line::from(Span::styled(*k, theme::normal_style()))),
    );
    help_text.push(Line::from(""));
    help_text.push(section("Commands"));

    // One line per command; aliases share a description with their long name
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 2)
        .map(|(name, cmd)| (*name, cmd.description))
        .collect();
    cmd_lines.sort_by_key(|(name, _)| *name);
    cmd_lines.retain(|(_, desc)| seen.insert(*desc));
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<16} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(popup_width) / 2;
    let y = area.y + area.height.saturating_sub(popup_height) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BRAND))
            .style(Style::default().bg(theme::BASE)),
    );
    f.render_widget(help, popup_area);
}
