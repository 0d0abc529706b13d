//! Board layout and widget mapping. No decisions beyond styling: all data
//! arrives pre-computed in the screen view model.

use super::{Focus, UiState};
use crate::presentation::formatters::time::format_relative;
use crate::presentation::view_models::{BoardScreenViewModel, ConfirmViewModel, StatusLevel};
use crewdir_engine::AccentColor;
use crewdir_runtime::FormField;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

pub(super) fn draw(f: &mut Frame, ui: &mut UiState) {
    let Some(screen) = ui.screen.clone() else {
        let loading = Paragraph::new("Connecting to directory...").block(
            Block::default()
                .borders(Borders::ALL)
                .title(" crewdir "),
        );
        f.render_widget(loading, f.area());
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, rows[0], &screen);
    draw_filter_bar(f, rows[1], &screen, ui.focus);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[2]);

    draw_cards(f, columns[0], &screen, ui);
    draw_form(f, columns[1], &screen, ui.focus);
    draw_status_bar(f, rows[3], &screen);

    if let Some(confirm) = &screen.confirm {
        draw_confirm(f, confirm);
    }
}

fn accent_style(accent: AccentColor) -> Style {
    let color = match accent {
        AccentColor::Indigo => Color::Blue,
        AccentColor::Magenta => Color::Magenta,
        AccentColor::Cyan => Color::Cyan,
        AccentColor::Green => Color::Green,
        AccentColor::Rose => Color::Red,
        AccentColor::Teal => Color::LightCyan,
    };
    Style::default().fg(color)
}

fn focus_title(title: &str, focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            title.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(title.to_string())
    }
}

fn draw_header(f: &mut Frame, area: Rect, screen: &BoardScreenViewModel) {
    let refreshed = screen
        .header
        .last_refreshed
        .map(format_relative)
        .unwrap_or_else(|| "never".to_string());

    let line = Line::from(vec![
        Span::styled(
            screen.header.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            screen.header.endpoint.clone(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(
            "  {} employees · showing {} · updated {}",
            screen.header.total_count, screen.header.shown_count, refreshed
        )),
    ]);

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_filter_bar(f: &mut Frame, area: Rect, screen: &BoardScreenViewModel, focus: Focus) {
    let department = if screen.filter_bar.department.is_empty() {
        "All".to_string()
    } else {
        screen.filter_bar.department.clone()
    };

    let line = Line::from(vec![
        focus_title("Search: ", focus == Focus::Search),
        Span::raw(screen.filter_bar.search.clone()),
        Span::styled(
            if focus == Focus::Search { "▏" } else { " " },
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   Department: "),
        Span::styled(department, Style::default().add_modifier(Modifier::BOLD)),
    ]);

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Filters ")),
        area,
    );
}

fn draw_cards(f: &mut Frame, area: Rect, screen: &BoardScreenViewModel, ui: &mut UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(focus_title(" Employees ", ui.focus == Focus::Cards));

    if screen.directory.is_empty {
        let message = if screen.directory.total_count == 0 {
            "No employees yet - fill in the form to add the first one"
        } else {
            "No employees match the current filters"
        };
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = screen
        .directory
        .cards
        .iter()
        .map(|card| {
            let accent = accent_style(card.accent);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<3}", card.initials),
                    accent.add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    card.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}  ", card.role)),
                Span::styled(card.email.clone(), Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::styled(format!("[{}]", card.department), accent),
            ]))
        })
        .collect();

    // Index safety: the selection survives list shrinkage.
    ui.selected = ui.selected.min(screen.directory.cards.len() - 1);
    let mut state = ListState::default();
    state.select(Some(ui.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_form(f: &mut Frame, area: Rect, screen: &BoardScreenViewModel, focus: Focus) {
    let form = &screen.form;

    let field_line = |label: &str, value: &str, field: FormField, locked: bool| -> Line<'static> {
        let mut spans = vec![
            focus_title(label, focus == Focus::Form(field)),
            Span::raw(value.to_string()),
        ];
        if focus == Focus::Form(field) && !locked {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        if locked {
            spans.push(Span::styled(
                " (locked)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    };

    let mut lines = vec![
        field_line("Id:         ", &form.id, FormField::Id, form.id_locked),
        field_line("Name:       ", &form.name, FormField::Name, false),
        field_line("Role:       ", &form.role, FormField::Role, false),
        field_line("Email:      ", &form.email, FormField::Email, false),
        field_line(
            "Department: ",
            &form.department,
            FormField::Department,
            false,
        ),
        Line::raw(""),
        Line::from(Span::styled(
            format!("[Enter] {}", form.submit_label),
            Style::default().fg(Color::Green),
        )),
    ];

    if form.cancel_visible {
        lines.push(Line::from(Span::styled(
            "[Esc] Cancel edit",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", form.title)),
        ),
        area,
    );
}

fn draw_status_bar(f: &mut Frame, area: Rect, screen: &BoardScreenViewModel) {
    let line = match &screen.status_bar.notification {
        Some(notification) => {
            let style = match notification.level {
                StatusLevel::Success => Style::default().fg(Color::Green),
                StatusLevel::Error => Style::default().fg(Color::Red),
                StatusLevel::Neutral => Style::default().fg(Color::Gray),
            };
            Line::from(Span::styled(notification.message.clone(), style))
        }
        None => Line::from(Span::styled(
            screen.status_bar.hint.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    };

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn draw_confirm(f: &mut Frame, confirm: &ConfirmViewModel) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::raw(confirm.message.clone()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[y] delete", Style::default().fg(Color::Red)),
            Span::raw("   "),
            Span::styled("[n] keep", Style::default().fg(Color::Green)),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm delete "),
        ),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
