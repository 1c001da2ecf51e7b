use crate::mail::format_long_date;
use crate::ui::app::{App, FocusPane, InputMode, Modal, StatusKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    render_entry_list(frame, app, body_chunks[0]);

    // Assigned tasks and the summary only appear once something is saved
    if app.session.any_saved() {
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(40),
            ])
            .split(body_chunks[1]);

        render_entry_detail(frame, app, right_chunks[0]);
        render_assigned(frame, app, right_chunks[1]);
        render_summary(frame, app, right_chunks[2]);
    } else {
        render_entry_detail(frame, app, body_chunks[1]);
    }

    render_footer(frame, app, main_chunks[2]);

    if let Some(modal) = &app.modal {
        render_modal(frame, app, modal);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let date = match &app.mode {
        InputMode::EditingDate { buffer } => Span::styled(
            format!("{buffer}▏"),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::UNDERLINED),
        ),
        _ => Span::styled(
            format_long_date(app.session.date()),
            Style::default().fg(theme.secondary),
        ),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Daily Task Assignment  ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("📅 ", Style::default().fg(theme.fg_dim)),
        date,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    )
    .style(Style::default().bg(theme.bg));

    frame.render_widget(header, area);
}

fn render_entry_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let items: Vec<ListItem> = app
        .session
        .entries()
        .iter()
        .map(|entry| {
            let (marker, color) = if entry.saved {
                ("✓", theme.saved)
            } else {
                ("✎", theme.draft)
            };
            let name_style = if entry.name.is_empty() {
                Style::default().fg(theme.fg_dim)
            } else {
                Style::default().fg(theme.secondary)
            };
            let task = entry.task.lines().next().unwrap_or_default();

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(color)),
                    Span::styled(entry.display_name().to_string(), name_style),
                ]),
                Line::from(Span::styled(
                    format!("    {task}"),
                    Style::default().fg(theme.fg),
                )),
            ])
        })
        .collect();

    let border_color = if app.focus == FocusPane::Form {
        theme.accent
    } else {
        theme.fg_dim
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" 👥 Team Member Tasks ({}) ", app.session.len()))
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().bg(theme.bg))
        .highlight_style(
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_entry_detail(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let label = Style::default().fg(theme.fg_dim);

    let text = match app.selected_entry() {
        Some(entry) => {
            let editing = app.mode == InputMode::EditingTask;
            let task = if entry.task.is_empty() && !editing {
                Span::styled("Enter task updates, progress, and any blockers...", label)
            } else if editing {
                Span::styled(
                    format!("{}▏", entry.task),
                    Style::default()
                        .fg(theme.fg)
                        .add_modifier(Modifier::UNDERLINED),
                )
            } else {
                Span::styled(entry.task.clone(), Style::default().fg(theme.fg))
            };

            let (state, state_color, hint) = if entry.saved {
                ("Saved", theme.saved, "[e] Edit  [d] Delete")
            } else {
                ("Editing", theme.draft, "[←→] Member  [i] Type task  [s] Save Details")
            };

            vec![
                Line::from(vec![
                    Span::styled("Team Member: ", label),
                    Span::styled(
                        entry.display_name().to_string(),
                        Style::default()
                            .fg(theme.secondary)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Status: ", label),
                    Span::styled(state, Style::default().fg(state_color)),
                ]),
                Line::from(""),
                Line::from(Span::styled("Task/Update/Blocker:", label)),
                Line::from(task),
                Line::from(""),
                Line::from(Span::styled(hint, label)),
            ]
        }
        None => vec![Line::from("No entry selected")],
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ✏️  Entry ")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .style(Style::default().bg(theme.bg))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_assigned(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let focused = app.focus == FocusPane::Summary;

    let items: Vec<ListItem> = app
        .session
        .saved_entries()
        .map(|entry| {
            let task = entry.task.lines().next().unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(theme.saved)),
                Span::styled(format!("{}: ", entry.name), Style::default().fg(theme.secondary)),
                Span::styled(task.to_string(), Style::default().fg(theme.fg)),
            ]))
        })
        .collect();

    let border_color = if focused { theme.accent } else { theme.fg_dim };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 📋 Assigned Tasks  [e] Edit  [d] Delete ")
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().bg(theme.bg))
        .highlight_style(
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );

    let selected = focused.then_some(app.assigned_index);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let summary = app.summary_text();
    let lines: Vec<Line> = summary.lines().map(Line::from).collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ✉ Summary  [m] Send Tasks to All Members ")
                .border_style(Style::default().fg(theme.fg_dim)),
        )
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .wrap(Wrap { trim: false })
        .scroll((app.summary_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Success => theme.saved,
            StatusKind::Info => theme.secondary,
        };
        let banner = Paragraph::new(status.text.as_str())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, area);
        return;
    }

    let help_text = match (&app.mode, app.focus) {
        (InputMode::EditingTask, _) => "[Enter/Esc] Done  [Ctrl+S] Save  [Backspace] Delete char",
        (InputMode::EditingDate { .. }, _) => "[Enter] Apply date (YYYY-MM-DD)  [Esc] Cancel",
        (InputMode::Normal, FocusPane::Summary) => {
            "[↑↓] Select  [e] Edit  [d] Delete  [PgUp/PgDn] Scroll  [m] Send  [y] Copy  [Esc] Back"
        }
        (InputMode::Normal, FocusPane::Form) if app.session.all_saved() => {
            "[↑↓] Select  [a] + Add Team Member  [e] Edit  [d] Delete  [m] Send  [?] Help  [q] Quit"
        }
        (InputMode::Normal, FocusPane::Form) => {
            "[↑↓] Select  [←→] Member  [i] Task  [s] Save  [d] Remove  [[ ]] Date  [?] Help  [q] Quit"
        }
    };

    let footer = Paragraph::new(help_text).style(Style::default().fg(theme.fg_dim));
    frame.render_widget(footer, area);
}

fn render_modal(frame: &mut Frame, app: &App, modal: &Modal) {
    let theme = &app.theme;

    let (title, color, lines) = match modal {
        Modal::Alert(message) => (
            " ⚠ ",
            theme.error,
            vec![
                Line::from(message.clone()),
                Line::from(""),
                Line::from(Span::styled("[Enter] OK", Style::default().fg(theme.fg_dim))),
            ],
        ),
        Modal::ConfirmDelete { name, .. } => (
            " Delete ",
            theme.error,
            vec![
                Line::from("Are you sure you want to delete this task?"),
                Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(theme.secondary),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "[y] Delete  [n] Keep",
                    Style::default().fg(theme.fg_dim),
                )),
            ],
        ),
        Modal::Help => (" Keys ", theme.accent, help_lines()),
    };

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(60, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().fg(theme.fg).bg(theme.bg))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    [
        ("↑↓ / jk", "Select entry"),
        ("←→ / hl", "Pick team member"),
        ("Enter / i", "Type task text"),
        ("s", "Save details"),
        ("e", "Edit saved entry"),
        ("a", "Add team member"),
        ("d / x", "Delete entry"),
        ("[ / ] / t", "Previous day / next day / today"),
        ("D", "Type a date"),
        ("m", "Open email draft"),
        ("y", "Copy summary"),
        ("Tab", "Switch to Assigned Tasks"),
        ("PgUp / PgDn", "Scroll summary"),
        ("q", "Quit"),
    ]
    .into_iter()
    .map(|(key, what)| Line::from(format!("{key:>11}  {what}")))
    .collect()
}

/// Rectangle of `percent_x` width and fixed `height`, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
