use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::Employee;
use crate::utils::terminal::strip_ansi_codes;

/// Read-only view of app state needed for a draw pass
pub struct RenderState<'a> {
    pub search_query: &'a str,
    pub visible_count: usize,
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(
    frame: &mut Frame,
    rows: &[&Employee],
    selected_idx: usize,
    state: &RenderState<'_>,
) {
    let layout = AppLayout::new(frame.area());

    render_roster_list(frame, layout.roster_area, rows, selected_idx);
    render_detail(frame, layout.detail_area, rows.get(selected_idx).copied());
    render_status_bar(frame, layout.status_area, selected_idx, state);
}

fn render_roster_list(frame: &mut Frame, area: Rect, rows: &[&Employee], selected_idx: usize) {
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(idx, employee)| {
            // Truncate long rows for the list view
            let content = employee.display_line().chars().take(60).collect::<String>();

            let style = if idx == selected_idx {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250)) // Bright text
                    .bg(Color::Rgb(16, 185, 129)) // Emerald background
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(113, 113, 122)) // Muted text
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Staff "),
    );

    frame.render_widget(list, area);
}

fn render_detail(frame: &mut Frame, area: Rect, employee: Option<&Employee>) {
    let content = if let Some(employee) = employee {
        let label_style = Style::default().fg(Color::Rgb(113, 113, 122));

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Name:  ", label_style),
                Span::raw(strip_ansi_codes(&employee.name)),
            ]),
            Line::from(vec![
                Span::styled("Unit:  ", label_style),
                Span::raw(strip_ansi_codes(employee.unit_or_default())),
            ]),
            Line::from(vec![
                Span::styled("Email: ", label_style),
                Span::raw(
                    employee
                        .email
                        .as_deref()
                        .map(strip_ansi_codes)
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Devices", label_style)),
        ];

        if employee.devices.is_empty() {
            lines.push(Line::from("  none assigned"));
        } else {
            for device in &employee.devices {
                let serial = device.serial.as_deref().unwrap_or("-");
                lines.push(Line::from(strip_ansi_codes(&format!(
                    "  {} | {} | {}",
                    device.model,
                    serial,
                    device.status.as_str()
                ))));
            }
        }

        Text::from(lines)
    } else {
        Text::from("No employee selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Detail "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, selected_idx: usize, state: &RenderState<'_>) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => Color::Rgb(16, 185, 129), // Emerald
            MessageType::Error => Color::Rgb(239, 68, 68),    // Red
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(Color::Rgb(24, 24, 27)))
    } else {
        let mut parts = vec![];

        if state.search_query.is_empty() {
            parts.push(format!("{} employees", state.total_count));
        } else {
            parts.push(format!("/{}", state.search_query));
            parts.push(format!("{}/{} shown", state.visible_count, state.total_count));
        }

        if state.visible_count > 0 {
            parts.push(format!("row {}/{}", selected_idx + 1, state.visible_count));
        }

        if !state.search_query.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+Y: copy contact".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}
