//! Overlay rendering (help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Search box ──"),
        ("Type", "Search by title"),
        ("Backspace", "Delete a character"),
        ("Esc", "Clear search"),
        ("Enter / ↓", "Go to results"),
        ("", ""),
        ("", "── Results ──"),
        ("← ↑ → ↓", "Move selection"),
        ("N / PgDn", "Next page"),
        ("P / PgUp", "Previous page"),
        ("H / Home", "Back to popular movies"),
        ("/ / Esc", "Back to search"),
        ("?", "Toggle this help"),
        ("", ""),
        ("", "── General ──"),
        ("Tab", "Switch search / results"),
        ("F1", "Toggle this help (anywhere)"),
        ("Q / Ctrl+C", "Quit"),
    ];

    let popup_width = 54.min(area.width);
    let popup_height = (keybindings.len() as u16 + 2).min(area.height);

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^50}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (F1 or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
