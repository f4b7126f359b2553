//! Layout rendering (search bar, page controls, details line)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ContentState, Focus, Mode, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(14), // Mode
        ])
        .split(area);

    let focused = ui_state.focus == Focus::Search;
    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.query.search_text().is_empty() {
        "Type to search..."
    } else {
        ui_state.query.search_text()
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let mode = match ui_state.query.mode() {
        Mode::Discover => "Discover",
        Mode::Search => "Search",
    };
    let mode = Paragraph::new(mode)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Mode "));
    frame.render_widget(mode, chunks[1]);
}

/// "Page N" or "Page N of M" once a result page is known
pub fn page_label(ui_state: &UiState, content_state: &ContentState) -> String {
    let current = ui_state.query.active_page();
    match &content_state.page {
        Some(page) => format!("Page {} of {}", current, page.total_pages),
        None => format!("Page {}", current),
    }
}

pub fn render_page_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, content_state: &ContentState) {
    let control = Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(page_label(ui_state, content_state), Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled(" ← Prev (p) ", control),
        Span::raw("  "),
        Span::styled(" Next → (n) ", control),
        Span::raw("  "),
        Span::styled(" Home (h) ", control),
    ]);

    let bar = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

/// Extra facts about the selected movie
pub fn render_details(frame: &mut Frame, area: Rect, ui_state: &UiState, content_state: &ContentState) {
    let selected = content_state
        .page
        .as_ref()
        .and_then(|page| page.results.get(ui_state.selected));

    let text = match selected {
        Some(movie) => vec![
            Line::from(vec![
                Span::styled(
                    movie.original_title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]  {} votes", movie.original_language, movie.vote_count),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(movie.overview.clone()),
        ],
        None => vec![Line::from(Span::styled(
            "Tab to switch between search and grid, F1 for help",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let details = Paragraph::new(text)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(details, area);
}
