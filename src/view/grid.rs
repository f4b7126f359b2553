//! Results grid: projection of a result page into cells, and its rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ContentState, Focus, MovieSummary, ResultPage, UiState, GRID_COLUMNS};
use super::utils::{truncate_start, truncate_string};

/// Rows taken by one cell, borders included
const CELL_HEIGHT: u16 = 5;

/// What a single grid cell displays
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell {
    pub title: String,
    pub image_url: String,
    pub release_year: Option<i32>,
    pub vote_average: f64,
}

/// Join the image CDN base and a poster path with exactly one `/`.
///
/// An empty path still yields a URL; a broken image is acceptable.
pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!(
        "{}/{}",
        image_base_url.trim_end_matches('/'),
        poster_path.trim_start_matches('/')
    )
}

impl GridCell {
    pub fn from_movie(movie: &MovieSummary, image_base_url: &str) -> Self {
        Self {
            title: movie.title.clone(),
            image_url: poster_url(image_base_url, movie.poster_path()),
            release_year: movie.release_year(),
            vote_average: movie.vote_average,
        }
    }
}

/// One cell per movie, in the order the API returned them
pub fn project_cells(page: &ResultPage, image_base_url: &str) -> Vec<GridCell> {
    page.results
        .iter()
        .map(|movie| GridCell::from_movie(movie, image_base_url))
        .collect()
}

pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    image_base_url: &str,
) {
    let is_focused = ui_state.focus == Focus::Grid;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Movies ")
        .border_style(border_style);

    let Some(page) = &content_state.page else {
        let empty = Paragraph::new("Loading catalog...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block.padding(Padding::horizontal(1)));
        frame.render_widget(empty, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = project_cells(page, image_base_url);
    if cells.is_empty() {
        let empty = Paragraph::new("No movies on this page")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let total_rows = cells.len().div_ceil(GRID_COLUMNS);
    let visible_rows = ((inner.height / CELL_HEIGHT) as usize).max(1);
    let selected_row = ui_state.selected / GRID_COLUMNS;
    let first_row = (selected_row + 1).saturating_sub(visible_rows);
    let shown_rows = visible_rows.min(total_rows - first_row);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); shown_rows])
        .split(inner);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let row = first_row + row_offset;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell_area) in columns.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(cell) = cells.get(index) {
                let selected = is_focused && index == ui_state.selected;
                render_cell(frame, *cell_area, cell, selected);
            }
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &GridCell, selected: bool) {
    let width = area.width.saturating_sub(4) as usize;
    let border_style = if selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let year = cell
        .release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(year, Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(format!("★ {:.1}", cell.vote_average), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            truncate_start(&cell.image_url, width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", truncate_string(&cell.title, width)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p/w500/";

    fn alpha_page() -> ResultPage {
        serde_json::from_str(
            r#"{
                "page": 1,
                "results": [{"id": 5, "title": "Alpha", "poster_path": "/a.jpg", "release_date": "1999-03-31", "vote_average": 8.2}],
                "total_pages": 10,
                "total_results": 100
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn poster_url_joins_with_single_slash() {
        assert_eq!(poster_url(BASE, "/a.jpg"), "https://image.tmdb.org/t/p/w500/a.jpg");
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500", "a.jpg"),
            "https://image.tmdb.org/t/p/w500/a.jpg"
        );
    }

    #[test]
    fn empty_poster_path_still_builds_a_url() {
        assert_eq!(poster_url(BASE, ""), "https://image.tmdb.org/t/p/w500/");
    }

    #[test]
    fn one_cell_per_movie() {
        let cells = project_cells(&alpha_page(), BASE);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].title, "Alpha");
        assert!(cells[0].image_url.ends_with("/a.jpg"));
        assert_eq!(cells[0].release_year, Some(1999));
    }

    #[test]
    fn cells_keep_api_order() {
        let page: ResultPage = serde_json::from_str(
            r#"{"page": 2, "results": [
                {"id": 3, "title": "C"}, {"id": 1, "title": "A"}, {"id": 2, "title": "B"}
            ], "total_pages": 2, "total_results": 23}"#,
        )
        .unwrap();
        let titles: Vec<_> = project_cells(&page, BASE).into_iter().map(|c| c.title).collect();

        assert_eq!(titles, ["C", "A", "B"]);
    }
}
