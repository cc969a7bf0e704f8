//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop
//! and the layout helpers that split the screen into the tree and table
//! panes. This module stays pure rendering: it reads state + config and
//! produces widgets, without owning any browser logic.

use crate::app::{AppState, Focus};
use crate::core::table::COLUMNS;
use crate::ui::widgets::{fit_to_width, pane_block};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Cell, List, ListItem, ListState, Paragraph, Row as TableRow, Table, TableState},
};

/// Renders the entire terminal UI for tabla on each frame.
pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_path_header(frame, rows[0], app);

    let chunks = layout_chunks(rows[1], app);
    if app.show_tree() {
        render_tree(frame, chunks[0], app);
        render_table(frame, chunks[1], app);
    } else {
        render_table(frame, chunks[0], app);
    }

    render_status_line(frame, rows[2], app);
}

/// Splits the body area into tree and table chunks according to the
/// configured layout percentages. With the tree hidden the table takes
/// the full width.
pub fn layout_chunks(area: Rect, app: &AppState) -> Vec<Rect> {
    if !app.show_tree() {
        return vec![area];
    }
    let layout = app.config().display().layout();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(layout.tree_percent()),
            Constraint::Percentage(layout.table_percent()),
        ])
        .split(area)
        .to_vec()
}

fn render_path_header(frame: &mut Frame, area: Rect, app: &AppState) {
    let path = app
        .session()
        .current_dir()
        .unwrap_or_else(|| app.tree().nodes()[0].path());
    let line = fit_to_width(
        &crate::utils::shorten_home_path(path),
        area.width as usize,
    );
    frame.render_widget(
        Paragraph::new(line).style(app.config().theme().accent_style()),
        area,
    );
}

fn render_tree(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let focused = app.focus() == Focus::Tree;

    let items: Vec<ListItem> = app
        .tree()
        .nodes()
        .iter()
        .map(|node| {
            let marker = if node.expanded() { '-' } else { '+' };
            let label = format!(
                "{}{} {}/",
                "  ".repeat(node.depth()),
                marker,
                node.name().to_string_lossy()
            );
            ListItem::new(label).style(theme.directory_style())
        })
        .collect();

    let highlight = if focused {
        theme.selection_style()
    } else {
        theme.selection_style().add_modifier(Modifier::DIM)
    };

    let mut state = ListState::default();
    state.select(Some(app.tree().cursor()));

    frame.render_stateful_widget(
        List::new(items)
            .block(pane_block("Tree", app))
            .highlight_style(highlight)
            .highlight_symbol(theme.selection_icon()),
        area,
        &mut state,
    );
}

fn render_table(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let focused = app.focus() == Focus::Table;
    let sort = app.session().sort();

    let header_cells: Vec<Cell> = COLUMNS
        .iter()
        .map(|col| {
            let mut title = col.title().to_string();
            if let Some(state) = sort
                && state.column == col.id()
            {
                title.push_str(if state.reverse { " v" } else { " ^" });
            }
            Cell::from(title)
        })
        .collect();

    let body_rows = app.session().rows().iter().map(|row| {
        TableRow::new(vec![
            Cell::from(row.name().to_string()),
            Cell::from(row.size().to_string()),
            Cell::from(row.modified().to_string()),
        ])
    });

    let highlight = if focused {
        theme.selection_style()
    } else {
        theme.selection_style().add_modifier(Modifier::DIM)
    };

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(20),
        Constraint::Percentage(30),
    ];

    let mut state = TableState::default();
    state.select(app.table_cursor());

    frame.render_stateful_widget(
        Table::new(body_rows, widths)
            .header(TableRow::new(header_cells).style(theme.header_style()))
            .block(pane_block("Files", app))
            .row_highlight_style(highlight)
            .highlight_symbol(theme.selection_icon()),
        area,
        &mut state,
    );
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.config().theme();
    let (text, style) = match app.status() {
        Some(message) => (message.to_string(), theme.error_style()),
        None => (
            "tab: switch pane | enter: select/open | 1/2/3: sort | f: tree | q: quit".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    };
    let line = fit_to_width(&text, area.width as usize);
    frame.render_widget(Paragraph::new(line).style(style), area);
}
