//! Checkbox Cell Demo
//!
//! Hosts [`CheckboxCell`] renderers inside a minimal task-list grid:
//! - Up/Down move focus between rows
//! - Space/Enter toggle the focused row's checkbox
//! - Mouse click on a row toggles its checkbox directly
//! - q quits
//!
//! The host owns the data; each toggle is reported back through the cell
//! context's `set_value` and written into the shared row store.

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use simplelog::{Config, LevelFilter, WriteLogger};

use gridcell::prelude::*;

const LABEL_WIDTH: u16 = 30;
const CELL_WIDTH: u16 = 6;
/// Rows start below the title and the blank line under it.
const HEADER_ROWS: u16 = 2;

struct HostGrid {
    labels: Vec<&'static str>,
    /// Externally owned truth for every row; cells only mirror it.
    data: Arc<Mutex<Vec<bool>>>,
    cells: Vec<CheckboxCell>,
    focused: usize,
}

impl HostGrid {
    fn new(rows: Vec<(&'static str, bool)>) -> Self {
        let values: Vec<bool> = rows.iter().map(|(_, done)| *done).collect();
        let cells = values.iter().map(|done| CheckboxCell::new(*done)).collect();
        Self {
            labels: rows.into_iter().map(|(label, _)| label).collect(),
            data: Arc::new(Mutex::new(values)),
            cells,
            focused: 0,
        }
    }

    /// Build the capability set for one row: a value snapshot plus a
    /// callback writing the reported value back into the row store.
    fn context(&self, row: usize) -> Result<CellContext, CellContextError> {
        let value = self.value(row);
        let data = Arc::clone(&self.data);
        CellContext::builder()
            .value(value)
            .on_set_value(move |next| {
                if let Ok(mut values) = data.lock() {
                    values[row] = next;
                }
            })
            .build()
    }

    fn value(&self, row: usize) -> bool {
        self.data
            .lock()
            .map(|values| values[row])
            .unwrap_or_default()
    }

    fn row_at(&self, y: u16) -> Option<usize> {
        let row = y.checked_sub(HEADER_ROWS)? as usize;
        (row < self.cells.len()).then_some(row)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("grid-demo.log")?,
    )?;

    let mut grid = HostGrid::new(vec![
        ("Write the quarterly report", true),
        ("Review open pull requests", false),
        ("Update deployment runbook", false),
        ("File expense claims", true),
        ("Book team offsite venue", false),
    ]);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut grid);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &mut HostGrid,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Reactive synchronization: re-derive every cell's display state
        // from the row store before drawing.
        for row in 0..grid.cells.len() {
            let cx = grid.context(row)?;
            grid.cells[row].sync(&cx);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Paragraph::new("Tasks (Space/Enter or click to toggle, q to quit)")
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Rect { height: 1, ..area },
            );

            let rows = Layout::vertical(vec![Constraint::Length(1); grid.cells.len()]).split(
                Rect {
                    y: area.y + HEADER_ROWS,
                    height: area.height.saturating_sub(HEADER_ROWS),
                    ..area
                },
            );
            for (row, row_area) in rows.iter().enumerate() {
                let [label_area, cell_area] = Layout::horizontal([
                    Constraint::Length(LABEL_WIDTH),
                    Constraint::Length(CELL_WIDTH),
                ])
                .areas(*row_area);

                let focused = row == grid.focused;
                let label_style = if focused {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                frame.render_widget(
                    Paragraph::new(grid.labels[row]).style(label_style),
                    label_area,
                );
                grid.cells[row].render(frame, cell_area, focused);
                grid.cells[row].clear_dirty();
            }
        })?;

        match event::read()? {
            Event::Key(key) => {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up => {
                        grid.focused = grid.focused.saturating_sub(1);
                        continue;
                    }
                    KeyCode::Down => {
                        grid.focused = (grid.focused + 1).min(grid.cells.len() - 1);
                        continue;
                    }
                    _ => {}
                }
                if let Some(combo) = KeyCombo::from_crossterm(&key) {
                    let cx = grid.context(grid.focused)?;
                    let result = grid.cells[grid.focused].dispatch_key(&combo, &cx);
                    if result.is_handled() {
                        report(&cx, grid);
                    }
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && let Some(row) = grid.row_at(mouse.row)
                {
                    if (LABEL_WIDTH..LABEL_WIDTH + CELL_WIDTH).contains(&mouse.column) {
                        let cx = grid.context(row)?;
                        // A consumed click never reaches row-selection handling.
                        if grid.cells[row].dispatch_click(mouse.column, mouse.row, &cx)
                            == EventResult::Consumed
                        {
                            report(&cx, grid);
                            continue;
                        }
                    }
                    grid.focused = row;
                }
            }
            _ => {}
        }
    }
}

fn report(cx: &CellContext, grid: &HostGrid) {
    for event in cx.drain_events() {
        log::info!(
            "change event from {}: row store now {:?}",
            event.widget_id,
            grid.data.lock().map(|values| values.clone()).ok()
        );
    }
}
