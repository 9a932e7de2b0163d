//! Shared rendering helpers: cell buffers, status bar, dimming.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell in a render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color) -> Self {
        Self {
            ch,
            fg,
            bg: Color::Reset,
        }
    }
}

/// A fixed-size grid of cells drawn into, then stamped onto the frame.
pub struct CellBuffer {
    width: u16,
    height: u16,
    rows: Vec<Vec<Cell>>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    /// Set a cell. Coordinates outside the buffer are ignored.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.rows[row as usize][col as usize] = cell;
    }

    #[cfg(test)]
    fn get(&self, col: u16, row: u16) -> Option<Cell> {
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    /// Fill a whole row.
    pub fn fill_row(&mut self, row: i32, cell: Cell) {
        for col in 0..self.width as i32 {
            self.set(col, row, cell);
        }
    }

    /// Stamp the buffer onto `area`, one Paragraph per row with a span per
    /// run of identical colors.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.height.min(area.height);
        let width = self.width.min(area.width);

        for (row_idx, row_data) in self.rows.iter().enumerate().take(rows as usize) {
            let mut spans: Vec<Span> = Vec::new();
            let mut current_fg = Color::Reset;
            let mut current_bg = Color::Reset;
            let mut current_text = String::new();

            for &cell in row_data.iter().take(width as usize) {
                if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current_text),
                        Style::default().fg(current_fg).bg(current_bg),
                    ));
                }
                current_fg = cell.fg;
                current_bg = cell.bg;
                current_text.push(cell.ch);
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(
                    current_text,
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }

            let row_area = Rect::new(area.x, area.y + row_idx as u16, width, 1);
            frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
        }
    }
}

/// Key hint shown under the status line, e.g. `("[Enter]", "Start")`.
pub type KeyHint<'a> = (&'a str, &'a str);

/// Two-row status bar: the status line on top, key hints below.
///
/// Rows that don't fit in `area` are dropped, hints first.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: Line, hints: &[KeyHint]) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || hints.is_empty() {
        return;
    }
    frame.render_widget(
        Paragraph::new(hint_line(hints)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Key in bold white, action dimmed, hints separated by a gap.
fn hint_line<'a>(hints: &[KeyHint<'a>]) -> Line<'a> {
    let key_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let action_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, &(key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {}", action), action_style));
    }
    Line::from(spans)
}

/// Dim everything already drawn in `area`.
pub fn dim_area(frame: &mut Frame, area: Rect) {
    frame.buffer_mut().set_style(
        area,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
}

/// Rect of `width` x `height` centered horizontally in `area` at row `y`,
/// clipped to `area`.
pub fn centered_row_rect(area: Rect, width: u16, height: u16, y: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let height = height.min((area.y + area.height).saturating_sub(y));
    Rect::new(x, y, width, height)
}

/// True if the terminal cell (column, row) lies inside `rect`.
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
