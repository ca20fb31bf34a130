//! Terminal canvas
//!
//! Rasterises the logical screen onto a grid of terminal cells and writes the
//! whole frame with termion cursor/colour escapes on `present`.

use std::io::{self, Write};

use glam::Vec2;
use termion::{color, cursor, style};

use super::{Canvas, Color, Label, Style};
use crate::Rect;

const FILL: char = '█';
const BALL: char = '●';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: Color::WHITE,
    };
}

/// Canvas drawing into a terminal (or any writer) as a character grid
pub struct TerminalCanvas<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    /// Logical size mapped onto the cell grid
    logical: Vec2,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, cols: u16, rows: u16, logical: Vec2) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            cols,
            rows,
            logical,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    /// Cell coordinates of a logical point (may be off-grid)
    fn to_cell(&self, p: Vec2) -> (i32, i32) {
        let x = p.x * self.cols as f32 / self.logical.x;
        let y = p.y * self.rows as f32 / self.logical.y;
        (x.floor() as i32, y.floor() as i32)
    }

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = Cell { ch, fg };
    }

    /// Character at a cell, for inspection
    pub fn char_at(&self, col: u16, row: u16) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row as usize * self.cols as usize + col as usize].ch)
    }

    /// One row of the grid as plain text
    pub fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Terminal colour for a canvas colour, dimmed by its alpha
fn shade(c: Color) -> color::Rgb {
    let k = c.a as u16;
    let ch = |v: u8| ((v as u16 * k) / 255) as u8;
    color::Rgb(ch(c.r), ch(c.g), ch(c.b))
}

/// Black ink is invisible on a terminal; fall back to the outline colour
fn ink(style: &Style) -> Color {
    if style.fill == Color::BLACK && style.outline.a > 0 {
        style.outline
    } else {
        style.fill
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self, _color: Color) {
        self.cells.fill(Cell::BLANK);
    }

    fn draw_rect(&mut self, rect: Rect, style: &Style) {
        let (x0, y0) = self.to_cell(rect.pos);
        let (x1, y1) = self.to_cell(rect.pos + rect.size);
        let x1 = x1.max(x0);
        let y1 = y1.max(y0);

        if style.fill.a > 0 {
            let ch = if style.fill == Color::BLACK { ' ' } else { FILL };
            for row in y0..=y1 {
                for col in x0..=x1 {
                    self.put(col, row, ch, style.fill);
                }
            }
        }

        if style.outline_thickness > 0.0 && style.outline.a > 0 {
            let fg = style.outline;
            for col in x0..=x1 {
                self.put(col, y0, '─', fg);
                self.put(col, y1, '─', fg);
            }
            for row in y0..=y1 {
                self.put(x0, row, '│', fg);
                self.put(x1, row, '│', fg);
            }
            self.put(x0, y0, '┌', fg);
            self.put(x1, y0, '┐', fg);
            self.put(x0, y1, '└', fg);
            self.put(x1, y1, '┘', fg);
        }
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &Style) {
        let (x0, y0) = self.to_cell(center - Vec2::splat(radius));
        let (x1, y1) = self.to_cell(center + Vec2::splat(radius));
        let cell_w = self.logical.x / self.cols as f32;
        let cell_h = self.logical.y / self.rows as f32;
        for row in y0..=y1 {
            for col in x0..=x1 {
                let mid = Vec2::new((col as f32 + 0.5) * cell_w, (row as f32 + 0.5) * cell_h);
                if mid.distance(center) <= radius {
                    self.put(col, row, BALL, style.fill);
                }
            }
        }
        // Always leave a mark, even when the ball is smaller than a cell
        let (cx, cy) = self.to_cell(center);
        self.put(cx, cy, BALL, style.fill);
    }

    fn draw_label(&mut self, label: &Label) {
        let (col, row) = self.to_cell(label.pos);
        let fg = ink(&label.style);
        for (i, ch) in label.text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg);
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut frame = String::with_capacity(self.cells.len() * 4);
        for row in 0..self.rows {
            frame.push_str(&cursor::Goto(1, row + 1).to_string());
            let mut current: Option<Color> = None;
            let start = row as usize * self.cols as usize;
            for cell in &self.cells[start..start + self.cols as usize] {
                if current != Some(cell.fg) {
                    frame.push_str(&color::Fg(shade(cell.fg)).to_string());
                    current = Some(cell.fg);
                }
                frame.push(cell.ch);
            }
        }
        frame.push_str(&style::Reset.to_string());
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
