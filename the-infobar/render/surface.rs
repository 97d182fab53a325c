//! The cell grid the info bar paints into.

use crate::render::graphics::Style;

/// A write-only terminal cell grid. Coordinates are 0-based columns and rows.
pub trait Surface {
  fn set_cell(&mut self, col: usize, row: usize, ch: char, style: Style);
  fn show_cursor(&mut self, col: usize, row: usize);
  /// `(width, height)` in cells.
  fn size(&self) -> (usize, usize);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
  pub ch:    char,
  pub style: Style,
}

impl Default for Cell {
  fn default() -> Self {
    Self {
      ch:    ' ',
      style: Style::default(),
    }
  }
}

/// In-memory [`Surface`], useful for headless rendering and tests.
///
/// Writes outside the grid are dropped.
#[derive(Debug, Clone)]
pub struct CellGrid {
  width:  usize,
  height: usize,
  cells:  Vec<Cell>,
  cursor: Option<(usize, usize)>,
}

impl CellGrid {
  pub fn new(width: usize, height: usize) -> Self {
    Self {
      width,
      height,
      cells: vec![Cell::default(); width * height],
      cursor: None,
    }
  }

  pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
    (col < self.width && row < self.height).then(|| &self.cells[row * self.width + col])
  }

  /// The characters of `row`, one per cell.
  pub fn row_text(&self, row: usize) -> String {
    (0..self.width)
      .filter_map(|col| self.cell(col, row))
      .map(|cell| cell.ch)
      .collect()
  }

  pub fn cursor(&self) -> Option<(usize, usize)> {
    self.cursor
  }

  pub fn hide_cursor(&mut self) {
    self.cursor = None;
  }
}

impl Surface for CellGrid {
  fn set_cell(&mut self, col: usize, row: usize, ch: char, style: Style) {
    if col < self.width && row < self.height {
      self.cells[row * self.width + col] = Cell { ch, style };
    }
  }

  fn show_cursor(&mut self, col: usize, row: usize) {
    self.cursor = Some((col, row));
  }

  fn size(&self) -> (usize, usize) {
    (self.width, self.height)
  }
}
