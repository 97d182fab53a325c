//! Mapping a line's bytes onto visual columns.
//!
//! Three coordinates are in play for every character: its byte offset, its
//! character index (what cursors and selections use) and its visual column
//! (what the terminal uses). [`VisualChars`] walks a line once and yields all
//! three together; [`CellEmitter`] turns the result into screen cells.

use the_core::grapheme::{
  char_width,
  decode_char,
  tab_width_at,
};

use crate::render::{
  graphics::Style,
  surface::Surface,
};

/// Drawn in the trailing cells of a tab.
pub const TAB_FILLER: char = ' ';
/// Drawn in the trailing cells of a glyph wider than one cell. Only visible
/// when the glyph itself was cut off by the start of the drawn region.
pub const WIDE_FILLER: char = '@';

/// One decoded character placed on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualChar {
  pub byte:     usize,
  pub char_idx: usize,
  /// Visual column relative to the start of the line.
  pub col:      usize,
  pub width:    usize,
  pub ch:       char,
}

impl VisualChar {
  #[inline]
  pub fn is_tab(&self) -> bool {
    self.ch == '\t'
  }

  #[inline]
  pub fn end_col(&self) -> usize {
    self.col + self.width
  }

  /// Glyph for the cell `offset` cells into this character.
  pub fn glyph(&self, offset: usize) -> char {
    match (self.is_tab(), offset) {
      (true, _) => TAB_FILLER,
      (false, 0) => self.ch,
      (false, _) => WIDE_FILLER,
    }
  }
}

/// Iterator over the characters of a line with their visual placement.
#[derive(Debug, Clone)]
pub struct VisualChars<'a> {
  bytes:     &'a [u8],
  byte:      usize,
  char_idx:  usize,
  col:       usize,
  tab_width: u16,
}

impl<'a> VisualChars<'a> {
  pub fn new(bytes: &'a [u8], tab_width: u16) -> Self {
    Self {
      bytes,
      byte: 0,
      char_idx: 0,
      col: 0,
      tab_width,
    }
  }

  /// Visual column just past the last yielded character.
  pub fn col(&self) -> usize {
    self.col
  }

  /// Number of characters yielded so far.
  pub fn char_idx(&self) -> usize {
    self.char_idx
  }
}

impl Iterator for VisualChars<'_> {
  type Item = VisualChar;

  fn next(&mut self) -> Option<Self::Item> {
    let (ch, len) = decode_char(&self.bytes[self.byte..])?;
    let width = match ch {
      '\t' => tab_width_at(self.col, self.tab_width),
      _ => char_width(ch),
    };
    let visual = VisualChar {
      byte: self.byte,
      char_idx: self.char_idx,
      col: self.col,
      width,
      ch,
    };
    self.byte += len;
    self.char_idx += 1;
    self.col += width;
    Some(visual)
  }
}

/// Visual column of the character at `char_idx`.
///
/// Positions at or past the end of the line map to the end-of-line column,
/// which is where a cursor after the last character is drawn.
pub fn visual_col_at(bytes: &[u8], char_idx: usize, tab_width: u16) -> usize {
  let mut chars = VisualChars::new(bytes, tab_width);
  for visual in &mut chars {
    if visual.char_idx == char_idx {
      return visual.col;
    }
  }
  chars.col()
}

/// Index of the character covering visual column `col`, or the end-of-line
/// position when `col` lies past the last character.
pub fn char_at_visual_col(bytes: &[u8], col: usize, tab_width: u16) -> usize {
  let mut chars = VisualChars::new(bytes, tab_width);
  for visual in &mut chars {
    if visual.end_col() > col {
      return visual.char_idx;
    }
  }
  chars.char_idx()
}

pub fn line_width(bytes: &[u8], tab_width: u16) -> usize {
  let mut chars = VisualChars::new(bytes, tab_width);
  chars.by_ref().for_each(drop);
  chars.col()
}

/// Writes one row of cells left to right.
///
/// The first `skip` cells are counted but dropped, which is how content left
/// of a horizontal scroll offset disappears. Cells landing at or past
/// `limit` are dropped as well; nothing wraps.
#[derive(Debug, Clone)]
pub struct CellEmitter {
  row:   usize,
  col:   usize,
  skip:  usize,
  limit: usize,
}

impl CellEmitter {
  pub fn new(row: usize, start_col: usize, skip: usize, limit: usize) -> Self {
    Self {
      row,
      col: start_col,
      skip,
      limit,
    }
  }

  /// Screen column the next emitted cell lands on.
  pub fn col(&self) -> usize {
    self.col
  }

  pub fn is_full(&self) -> bool {
    self.col >= self.limit
  }

  pub fn emit<S: Surface + ?Sized>(&mut self, surface: &mut S, ch: char, style: Style) {
    if self.skip > 0 {
      self.skip -= 1;
      return;
    }
    if self.col < self.limit {
      surface.set_cell(self.col, self.row, ch, style);
    }
    self.col += 1;
  }

  /// Emit every cell of `visual`, filler included.
  pub fn emit_char<S: Surface + ?Sized>(&mut self, surface: &mut S, visual: &VisualChar, style: Style) {
    for offset in 0..visual.width {
      self.emit(surface, visual.glyph(offset), style);
    }
  }
}
