//! Painting the message / prompt row.

use the_core::grapheme::char_width;

use super::{
  InfoStyles,
  columns::{
    CellEmitter,
    VisualChars,
    line_width,
    visual_col_at,
  },
  highlight::SelectionHighlighter,
};
use crate::{
  info::PromptText,
  render::{
    graphics::Style,
    surface::Surface,
  },
};

/// Paints one row: a label in the message or error style, optionally
/// followed by the live prompt text.
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer {
  pub row:       usize,
  pub width:     usize,
  pub tab_width: u16,
  pub styles:    InfoStyles,
  pub error:     bool,
}

impl LineRenderer {
  fn base_style(&self) -> Style {
    if self.error {
      self.styles.error
    } else {
      self.styles.message
    }
  }

  /// Blank the whole row so nothing from a previous, longer line survives.
  pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
    for col in 0..self.width {
      surface.set_cell(col, self.row, ' ', self.styles.message);
    }
  }

  /// Draw the label from column 0 and return its display width.
  pub fn draw_label<S: Surface + ?Sized>(&self, surface: &mut S, label: &str) -> usize {
    let style = self.base_style();
    let mut col = 0;
    for ch in label.chars() {
      if col < self.width {
        surface.set_cell(col, self.row, ch, style);
      }
      col += char_width(ch);
    }
    col
  }

  /// Draw the prompt text starting at `start_col`, hiding the first `scroll`
  /// columns of the line. Returns the screen column of the cursor.
  pub fn draw_prompt<S, P>(&self, surface: &mut S, start_col: usize, scroll: usize, text: &P) -> usize
  where
    S: Surface + ?Sized,
    P: PromptText + ?Sized,
  {
    let base = self.base_style();
    let highlighter = SelectionHighlighter::new(text.selection(), self.styles.selection);
    let cursor = text.cursor();

    let mut emitter = CellEmitter::new(self.row, start_col, scroll, self.width);
    let mut cursor_col = None;
    let mut chars = VisualChars::new(text.line_bytes(), self.tab_width);
    for visual in &mut chars {
      let screen_col = emitter.col();
      emitter.emit_char(surface, &visual, highlighter.style_at(visual.char_idx, base));
      if visual.char_idx == cursor {
        cursor_col = Some(screen_col);
      }
      if emitter.is_full() {
        break;
      }
    }
    // A cursor after the last drawn character sits where the next cell would go.
    if cursor == chars.char_idx() {
      cursor_col = Some(emitter.col());
    }
    cursor_col.unwrap_or(emitter.col())
  }

  /// Paint the label and, when a prompt is open, its text; then place the
  /// cursor. The cursor is only shown once the whole line is painted so an
  /// end-of-line cursor is handled like any other.
  pub fn render<S, P>(&self, surface: &mut S, label: &str, prompt: Option<(&P, usize)>)
  where
    S: Surface + ?Sized,
    P: PromptText + ?Sized,
  {
    let label_width = self.draw_label(surface, label);
    let Some((text, scroll)) = prompt else {
      return;
    };
    let cursor_col = self.draw_prompt(surface, label_width, scroll, text);
    if self.width > 0 {
      surface.show_cursor(cursor_col.min(self.width - 1), self.row);
    }
  }
}

/// Horizontal scroll of the prompt text that keeps the cursor visible in the
/// `available` columns left of the label.
///
/// Lines that fit entirely (including the end-of-line cursor cell) are never
/// scrolled.
pub fn prompt_scroll<P: PromptText + ?Sized>(scroll: usize, text: &P, available: usize, tab_width: u16) -> usize {
  let bytes = text.line_bytes();
  let width = line_width(bytes, tab_width);
  if available == 0 || width < available {
    return 0;
  }

  let cursor_col = visual_col_at(bytes, text.cursor(), tab_width);
  let scroll = if cursor_col < scroll {
    cursor_col
  } else if cursor_col >= scroll + available {
    cursor_col + 1 - available
  } else {
    scroll
  };
  scroll.min(width + 1 - available)
}
