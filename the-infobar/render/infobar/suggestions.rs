//! The scrollable row of completion candidates.

use the_core::grapheme::{
  char_width,
  str_width,
};
use tracing::trace;

use crate::render::{
  graphics::Style,
  surface::Surface,
};

pub const SCROLL_LEFT_MARKER: char = '<';
pub const SCROLL_RIGHT_MARKER: char = '>';

/// Width of the whole strip: every candidate plus one separating blank.
pub fn total_width<T: AsRef<str>>(suggestions: &[T]) -> usize {
  suggestions
    .iter()
    .map(|suggestion| str_width(suggestion.as_ref()) + 1)
    .sum()
}

/// Horizontal scroll offset of the strip, kept between frames.
///
/// The offset always stays within `0..=max(0, total_width - view_width)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionScroll {
  offset: usize,
}

impl SuggestionScroll {
  pub fn offset(&self) -> usize {
    self.offset
  }

  /// Bring the `current` candidate into view, leaving one column of margin
  /// on the side it was scrolled in from.
  pub fn scroll_to<T: AsRef<str>>(&mut self, suggestions: &[T], current: Option<usize>, view_width: usize) {
    let max = total_width(suggestions).saturating_sub(view_width);
    let before = self.offset;

    if let Some(current) = current {
      let mut x = 0;
      for (idx, suggestion) in suggestions.iter().enumerate() {
        let width = str_width(suggestion.as_ref());
        if idx == current {
          if x + width >= self.offset + view_width {
            self.offset = (x + width + 1).saturating_sub(view_width);
          } else if x < self.offset {
            self.offset = x.saturating_sub(1);
          }
          break;
        }
        x += width + 1;
      }
    }

    // Also resets to 0 once everything fits.
    self.offset = self.offset.min(max);
    if self.offset != before {
      trace!(before, after = self.offset, "suggestion strip scrolled");
    }
  }
}

/// Paints the strip on one row in the status line style, with the current
/// candidate reversed relative to it.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionStrip {
  pub row:   usize,
  pub width: usize,
  pub style: Style,
}

impl SuggestionStrip {
  pub fn paint<S, T>(&self, surface: &mut S, suggestions: &[T], current: Option<usize>, offset: usize)
  where
    S: Surface + ?Sized,
    T: AsRef<str>,
  {
    for col in 0..self.width {
      surface.set_cell(col, self.row, ' ', self.style);
    }

    let end = offset + self.width;
    let mut x = 0;
    'candidates: for (idx, suggestion) in suggestions.iter().enumerate() {
      let style = if current == Some(idx) {
        self.style.reversed()
      } else {
        self.style
      };
      for ch in suggestion.as_ref().chars() {
        for cell in 0..char_width(ch) {
          let glyph = if cell == 0 { ch } else { ' ' };
          self.put(surface, x, offset, glyph, style);
          x += 1;
          if x >= end {
            break 'candidates;
          }
        }
      }
      self.put(surface, x, offset, ' ', self.style);
      x += 1;
      if x >= end {
        break;
      }
    }

    if self.width == 0 {
      return;
    }
    if offset > 0 {
      surface.set_cell(0, self.row, SCROLL_LEFT_MARKER, self.style);
    }
    if total_width(suggestions) > end {
      surface.set_cell(self.width - 1, self.row, SCROLL_RIGHT_MARKER, self.style);
    }
  }

  fn put<S: Surface + ?Sized>(&self, surface: &mut S, x: usize, offset: usize, ch: char, style: Style) {
    if let Some(col) = x.checked_sub(offset).filter(|col| *col < self.width) {
      surface.set_cell(col, self.row, ch, style);
    }
  }
}
