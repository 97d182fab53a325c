use crate::{
  render::graphics::Style,
  selection::Range,
};

/// Decides the style of each prompt cell from the current selection.
#[derive(Debug, Clone, Copy)]
pub struct SelectionHighlighter {
  selection: Option<Range>,
  style:     Style,
}

impl SelectionHighlighter {
  pub fn new(selection: Option<Range>, selection_style: Style) -> Self {
    Self {
      selection,
      style: selection_style,
    }
  }

  /// Whether the character at `char_idx` is selected. The endpoints may be
  /// stored in either order.
  pub fn is_selected(&self, char_idx: usize) -> bool {
    self
      .selection
      .is_some_and(|range| range.contains(char_idx))
  }

  pub fn style_at(&self, char_idx: usize, base: Style) -> Style {
    if self.is_selected(char_idx) {
      self.style
    } else {
      base
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::graphics::{
    Color,
    Modifier,
  };

  #[test]
  fn backward_selection_highlights_like_forward() {
    let base = Style::default().fg(Color::White);
    let selected = base.add_modifier(Modifier::REVERSED);
    let forward = SelectionHighlighter::new(Some(Range::new(1, 3)), selected);
    let backward = SelectionHighlighter::new(Some(Range::new(3, 1)), selected);

    let styles = |h: &SelectionHighlighter| (0..5).map(|i| h.style_at(i, base)).collect::<Vec<_>>();
    assert_eq!(styles(&forward), vec![base, selected, selected, base, base]);
    assert_eq!(styles(&forward), styles(&backward));
  }

  #[test]
  fn no_selection_keeps_base() {
    let base = Style::default().bg(Color::Red);
    let highlighter = SelectionHighlighter::new(None, Style::default());
    assert!(!highlighter.is_selected(0));
    assert_eq!(highlighter.style_at(0, base), base);
  }

  quickcheck::quickcheck! {
      fn symmetric_under_endpoint_swap(a: u8, b: u8, pos: u8) -> bool {
          let (a, b, pos) = (a as usize, b as usize, pos as usize);
          let style = Style::default().add_modifier(Modifier::REVERSED);
          let base = Style::default();
          SelectionHighlighter::new(Some(Range::new(a, b)), style).style_at(pos, base)
              == SelectionHighlighter::new(Some(Range::new(b, a)), style).style_at(pos, base)
      }
  }
}
