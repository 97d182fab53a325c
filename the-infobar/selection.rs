//! Selection ranges on the single prompt line.
//!
//! A [`Range`] has two positions: `anchor` and `head`, both character
//! indices into the line. The `head` is where the cursor sits; the anchor is
//! the other end. Neither is required to come first:
//!
//! ```text
//! anchor=2, head=5: "he[llo] world"  (forward selection)
//! anchor=5, head=2: "he]llo[ world"  (backward selection)
//! anchor=4, head=4: "hell|o world"   (point, nothing selected)
//! ```
//!
//! Membership never depends on direction, see [`Range::contains`].

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
  pub anchor: usize,
  pub head:   usize,
}

impl Default for Range {
  fn default() -> Self {
    Range::point(0)
  }
}

impl Range {
  pub fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  pub fn point(head: usize) -> Self {
    Self::new(head, head)
  }

  /// Start of the range.
  #[inline]
  #[must_use]
  pub fn from(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the range, exclusive.
  #[inline]
  #[must_use]
  pub fn to(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  /// Whether the character at `pos` is covered: `from() <= pos < to()`.
  #[inline]
  pub fn contains(&self, pos: usize) -> bool {
    self.from() <= pos && pos < self.to()
  }

  /// Move the head, keeping the anchor in place.
  pub fn put_head(self, head: usize) -> Self {
    Self::new(self.anchor, head)
  }
}
