//! Decoding and display width of single characters.
//!
//! The info bar works on raw line bytes rather than a rope, so characters are
//! decoded one at a time. Every decoded character occupies at least one
//! terminal cell; tabs are the only variable-width character and their width
//! depends on the visual column they start at.

use unicode_width::UnicodeWidthChar;

/// Placeholder emitted for bytes that do not start a valid UTF-8 sequence.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

#[inline]
pub fn tab_width_at(visual_x: usize, tab_width: u16) -> usize {
  let tab_width = tab_width.max(1) as usize;
  tab_width - (visual_x % tab_width)
}

/// Returns the number of cells `ch` occupies when it is not a tab.
#[must_use]
pub fn char_width(ch: char) -> usize {
  if ch.is_ascii() {
    // Control characters still get a cell so they stay addressable.
    1
  } else {
    UnicodeWidthChar::width(ch).unwrap_or(1).max(1)
  }
}

#[must_use]
pub fn str_width(s: &str) -> usize {
  s.chars().map(char_width).sum()
}

/// Decode the first character of `bytes`.
///
/// Returns the character and the number of bytes it used, or `None` for
/// empty input. An invalid or truncated sequence decodes as [`REPLACEMENT`]
/// and consumes exactly one byte, so decoding always makes progress.
#[must_use]
pub fn decode_char(bytes: &[u8]) -> Option<(char, usize)> {
  // A char is at most 4 bytes; don't let the chunk scan run over the line.
  let window = &bytes[..bytes.len().min(4)];
  let chunk = window.utf8_chunks().next()?;
  match chunk.valid().chars().next() {
    Some(ch) => Some((ch, ch.len_utf8())),
    None => Some((REPLACEMENT, 1)),
  }
}

/// Iterator over `(byte_offset, char)` pairs of a possibly malformed line.
#[derive(Debug, Clone)]
pub struct DecodeChars<'a> {
  bytes: &'a [u8],
  pos:   usize,
}

impl<'a> DecodeChars<'a> {
  pub fn new(bytes: &'a [u8]) -> Self {
    Self { bytes, pos: 0 }
  }
}

impl Iterator for DecodeChars<'_> {
  type Item = (usize, char);

  fn next(&mut self) -> Option<Self::Item> {
    let (ch, len) = decode_char(&self.bytes[self.pos..])?;
    let start = self.pos;
    self.pos += len;
    Some((start, ch))
  }
}
