//! State shown by the info bar.
//!
//! [`InfoState`] is owned by whoever runs the prompt session; the renderer
//! only reads it once per frame. The prompt's text lives behind the
//! [`PromptText`] trait so any single-line buffer can be rendered, with
//! [`PromptLine`] as the built-in implementation.

use crate::selection::Range;

/// Read access to the single line edited in a prompt.
pub trait PromptText {
  /// Raw bytes of the line. Not required to be valid UTF-8.
  fn line_bytes(&self) -> &[u8];
  /// Character index of the active cursor.
  fn cursor(&self) -> usize;
  /// Current selection, if anything is selected.
  fn selection(&self) -> Option<Range>;
}

/// A single line of editable text with one cursor and an optional selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptLine {
  text:  String,
  range: Range,
}

impl PromptLine {
  /// Create a line with the cursor placed after the last character.
  pub fn new(text: impl Into<String>) -> Self {
    let text = text.into();
    let end = text.chars().count();
    Self {
      text,
      range: Range::point(end),
    }
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn len_chars(&self) -> usize {
    self.text.chars().count()
  }

  pub fn range(&self) -> Range {
    self.range
  }

  pub fn set_range(&mut self, range: Range) {
    let end = self.len_chars();
    self.range = Range::new(range.anchor.min(end), range.head.min(end));
  }

  /// Replace the whole line, leaving the cursor at the end.
  pub fn set_text(&mut self, text: impl Into<String>) {
    *self = Self::new(text);
  }

  pub fn clear(&mut self) {
    self.set_text(String::new());
  }

  pub fn insert_char(&mut self, ch: char) {
    let mut buf = [0; 4];
    self.insert_str(ch.encode_utf8(&mut buf));
  }

  /// Insert at the cursor, replacing the selection if there is one.
  pub fn insert_str(&mut self, s: &str) {
    self.delete_selection();
    let at = self.byte_idx(self.range.head);
    self.text.insert_str(at, s);
    self.range = Range::point(self.range.head + s.chars().count());
  }

  /// Delete the selection, or the character before the cursor.
  pub fn delete_backward(&mut self) {
    if self.delete_selection() || self.range.head == 0 {
      return;
    }
    let head = self.range.head;
    let start = self.byte_idx(head - 1);
    let end = self.byte_idx(head);
    self.text.replace_range(start..end, "");
    self.range = Range::point(head - 1);
  }

  pub fn move_left(&mut self, extend: bool) {
    let head = self.range.head.saturating_sub(1);
    self.move_to(head, extend);
  }

  pub fn move_right(&mut self, extend: bool) {
    let head = (self.range.head + 1).min(self.len_chars());
    self.move_to(head, extend);
  }

  pub fn move_to_start(&mut self, extend: bool) {
    self.move_to(0, extend);
  }

  pub fn move_to_end(&mut self, extend: bool) {
    self.move_to(self.len_chars(), extend);
  }

  pub fn select_all(&mut self) {
    self.range = Range::new(0, self.len_chars());
  }

  fn move_to(&mut self, head: usize, extend: bool) {
    self.range = if extend {
      self.range.put_head(head)
    } else {
      Range::point(head)
    };
  }

  fn delete_selection(&mut self) -> bool {
    if self.range.is_empty() {
      return false;
    }
    let from = self.range.from();
    let start = self.byte_idx(from);
    let end = self.byte_idx(self.range.to());
    self.text.replace_range(start..end, "");
    self.range = Range::point(from);
    true
  }

  fn byte_idx(&self, char_idx: usize) -> usize {
    self
      .text
      .char_indices()
      .nth(char_idx)
      .map(|(idx, _)| idx)
      .unwrap_or(self.text.len())
  }
}

impl PromptText for PromptLine {
  fn line_bytes(&self) -> &[u8] {
    self.text.as_bytes()
  }

  fn cursor(&self) -> usize {
    self.range.head
  }

  fn selection(&self) -> Option<Range> {
    (!self.range.is_empty()).then_some(self.range)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MessageKind {
  #[default]
  None,
  Message,
  Error,
}

/// Everything the info bar displays: a message or error, or a prompt whose
/// label is the message text, plus completion suggestions.
#[derive(Debug, Clone, Default)]
pub struct InfoState {
  msg:                String,
  kind:               MessageKind,
  prompt:             Option<PromptLine>,
  suggestions:        Vec<String>,
  current_suggestion: Option<usize>,
}

impl InfoState {
  pub fn new() -> Self {
    Self::default()
  }

  /// Show an informational message. Ignored while a prompt is open.
  pub fn message(&mut self, msg: impl Into<String>) {
    if self.has_prompt() {
      return;
    }
    self.msg = msg.into();
    self.kind = MessageKind::Message;
  }

  /// Show an error message. Ignored while a prompt is open.
  pub fn error(&mut self, msg: impl Into<String>) {
    if self.has_prompt() {
      return;
    }
    self.msg = msg.into();
    self.kind = MessageKind::Error;
  }

  /// Open a prompt labelled `label` with `initial` as its text.
  pub fn prompt(&mut self, label: impl Into<String>, initial: impl Into<String>) {
    self.msg = label.into();
    self.kind = MessageKind::None;
    self.prompt = Some(PromptLine::new(initial));
    self.clear_suggestions();
  }

  /// Close the prompt, returning what was entered.
  pub fn done_prompt(&mut self) -> Option<String> {
    let line = self.prompt.take()?;
    self.msg.clear();
    self.clear_suggestions();
    Some(line.text)
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }

  pub fn msg(&self) -> &str {
    &self.msg
  }

  pub fn has_message(&self) -> bool {
    self.kind == MessageKind::Message
  }

  pub fn has_error(&self) -> bool {
    self.kind == MessageKind::Error
  }

  pub fn has_prompt(&self) -> bool {
    self.prompt.is_some()
  }

  pub fn prompt_line(&self) -> Option<&PromptLine> {
    self.prompt.as_ref()
  }

  pub fn prompt_line_mut(&mut self) -> Option<&mut PromptLine> {
    self.prompt.as_mut()
  }

  pub fn suggestions(&self) -> &[String] {
    &self.suggestions
  }

  pub fn has_suggestions(&self) -> bool {
    !self.suggestions.is_empty()
  }

  pub fn current_suggestion(&self) -> Option<usize> {
    self.current_suggestion
  }

  /// Replace the candidate list. Nothing is selected until the first cycle.
  pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
    self.suggestions = suggestions;
    self.current_suggestion = None;
  }

  pub fn clear_suggestions(&mut self) {
    self.set_suggestions(Vec::new());
  }

  /// Select the next (or previous) candidate, wrapping at either end.
  pub fn cycle_suggestion(&mut self, forward: bool) -> Option<&str> {
    let len = self.suggestions.len();
    if len == 0 {
      return None;
    }
    let next = match (self.current_suggestion, forward) {
      (None, true) => 0,
      (None, false) => len - 1,
      (Some(current), true) => (current + 1) % len,
      (Some(current), false) => (current + len - 1) % len,
    };
    self.current_suggestion = Some(next);
    self.suggestions.get(next).map(String::as_str)
  }
}
