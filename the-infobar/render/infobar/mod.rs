//! The info bar: a message or prompt on the bottom row, with an optional
//! key hint menu and a strip of completion candidates stacked above it.
//!
//! ```text
//! row - keymenu - 1 | abc de [fghij]           suggestion strip
//! row - 2 .. row-1  | key menu (optional)
//! row               | Open: src/ma|            message / prompt
//! ```
//!
//! [`InfoBar::display`] is called once per frame. It reads an [`InfoState`]
//! and writes cells into a [`Surface`]; the only state it keeps between frames
//! is the horizontal scroll of the prompt and of the suggestion strip.

pub mod columns;
pub mod highlight;
pub mod key_menu;
pub mod line;
pub mod suggestions;

use the_core::grapheme::str_width;
use tracing::{
  debug,
  trace,
};

pub use self::{
  key_menu::KEY_MENU,
  line::LineRenderer,
  suggestions::{
    SuggestionScroll,
    SuggestionStrip,
  },
};
use crate::{
  config::InfoBarConfig,
  info::{
    InfoState,
    PromptLine,
    PromptText,
  },
  render::{
    graphics::{
      Color,
      Modifier,
      Style,
    },
    surface::Surface,
    theme::Theme,
  },
};

/// Read-only collaborators consulted while drawing a frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
  pub theme:  &'a Theme,
  pub config: &'a InfoBarConfig,
}

/// Styles used by the bar, resolved from the theme with built-in fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoStyles {
  pub message:    Style,
  pub error:      Style,
  pub selection:  Style,
  pub statusline: Style,
}

impl InfoStyles {
  pub fn from_theme(theme: &Theme) -> Self {
    let default = theme.try_get("default").unwrap_or_default();
    let message = theme.try_get("message").unwrap_or(default);
    Self {
      message,
      error: theme
        .try_get("error-message")
        .unwrap_or_else(|| default.fg(Color::Black).bg(Color::Red)),
      selection: theme
        .try_get("selection")
        .unwrap_or_else(|| message.add_modifier(Modifier::REVERSED)),
      statusline: theme
        .try_get("statusline")
        .unwrap_or_else(|| default.add_modifier(Modifier::REVERSED)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct InfoBar {
  width:             usize,
  row:               usize,
  prompt_scroll:     usize,
  suggestion_scroll: SuggestionScroll,
  key_menu:          &'static [&'static str],
}

impl InfoBar {
  /// Create a bar for a `width` x `height` terminal, drawn on its last row.
  pub fn new(width: usize, height: usize) -> Self {
    Self {
      width,
      row: height.saturating_sub(1),
      prompt_scroll: 0,
      suggestion_scroll: SuggestionScroll::default(),
      key_menu: KEY_MENU,
    }
  }

  pub fn with_key_menu(mut self, lines: &'static [&'static str]) -> Self {
    self.key_menu = lines;
    self
  }

  pub fn resize(&mut self, width: usize, height: usize) {
    self.width = width;
    self.row = height.saturating_sub(1);
    debug!(width, row = self.row, "info bar resized");
  }

  pub fn width(&self) -> usize {
    self.width
  }

  /// Row of the message / prompt line.
  pub fn row(&self) -> usize {
    self.row
  }

  pub fn prompt_scroll(&self) -> usize {
    self.prompt_scroll
  }

  pub fn suggestion_offset(&self) -> usize {
    self.suggestion_scroll.offset()
  }

  pub fn key_menu_height(&self, config: &InfoBarConfig) -> usize {
    if config.keymenu { self.key_menu.len() } else { 0 }
  }

  /// Row of the suggestion strip, if the terminal is tall enough for one.
  pub fn suggestion_row(&self, config: &InfoBarConfig) -> Option<usize> {
    self.row.checked_sub(self.key_menu_height(config) + 1)
  }

  fn line_renderer(&self, styles: InfoStyles, config: &InfoBarConfig, error: bool) -> LineRenderer {
    LineRenderer {
      row: self.row,
      width: self.width,
      tab_width: config.tab_width,
      styles,
      error,
    }
  }

  /// Draw one frame.
  pub fn display<S: Surface + ?Sized>(&mut self, surface: &mut S, info: &InfoState, ctx: &RenderContext<'_>) {
    let styles = InfoStyles::from_theme(ctx.theme);
    let active = info.has_prompt() || info.has_message() || info.has_error();

    if active || ctx.config.infobar {
      let line = self.line_renderer(styles, ctx.config, info.has_error());
      line.clear(surface);
      if ctx.config.keymenu {
        key_menu::draw_key_menu(surface, self.key_menu, self.row, self.width, styles.message);
      }
      if active {
        self.display_line(surface, &line, info);
      }
    }

    if info.suggestions().len() > 1 {
      self.display_suggestions(surface, info, styles, ctx.config);
    }
  }

  fn display_line<S: Surface + ?Sized>(&mut self, surface: &mut S, line: &LineRenderer, info: &InfoState) {
    match info.prompt_line() {
      Some(prompt) => {
        let available = self.width.saturating_sub(str_width(info.msg()));
        let scroll = line::prompt_scroll(self.prompt_scroll, prompt, available, line.tab_width);
        if scroll != self.prompt_scroll {
          trace!(before = self.prompt_scroll, after = scroll, "prompt scrolled");
          self.prompt_scroll = scroll;
        }
        line.render(surface, info.msg(), Some((prompt, self.prompt_scroll)));
      },
      None => {
        self.prompt_scroll = 0;
        line.render::<S, PromptLine>(surface, info.msg(), None);
      },
    }
  }

  fn display_suggestions<S: Surface + ?Sized>(
    &mut self,
    surface: &mut S,
    info: &InfoState,
    styles: InfoStyles,
    config: &InfoBarConfig,
  ) {
    let Some(row) = self.suggestion_row(config) else {
      return;
    };
    self
      .suggestion_scroll
      .scroll_to(info.suggestions(), info.current_suggestion(), self.width);
    let strip = SuggestionStrip {
      row,
      width: self.width,
      style: styles.statusline,
    };
    strip.paint(
      surface,
      info.suggestions(),
      info.current_suggestion(),
      self.suggestion_scroll.offset(),
    );
  }

  /// Character index of the prompt text under screen column `col` of the
  /// bar row, as of the last drawn frame.
  pub fn loc_from_visual(&self, info: &InfoState, col: usize, config: &InfoBarConfig) -> usize {
    let Some(prompt) = info.prompt_line() else {
      return 0;
    };
    let line_col = col.saturating_sub(str_width(info.msg())) + self.prompt_scroll;
    columns::char_at_visual_col(prompt.line_bytes(), line_col, config.tab_width)
  }
}
