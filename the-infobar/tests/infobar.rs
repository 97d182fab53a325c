//! Whole-frame tests for the info bar against an in-memory grid.

use the_infobar::{
  InfoBar,
  InfoBarConfig,
  InfoState,
  PromptText,
  RenderContext,
  render::{
    CellGrid,
    Color,
    Modifier,
    Style,
    Surface,
    Theme,
    infobar::{
      InfoStyles,
      LineRenderer,
    },
  },
  selection::Range,
};

const WIDTH: usize = 10;
const HEIGHT: usize = 6;

fn frame(bar: &mut InfoBar, info: &InfoState, theme: &Theme, config: &InfoBarConfig) -> CellGrid {
  let mut grid = CellGrid::new(WIDTH, HEIGHT);
  let ctx = RenderContext { theme, config };
  bar.display(&mut grid, info, &ctx);
  grid
}

#[test]
fn error_message_ignores_message_override() {
  let theme = Theme::from_toml_str("green", r#""message" = "green""#);
  let config = InfoBarConfig::default();
  let mut info = InfoState::new();
  info.error("Error: file not found");

  let mut grid = CellGrid::new(40, HEIGHT);
  let mut bar = InfoBar::new(40, HEIGHT);
  bar.display(&mut grid, &info, &RenderContext {
    theme:  &theme,
    config: &config,
  });

  let error = Style::default().fg(Color::Black).bg(Color::Red);
  let row = HEIGHT - 1;
  assert!(grid.row_text(row).starts_with("Error: file not found"));
  for col in 0.."Error: file not found".len() {
    assert_eq!(grid.cell(col, row).unwrap().style, error, "col {col}");
  }
  // the rest of the row was blanked in the message style
  assert_eq!(
    grid.cell(39, row).unwrap().style,
    Style::default().fg(Color::Green)
  );
  assert_eq!(grid.cursor(), None);
}

#[test]
fn themed_error_style_is_used() {
  let theme = Theme::from_toml_str(
    "errors",
    r#""error-message" = { fg = "white", bg = "magenta" }"#,
  );
  let themed = Style::default().fg(Color::White).bg(Color::Magenta);
  let mut info = InfoState::new();
  info.error("boom");

  let grid = frame(&mut InfoBar::new(WIDTH, HEIGHT), &info, &theme, &InfoBarConfig::default());
  assert_eq!(grid.cell(0, HEIGHT - 1).unwrap().style, themed);
}

#[test]
fn empty_prompt_cursor_after_label() {
  let mut info = InfoState::new();
  info.prompt("> ", "");
  let grid = frame(
    &mut InfoBar::new(WIDTH, HEIGHT),
    &info,
    &Theme::default(),
    &InfoBarConfig::default(),
  );
  assert_eq!(grid.row_text(HEIGHT - 1), ">         ");
  assert_eq!(grid.cursor(), Some((2, HEIGHT - 1)));
}

#[test]
fn prompt_selection_uses_theme_selection_style() {
  let theme = Theme::from_toml_str("selection", r#""selection" = { bg = "blue" }"#);
  let selection = Style::default().bg(Color::Blue);
  let mut info = InfoState::new();
  info.prompt(":", "hello");
  if let Some(line) = info.prompt_line_mut() {
    line.set_range(Range::new(4, 1));
  }

  let grid = frame(&mut InfoBar::new(WIDTH, HEIGHT), &info, &theme, &InfoBarConfig::default());
  let row = HEIGHT - 1;
  let styled: Vec<bool> = (1..6)
    .map(|col| grid.cell(col, row).unwrap().style == selection)
    .collect();
  assert_eq!(styled, vec![false, true, true, true, false]);
  assert_eq!(grid.cursor(), Some((2, row)));
}

#[test]
fn suggestions_scroll_to_current() {
  let mut info = InfoState::new();
  info.prompt("> ", "");
  info.set_suggestions(vec!["abc".into(), "de".into(), "fghij".into()]);
  info.cycle_suggestion(false);
  assert_eq!(info.current_suggestion(), Some(2));

  let mut bar = InfoBar::new(WIDTH, HEIGHT);
  let grid = frame(&mut bar, &info, &Theme::default(), &InfoBarConfig::default());

  assert_eq!(bar.suggestion_offset(), 3);
  let strip_row = HEIGHT - 2;
  assert_eq!(grid.row_text(strip_row), "<de fghij ");

  let statusline = Style::default().add_modifier(Modifier::REVERSED);
  assert_eq!(grid.cell(0, strip_row).unwrap().style, statusline);
  // selected candidate is reversed a second time
  assert!(!grid.cell(4, strip_row).unwrap().style.has_modifier(Modifier::REVERSED));
}

#[test]
fn scroll_persists_and_resets_when_list_fits() {
  let mut info = InfoState::new();
  info.prompt("> ", "");
  info.set_suggestions(vec!["abc".into(), "de".into(), "fghij".into()]);
  info.cycle_suggestion(false);

  let mut bar = InfoBar::new(WIDTH, HEIGHT);
  let config = InfoBarConfig::default();
  frame(&mut bar, &info, &Theme::default(), &config);
  assert_eq!(bar.suggestion_offset(), 3);

  // the offset survives frames where nothing is selected
  info.set_suggestions(vec!["abc".into(), "de".into(), "fghij".into()]);
  frame(&mut bar, &info, &Theme::default(), &config);
  assert_eq!(bar.suggestion_offset(), 3);

  info.set_suggestions(vec!["ab".into(), "cd".into()]);
  let grid = frame(&mut bar, &info, &Theme::default(), &config);
  assert_eq!(bar.suggestion_offset(), 0);
  assert_eq!(grid.row_text(HEIGHT - 2), "ab cd     ");
}

#[test]
fn single_suggestion_is_not_drawn() {
  let mut info = InfoState::new();
  info.prompt("> ", "");
  info.set_suggestions(vec!["only".into()]);
  let grid = frame(
    &mut InfoBar::new(WIDTH, HEIGHT),
    &info,
    &Theme::default(),
    &InfoBarConfig::default(),
  );
  assert_eq!(grid.row_text(HEIGHT - 2), " ".repeat(WIDTH));
}

#[test]
fn key_menu_pushes_suggestions_up() {
  let config = InfoBarConfig {
    keymenu: true,
    ..InfoBarConfig::default()
  };
  let mut info = InfoState::new();
  info.prompt("> ", "x");
  info.set_suggestions(vec!["one".into(), "two".into()]);

  let mut bar = InfoBar::new(WIDTH, HEIGHT).with_key_menu(&["^Q Quit", "^S Save"]);
  let grid = frame(&mut bar, &info, &Theme::default(), &config);

  assert_eq!(grid.row_text(HEIGHT - 3), "^Q Quit   ");
  assert_eq!(grid.row_text(HEIGHT - 2), "^S Save   ");
  assert_eq!(grid.row_text(HEIGHT - 1), "> x       ");
  assert_eq!(grid.row_text(HEIGHT - 4), "one two   ");
}

#[test]
fn key_menu_shows_without_a_message() {
  let config = InfoBarConfig {
    keymenu: true,
    ..InfoBarConfig::default()
  };
  let mut bar = InfoBar::new(WIDTH, HEIGHT).with_key_menu(&["^Q Quit"]);
  let grid = frame(&mut bar, &InfoState::new(), &Theme::default(), &config);
  assert_eq!(grid.row_text(HEIGHT - 2), "^Q Quit   ");
  assert_eq!(grid.row_text(HEIGHT - 1), " ".repeat(WIDTH));
}

/// Records every write so "nothing drawn" can be asserted exactly.
#[derive(Default)]
struct Recorder {
  writes: usize,
}

impl Surface for Recorder {
  fn set_cell(&mut self, _col: usize, _row: usize, _ch: char, _style: Style) {
    self.writes += 1;
  }

  fn show_cursor(&mut self, _col: usize, _row: usize) {
    self.writes += 1;
  }

  fn size(&self) -> (usize, usize) {
    (WIDTH, HEIGHT)
  }
}

#[test]
fn hidden_bar_draws_nothing() {
  let config = InfoBarConfig {
    infobar: false,
    ..InfoBarConfig::default()
  };
  let theme = Theme::default();
  let mut recorder = Recorder::default();
  let mut bar = InfoBar::new(WIDTH, HEIGHT);
  bar.display(&mut recorder, &InfoState::new(), &RenderContext {
    theme:  &theme,
    config: &config,
  });
  assert_eq!(recorder.writes, 0);

  let mut info = InfoState::new();
  info.message("hi");
  bar.display(&mut recorder, &info, &RenderContext {
    theme:  &theme,
    config: &config,
  });
  assert!(recorder.writes >= WIDTH);
}

#[test]
fn stale_content_is_cleared() {
  let theme = Theme::default();
  let config = InfoBarConfig::default();
  let mut bar = InfoBar::new(WIDTH, HEIGHT);
  let mut grid = CellGrid::new(WIDTH, HEIGHT);

  let mut info = InfoState::new();
  info.message("a long one");
  bar.display(&mut grid, &info, &RenderContext {
    theme:  &theme,
    config: &config,
  });
  assert_eq!(grid.row_text(HEIGHT - 1), "a long one");

  info.message("short");
  bar.display(&mut grid, &info, &RenderContext {
    theme:  &theme,
    config: &config,
  });
  assert_eq!(grid.row_text(HEIGHT - 1), "short     ");
}

#[test]
fn long_prompt_scrolls_with_the_cursor() {
  let theme = Theme::default();
  let config = InfoBarConfig::default();
  let mut bar = InfoBar::new(WIDTH, HEIGHT);
  let mut info = InfoState::new();
  info.prompt("> ", "abcdefghijkl");

  let grid = frame(&mut bar, &info, &theme, &config);
  assert_eq!(bar.prompt_scroll(), 5);
  assert_eq!(grid.row_text(HEIGHT - 1), "> fghijkl ");
  assert_eq!(grid.cursor(), Some((9, HEIGHT - 1)));
  assert_eq!(bar.loc_from_visual(&info, 2, &config), 5);

  if let Some(line) = info.prompt_line_mut() {
    line.move_to_start(false);
  }
  let grid = frame(&mut bar, &info, &theme, &config);
  assert_eq!(bar.prompt_scroll(), 0);
  assert_eq!(grid.row_text(HEIGHT - 1), "> abcdefgh");
  assert_eq!(grid.cursor(), Some((2, HEIGHT - 1)));
}

/// A prompt buffer holding raw, possibly malformed bytes.
struct RawLine {
  bytes:     Vec<u8>,
  cursor:    usize,
  selection: Option<Range>,
}

impl PromptText for RawLine {
  fn line_bytes(&self) -> &[u8] {
    &self.bytes
  }

  fn cursor(&self) -> usize {
    self.cursor
  }

  fn selection(&self) -> Option<Range> {
    self.selection
  }
}

#[test]
fn invalid_bytes_render_as_placeholders() {
  let styles = InfoStyles::from_theme(&Theme::default());
  let line = LineRenderer {
    row: HEIGHT - 1,
    width: WIDTH,
    tab_width: 4,
    styles,
    error: false,
  };
  let mut text = RawLine {
    bytes:     vec![b'a', 0xff, b'b'],
    cursor:    2,
    selection: Some(Range::new(1, 2)),
  };

  let mut grid = CellGrid::new(WIDTH, HEIGHT);
  line.clear(&mut grid);
  line.render(&mut grid, "> ", Some((&text, 0)));
  assert_eq!(grid.row_text(HEIGHT - 1), "> a\u{FFFD}b     ");
  assert_eq!(grid.cell(3, HEIGHT - 1).unwrap().style, styles.selection);
  assert_eq!(grid.cell(4, HEIGHT - 1).unwrap().style, styles.message);
  assert_eq!(grid.cursor(), Some((4, HEIGHT - 1)));

  // cursor after the last character
  text.cursor = 3;
  text.selection = None;
  line.render(&mut grid, "> ", Some((&text, 0)));
  assert_eq!(grid.cursor(), Some((5, HEIGHT - 1)));

  // a truncated multi-byte sequence gives one placeholder per byte
  text.bytes = vec![0xe3, 0x81, b'x'];
  text.cursor = 2;
  line.clear(&mut grid);
  line.render(&mut grid, "> ", Some((&text, 0)));
  assert_eq!(grid.row_text(HEIGHT - 1), "> \u{FFFD}\u{FFFD}x     ");
  assert_eq!(grid.cursor(), Some((4, HEIGHT - 1)));
}
