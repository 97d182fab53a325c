//! Theme loading and conversion of info bar styles to ratatui styles.

use std::{
  fs,
  path::Path,
};

use eyre::{
  Result,
  WrapErr,
};
use ratatui::style::{
  Color as TuiColor,
  Modifier as TuiModifier,
  Style as TuiStyle,
};
use the_infobar::render::{
  Color,
  Modifier,
  Style,
  Theme,
};
use tracing::info;

/// Load a theme file, naming the theme after the file stem.
pub fn load_theme(path: Option<&Path>) -> Result<Theme> {
  let Some(path) = path else {
    return Ok(Theme::default());
  };
  let source = fs::read_to_string(path)
    .wrap_err_with(|| format!("failed to read theme '{}'", path.display()))?;
  let name = path
    .file_stem()
    .and_then(|stem| stem.to_str())
    .unwrap_or("custom");
  info!(name, path = %path.display(), "loaded theme");
  Ok(Theme::from_toml_str(name, &source))
}

pub fn to_tui_color(color: Color) -> TuiColor {
  match color {
    Color::Reset => TuiColor::Reset,
    Color::Black => TuiColor::Black,
    Color::Red => TuiColor::Red,
    Color::Green => TuiColor::Green,
    Color::Yellow => TuiColor::Yellow,
    Color::Blue => TuiColor::Blue,
    Color::Magenta => TuiColor::Magenta,
    Color::Cyan => TuiColor::Cyan,
    Color::Gray => TuiColor::DarkGray,
    Color::LightRed => TuiColor::LightRed,
    Color::LightGreen => TuiColor::LightGreen,
    Color::LightYellow => TuiColor::LightYellow,
    Color::LightBlue => TuiColor::LightBlue,
    Color::LightMagenta => TuiColor::LightMagenta,
    Color::LightCyan => TuiColor::LightCyan,
    Color::LightGray => TuiColor::Gray,
    Color::White => TuiColor::White,
    Color::Rgb(r, g, b) => TuiColor::Rgb(r, g, b),
    Color::Indexed(idx) => TuiColor::Indexed(idx),
  }
}

pub fn to_tui_modifier(modifier: Modifier) -> TuiModifier {
  const PAIRS: &[(Modifier, TuiModifier)] = &[
    (Modifier::BOLD, TuiModifier::BOLD),
    (Modifier::DIM, TuiModifier::DIM),
    (Modifier::ITALIC, TuiModifier::ITALIC),
    (Modifier::UNDERLINED, TuiModifier::UNDERLINED),
    (Modifier::SLOW_BLINK, TuiModifier::SLOW_BLINK),
    (Modifier::RAPID_BLINK, TuiModifier::RAPID_BLINK),
    (Modifier::REVERSED, TuiModifier::REVERSED),
    (Modifier::HIDDEN, TuiModifier::HIDDEN),
    (Modifier::CROSSED_OUT, TuiModifier::CROSSED_OUT),
  ];

  PAIRS
    .iter()
    .filter(|(ours, _)| modifier.contains(*ours))
    .fold(TuiModifier::empty(), |acc, (_, tui)| acc | *tui)
}

/// Resolve a style to what the cell should finally show. Cells are written
/// whole, so unset colors become `Reset`.
pub fn to_tui_style(style: Style) -> TuiStyle {
  let modifier = style.add_modifier - style.sub_modifier;
  TuiStyle::default()
    .fg(style.fg.map_or(TuiColor::Reset, to_tui_color))
    .bg(style.bg.map_or(TuiColor::Reset, to_tui_color))
    .add_modifier(to_tui_modifier(modifier))
    .remove_modifier(to_tui_modifier(!modifier))
}
