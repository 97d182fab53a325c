//! Named UI styles read from a TOML theme.
//!
//! ```toml
//! "message" = "accent"
//! "error-message" = { fg = "white", bg = "maroon" }
//! "selection" = { modifiers = ["reversed"] }
//!
//! [palette]
//! accent = "#ff8800"
//! ```
//!
//! A bare string sets the foreground. Colors are palette names, the 16 named
//! terminal colors, `#rrggbb` or an ANSI index.

use std::collections::HashMap;

use toml::{
  Value,
  map::Map,
};
use tracing::warn;

pub use super::graphics::{
  Color,
  Modifier,
  Style,
};

/// Styles for the scopes the bar reads: `default`, `message`,
/// `error-message`, `selection` and `statusline`.
#[derive(Clone, Debug, Default)]
pub struct Theme {
  name:   String,
  styles: HashMap<String, Style>,
}

impl Theme {
  /// Parse a theme from TOML source.
  ///
  /// Malformed input never fails: the problem is logged and whatever could
  /// be parsed is kept, so lookups fall back to their defaults.
  pub fn from_toml_str(name: &str, source: &str) -> Self {
    let table = match toml::from_str::<Map<String, Value>>(source) {
      Ok(table) => table,
      Err(err) => {
        warn!("Failed to parse theme '{name}': {err}");
        Map::new()
      },
    };

    let (styles, warnings) = parse_scopes(table);
    for warning in warnings {
      warn!("Theme '{name}': {warning}");
    }
    Self {
      name: name.into(),
      styles,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn try_get(&self, scope: &str) -> Option<Style> {
    self.styles.get(scope).copied()
  }
}

fn parse_scopes(mut table: Map<String, Value>) -> (HashMap<String, Style>, Vec<String>) {
  let mut warnings = Vec::new();
  let palette = table
    .remove("palette")
    .map(|value| Palette::parse(value, &mut warnings))
    .unwrap_or_default();

  let mut styles = HashMap::with_capacity(table.len());
  for (scope, value) in table {
    match palette.parse_style(value) {
      Ok(style) => {
        styles.insert(scope, style);
      },
      Err(err) => warnings.push(format!("skipping {scope:?}: {err}")),
    }
  }
  (styles, warnings)
}

/// User-defined color names, consulted before the built-in ones.
#[derive(Debug, Default)]
struct Palette {
  colors: HashMap<String, Color>,
}

impl Palette {
  fn parse(value: Value, warnings: &mut Vec<String>) -> Self {
    let Value::Table(entries) = value else {
      warnings.push("palette should be a table".to_string());
      return Self::default();
    };

    let mut colors = HashMap::with_capacity(entries.len());
    for (name, value) in entries {
      match value.as_str().and_then(builtin_color) {
        Some(color) => {
          colors.insert(name, color);
        },
        None => warnings.push(format!("invalid palette color {name:?}: {value}")),
      }
    }
    Self { colors }
  }

  fn color(&self, value: &Value) -> Result<Color, String> {
    let name = value
      .as_str()
      .ok_or_else(|| format!("expected a color name, found {value}"))?;
    self
      .colors
      .get(name)
      .copied()
      .or_else(|| builtin_color(name))
      .ok_or_else(|| format!("unknown color {name:?}"))
  }

  fn parse_style(&self, value: Value) -> Result<Style, String> {
    let entries = match value {
      Value::Table(entries) => entries,
      color @ Value::String(_) => return Ok(Style::default().fg(self.color(&color)?)),
      other => return Err(format!("expected a color or a table, found {other}")),
    };

    let mut style = Style::default();
    for (attribute, value) in entries {
      style = match attribute.as_str() {
        "fg" => style.fg(self.color(&value)?),
        "bg" => style.bg(self.color(&value)?),
        "modifiers" => {
          let modifiers = value.as_array().ok_or("modifiers should be an array")?;
          modifiers.iter().try_fold(style, |style, modifier| {
            modifier
              .as_str()
              .and_then(|name| name.parse().ok())
              .map(|modifier| style.add_modifier(modifier))
              .ok_or_else(|| format!("invalid modifier {modifier}"))
          })?
        },
        other => return Err(format!("unknown style attribute {other:?}")),
      };
    }
    Ok(style)
  }
}

fn builtin_color(name: &str) -> Option<Color> {
  let color = match name {
    "default" => Color::Reset,
    "black" => Color::Black,
    "red" | "maroon" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "light-red" => Color::LightRed,
    "light-green" => Color::LightGreen,
    "light-yellow" => Color::LightYellow,
    "light-blue" => Color::LightBlue,
    "light-magenta" => Color::LightMagenta,
    "light-cyan" => Color::LightCyan,
    "light-gray" => Color::LightGray,
    "white" => Color::White,
    hex if hex.starts_with('#') => return parse_hex(hex),
    index => return index.parse().ok().map(Color::Indexed),
  };
  Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
  let digits = hex.strip_prefix('#')?;
  if digits.len() != 6 || !digits.is_ascii() {
    return None;
  }
  let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
  Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
