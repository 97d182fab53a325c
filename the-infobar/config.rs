use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TAB_WIDTH: u16 = 4;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("failed to parse info bar config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error("tab-width must be greater than zero")]
  ZeroTabWidth,
}

/// Global settings consulted by the info bar every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct InfoBarConfig {
  /// Keep the bar drawn even when there is nothing to show.
  pub infobar:   bool,
  /// Show the static key hint rows above the bar.
  pub keymenu:   bool,
  pub tab_width: u16,
}

impl Default for InfoBarConfig {
  fn default() -> Self {
    Self {
      infobar:   true,
      keymenu:   false,
      tab_width: DEFAULT_TAB_WIDTH,
    }
  }
}

impl InfoBarConfig {
  pub fn from_toml_str(source: &str) -> Result<Self> {
    let config: Self = toml::from_str(source)?;
    if config.tab_width == 0 {
      return Err(ConfigError::ZeroTabWidth);
    }
    tracing::debug!(?config, "loaded info bar config");
    Ok(config)
  }
}
