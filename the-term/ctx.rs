//! Application context (state).

use std::{
  fs,
  path::Path,
};

use eyre::{
  Result,
  WrapErr,
};
use the_infobar::{
  InfoBar,
  InfoBarConfig,
  InfoState,
  render::Theme,
  selection::Range,
};
use tracing::{
  debug,
  info,
};

pub struct Ctx {
  pub info:         InfoState,
  pub bar:          InfoBar,
  pub theme:        Theme,
  pub config:       InfoBarConfig,
  /// Completion candidates offered for the prompt.
  pub words:        Vec<String>,
  pub label:        String,
  pub should_quit:  bool,
  pub needs_render: bool,
}

/// Read the bar settings, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<InfoBarConfig> {
  let Some(path) = path else {
    return Ok(InfoBarConfig::default());
  };
  let source = fs::read_to_string(path)
    .wrap_err_with(|| format!("failed to read config '{}'", path.display()))?;
  InfoBarConfig::from_toml_str(&source)
    .wrap_err_with(|| format!("invalid config '{}'", path.display()))
}

impl Ctx {
  pub fn new(label: String, words: Vec<String>, config: InfoBarConfig, theme: Theme, size: (u16, u16)) -> Self {
    let (width, height) = size;
    let mut ctx = Self {
      info: InfoState::new(),
      bar: InfoBar::new(width as usize, height as usize),
      theme,
      config,
      words,
      label,
      should_quit: false,
      needs_render: true,
    };
    ctx.open_prompt();
    ctx
  }

  /// Handle terminal resize.
  pub fn resize(&mut self, width: u16, height: u16) {
    self.bar.resize(width as usize, height as usize);
    self.needs_render = true;
  }

  pub fn open_prompt(&mut self) {
    self.info.prompt(self.label.clone(), "");
  }

  /// Close the prompt and echo what was entered.
  pub fn accept(&mut self) {
    let Some(text) = self.info.done_prompt() else {
      return;
    };
    info!(%text, "prompt accepted");
    self.info.message(format!("Entered: {text} (press : to prompt again)"));
  }

  pub fn cancel(&mut self) {
    if self.info.done_prompt().is_some() {
      debug!("prompt cancelled");
    } else {
      self.should_quit = true;
    }
  }

  pub fn error(&mut self, msg: &str) {
    // errors replace the prompt so they are visible
    self.info.done_prompt();
    self.info.error(msg);
  }

  pub fn toggle_key_menu(&mut self) {
    self.config.keymenu = !self.config.keymenu;
  }

  /// Cycle through the words matching the prompt text, writing the selected
  /// one back into the prompt.
  pub fn complete(&mut self, forward: bool) {
    if self.info.current_suggestion().is_none() {
      let prefix = self
        .info
        .prompt_line()
        .map(|line| line.text().to_string())
        .unwrap_or_default();
      let matches: Vec<String> = self
        .words
        .iter()
        .filter(|word| word.starts_with(&prefix))
        .cloned()
        .collect();
      debug!(%prefix, count = matches.len(), "completion candidates");
      self.info.set_suggestions(matches);
    }

    let Some(choice) = self.info.cycle_suggestion(forward).map(str::to_string) else {
      return;
    };
    if let Some(line) = self.info.prompt_line_mut() {
      line.set_text(choice);
    }
  }

  /// Called after every edit of the prompt text.
  pub fn edited(&mut self) {
    self.info.clear_suggestions();
  }

  /// Put the prompt cursor under a clicked column of the bar row.
  pub fn click(&mut self, col: u16, row: u16) {
    if row as usize != self.bar.row() {
      return;
    }
    let loc = self.bar.loc_from_visual(&self.info, col as usize, &self.config);
    if let Some(line) = self.info.prompt_line_mut() {
      line.set_range(Range::point(loc));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ctx() -> Ctx {
    Ctx::new(
      "> ".into(),
      vec!["open".into(), "options".into(), "quit".into()],
      InfoBarConfig::default(),
      Theme::default(),
      (40, 10),
    )
  }

  #[test]
  fn tab_cycles_prefix_matches() {
    let mut ctx = ctx();
    if let Some(line) = ctx.info.prompt_line_mut() {
      line.insert_str("o");
    }
    ctx.edited();

    ctx.complete(true);
    assert_eq!(ctx.info.suggestions(), ["open", "options"]);
    assert_eq!(ctx.info.prompt_line().map(|line| line.text()), Some("open"));
    ctx.complete(true);
    assert_eq!(ctx.info.prompt_line().map(|line| line.text()), Some("options"));
    ctx.complete(true);
    assert_eq!(ctx.info.prompt_line().map(|line| line.text()), Some("open"));
  }

  #[test]
  fn accept_then_escape_quits() {
    let mut ctx = ctx();
    if let Some(line) = ctx.info.prompt_line_mut() {
      line.insert_str("quit");
    }
    ctx.accept();
    assert!(!ctx.info.has_prompt());
    assert!(ctx.info.msg().starts_with("Entered: quit"));

    ctx.cancel();
    assert!(ctx.should_quit);
  }

  #[test]
  fn click_moves_the_cursor() {
    let mut ctx = ctx();
    if let Some(line) = ctx.info.prompt_line_mut() {
      line.insert_str("hello");
    }
    ctx.click(4, 9);
    assert_eq!(ctx.info.prompt_line().map(|line| line.range().head), Some(2));
    ctx.click(4, 0);
    assert_eq!(ctx.info.prompt_line().map(|line| line.range().head), Some(2));
  }

  #[test]
  fn missing_config_uses_defaults() {
    assert_eq!(load_config(None).unwrap(), InfoBarConfig::default());
  }

  #[test]
  fn config_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("infobar.toml");
    fs::write(&path, "keymenu = true\ntab-width = 2\n").unwrap();
    let config = load_config(Some(path.as_path())).unwrap();
    assert!(config.keymenu);
    assert_eq!(config.tab_width, 2);

    fs::write(&path, "tab-width = 0\n").unwrap();
    assert!(load_config(Some(path.as_path())).is_err());
    fs::write(&path, "colour = 1\n").unwrap();
    assert!(load_config(Some(path.as_path())).is_err());
  }
}
