//! Interactive terminal client for the-infobar.
//!
//! Opens a prompt on the bottom row of the screen and offers the words given
//! on the command line as Tab completions:
//! - Prompt editing with selections
//! - Scrolling suggestion strip
//! - Messages, errors and the key hint menu

mod ctx;
mod input;
mod render;
mod terminal;
mod theme;

use std::{
  fs::File,
  path::{
    Path,
    PathBuf,
  },
  sync::Mutex,
  time::Duration,
};

use clap::Parser;
use crossterm::event::{
  self,
  Event,
};
use eyre::{
  Result,
  WrapErr,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ctx::Ctx;

const DEFAULT_WORDS: &[&str] = &[
  "open", "options", "save", "save-as", "search", "replace", "quit", "quit-all",
];

#[derive(Debug, Parser)]
#[command(name = "the-infobar")]
#[command(about = "Interactive terminal client for the-infobar")]
struct Cli {
  /// Info bar settings (TOML)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Theme file (TOML)
  #[arg(long)]
  theme: Option<PathBuf>,

  /// Write logs to this file; filtered by RUST_LOG
  #[arg(long)]
  log: Option<PathBuf>,

  /// Prompt label
  #[arg(long, default_value = "> ")]
  label: String,

  /// Completion candidates
  words: Vec<String>,
}

fn init_logging(path: &Path) -> Result<()> {
  let file = File::create(path).wrap_err_with(|| format!("failed to create log '{}'", path.display()))?;
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|err| eyre::eyre!(err))
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  if let Some(path) = &cli.log {
    init_logging(path)?;
  }

  let config = ctx::load_config(cli.config.as_deref())?;
  let theme = theme::load_theme(cli.theme.as_deref())?;
  let words = if cli.words.is_empty() {
    DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
  } else {
    cli.words
  };

  let mut terminal = terminal::Terminal::new()?;
  let size = terminal.size()?;
  let mut ctx = Ctx::new(cli.label, words, config, theme, (size.width, size.height));
  info!(width = size.width, height = size.height, "starting");

  terminal.enter_raw_mode()?;
  let result = run(&mut ctx, &mut terminal);
  terminal.leave_raw_mode()?;
  result
}

fn run(ctx: &mut Ctx, terminal: &mut terminal::Terminal) -> Result<()> {
  // Event loop
  loop {
    if ctx.should_quit {
      break;
    }

    if ctx.needs_render {
      render::render(ctx, terminal)?;
      ctx.needs_render = false;
    }

    if event::poll(Duration::from_millis(100))? {
      match event::read()? {
        Event::Key(key) => input::handle_key(ctx, key),
        Event::Mouse(mouse) => input::handle_mouse(ctx, mouse),
        Event::Resize(w, h) => {
          terminal.resize(w, h)?;
          ctx.resize(w, h);
        },
        _ => {},
      }
    }
  }

  Ok(())
}
