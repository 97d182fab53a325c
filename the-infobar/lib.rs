//! Single-line terminal info bar: messages, prompts and completion strips
//! rendered into a cell grid.

pub mod config;
pub mod info;
pub mod render;
pub mod selection;

pub use config::InfoBarConfig;
pub use info::{
  InfoState,
  PromptLine,
  PromptText,
};
pub use render::infobar::{
  InfoBar,
  RenderContext,
};
