//! Rendering - draws the info bar into the ratatui frame buffer.

use eyre::Result;
use ratatui::{
  buffer::Buffer,
  layout::Position,
};
use the_infobar::{
  RenderContext,
  render::{
    Style,
    Surface,
  },
};

use crate::{
  Ctx,
  terminal::Terminal,
  theme::to_tui_style,
};

/// [`Surface`] over a ratatui buffer. The cursor is recorded and handed to
/// the frame once drawing is done.
pub struct FrameSurface<'a> {
  buffer: &'a mut Buffer,
  cursor: Option<Position>,
}

impl<'a> FrameSurface<'a> {
  pub fn new(buffer: &'a mut Buffer) -> Self {
    Self {
      buffer,
      cursor: None,
    }
  }

  pub fn cursor(&self) -> Option<Position> {
    self.cursor
  }
}

impl Surface for FrameSurface<'_> {
  fn set_cell(&mut self, col: usize, row: usize, ch: char, style: Style) {
    let (Ok(x), Ok(y)) = (u16::try_from(col), u16::try_from(row)) else {
      return;
    };
    if let Some(cell) = self.buffer.cell_mut((x, y)) {
      cell.set_char(ch).set_style(to_tui_style(style));
    }
  }

  fn show_cursor(&mut self, col: usize, row: usize) {
    if let (Ok(x), Ok(y)) = (u16::try_from(col), u16::try_from(row)) {
      self.cursor = Some(Position::new(x, y));
    }
  }

  fn size(&self) -> (usize, usize) {
    let area = self.buffer.area;
    (area.width as usize, area.height as usize)
  }
}

/// Render the current state to the terminal.
pub fn render(ctx: &mut Ctx, terminal: &mut Terminal) -> Result<()> {
  terminal.draw(|frame| {
    let mut surface = FrameSurface::new(frame.buffer_mut());
    let render_ctx = RenderContext {
      theme:  &ctx.theme,
      config: &ctx.config,
    };
    ctx.bar.display(&mut surface, &ctx.info, &render_ctx);
    let cursor = surface.cursor();
    if let Some(cursor) = cursor {
      frame.set_cursor_position(cursor);
    }
  })
}
