//! Input handling - maps key and mouse events to context operations.

use crossterm::event::{
  KeyCode,
  KeyEvent,
  KeyEventKind,
  KeyModifiers,
  MouseButton,
  MouseEvent,
  MouseEventKind,
};

use crate::Ctx;

pub fn handle_key(ctx: &mut Ctx, event: KeyEvent) {
  if event.kind == KeyEventKind::Release {
    return;
  }
  ctx.needs_render = true;

  let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
  let shift = event.modifiers.contains(KeyModifiers::SHIFT);

  match (event.code, ctrl) {
    (KeyCode::Esc, _) | (KeyCode::Char('c'), true) => ctx.cancel(),
    (KeyCode::Char('k'), true) => ctx.toggle_key_menu(),
    (KeyCode::Char('e'), true) => ctx.error("Error: something went wrong"),
    _ if !ctx.info.has_prompt() => {
      if event.code == KeyCode::Char(':') {
        ctx.open_prompt();
      }
    },
    (KeyCode::Enter, _) => ctx.accept(),
    (KeyCode::Tab, _) => ctx.complete(true),
    (KeyCode::BackTab, _) => ctx.complete(false),
    (code, ctrl) => edit_prompt(ctx, code, ctrl, shift),
  }
}

fn edit_prompt(ctx: &mut Ctx, code: KeyCode, ctrl: bool, shift: bool) {
  let Some(line) = ctx.info.prompt_line_mut() else {
    return;
  };
  let edited = match (code, ctrl) {
    (KeyCode::Char('a'), true) => {
      line.select_all();
      false
    },
    (KeyCode::Char(ch), false) => {
      line.insert_char(ch);
      true
    },
    (KeyCode::Backspace, _) => {
      line.delete_backward();
      true
    },
    (KeyCode::Left, _) => {
      line.move_left(shift);
      false
    },
    (KeyCode::Right, _) => {
      line.move_right(shift);
      false
    },
    (KeyCode::Home, _) => {
      line.move_to_start(shift);
      false
    },
    (KeyCode::End, _) => {
      line.move_to_end(shift);
      false
    },
    _ => return,
  };
  if edited {
    ctx.edited();
  }
}

pub fn handle_mouse(ctx: &mut Ctx, event: MouseEvent) {
  if let MouseEventKind::Down(MouseButton::Left) = event.kind {
    ctx.click(event.column, event.row);
    ctx.needs_render = true;
  }
}
