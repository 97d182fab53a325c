use the_core::grapheme::char_width;

use crate::render::{
  graphics::Style,
  surface::Surface,
};

/// Static key hints drawn above the message row.
pub const KEY_MENU: &[&str] = &[
  "Tab Next, S-Tab Previous, Enter Accept, Esc Quit, ^E Error, ^K Key Menu",
  "S-Left/S-Right Select, ^A Select All, Home/End Move, Backspace Delete",
];

/// Draw `lines` on the rows directly above `bar_row`, each padded with
/// blanks to `width` and cut off at it.
pub fn draw_key_menu<S: Surface + ?Sized>(
  surface: &mut S,
  lines: &[&str],
  bar_row: usize,
  width: usize,
  style: Style,
) {
  let Some(top) = bar_row.checked_sub(lines.len()) else {
    return;
  };
  for (offset, line) in lines.iter().enumerate() {
    let row = top + offset;
    let mut col = 0;
    for ch in line.chars() {
      if col >= width {
        break;
      }
      surface.set_cell(col, row, ch, style);
      col += char_width(ch);
    }
    for col in col..width {
      surface.set_cell(col, row, ' ', style);
    }
  }
}
