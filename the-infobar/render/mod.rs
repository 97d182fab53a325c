//! Rendering of the info bar.
//!
//! Everything here draws through the [`surface::Surface`] trait, so consumers
//! pick the backend: a real terminal buffer or the in-memory
//! [`surface::CellGrid`].

pub mod graphics;
pub mod infobar;
pub mod surface;
pub mod theme;

pub use graphics::{
  Color,
  Modifier,
  Style,
};
pub use surface::{
  Cell,
  CellGrid,
  Surface,
};
pub use theme::Theme;
