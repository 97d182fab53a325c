//! Text primitives shared by the info bar crates.

pub mod grapheme;
