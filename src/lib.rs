//! Terminal world map with a live day/night overlay.
//!
//! The rendering core turns the built-in world bitmap into braille text for
//! any terminal size, splices city labels over it and colors it by solar
//! phase. [`map::render`] is the entry point; the display side (`terminal`,
//! `dashboard`) draws the resulting markup with crossterm.

pub mod braille;
pub mod clocks;
pub mod colors;
pub mod compositor;
pub mod dashboard;
pub mod geography;
pub mod help;
pub mod map;
pub mod markers;
pub mod markup;
pub mod scale;
pub mod settings;
pub mod solar;
pub mod terminal;

pub use map::{render, DayNight, MapRenderer};
