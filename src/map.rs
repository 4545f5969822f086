//! The map rendering pipeline: scale, encode, overlay markers, colorize.

use crate::braille::encode;
use crate::compositor::colorize;
use crate::geography::WORLD;
use crate::markers::{apply_markers, MarkerLayout};
use crate::scale::scale;
use chrono::{DateTime, Utc};

/// Columns and rows left for the map on a terminal of the given size, after
/// the border on every side and the status bar.
pub fn grid_size(width: u16, height: u16) -> (usize, usize) {
    (
        (width as usize).saturating_sub(2),
        (height as usize).saturating_sub(3),
    )
}

/// World map as rows of bare braille glyphs, `cols` x `rows`
pub fn glyph_lines(cols: usize, rows: usize) -> Vec<String> {
    let pixels = scale(&WORLD, cols * 2, rows * 4);
    encode(&pixels)
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Renders the map with a fixed set of markers
#[derive(Clone, Debug, Default)]
pub struct MapRenderer {
    markers: MarkerLayout,
}

impl MapRenderer {
    pub fn new(markers: MarkerLayout) -> Self {
        Self { markers }
    }

    /// Full marked-up map for a terminal of `width` x `height` cells, one
    /// `\n`-separated line per glyph row. Terminals too small for any glyph
    /// give an empty string.
    pub fn render(&self, width: u16, height: u16, now: DateTime<Utc>, day_night: bool) -> String {
        let (cols, rows) = grid_size(width, height);
        self.render_grid(cols, rows, now, day_night).join("\n")
    }

    /// Marked-up map lines for a `cols` x `rows` glyph grid
    pub fn render_grid(
        &self,
        cols: usize,
        rows: usize,
        now: DateTime<Utc>,
        day_night: bool,
    ) -> Vec<String> {
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        let glyphs = glyph_lines(cols, rows);
        let overlaid = apply_markers(&glyphs, &self.markers.place(cols, rows));
        colorize(&overlaid, now, day_night)
    }
}

/// Render with the default hand-placed city markers
pub fn render(width: u16, height: u16, now: DateTime<Utc>, day_night: bool) -> String {
    MapRenderer::default().render(width, height, now, day_night)
}

/// Day/night overlay switch, owned by the display loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayNight {
    enabled: bool,
}

impl DayNight {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Status bar snippet
    pub fn status(&self) -> &'static str {
        if self.enabled {
            "[yellow]Day/Night ON[white]"
        } else {
            "[darkgray]Day/Night OFF[white]"
        }
    }
}
