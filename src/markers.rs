//! City labels spliced over the glyph grid.

use crate::geography::{City, CityMarker, NATIVE_COLS, NATIVE_MARKERS, NATIVE_ROWS};

/// Equirectangular projection of (lat, lon) onto a `cols` x `rows` glyph
/// grid, clamped to the grid. Returns (row, col).
pub fn project(lat: f64, lon: f64, cols: usize, rows: usize) -> (usize, usize) {
    let col = ((lon + 180.0) / 360.0 * cols as f64).floor();
    let row = ((90.0 - lat) / 180.0 * rows as f64).floor();
    let clamp = |v: f64, n: usize| v.clamp(0.0, n.saturating_sub(1) as f64) as usize;
    (clamp(row, rows), clamp(col, cols))
}

/// Move a marker placed on the native grid to the same spot on a grid of
/// another size.
pub fn rescale(marker: CityMarker, cols: usize, rows: usize) -> CityMarker {
    CityMarker {
        row: marker.row * rows / NATIVE_ROWS,
        col: marker.col * cols / NATIVE_COLS,
        ..marker
    }
}

/// Which markers go on the map
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MarkerLayout {
    /// The hand-placed native markers, rescaled to the grid
    #[default]
    Native,
    /// Catalog cities, positioned by their coordinates
    Cities(Vec<&'static City>),
    None,
}

impl MarkerLayout {
    /// Markers positioned for a `cols` x `rows` grid
    pub fn place(&self, cols: usize, rows: usize) -> Vec<CityMarker> {
        match self {
            MarkerLayout::Native => NATIVE_MARKERS
                .iter()
                .map(|m| rescale(*m, cols, rows))
                .collect(),
            MarkerLayout::Cities(cities) => cities
                .iter()
                .map(|city| {
                    let (row, col) = project(city.lat, city.lon, cols, rows);
                    CityMarker { label: city.code, row, col, color: city.color }
                })
                .collect(),
            MarkerLayout::None => Vec::new(),
        }
    }
}

/// Splice marker labels into rows of bare glyphs.
///
/// Each label replaces as many glyphs as it has characters and is wrapped
/// as `[color::b]LABEL[-::-]`. Markers on a missing row, running past the
/// end of their row, or overlapping a label already placed are skipped.
pub fn apply_markers(lines: &[String], markers: &[CityMarker]) -> Vec<String> {
    let rows: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();

    // Accepted markers per row, in placement order
    let mut placed: Vec<Vec<&CityMarker>> = vec![Vec::new(); rows.len()];
    for marker in markers {
        let Some(row) = rows.get(marker.row) else {
            continue;
        };
        let len = marker.label.chars().count();
        let end = marker.col + len;
        if len == 0 || end > row.len() {
            continue;
        }
        let overlaps = placed[marker.row]
            .iter()
            .any(|p| marker.col < p.col + p.label.chars().count() && p.col < end);
        if !overlaps {
            placed[marker.row].push(marker);
        }
    }

    rows.iter()
        .zip(placed.iter_mut())
        .map(|(row, spans)| {
            if spans.is_empty() {
                return row.iter().collect();
            }
            spans.sort_by_key(|m| m.col);

            let mut out = String::with_capacity(row.len() * 4);
            let mut col = 0;
            for marker in spans.iter() {
                out.extend(&row[col..marker.col]);
                out.push_str(&format!("[{}::b]{}[-::-]", marker.color, marker.label));
                col = marker.col + marker.label.chars().count();
            }
            out.extend(&row[col..]);
            out
        })
        .collect()
}
