//! Live world map: bordered map, city clock panels, status line, key handling.

use crate::clocks::PANELS;
use crate::colors;
use crate::help::{draw_box, render_help_overlay, MAP_HELP};
use crate::map::{grid_size, DayNight, MapRenderer};
use crate::markers::MarkerLayout;
use crate::solar::phase_at;
use crate::terminal::Terminal;
use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use crossterm::style::Color;
use crossterm::terminal::size;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// Rows taken by a clock panel, border included
const PANEL_HEIGHT: usize = 10;
/// Smallest map box left above the clock panels
const MIN_MAP_HEIGHT: usize = 8;
const MIN_PANEL_WIDTH: usize = 24;

pub struct DashboardConfig {
    /// Seconds between redraws
    pub tick: f32,
    pub day_night: bool,
    pub markers: MarkerLayout,
}

/// Per-frame view state owned by the display loop
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewState {
    pub overlay: DayNight,
    pub show_help: bool,
}

impl ViewState {
    /// Apply a key press. Returns true if the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.overlay.toggle();
                info!(enabled = self.overlay.is_enabled(), "day/night overlay toggled");
            }
            KeyCode::Char('?') => self.show_help = !self.show_help,
            _ => {}
        }
        false
    }
}

/// Status bar markup for the bottom row
pub fn status_line(now: DateTime<Utc>, overlay: DayNight) -> String {
    format!(
        "[yellow::b]UTC {}[-::-]  [aqua]{}[-]  {}  [darkgray]Greenwich: {}  |  d day/night  ? help  q quit[-]",
        now.format("%H:%M:%S"),
        now.format("%a, %d %b %Y"),
        overlay.status(),
        phase_at(now, 0.0),
    )
}

/// Draw one frame into the terminal buffer
pub fn draw_frame(term: &mut Terminal, renderer: &MapRenderer, now: DateTime<Utc>, view: ViewState) {
    term.clear();
    let (width, height) = term.size();
    let body = (height as usize).saturating_sub(1);

    // Clock panels go under the map when there is room for both
    let show_clocks =
        body >= PANEL_HEIGHT + MIN_MAP_HEIGHT && width as usize >= 2 * MIN_PANEL_WIDTH;
    let map_height = if show_clocks { body - PANEL_HEIGHT } else { body };
    let (cols, rows) = grid_size(width, map_height as u16 + 1);

    draw_box(
        term,
        0,
        0,
        width as usize,
        map_height,
        " [ World Map ] ",
        Color::Rgb { r: 30, g: 144, b: 255 },
    );

    let lines = renderer.render_grid(cols, rows, now, view.overlay.is_enabled());
    for (i, line) in lines.iter().enumerate() {
        term.set_markup(1, 1 + i as i32, line);
    }

    if show_clocks {
        draw_clock_panels(term, now, map_height, width as usize);
    }

    if height > 0 {
        term.set_markup(1, height as i32 - 1, &status_line(now, view.overlay));
    }

    if view.show_help {
        render_help_overlay(term, width, height, MAP_HELP);
    }
}

/// Two side-by-side clock panels starting at row `top`
fn draw_clock_panels(term: &mut Terminal, now: DateTime<Utc>, top: usize, width: usize) {
    let left = width / 2;
    let spans = [(0, left), (left, width - left)];

    for (panel, (x, w)) in PANELS.iter().zip(spans) {
        let color = colors::resolve(panel.border).unwrap_or(Color::White);
        draw_box(term, x, top, w, PANEL_HEIGHT, panel.title, color);
        for (i, line) in panel.lines(now).iter().enumerate() {
            term.set_markup_clipped((x + 1) as i32, (top + 1 + i) as i32, line, w - 2);
        }
    }
}

pub fn run(config: DashboardConfig) -> io::Result<()> {
    let mut term = Terminal::new(true)?;
    let renderer = MapRenderer::new(config.markers);
    let mut view = ViewState {
        overlay: DayNight::new(config.day_night),
        show_help: false,
    };
    let tick = Duration::from_secs_f32(config.tick);

    let (mut w, mut h) = term.size();
    info!(width = w, height = h, tick = config.tick, "map started");

    loop {
        if let Ok((new_w, new_h)) = size() {
            if new_w != w || new_h != h {
                w = new_w;
                h = new_h;
                term.resize(w, h);
                term.clear_screen()?;
                debug!(width = w, height = h, "terminal resized");
            }
        }

        draw_frame(&mut term, &renderer, Utc::now(), view);
        term.present()?;

        // Any key redraws immediately; otherwise wait out the tick
        if let Some(code) = term.wait_key(tick)? {
            if view.handle_key(code) {
                break;
            }
        }
    }

    info!("map stopped");
    Ok(())
}
