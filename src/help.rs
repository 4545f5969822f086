use crate::terminal::Terminal;
use crossterm::style::Color;

/// Key help for the live map
pub const MAP_HELP: &str = "WORLD MAP\n\
d      Toggle day/night overlay\n\
?      Show/hide this help\n\
q Esc  Quit";

/// Draw a box outline with an optional title centered in the top edge.
pub fn draw_box(term: &mut Terminal, x: usize, y: usize, w: usize, h: usize, title: &str, color: Color) {
    if w < 2 || h < 2 {
        return;
    }
    let (x0, y0) = (x as i32, y as i32);
    let (x1, y1) = ((x + w - 1) as i32, (y + h - 1) as i32);

    for cx in x0 + 1..x1 {
        term.set(cx, y0, '─', Some(color), false);
        term.set(cx, y1, '─', Some(color), false);
    }
    for cy in y0 + 1..y1 {
        term.set(x0, cy, '│', Some(color), false);
        term.set(x1, cy, '│', Some(color), false);
    }
    term.set(x0, y0, '┌', Some(color), false);
    term.set(x1, y0, '┐', Some(color), false);
    term.set(x0, y1, '└', Some(color), false);
    term.set(x1, y1, '┘', Some(color), false);

    let title_len = title.chars().count();
    if !title.is_empty() && title_len + 2 < w {
        let tx = x + (w - title_len) / 2;
        term.set_str(tx as i32, y0, title, Some(color), true);
    }
}

/// Render a centered help box with the provided text.
pub fn render_help_overlay(term: &mut Terminal, width: u16, height: u16, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2;

    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;

    draw_box(term, start_x, start_y, box_width, box_height, "", Color::White);

    for (i, line) in lines.iter().enumerate() {
        let y = (start_y + 1 + i) as i32;
        let padded = format!(" {:<max_width$} ", line);
        // First line is the heading
        term.set_str((start_x + 1) as i32, y, &padded, Some(Color::Grey), i == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(term: &Terminal, y: u16) -> String {
        let (w, _) = term.size();
        (0..w).filter_map(|x| term.cell(x, y).map(|c| c.ch)).collect()
    }

    #[test]
    fn box_has_corners_and_title() {
        let mut term = Terminal::offscreen(12, 4);
        draw_box(&mut term, 0, 0, 12, 4, " Map ", Color::Blue);
        assert_eq!(row_text(&term, 0), "┌── Map ───┐");
        assert_eq!(row_text(&term, 3), "└──────────┘");
        assert_eq!(term.cell(0, 1).map(|c| c.ch), Some('│'));
    }

    #[test]
    fn tiny_box_is_ignored() {
        let mut term = Terminal::offscreen(3, 3);
        draw_box(&mut term, 0, 0, 1, 3, "", Color::Blue);
        assert_eq!(row_text(&term, 0), "   ");
    }

    #[test]
    fn help_overlay_is_centered() {
        let mut term = Terminal::offscreen(40, 10);
        render_help_overlay(&mut term, 40, 10, MAP_HELP);
        let text: Vec<String> = (0..10).map(|y| row_text(&term, y)).collect();
        assert!(text.iter().any(|row| row.contains("Toggle day/night overlay")));
        assert!(text[3].contains("WORLD MAP"));
    }
}
