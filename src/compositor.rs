//! Final coloring pass over marker-overlaid map lines.
//!
//! Works on [`Token`]s: tags are copied verbatim and never advance the
//! longitude column, while every visible character (glyph or label letter)
//! advances it by one. Characters between an opening tag and its reset keep
//! the color they already have.

use crate::braille::is_braille;
use crate::markup::{push_colored, tokenize, visible_width, Style, Token};
use crate::solar::phase_at;
use chrono::{DateTime, Utc};

/// Land color when the day/night overlay is off
pub const LAND_COLOR: &str = "green";

/// Color every line of the map.
///
/// With `day_night` off, runs of untagged characters are wrapped in
/// [`LAND_COLOR`]. With it on, each untagged braille glyph gets the color of
/// the solar phase at its column's longitude.
pub fn colorize(lines: &[String], now: DateTime<Utc>, day_night: bool) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if day_night {
                colorize_day_night(line, now)
            } else {
                colorize_static(line)
            }
        })
        .collect()
}

/// Whether a tag opens a styled region (as opposed to resetting one)
fn opens_region(tag: &str) -> bool {
    Style::parse(tag).is_some_and(|style| !style.is_reset())
}

/// Longitude at the center of glyph column `col` on a `width`-column map
pub fn column_longitude(col: usize, width: usize) -> f64 {
    if width == 0 {
        return 0.0;
    }
    -180.0 + (col as f64 + 0.5) * 360.0 / width as f64
}

fn colorize_static(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 16);
    let mut run = String::new();
    let mut styled = false;

    for token in tokenize(line) {
        match token {
            Token::Tag(tag) => {
                if !run.is_empty() {
                    push_colored(&mut out, LAND_COLOR, &run);
                    run.clear();
                }
                out.push_str(tag);
                styled = opens_region(tag);
            }
            Token::Glyph(ch) if styled => out.push(ch),
            Token::Glyph(ch) => run.push(ch),
        }
    }
    if !run.is_empty() {
        push_colored(&mut out, LAND_COLOR, &run);
    }
    out
}

fn colorize_day_night(line: &str, now: DateTime<Utc>) -> String {
    let width = visible_width(line);

    let mut out = String::with_capacity(line.len() * 4);
    let mut col = 0;
    let mut styled = false;

    for token in tokenize(line) {
        match token {
            Token::Tag(tag) => {
                out.push_str(tag);
                styled = opens_region(tag);
            }
            Token::Glyph(ch) => {
                if !styled && is_braille(ch) {
                    let phase = phase_at(now, column_longitude(col, width));
                    push_colored(&mut out, phase.color(), ch);
                } else {
                    out.push(ch);
                }
                col += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{strip_tags, tokenize};
    use crate::solar::Phase;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    /// Every opening tag is closed by a reset before the next opening tag
    /// and before the end of the line.
    fn well_formed(line: &str) -> bool {
        let mut open = false;
        for token in tokenize(line) {
            if let Token::Tag(tag) = token {
                let opening = opens_region(tag);
                if opening == open {
                    return false;
                }
                open = opening;
            }
        }
        !open
    }

    #[test]
    fn static_plain_line_is_wrapped_once() {
        let out = colorize(&lines(&["⣿⠁⠀"]), noon(), false);
        assert_eq!(out, vec!["[green]⣿⠁⠀[-]"]);
    }

    #[test]
    fn static_mode_leaves_marker_colors_alone() {
        let out = colorize(&lines(&["⣿[gold::b]DXB[-::-]⠁"]), noon(), false);
        assert_eq!(out[0], "[green]⣿[-][gold::b]DXB[-::-][green]⠁[-]");
        assert!(well_formed(&out[0]));
    }

    #[test]
    fn static_mode_empty_line() {
        assert_eq!(colorize(&lines(&[""]), noon(), false), vec![""]);
    }

    #[test]
    fn day_night_wraps_each_glyph() {
        let out = colorize(&lines(&["⣿⣿"]), noon(), true);
        // At 12:00 UTC column 0 (-90) is 06:00, column 1 (+90) is 18:00
        let expected = format!(
            "[{}]⣿[-][{}]⣿[-]",
            Phase::Dawn.color(),
            Phase::Evening.color()
        );
        assert_eq!(out[0], expected);
    }

    #[test]
    fn day_night_keeps_marker_text() {
        let line = "⣿⣿[red::b]MOS[-::-]⣿";
        let out = colorize(&lines(&[line]), noon(), true);
        assert!(out[0].contains("[red::b]MOS[-::-]"));
        assert_eq!(strip_tags(&out[0]), strip_tags(line));
        assert!(well_formed(&out[0]));
    }

    #[test]
    fn label_letters_advance_the_column() {
        // Six columns: the glyph after the label sits at column 5, whose
        // center is +150 -> 22:00 local at 12:00 UTC
        let out = colorize(&lines(&["⣿[red::b]ABCD[-::-]⣿"]), noon(), true);
        let tail = format!("[-::-][{}]⣿[-]", Phase::Night.color());
        assert!(out[0].ends_with(&tail), "{}", out[0]);
    }

    #[test]
    fn non_braille_characters_are_not_recolored() {
        let out = colorize(&lines(&["a b"]), noon(), true);
        assert_eq!(out[0], "a b");
    }

    #[test]
    fn day_night_is_idempotent() {
        let once = colorize(&lines(&["⣿⠁[gold::b]DXB[-::-]⣀⣤"]), noon(), true);
        let twice = colorize(&once, noon(), true);
        assert_eq!(once, twice);
    }

    #[test]
    fn static_is_idempotent() {
        let once = colorize(&lines(&["⣿⠁[gold::b]DXB[-::-]⣀⣤"]), noon(), false);
        let twice = colorize(&once, noon(), false);
        assert_eq!(once, twice);
    }

    #[test]
    fn unterminated_bracket_is_visible_text() {
        let line = "⣿[oops";
        for day_night in [false, true] {
            let out = colorize(&lines(&[line]), noon(), day_night);
            assert_eq!(strip_tags(&out[0]), line);
        }
    }

    #[test]
    fn column_longitudes_span_the_globe() {
        assert_eq!(column_longitude(0, 2), -90.0);
        assert_eq!(column_longitude(1, 2), 90.0);
        assert_eq!(column_longitude(0, 360), -179.5);
        assert_eq!(column_longitude(3, 0), 0.0);
    }
}
