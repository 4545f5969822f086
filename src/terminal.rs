use crate::colors;
use crate::markup::{tokenize, Foreground, Style, Token};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    alternate_screen: bool,
}

/// A single cell in the terminal buffer
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

impl Terminal {
    /// Take over the real terminal (raw mode, alternate screen)
    pub fn new(alternate_screen: bool) -> io::Result<Self> {
        let (width, height) = size()?;

        if alternate_screen {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
        }

        Ok(Self {
            width,
            height,
            buffer: blank_buffer(width, height),
            alternate_screen,
        })
    }

    /// A buffer of fixed size that never touches the real terminal
    pub fn offscreen(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            buffer: blank_buffer(width, height),
            alternate_screen: false,
        }
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = blank_buffer(width, height);
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            row.fill(Cell::default());
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.get(y as usize)?.get(x as usize)
    }

    /// Set a character at position with optional color
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bold };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    /// Draw a line of style markup starting at position, honoring color and
    /// bold tags. Unknown color names fall back to the default color.
    /// Returns the number of columns written.
    pub fn set_markup(&mut self, x: i32, y: i32, line: &str) -> usize {
        self.set_markup_clipped(x, y, line, usize::MAX)
    }

    /// Like [`Terminal::set_markup`], but stops after `max_cols` visible columns.
    pub fn set_markup_clipped(&mut self, x: i32, y: i32, line: &str, max_cols: usize) -> usize {
        let mut fg = None;
        let mut bold = false;
        let mut col = 0;

        for token in tokenize(line) {
            match token {
                Token::Tag(tag) => {
                    let Some(style) = Style::parse(tag) else {
                        continue;
                    };
                    match style.fg {
                        Foreground::Keep => {}
                        Foreground::Reset => fg = None,
                        Foreground::Set(name) => fg = colors::resolve(&name),
                    }
                    if let Some(b) = style.bold {
                        bold = b;
                    }
                }
                Token::Glyph(_) if col >= max_cols => break,
                Token::Glyph(ch) => {
                    self.set(x + col as i32, y, ch, fg, bold);
                    col += 1;
                }
            }
        }
        col
    }

    /// Render the entire buffer to screen
    pub fn present(&self) -> io::Result<()> {
        let mut out = stdout();
        queue!(out, MoveTo(0, 0))?;

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;

            for cell in row {
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }

                if let Some(color) = cell.fg {
                    queue!(out, SetForegroundColor(color), Print(cell.ch), ResetColor)?;
                } else {
                    queue!(out, Print(cell.ch))?;
                }

                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        out.flush()
    }

    /// Wait for a keypress with timeout
    pub fn wait_key(&self, timeout: Duration) -> io::Result<Option<KeyCode>> {
        if poll(timeout)? {
            if let Event::Key(key_event) = read()? {
                if key_event.kind != KeyEventKind::Release {
                    return Ok(Some(key_event.code));
                }
            }
        }
        Ok(None)
    }

    /// Write the buffer with ANSI colors (for print mode), trailing blanks
    /// trimmed from each row.
    pub fn write_ansi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.buffer {
            let used = row
                .iter()
                .rposition(|c| c.ch != ' ')
                .map_or(0, |i| i + 1);

            for cell in &row[..used] {
                if cell.ch == ' ' {
                    write!(out, " ")?;
                    continue;
                }

                if cell.bold {
                    write!(out, "\x1b[1m")?;
                }

                match cell.fg {
                    Some(Color::Rgb { r, g, b }) => write!(out, "\x1b[38;2;{};{};{}m", r, g, b)?,
                    Some(Color::AnsiValue(v)) => write!(out, "\x1b[38;5;{}m", v)?,
                    _ => {}
                }

                write!(out, "{}\x1b[0m", cell.ch)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn blank_buffer(width: u16, height: u16) -> Vec<Vec<Cell>> {
    vec![vec![Cell::default(); width as usize]; height as usize]
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_clipped_to_buffer() {
        let mut term = Terminal::offscreen(4, 2);
        term.set(-1, 0, 'x', None, false);
        term.set(4, 1, 'x', None, false);
        term.set(3, 1, 'y', None, false);
        assert_eq!(term.cell(3, 1).map(|c| c.ch), Some('y'));
        assert!(term.cell(4, 1).is_none());
    }

    #[test]
    fn markup_sets_colors_per_glyph() {
        let mut term = Terminal::offscreen(10, 1);
        let written = term.set_markup(0, 0, "[green]⣿[-][dodgerblue::b]NY[-::-]⠁");
        assert_eq!(written, 4);

        let green = colors::resolve("green");
        let blue = colors::resolve("dodgerblue");
        assert_eq!(term.cell(0, 0), Some(&Cell { ch: '⣿', fg: green, bold: false }));
        assert_eq!(term.cell(1, 0), Some(&Cell { ch: 'N', fg: blue, bold: true }));
        assert_eq!(term.cell(2, 0), Some(&Cell { ch: 'Y', fg: blue, bold: true }));
        assert_eq!(term.cell(3, 0), Some(&Cell { ch: '⠁', fg: None, bold: false }));
    }

    #[test]
    fn clipped_markup_stops_at_width() {
        let mut term = Terminal::offscreen(10, 1);
        let written = term.set_markup_clipped(1, 0, "[red]abc[-]def", 4);
        assert_eq!(written, 4);
        assert_eq!(term.cell(4, 0).map(|c| c.ch), Some('d'));
        assert_eq!(term.cell(4, 0).and_then(|c| c.fg), None);
        assert_eq!(term.cell(5, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn unknown_color_uses_default() {
        let mut term = Terminal::offscreen(3, 1);
        term.set_markup(0, 0, "[nosuchcolor]a");
        assert_eq!(term.cell(0, 0).and_then(|c| c.fg), None);
    }

    #[test]
    fn resize_reallocates_blank_buffer() {
        let mut term = Terminal::offscreen(2, 2);
        term.set(0, 0, 'x', None, false);
        term.resize(5, 3);
        assert_eq!(term.size(), (5, 3));
        assert_eq!(term.cell(0, 0).map(|c| c.ch), Some(' '));
        assert!(term.cell(4, 2).is_some());
    }

    #[test]
    fn ansi_output_trims_and_colors() {
        let mut term = Terminal::offscreen(6, 2);
        term.set_markup(0, 0, "[#FF0000]a[-]b");

        let mut out = Vec::new();
        term.write_ansi(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\x1b[38;2;255;0;0ma\x1b[0mb\x1b[0m\n\n");
    }
}
