//! Inline style markup: `[color]`, `[color::b]`, `[-]`, `[-::-]`.
//!
//! Lines are split into [`Token`]s so callers never index into the middle of
//! a tag or a multi-byte glyph.

/// One lexical unit of a marked-up line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A visible character
    Glyph(char),
    /// A complete style tag, brackets included
    Tag(&'a str),
}

/// Split a line into glyphs and style tags.
///
/// A `[` only opens a tag when a `]` follows with nothing but tag characters
/// in between; otherwise it is an ordinary glyph, so unterminated or foreign
/// brackets pass through untouched.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::with_capacity(line.len());
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            if let Some(len) = tag_len(rest) {
                tokens.push(Token::Tag(&rest[..len]));
                rest = &rest[len..];
                continue;
            }
        }
        tokens.push(Token::Glyph(ch));
        rest = &rest[ch.len_utf8()..];
    }
    tokens
}

fn is_tag_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '#' | ':' | '-')
}

/// Byte length of the tag starting at the `[` at the front of `s`
fn tag_len(s: &str) -> Option<usize> {
    let body = &s[1..];
    let close = body.find(|c: char| !is_tag_char(c))?;
    (close > 0 && body[close..].starts_with(']')).then_some(close + 2)
}

/// Visible text of a line with every style tag removed
pub fn strip_tags(line: &str) -> String {
    tokenize(line)
        .into_iter()
        .filter_map(|t| match t {
            Token::Glyph(ch) => Some(ch),
            Token::Tag(_) => None,
        })
        .collect()
}

/// Number of visible characters on a line
pub fn visible_width(line: &str) -> usize {
    tokenize(line)
        .iter()
        .filter(|t| matches!(t, Token::Glyph(_)))
        .count()
}

/// Foreground change requested by a tag
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Foreground {
    Keep,
    Reset,
    Set(String),
}

/// Parsed `[fg:bg:attrs]` tag. Background is accepted but not used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub fg: Foreground,
    /// `Some(true)` turns bold on, `Some(false)` clears attributes
    pub bold: Option<bool>,
}

impl Style {
    /// Parse a tag token such as `[dodgerblue::b]`. Returns None for text
    /// that is not a tag.
    pub fn parse(tag: &str) -> Option<Self> {
        let body = tag.strip_prefix('[')?.strip_suffix(']')?;
        let mut fields = body.splitn(3, ':');

        let fg = match fields.next().unwrap_or("") {
            "" => Foreground::Keep,
            "-" => Foreground::Reset,
            name => Foreground::Set(name.to_string()),
        };
        let _bg = fields.next();
        let bold = match fields.next() {
            None | Some("") => None,
            Some("-") => Some(false),
            Some(attrs) => Some(attrs.contains('b')),
        };
        Some(Self { fg, bold })
    }

    /// Whether this tag closes a styled region rather than opening one
    pub fn is_reset(&self) -> bool {
        self.fg == Foreground::Reset
    }
}

/// `[color]ch[-]` appended to `out`
pub fn push_colored(out: &mut String, color: &str, text: impl std::fmt::Display) {
    use std::fmt::Write;
    let _ = write!(out, "[{color}]{text}[-]");
}
