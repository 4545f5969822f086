//! Markup color names resolved to terminal colors.

use crossterm::style::Color;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Resolve a tag color: a `#RRGGBB` hex value or one of the named colors
/// used by the map and status bar.
pub fn resolve(name: &str) -> Option<Color> {
    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex);
    }
    named(&name.to_ascii_lowercase())
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn named(name: &str) -> Option<Color> {
    let color = match name {
        // Basic
        "black" => rgb(0, 0, 0),
        "white" => rgb(255, 255, 255),
        "silver" => rgb(192, 192, 192),
        "gray" | "grey" => rgb(128, 128, 128),
        "darkgray" | "darkgrey" => rgb(169, 169, 169),
        "red" => rgb(255, 0, 0),
        "green" => rgb(0, 128, 0),
        "yellow" => rgb(255, 255, 0),
        "aqua" => rgb(0, 255, 255),
        // Blues and cyans
        "turquoise" => rgb(64, 224, 208),
        "lightcyan" => rgb(224, 255, 255),
        "darkcyan" => rgb(0, 139, 139),
        "cadetblue" => rgb(95, 158, 160),
        "steelblue" => rgb(70, 130, 180),
        "dodgerblue" => rgb(30, 144, 255),
        "deepskyblue" => rgb(0, 191, 255),
        "darkslategray" | "darkslategrey" => rgb(47, 79, 79),
        // Greens
        "mediumseagreen" => rgb(60, 179, 113),
        "seagreen" => rgb(46, 139, 87),
        "lawngreen" => rgb(124, 252, 0),
        "limegreen" => rgb(50, 205, 50),
        "mediumspringgreen" => rgb(0, 250, 154),
        "palegreen" => rgb(152, 251, 152),
        "springgreen" => rgb(0, 255, 127),
        "darkgreen" => rgb(0, 100, 0),
        "forestgreen" => rgb(34, 139, 34),
        "yellowgreen" => rgb(154, 205, 50),
        "darkseagreen" => rgb(143, 188, 143),
        "mediumaquamarine" => rgb(102, 205, 170),
        // Reds, oranges, pinks
        "indianred" => rgb(205, 92, 92),
        "crimson" => rgb(220, 20, 60),
        "tomato" => rgb(255, 99, 71),
        "coral" => rgb(255, 127, 80),
        "orangered" => rgb(255, 69, 0),
        "darkorange" => rgb(255, 140, 0),
        "orange" => rgb(255, 165, 0),
        "darksalmon" => rgb(233, 150, 122),
        "hotpink" => rgb(255, 105, 180),
        "deeppink" => rgb(255, 20, 147),
        "mediumvioletred" => rgb(199, 21, 133),
        "darkmagenta" => rgb(139, 0, 139),
        // Browns and golds
        "gold" => rgb(255, 215, 0),
        "khaki" => rgb(240, 230, 140),
        "sandybrown" => rgb(244, 164, 96),
        "chocolate" => rgb(210, 105, 30),
        "peru" => rgb(205, 133, 63),
        _ => return None,
    };
    Some(color)
}
