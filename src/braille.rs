//! Packs 2x4 pixel blocks into Unicode braille glyphs.

use crate::geography::Bitmap;

/// First codepoint of the braille patterns block (no dots raised)
pub const BRAILLE_BASE: u32 = 0x2800;

/// Block offsets (dx, dy) paired with their dot bit, in braille dot order:
/// dots 1-3 down the left column, 4-6 down the right, then 7 and 8 on the
/// bottom row.
const DOTS: [(usize, usize, u8); 8] = [
    (0, 0, 0x01),
    (0, 1, 0x02),
    (0, 2, 0x04),
    (1, 0, 0x08),
    (1, 1, 0x10),
    (1, 2, 0x20),
    (0, 3, 0x40),
    (1, 3, 0x80),
];

/// Whether `ch` lies in the braille patterns block
#[inline]
pub fn is_braille(ch: char) -> bool {
    (BRAILLE_BASE..=BRAILLE_BASE + 0xFF).contains(&(ch as u32))
}

/// Dot mask of the 2x4 block whose top-left pixel is (px, py)
pub fn block_mask(pixels: &Bitmap, px: usize, py: usize) -> u8 {
    DOTS.iter()
        .filter(|&&(dx, dy, _)| pixels.get(px + dx, py + dy))
        .fold(0, |mask, &(_, _, bit)| mask | bit)
}

#[inline]
pub fn glyph(mask: u8) -> char {
    // Every u8 offset from the base is a valid braille codepoint
    char::from_u32(BRAILLE_BASE + mask as u32).unwrap_or(' ')
}

/// Encode a pixel grid into `height / 4` rows of `width / 2` glyphs.
/// Trailing partial blocks are dropped.
pub fn encode(pixels: &Bitmap) -> Vec<Vec<char>> {
    let cols = pixels.width() / 2;
    let rows = pixels.height() / 4;

    (0..rows)
        .map(|by| {
            (0..cols)
                .map(|bx| glyph(block_mask(pixels, bx * 2, by * 4)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::{NATIVE_COLS, NATIVE_ROWS, WORLD};

    fn single_dot(dx: usize, dy: usize) -> Bitmap {
        let mut block = Bitmap::new(2, 4);
        block.set(dx, dy, true);
        block
    }

    #[test]
    fn empty_block_is_blank_braille() {
        let grid = encode(&Bitmap::new(2, 4));
        assert_eq!(grid, vec![vec!['\u{2800}']]);
    }

    #[test]
    fn full_block_is_all_dots() {
        let grid = encode(&Bitmap::from_rows(&["11", "11", "11", "11"]));
        assert_eq!(grid, vec![vec!['\u{28FF}']]);
    }

    #[test]
    fn each_dot_maps_to_its_bit() {
        let expected = [
            ((0, 0), '\u{2801}'),
            ((0, 1), '\u{2802}'),
            ((0, 2), '\u{2804}'),
            ((0, 3), '\u{2840}'),
            ((1, 0), '\u{2808}'),
            ((1, 1), '\u{2810}'),
            ((1, 2), '\u{2820}'),
            ((1, 3), '\u{2880}'),
        ];
        for ((dx, dy), ch) in expected {
            assert_eq!(encode(&single_dot(dx, dy))[0][0], ch, "dot ({dx},{dy})");
        }
    }

    #[test]
    fn left_column_only() {
        let grid = encode(&Bitmap::from_rows(&["10", "10", "10", "10"]));
        assert_eq!(grid[0][0], glyph(0x01 | 0x02 | 0x04 | 0x40));
    }

    #[test]
    fn partial_blocks_are_dropped() {
        let grid = encode(&Bitmap::new(5, 9));
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|row| row.len() == 2));

        assert!(encode(&Bitmap::new(1, 3)).is_empty());
    }

    #[test]
    fn world_encodes_to_native_grid() {
        let grid = encode(&WORLD);
        assert_eq!(grid.len(), NATIVE_ROWS);
        assert!(grid.iter().all(|row| row.len() == NATIVE_COLS));
        assert!(grid.iter().flatten().all(|&ch| is_braille(ch)));
    }

    #[test]
    fn braille_block_bounds() {
        assert!(is_braille('\u{2800}'));
        assert!(is_braille('\u{28FF}'));
        assert!(!is_braille('\u{2900}'));
        assert!(!is_braille('N'));
    }
}
