//! Nearest-neighbor bitmap resampling

use crate::geography::Bitmap;

/// Resample `source` onto a `dst_w` x `dst_h` grid by nearest neighbor.
///
/// Destination pixel (x, y) reads source pixel
/// `(x * src_w / dst_w, y * src_h / dst_h)`, clamped to the source. Works for
/// both up- and down-sampling; a zero destination dimension gives an empty
/// bitmap, and an empty source gives an all-water one.
pub fn scale(source: &Bitmap, dst_w: usize, dst_h: usize) -> Bitmap {
    let mut scaled = Bitmap::new(dst_w, dst_h);
    let (src_w, src_h) = (source.width(), source.height());
    if dst_w == 0 || dst_h == 0 || src_w == 0 || src_h == 0 {
        return scaled;
    }

    for y in 0..dst_h {
        let sy = (y * src_h / dst_h).min(src_h - 1);
        for x in 0..dst_w {
            let sx = (x * src_w / dst_w).min(src_w - 1);
            scaled.set(x, y, source.get(sx, sy));
        }
    }
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::WORLD;

    #[test]
    fn upsample_two_by_two() {
        let source = Bitmap::from_rows(&["11", "00"]);
        let scaled = scale(&source, 4, 4);
        assert_eq!(scaled.rows(), vec!["1111", "1111", "0000", "0000"]);
    }

    #[test]
    fn upsample_keeps_quadrants() {
        let source = Bitmap::from_rows(&["10", "01"]);
        let scaled = scale(&source, 4, 4);
        assert_eq!(scaled.rows(), vec!["1100", "1100", "0011", "0011"]);
    }

    #[test]
    fn downsample_picks_nearest_sample() {
        let source = Bitmap::from_rows(&["1010", "0000", "0101", "0000"]);
        let scaled = scale(&source, 2, 2);
        // Samples (0,0), (2,0), (0,2), (2,2)
        assert_eq!(scaled.rows(), vec!["11", "00"]);
    }

    #[test]
    fn output_has_requested_dimensions() {
        for (w, h) in [(1, 1), (7, 3), (132, 56), (300, 200), (13, 97)] {
            let scaled = scale(&WORLD, w, h);
            assert_eq!(scaled.width(), w);
            assert_eq!(scaled.height(), h);
            assert_eq!(scaled.rows().len(), h);
        }
    }

    #[test]
    fn identity_scale_is_lossless() {
        let scaled = scale(&WORLD, WORLD.width(), WORLD.height());
        assert_eq!(&scaled, &*WORLD);
    }

    #[test]
    fn zero_dimensions_give_empty_grid() {
        let scaled = scale(&WORLD, 0, 10);
        assert_eq!(scaled.width(), 0);
        assert!(scaled.rows().iter().all(|r| r.is_empty()));

        let scaled = scale(&WORLD, 10, 0);
        assert_eq!(scaled.height(), 0);
        assert!(scaled.rows().is_empty());
    }

    #[test]
    fn empty_source_gives_water() {
        let scaled = scale(&Bitmap::new(0, 0), 3, 2);
        assert_eq!(scaled.rows(), vec!["000", "000"]);
    }
}
