//! Glyph renderer: 2x3 sub-cell pixel patterns to displayable characters.
//!
//! A [`PixelGrid`] is six booleans, bijective with an integer in `0..=63`
//! via a fixed bit order (`top_left` = 32 down to `bottom_right` = 1). Each
//! render quality tier is a pure lookup from pattern to character; the
//! tables below are computed once at compile time so rendering stays O(1)
//! per cell.

use gridatlas_types::RenderQuality;

/// A 2-wide, 3-tall sub-cell pixel pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    pub top_left: bool,
    pub top_right: bool,
    pub middle_left: bool,
    pub middle_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl PixelGrid {
    /// All pixels clear.
    pub const fn empty() -> Self {
        Self {
            top_left: false,
            top_right: false,
            middle_left: false,
            middle_right: false,
            bottom_left: false,
            bottom_right: false,
        }
    }

    /// All pixels set.
    pub const fn full() -> Self {
        Self {
            top_left: true,
            top_right: true,
            middle_left: true,
            middle_right: true,
            bottom_left: true,
            bottom_right: true,
        }
    }

    /// Pack into the 6-bit index (`top_left` = 32 ... `bottom_right` = 1).
    pub const fn index(&self) -> u8 {
        (self.top_left as u8) << 5
            | (self.top_right as u8) << 4
            | (self.middle_left as u8) << 3
            | (self.middle_right as u8) << 2
            | (self.bottom_left as u8) << 1
            | self.bottom_right as u8
    }

    /// Unpack a 6-bit index. Indices above 63 are not patterns.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index > 63 {
            return None;
        }
        Some(Self {
            top_left: index & 32 != 0,
            top_right: index & 16 != 0,
            middle_left: index & 8 != 0,
            middle_right: index & 4 != 0,
            bottom_left: index & 2 != 0,
            bottom_right: index & 1 != 0,
        })
    }

    /// Number of set pixels.
    pub const fn set_count(&self) -> u8 {
        self.index().count_ones() as u8
    }

    /// Bitwise OR of two patterns.
    pub const fn merge(&self, other: &Self) -> Self {
        match Self::from_index(self.index() | other.index()) {
            Some(grid) => grid,
            None => Self::empty(),
        }
    }

    /// Bitwise NOT of a pattern.
    pub const fn invert(&self) -> Self {
        match Self::from_index(!self.index() & 0x3F) {
            Some(grid) => grid,
            None => Self::empty(),
        }
    }

    /// Reverse lookup from a teletext glyph back to its pattern.
    ///
    /// Only the 64 teletext glyphs are patterns; any other character has no
    /// sub-cell geometry and returns `None`.
    pub fn from_glyph(ch: char) -> Option<Self> {
        TELETEXT_GLYPHS
            .iter()
            .position(|&g| g == ch)
            .and_then(|i| Self::from_index(i as u8))
    }
}

/// Map a pattern index (spec bit order) to Unicode sextant bit order.
const fn sextant_bits(index: u8) -> u8 {
    let mut bits = 0;
    if index & 32 != 0 {
        bits |= 1; // top left
    }
    if index & 16 != 0 {
        bits |= 2; // top right
    }
    if index & 8 != 0 {
        bits |= 4; // middle left
    }
    if index & 4 != 0 {
        bits |= 8; // middle right
    }
    if index & 2 != 0 {
        bits |= 16; // bottom left
    }
    if index & 1 != 0 {
        bits |= 32; // bottom right
    }
    bits
}

/// Character for a sextant bit pattern.
///
/// U+1FB00..U+1FB3B covers every 2x3 pattern except empty, full, and the
/// two half blocks, which predate the block and live elsewhere.
const fn sextant_glyph(bits: u8) -> char {
    match bits {
        0 => ' ',
        21 => '▌',
        42 => '▐',
        63 => '█',
        n => {
            let mut offset = (n - 1) as u32;
            if n > 21 {
                offset -= 1;
            }
            if n > 42 {
                offset -= 1;
            }
            match char::from_u32(0x1FB00 + offset) {
                Some(c) => c,
                None => ' ',
            }
        }
    }
}

/// Teletext tier: all 64 patterns map 1:1 to distinct glyphs.
pub const TELETEXT_GLYPHS: [char; 64] = {
    let mut table = [' '; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = sextant_glyph(sextant_bits(i as u8));
        i += 1;
    }
    table
};

/// AsciiBlock tier: 16 quadrant glyphs, indexed by
/// `upper_left<<3 | upper_right<<2 | lower_left<<1 | lower_right`.
pub const ASCII_BLOCK_GLYPHS: [char; 16] = [
    ' ', '▗', '▖', '▄', '▝', '▐', '▞', '▟', '▘', '▚', '▌', '▙', '▀', '▜', '▛', '█',
];

/// Shade tier: five glyphs by population-count bucket.
pub const SHADE_GLYPHS: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Ascii tier: same buckets as Shade, plain ASCII output.
pub const ASCII_GLYPHS: [char; 5] = [' ', '.', ':', '#', '@'];

/// Population-count bucket shared by the Shade and Ascii tiers:
/// 0, 1-2, 3-4, 5, 6 set pixels.
const fn shade_bucket(count: u8) -> usize {
    match count {
        0 => 0,
        1 | 2 => 1,
        3 | 4 => 2,
        5 => 3,
        _ => 4,
    }
}

/// Quantize a 2x3 pattern down to a 2x2 quadrant index.
///
/// The top sub-row becomes the upper quadrants and the middle sub-row the
/// lower quadrants; the bottom sub-row is dropped, so bottom-row content
/// never changes the rendered glyph.
const fn quadrant_index(grid: &PixelGrid) -> usize {
    (grid.top_left as usize) << 3
        | (grid.top_right as usize) << 2
        | (grid.middle_left as usize) << 1
        | grid.middle_right as usize
}

/// Render a pixel pattern at the given quality tier.
pub const fn render_pixel_grid(grid: PixelGrid, quality: RenderQuality) -> char {
    match quality {
        RenderQuality::Teletext => TELETEXT_GLYPHS[grid.index() as usize],
        RenderQuality::AsciiBlock => ASCII_BLOCK_GLYPHS[quadrant_index(&grid)],
        RenderQuality::Shade => SHADE_GLYPHS[shade_bucket(grid.set_count())],
        RenderQuality::Ascii => ASCII_GLYPHS[shade_bucket(grid.set_count())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_all_64_patterns() {
        for i in 0u8..64 {
            let grid = PixelGrid::from_index(i).unwrap();
            assert_eq!(grid.index(), i);
        }
        assert_eq!(PixelGrid::from_index(64), None);
    }

    #[test]
    fn bit_order_anchors() {
        assert_eq!(PixelGrid::empty().index(), 0);
        assert_eq!(PixelGrid::full().index(), 63);
        let tl = PixelGrid {
            top_left: true,
            ..PixelGrid::empty()
        };
        assert_eq!(tl.index(), 32);
        let br = PixelGrid {
            bottom_right: true,
            ..PixelGrid::empty()
        };
        assert_eq!(br.index(), 1);
    }

    #[test]
    fn teletext_glyphs_are_distinct() {
        for i in 0..64 {
            for j in (i + 1)..64 {
                assert_ne!(
                    TELETEXT_GLYPHS[i], TELETEXT_GLYPHS[j],
                    "patterns {i} and {j} share a glyph"
                );
            }
        }
    }

    #[test]
    fn teletext_known_glyphs() {
        assert_eq!(render_pixel_grid(PixelGrid::empty(), RenderQuality::Teletext), ' ');
        assert_eq!(render_pixel_grid(PixelGrid::full(), RenderQuality::Teletext), '█');

        // Left half block: all three left pixels.
        let left = PixelGrid {
            top_left: true,
            middle_left: true,
            bottom_left: true,
            ..PixelGrid::empty()
        };
        assert_eq!(render_pixel_grid(left, RenderQuality::Teletext), '▌');

        let right = left.invert();
        assert_eq!(render_pixel_grid(right, RenderQuality::Teletext), '▐');
    }

    #[test]
    fn from_glyph_inverts_the_teletext_table() {
        for (i, &g) in TELETEXT_GLYPHS.iter().enumerate() {
            assert_eq!(PixelGrid::from_glyph(g).unwrap().index() as usize, i);
        }
        assert_eq!(PixelGrid::from_glyph('Q'), None);
    }

    #[test]
    fn ascii_block_ignores_the_bottom_row() {
        for i in 0u8..64 {
            let grid = PixelGrid::from_index(i).unwrap();
            // Same top and middle rows, every bottom-row variant.
            for bottom in 0u8..4 {
                let variant = PixelGrid::from_index((i & 0b111100) | bottom).unwrap();
                assert_eq!(
                    render_pixel_grid(grid, RenderQuality::AsciiBlock),
                    render_pixel_grid(variant, RenderQuality::AsciiBlock),
                );
            }
        }
    }

    #[test]
    fn ascii_block_quadrant_anchors() {
        assert_eq!(
            render_pixel_grid(PixelGrid::empty(), RenderQuality::AsciiBlock),
            ' '
        );
        assert_eq!(
            render_pixel_grid(PixelGrid::full(), RenderQuality::AsciiBlock),
            '█'
        );
        let top = PixelGrid {
            top_left: true,
            top_right: true,
            ..PixelGrid::empty()
        };
        assert_eq!(render_pixel_grid(top, RenderQuality::AsciiBlock), '▀');
    }

    #[test]
    fn shade_and_ascii_bucket_by_population() {
        let cases = [
            (0u8, ' ', ' '),
            (1, '░', '.'),
            (2, '░', '.'),
            (3, '▒', ':'),
            (4, '▒', ':'),
            (5, '▓', '#'),
            (6, '█', '@'),
        ];
        for (count, shade, ascii) in cases {
            // Build a pattern with `count` pixels set.
            let index = match count {
                0 => 0u8,
                n => (0x3Fu8 << (6 - n)) & 0x3F,
            };
            let grid = PixelGrid::from_index(index).unwrap();
            assert_eq!(grid.set_count(), count);
            assert_eq!(render_pixel_grid(grid, RenderQuality::Shade), shade);
            assert_eq!(render_pixel_grid(grid, RenderQuality::Ascii), ascii);
        }
    }

    #[test]
    fn merge_is_bitwise_or_and_invert_is_bitwise_not() {
        let a = PixelGrid::from_index(0b101010).unwrap();
        let b = PixelGrid::from_index(0b010101).unwrap();
        assert_eq!(a.merge(&b), PixelGrid::full());
        assert_eq!(a.invert(), b);
        assert_eq!(a.merge(&PixelGrid::empty()), a);
        assert_eq!(PixelGrid::full().invert(), PixelGrid::empty());
    }
}
