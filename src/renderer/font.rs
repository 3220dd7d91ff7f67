//! 3x5 bitmap digits for the score display

/// Side length of one glyph cell in field units
pub const CHAR_PIXEL: f32 = 10.0;
pub const GLYPH_COLS: u32 = 3;
pub const GLYPH_ROWS: u32 = 5;

// Row-major, top row in the highest bits
const DIGITS: [u16; 10] = [
    0b111_101_101_101_111,
    0b010_010_010_010_010,
    0b111_001_111_100_111,
    0b111_001_111_001_111,
    0b101_101_111_001_001,
    0b111_100_111_001_111,
    0b111_100_111_101_111,
    0b111_001_001_001_001,
    0b111_101_111_101_111,
    0b111_101_111_001_111,
];

/// Lit `(col, row)` cells of a decimal digit. Non-digits draw nothing.
pub fn glyph_cells(digit: u8) -> impl Iterator<Item = (u32, u32)> {
    let bits = DIGITS.get(digit as usize).copied().unwrap_or(0);
    let cells = GLYPH_COLS * GLYPH_ROWS;
    (0..cells)
        .filter(move |&i| (bits >> (cells - 1 - i)) & 1 == 1)
        .map(|i| (i % GLYPH_COLS, i / GLYPH_COLS))
}
