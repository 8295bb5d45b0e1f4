//! Fixed 5×7 bitmap font.
//!
//! Each glyph is seven rows, top first. A row is a 5-bit mask whose most
//! significant bit is the leftmost column.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const GLYPH_COLS: usize = 5;
pub const GLYPH_ROWS: usize = 7;

/// Horizontal advance per character, in cells (glyph width plus one blank column).
pub const ADVANCE_CELLS: f32 = 6.0;

/// Character drawn for anything the font does not cover.
pub const PLACEHOLDER: char = '?';

pub type Glyph = [u8; GLYPH_ROWS];

const PLACEHOLDER_GLYPH: Glyph = [14, 17, 1, 2, 4, 0, 4];

static GLYPHS: [(char, Glyph); 51] = [
    (' ', [0, 0, 0, 0, 0, 0, 0]),
    ('-', [0, 0, 0, 14, 0, 0, 0]),
    ('.', [0, 0, 0, 0, 0, 12, 12]),
    (',', [0, 0, 0, 0, 0, 12, 8]),
    (':', [0, 12, 12, 0, 12, 12, 0]),
    (';', [0, 12, 12, 0, 12, 8, 0]),
    ('/', [1, 2, 4, 8, 16, 0, 0]),
    ('(', [2, 4, 8, 8, 8, 4, 2]),
    (')', [8, 4, 2, 2, 2, 4, 8]),
    ('|', [4, 4, 4, 4, 4, 4, 4]),
    ('+', [0, 4, 4, 31, 4, 4, 0]),
    ('=', [0, 0, 31, 0, 31, 0, 0]),
    ('\'', [4, 4, 2, 0, 0, 0, 0]),
    ('"', [10, 10, 0, 0, 0, 0, 0]),
    ('0', [14, 17, 19, 21, 25, 17, 14]),
    ('1', [4, 12, 4, 4, 4, 4, 14]),
    ('2', [14, 17, 1, 2, 4, 8, 31]),
    ('3', [14, 17, 1, 6, 1, 17, 14]),
    ('4', [2, 6, 10, 18, 31, 2, 2]),
    ('5', [31, 16, 30, 1, 1, 17, 14]),
    ('6', [14, 16, 30, 17, 17, 17, 14]),
    ('7', [31, 1, 2, 4, 8, 8, 8]),
    ('8', [14, 17, 17, 14, 17, 17, 14]),
    ('9', [14, 17, 17, 15, 1, 17, 14]),
    ('A', [14, 17, 17, 31, 17, 17, 17]),
    ('B', [30, 17, 17, 30, 17, 17, 30]),
    ('C', [14, 17, 16, 16, 16, 17, 14]),
    ('D', [30, 17, 17, 17, 17, 17, 30]),
    ('E', [31, 16, 16, 30, 16, 16, 31]),
    ('F', [31, 16, 16, 30, 16, 16, 16]),
    ('G', [14, 17, 16, 23, 17, 17, 14]),
    ('H', [17, 17, 17, 31, 17, 17, 17]),
    ('I', [14, 4, 4, 4, 4, 4, 14]),
    ('J', [7, 2, 2, 2, 2, 18, 12]),
    ('K', [17, 18, 20, 24, 20, 18, 17]),
    ('L', [16, 16, 16, 16, 16, 16, 31]),
    ('M', [17, 27, 21, 21, 17, 17, 17]),
    ('N', [17, 25, 25, 21, 19, 19, 17]),
    ('O', [14, 17, 17, 17, 17, 17, 14]),
    ('P', [30, 17, 17, 30, 16, 16, 16]),
    ('Q', [14, 17, 17, 17, 21, 18, 13]),
    ('R', [30, 17, 17, 30, 18, 17, 17]),
    ('S', [14, 17, 16, 14, 1, 17, 14]),
    ('T', [31, 4, 4, 4, 4, 4, 4]),
    ('U', [17, 17, 17, 17, 17, 17, 14]),
    ('V', [17, 17, 17, 17, 17, 10, 4]),
    ('W', [17, 17, 17, 21, 21, 21, 10]),
    ('X', [17, 17, 10, 4, 10, 17, 17]),
    ('Y', [17, 17, 10, 4, 4, 4, 4]),
    ('Z', [31, 1, 2, 4, 8, 16, 31]),
    (PLACEHOLDER, PLACEHOLDER_GLYPH),
];

fn lookup(c: char) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|(k, _)| *k == c).map(|(_, g)| g)
}

/// Maps an arbitrary character onto the font's repertoire.
///
/// Diacritics are stripped (NFD, combining marks dropped), `a`–`z` fold to
/// upper case, typographic dashes and quotes become their ASCII forms, and
/// anything still unknown becomes [`PLACEHOLDER`].
pub fn normalize_char(c: char) -> char {
    let base = c.nfd().find(|ch| !is_combining_mark(*ch)).unwrap_or(c);

    let folded = match base {
        'a'..='z' => base.to_ascii_uppercase(),
        '\u{2013}' | '\u{2014}' | '_' => '-',
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2018}' | '\u{2019}' => '\'',
        other => other,
    };

    if lookup(folded).is_some() {
        folded
    } else {
        log::trace!("no glyph for {c:?}, drawing {PLACEHOLDER:?}");
        PLACEHOLDER
    }
}

/// Glyph for `c` after normalization.
pub fn glyph(c: char) -> &'static Glyph {
    lookup(normalize_char(c)).unwrap_or(&PLACEHOLDER_GLYPH)
}

/// Whether the cell at (`col`, `row`) is lit; row 0 is the top row.
#[inline]
pub fn is_lit(glyph: &Glyph, col: usize, row: usize) -> bool {
    col < GLYPH_COLS && row < GLYPH_ROWS && (glyph[row] >> (GLYPH_COLS - 1 - col)) & 1 == 1
}
