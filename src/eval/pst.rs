//! Packed piece-square table.
//!
//! Each constant carries 12 signed bytes in its low three 32-bit words; the top
//! word is padding. Concatenated in order the bytes give 6 blocks of 64 squares
//! (P, N, B, R, Q, K), each block listed from a8 to h1 as seen by White. Base
//! material is added per block while decoding.

use cozy_chess::{Color, Piece, Square};
use std::sync::OnceLock;

pub const PIECE_KINDS: usize = 6;
pub const TABLE_LEN: usize = PIECE_KINDS * 64;

/// Base material per piece kind (middle-game weights), king has none.
pub const PIECE_VALUES: [i32; PIECE_KINDS] = [85, 303, 311, 417, 884, 0];

const WORDS_PER_CONSTANT: usize = 3;

const PACKED: [u128; 32] = [
    0x2f1e43310000000000000000, 0xf60c1c200f0d02fdfa113f22, 0x05fcfef2f408060b0a0305f9, 0xfa100101fafdfdf3f3050308,
    0x00000000f5130bf8f3f5feee, 0xc9f7cf1ee6eed2ac00000000, 0x20121de8f7031f0b1223eadb, 0x0b0922121a0907fb1624402a,
    0x0505faf4fc0a090e060801f9, 0xf5f908fffdf9e4f1f80c0809, 0xecd701f1f3f5f1f7eee2f4cb, 0xe8091d0ff8f707f3fc02eaf3,
    0x190901feff121911141511f8, 0x020506110d0605fdff031212, 0x0008070205090d0707070700, 0xf4ebf9f9f4f8fdef00100a03,
    0x1f1d100d150f041f19101510, 0x081e1608120d08fd160d2128, 0xfef9f2eef5fc110c0d02f9f4, 0xeefd0001f6f7f2e9f402fc04,
    0x07fff8f6dbfd04fffaf5f7ea, 0x1615161d060dfff2f2ed0308, 0x0402f6f91b0e1bf8fffcebf4, 0xffff07fff7f7f1f21c171c0e,
    0xfefa00f9fe00fdfffafaf2fb, 0xfffe07040104fbee020700fd, 0xf8080adfe6eff2f804faf6ff, 0xf0ecfdfcfbf5ff0e0600eee4,
    0xf1f9f5f7f50b02f6f8010bfb, 0xe5eee9e9ebf1fee7edf8f2f1, 0xdffc0300f1f7f0eae8f4f8f9, 0x070bf204e50611f80403f7ea,
];

pub type Table = [i32; TABLE_LEN];

/// Decode `PACKED` into a fresh table. Pure; prefer `table()` for lookups.
pub fn decode() -> Table {
    let mut out = [0i32; TABLE_LEN];
    let bytes = PACKED.iter().flat_map(|&c| {
        (0..WORDS_PER_CONSTANT).flat_map(move |w| ((c >> (32 * w)) as u32).to_le_bytes())
    });
    for (i, b) in bytes.enumerate().take(TABLE_LEN) {
        out[i] = b as i8 as i32 + PIECE_VALUES[i / 64];
    }
    out
}

static TABLE: OnceLock<Table> = OnceLock::new();

pub fn table() -> &'static Table {
    TABLE.get_or_init(decode)
}

/// Index into the table for a piece of `color` on `sq` (a1 = 0). White is
/// mirrored vertically since the table is laid out from a8.
#[inline]
pub fn index(piece: Piece, sq: Square, color: Color) -> usize {
    let flip = if color == Color::White { 56 } else { 0 };
    piece as usize * 64 + (sq as usize ^ flip)
}

#[inline]
pub fn value(piece: Piece, sq: Square, color: Color) -> i32 {
    table()[index(piece, sq, color)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn packed_constants_fit_in_96_bits() {
        assert!(PACKED.iter().all(|&c| c >> 96 == 0));
        assert_eq!(PACKED.len() * WORDS_PER_CONSTANT * 4, TABLE_LEN);
    }

    #[test]
    fn pawn_block_matches_reference() {
        let t = decode();
        let expected: [i32; 64] = [
            85, 85, 85, 85, 85, 85, 85, 85,
            134, 152, 115, 132, 119, 148, 102, 79,
            82, 87, 98, 100, 117, 113, 97, 75,
            78, 90, 88, 95, 96, 91, 93, 73,
            71, 83, 81, 90, 93, 88, 90, 72,
            72, 82, 82, 79, 86, 86, 101, 79,
            67, 83, 74, 72, 77, 96, 104, 74,
            85, 85, 85, 85, 85, 85, 85, 85,
        ];
        assert_eq!(&t[..64], &expected[..]);
    }

    #[test]
    fn king_block_matches_reference() {
        let t = decode();
        let expected: [i32; 64] = [
            -33, 10, 8, -8, -28, -18, 0, 6,
            14, -1, -11, -5, -4, -3, -20, -16,
            -5, 11, 1, -8, -10, 2, 11, -11,
            -9, -11, -7, -15, -15, -14, -8, -19,
            -25, -2, -15, -21, -23, -23, -18, -27,
            -7, -8, -12, -24, -22, -16, -9, -15,
            0, 3, -4, -33, -22, -9, 3, 4,
            -8, 17, 6, -27, 4, -14, 11, 7,
        ];
        assert_eq!(&t[5 * 64..], &expected[..]);
    }

    #[test]
    fn side_adjusted_lookup() {
        // White knight on d5 reads table row 3; black knight on d4 reads the same entry.
        assert_eq!(value(Piece::Knight, Square::D5, Color::White), 329);
        assert_eq!(value(Piece::Knight, Square::D4, Color::Black), 329);
        assert_eq!(value(Piece::Queen, Square::A1, Color::Black), 870);
        assert_eq!(value(Piece::King, Square::H1, Color::White), 7);
        assert_eq!(value(Piece::King, Square::H8, Color::Black), 7);
    }

    #[test]
    fn decode_is_deterministic_and_cached() {
        assert_eq!(decode(), decode());
        assert_eq!(table(), &decode());
        assert!(std::ptr::eq(table(), table()));
    }
}
