//! Block-drawing glyphs
//!
//! | Code          | Char | Name              |
//! |---------------|------|-------------------|
//! | U+0020        |      | Space             |
//! | U+2580        | ▀    | Upper Half Block  |
//! | U+2584        | ▄    | Lower Half Block  |
//! | U+2588        | █    | Full Block        |
//! | U+258C        | ▌    | Left Half Block   |
//! | U+2590        | ▐    | Right Half Block  |
//! | U+1FB00-1FB3B | 🬀-🬻 | Block Sextant-*   |
//!
//! See <https://unicode.org/charts/PDF/U1FB00.pdf>

use crate::error::{Error, Result};

use std::convert::TryFrom;

pub const SPACE: u32       = 0x20;
pub const UPPER_HALF: u32  = 0x2580;
pub const LOWER_HALF: u32  = 0x2584;
pub const FULL_BLOCK: u32  = 0x2588;
pub const LEFT_HALF: u32   = 0x258C;
pub const RIGHT_HALF: u32  = 0x2590;
/// First sextant, BLOCK SEXTANT-1
pub const SEXTANT_FIRST: u32 = 0x1FB00;
/// Last sextant, BLOCK SEXTANT-23456
pub const SEXTANT_LAST: u32  = 0x1FB3B;

bitflags::bitflags! {
    /// Sub-cells of a 2 x 3 sextant grid
    ///
    /// Numbered as in the Unicode character names, left to right and
    ///   top to bottom
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sextant: u8 {
        /// Upper left
        const ONE   = 1 << 0;
        /// Upper right
        const TWO   = 1 << 1;
        /// Middle left
        const THREE = 1 << 2;
        /// Middle right
        const FOUR  = 1 << 3;
        /// Lower left
        const FIVE  = 1 << 4;
        /// Lower right
        const SIX   = 1 << 5;
    }
}

// Masks Unicode encodes outside of the sextant block
const LEFT_COLUMN: u8  = 0b01_0101;
const RIGHT_COLUMN: u8 = 0b10_1010;

impl Sextant {
    /// Sub-cell at column `col` (0,1) and row `row` (0,1,2)
    pub fn cell(col: usize, row: usize) -> Sextant {
        assert!(col < 2 && row < 3, "no sextant at column {} row {}", col, row);
        Sextant::from_bits_truncate(1 << (row * 2 + col))
    }
    /// Sextant mask of a code point in U+1FB00 ..= U+1FB3B
    ///
    ///     use cellglyph::Sextant;
    ///
    ///     assert_eq!(Sextant::from_code_point(0x1FB00), Some(Sextant::ONE));
    ///     assert_eq!(Sextant::from_code_point(0x1FB13), Some(Sextant::THREE | Sextant::FIVE));
    ///     assert_eq!(Sextant::from_code_point(0x2588), None);
    ///
    pub fn from_code_point(ch: u32) -> Option<Sextant> {
        if ch < SEXTANT_FIRST || ch > SEXTANT_LAST {
            return None;
        }
        let mut bits = (ch - SEXTANT_FIRST) as u8 + 1;
        if bits >= LEFT_COLUMN {
            bits += 1;
        }
        if bits >= RIGHT_COLUMN {
            bits += 1;
        }
        Some(Sextant::from_bits_truncate(bits))
    }
    /// Code point of this mask within the sextant block
    ///
    /// The empty and full masks and the two single-column masks have
    ///   no code point in the block
    pub fn code_point(self) -> Option<u32> {
        let bits = self.bits();
        if bits == 0 || bits == Sextant::all().bits() || bits == LEFT_COLUMN || bits == RIGHT_COLUMN {
            return None;
        }
        let mut i = u32::from(bits) - 1;
        if bits > RIGHT_COLUMN {
            i -= 1;
        }
        if bits > LEFT_COLUMN {
            i -= 1;
        }
        Some(SEXTANT_FIRST + i)
    }
}

/// Block-drawing glyph with a known rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// U+0020
    Space,
    /// U+2580 ▀
    UpperHalf,
    /// U+2584 ▄
    LowerHalf,
    /// U+258C ▌
    LeftHalf,
    /// U+2590 ▐
    RightHalf,
    /// U+2588 █
    FullBlock,
    /// U+1FB00 ..= U+1FB3B
    ///
    /// Only masks with a code point in the block are canonical; build
    ///   glyphs with [Glyph::from_sextant] to keep equal shapes equal
    ///
    /// [Glyph::from_sextant]: enum.Glyph.html#method.from_sextant
    Sextant(Sextant),
}

impl Glyph {
    /// Glyph drawing the shape of mask `s`
    ///
    /// Masks Unicode encodes outside of the sextant block become the
    ///   plain glyph of the same shape
    ///
    ///     use cellglyph::{Glyph,Sextant};
    ///
    ///     assert_eq!(Glyph::from_sextant(Sextant::all()), Glyph::FullBlock);
    ///     assert_eq!(Glyph::from_sextant(Sextant::empty()), Glyph::Space);
    ///     assert_eq!(Glyph::from_sextant(Sextant::ONE), Glyph::Sextant(Sextant::ONE));
    ///
    pub fn from_sextant(s: Sextant) -> Glyph {
        match s.bits() {
            0            => Glyph::Space,
            LEFT_COLUMN  => Glyph::LeftHalf,
            RIGHT_COLUMN => Glyph::RightHalf,
            b if b == Sextant::all().bits() => Glyph::FullBlock,
            _ => Glyph::Sextant(s),
        }
    }
    pub fn from_code_point(ch: u32) -> Option<Glyph> {
        let g = match ch {
            SPACE      => Glyph::Space,
            UPPER_HALF => Glyph::UpperHalf,
            LOWER_HALF => Glyph::LowerHalf,
            LEFT_HALF  => Glyph::LeftHalf,
            RIGHT_HALF => Glyph::RightHalf,
            FULL_BLOCK => Glyph::FullBlock,
            _ => Glyph::Sextant(Sextant::from_code_point(ch)?),
        };
        Some(g)
    }
    /// Code point of the glyph
    ///
    /// Non-canonical sextant masks report the code point of
    ///   [Glyph::from_sextant]
    ///
    /// [Glyph::from_sextant]: enum.Glyph.html#method.from_sextant
    pub fn code_point(self) -> u32 {
        match self {
            Glyph::Space     => SPACE,
            Glyph::UpperHalf => UPPER_HALF,
            Glyph::LowerHalf => LOWER_HALF,
            Glyph::LeftHalf  => LEFT_HALF,
            Glyph::RightHalf => RIGHT_HALF,
            Glyph::FullBlock => FULL_BLOCK,
            Glyph::Sextant(s) => match s.code_point() {
                Some(ch) => ch,
                None => Glyph::from_sextant(s).code_point(),
            },
        }
    }
}

impl TryFrom<char> for Glyph {
    type Error = Error;
    fn try_from(ch: char) -> Result<Glyph> {
        Glyph::from_code_point(u32::from(ch)).ok_or(Error::UnsupportedGlyph(u32::from(ch)))
    }
}

/// Check if a code point can be drawn by [draw_glyph]
///
///     use cellglyph::can_draw;
///
///     assert!(can_draw(' ' as u32));
///     assert!(can_draw(0x1FB3B));
///     assert!(! can_draw(0x1FB3C));
///     assert!(! can_draw('A' as u32));
///
/// [draw_glyph]: ../render/fn.draw_glyph.html
pub fn can_draw(ch: u32) -> bool {
    match ch {
        SPACE | UPPER_HALF | LOWER_HALF | LEFT_HALF | RIGHT_HALF | FULL_BLOCK => true,
        SEXTANT_FIRST ..= SEXTANT_LAST => true,
        _ => false,
    }
}
