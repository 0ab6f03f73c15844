//! Fill table for block-drawing glyphs
//!
//! Every glyph is drawn as a fixed sequence of rectangle fills. Each fill
//!   covers a column span and a row span of the cell with either the
//!   foreground or the background color; later fills paint over earlier
//!   ones.
//!
//! Columns split at half the cell width. Half blocks split rows at half
//!   the cell height, sextants split rows at one and two thirds. The
//!   right column and the last row take whatever the integer division
//!   leaves over.
//!
//! ```text
//!        Left   Right
//!      +------+-------+
//!  Top |  1   |   2   |  [0, t)
//!  Mid |  3   |   4   |  [t, 2t)
//!  Bot |  5   |   6   |  [2t, h)
//!      +------+-------+
//!       [0,hw) [hw,w)
//! ```

use crate::glyph::{Glyph, SEXTANT_FIRST};

/// Which of the two glyph colors a fill uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Fore,
    Back,
}

/// Horizontal extent of a fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cols {
    /// [0, w)
    All,
    /// [0, w/2)
    Left,
    /// [w/2, w)
    Right,
}

/// Vertical extent of a fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rows {
    /// [0, h)
    All,
    /// [0, h/2)
    UpperHalf,
    /// [h/2, h)
    LowerHalf,
    /// [0, t)
    Top,
    /// [t, 2t)
    Middle,
    /// [2t, h)
    Bottom,
    /// [0, 2t)
    UpperTwo,
    /// [t, h)
    LowerTwo,
}

/// A single rectangle fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fill {
    pub cols: Cols,
    pub rows: Rows,
    pub role: Role,
}

const fn fore(cols: Cols, rows: Rows) -> Fill {
    Fill { cols, rows, role: Role::Fore }
}
const fn back(cols: Cols, rows: Rows) -> Fill {
    Fill { cols, rows, role: Role::Back }
}

use self::Cols::{Left as L, Right as R};
use self::Rows::{Top, Middle as Mid, Bottom as Bot, UpperTwo, LowerTwo};

const ALL: Cols = Cols::All;
const BG: Fill = back(Cols::All, Rows::All);
const FG: Fill = fore(Cols::All, Rows::All);

static SPACE: [Fill; 1] = [BG];
static FULL_BLOCK: [Fill; 1] = [FG];
static UPPER_HALF: [Fill; 2] = [fore(ALL, Rows::UpperHalf), back(ALL, Rows::LowerHalf)];
static LOWER_HALF: [Fill; 2] = [back(ALL, Rows::UpperHalf), fore(ALL, Rows::LowerHalf)];
static LEFT_HALF: [Fill; 2]  = [fore(L, Rows::All), back(R, Rows::All)];
static RIGHT_HALF: [Fill; 2] = [back(L, Rows::All), fore(R, Rows::All)];

/// Fills for U+1FB00 ..= U+1FB3B, in code point order
static SEXTANTS: [&[Fill]; 60] = [
    /* 1FB00 -1     */ &[BG, fore(L, Top)],
    /* 1FB01 -2     */ &[BG, fore(R, Top)],
    /* 1FB02 -12    */ &[BG, fore(ALL, Top)],
    /* 1FB03 -3     */ &[BG, fore(L, Mid)],
    /* 1FB04 -13    */ &[BG, fore(L, UpperTwo)],
    /* 1FB05 -23    */ &[BG, fore(R, Top), fore(L, Mid)],
    /* 1FB06 -123   */ &[BG, fore(ALL, Top), fore(L, Mid)],
    /* 1FB07 -4     */ &[BG, fore(R, Mid)],
    /* 1FB08 -14    */ &[BG, fore(L, Top), fore(R, Mid)],
    /* 1FB09 -24    */ &[BG, fore(R, UpperTwo)],
    /* 1FB0A -124   */ &[BG, fore(ALL, Top), fore(R, Mid)],
    /* 1FB0B -34    */ &[BG, fore(ALL, Mid)],
    /* 1FB0C -134   */ &[BG, fore(L, Top), fore(ALL, Mid)],
    /* 1FB0D -234   */ &[BG, fore(R, Top), fore(ALL, Mid)],
    /* 1FB0E -1234  */ &[fore(ALL, UpperTwo), back(ALL, Bot)],
    /* 1FB0F -5     */ &[BG, fore(L, Bot)],
    /* 1FB10 -15    */ &[BG, fore(L, Top), fore(L, Bot)],
    /* 1FB11 -25    */ &[BG, fore(R, Top), fore(L, Bot)],
    /* 1FB12 -125   */ &[BG, fore(ALL, Top), fore(L, Bot)],
    /* 1FB13 -35    */ &[BG, fore(L, LowerTwo)],
    /* 1FB14 -235   */ &[BG, fore(R, Top), fore(L, LowerTwo)],
    /* 1FB15 -1235  */ &[FG, back(R, LowerTwo)],
    /* 1FB16 -45    */ &[BG, fore(R, Mid), fore(L, Bot)],
    /* 1FB17 -145   */ &[BG, fore(L, Top), fore(R, Mid), fore(L, Bot)],
    /* 1FB18 -245   */ &[BG, fore(R, UpperTwo), fore(L, Bot)],
    /* 1FB19 -1245  */ &[FG, back(L, Mid), back(R, Bot)],
    /* 1FB1A -345   */ &[BG, fore(ALL, Mid), fore(L, Bot)],
    /* 1FB1B -1345  */ &[FG, back(R, Top), back(R, Bot)],
    /* 1FB1C -2345  */ &[FG, back(L, Top), back(R, Bot)],
    /* 1FB1D -12345 */ &[FG, back(R, Bot)],
    /* 1FB1E -6     */ &[BG, fore(R, Bot)],
    /* 1FB1F -16    */ &[BG, fore(L, Top), fore(R, Bot)],
    /* 1FB20 -26    */ &[BG, fore(R, Top), fore(R, Bot)],
    /* 1FB21 -126   */ &[BG, fore(ALL, Top), fore(R, Bot)],
    /* 1FB22 -36    */ &[BG, fore(L, Mid), fore(R, Bot)],
    /* 1FB23 -136   */ &[BG, fore(L, UpperTwo), fore(R, Bot)],
    /* 1FB24 -236   */ &[BG, fore(R, Top), fore(L, Mid), fore(R, Bot)],
    /* 1FB25 -1236  */ &[FG, back(R, Mid), back(L, Bot)],
    /* 1FB26 -46    */ &[BG, fore(R, LowerTwo)],
    /* 1FB27 -146   */ &[BG, fore(L, Top), fore(R, LowerTwo)],
    /* 1FB28 -1246  */ &[FG, back(L, Mid), back(L, Bot)],
    /* 1FB29 -346   */ &[BG, fore(ALL, Mid), fore(R, Bot)],
    /* 1FB2A -1346  */ &[FG, back(R, Top), back(L, Bot)],
    /* 1FB2B -2346  */ &[FG, back(L, Top), back(L, Bot)],
    /* 1FB2C -12346 */ &[FG, back(L, Bot)],
    /* 1FB2D -56    */ &[BG, fore(ALL, Bot)],
    /* 1FB2E -156   */ &[BG, fore(L, Top), fore(ALL, Bot)],
    /* 1FB2F -256   */ &[BG, fore(R, Top), fore(ALL, Bot)],
    /* 1FB30 -1256  */ &[BG, fore(ALL, Top), fore(ALL, Bot)],
    /* 1FB31 -356   */ &[BG, fore(L, Mid), fore(ALL, Bot)],
    /* 1FB32 -1356  */ &[FG, back(R, UpperTwo)],
    /* 1FB33 -2356  */ &[FG, back(L, Top), back(R, Mid)],
    /* 1FB34 -12356 */ &[FG, back(R, Mid)],
    /* 1FB35 -456   */ &[FG, back(ALL, Top), back(L, Mid)],
    /* 1FB36 -1456  */ &[FG, back(R, Top), back(L, Mid)],
    /* 1FB37 -2456  */ &[FG, back(L, UpperTwo)],
    /* 1FB38 -12456 */ &[FG, back(L, Mid)],
    /* 1FB39 -3456  */ &[FG, back(ALL, Top)],
    /* 1FB3A -13456 */ &[FG, back(R, Top)],
    /* 1FB3B -23456 */ &[FG, back(L, Top)],
];

impl Glyph {
    /// Rectangle fills that draw this glyph, in drawing order
    ///
    ///     use cellglyph::{Glyph,Fill,Cols,Rows,Role};
    ///
    ///     let fills = Glyph::UpperHalf.fills();
    ///     assert_eq!(fills[0], Fill { cols: Cols::All, rows: Rows::UpperHalf, role: Role::Fore });
    ///     assert_eq!(fills[1], Fill { cols: Cols::All, rows: Rows::LowerHalf, role: Role::Back });
    ///
    pub fn fills(self) -> &'static [Fill] {
        match self {
            Glyph::Space     => &SPACE[..],
            Glyph::FullBlock => &FULL_BLOCK[..],
            Glyph::UpperHalf => &UPPER_HALF[..],
            Glyph::LowerHalf => &LOWER_HALF[..],
            Glyph::LeftHalf  => &LEFT_HALF[..],
            Glyph::RightHalf => &RIGHT_HALF[..],
            Glyph::Sextant(s) => match s.code_point() {
                Some(ch) => SEXTANTS[(ch - SEXTANT_FIRST) as usize],
                // Masks drawn by a non-sextant glyph
                None => Glyph::from_sextant(s).fills(),
            },
        }
    }
}
