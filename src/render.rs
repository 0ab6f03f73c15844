//! Glyph rasterization
//!
//! Paints a block-drawing glyph over a whole cell-sized surface using a
//!   foreground and a background color.

use crate::block::{Cols, Rows, Role};
use crate::color::Rgb8;
use crate::glyph::Glyph;
use crate::Pixel;

use log::{debug, trace};
use std::ops::Range;

/// Split lines of a cell
///
/// All positions use integer division, so on cells that do not divide
///   evenly the right column and the last row are the larger ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: usize,
    pub height: usize,
    /// width / 2
    pub half_width: usize,
    /// height / 2
    pub half_height: usize,
    /// height / 3
    pub third_height: usize,
}

impl CellGeometry {
    /// Geometry of a `width` x `height` cell
    ///
    ///     use cellglyph::{CellGeometry,Cols,Rows};
    ///
    ///     let g = CellGeometry::new(10, 12);
    ///     assert_eq!(g.cols(Cols::Right), 5 .. 10);
    ///     assert_eq!(g.rows(Rows::Middle), 4 .. 8);
    ///
    ///     let g = CellGeometry::new(7, 11);
    ///     assert_eq!(g.cols(Cols::Right), 3 .. 7);
    ///     assert_eq!(g.rows(Rows::Bottom), 6 .. 11);
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width, height,
            half_width: width / 2,
            half_height: height / 2,
            third_height: height / 3,
        }
    }
    /// Pixel columns covered by `cols`
    pub fn cols(&self, cols: Cols) -> Range<usize> {
        match cols {
            Cols::All   => 0 .. self.width,
            Cols::Left  => 0 .. self.half_width,
            Cols::Right => self.half_width .. self.width,
        }
    }
    /// Pixel rows covered by `rows`
    pub fn rows(&self, rows: Rows) -> Range<usize> {
        let t = self.third_height;
        match rows {
            Rows::All       => 0 .. self.height,
            Rows::UpperHalf => 0 .. self.half_height,
            Rows::LowerHalf => self.half_height .. self.height,
            Rows::Top       => 0 .. t,
            Rows::Middle    => t .. 2 * t,
            Rows::Bottom    => 2 * t .. self.height,
            Rows::UpperTwo  => 0 .. 2 * t,
            Rows::LowerTwo  => t .. self.height,
        }
    }
}

impl Glyph {
    /// Draw the glyph over all of `pix`
    ///
    /// Colors are painted fully opaque
    pub fn draw<P: Pixel>(self, fore: Rgb8, back: Rgb8, pix: &mut P) {
        if pix.is_empty() {
            return;
        }
        let geom = CellGeometry::new(pix.width(), pix.height());
        trace!("draw {:?} into {}x{} cell", self, geom.width, geom.height);
        for fill in self.fills() {
            let c = match fill.role {
                Role::Fore => fore,
                Role::Back => back,
            };
            pix.fill_rect(geom.cols(fill.cols), geom.rows(fill.rows), c);
        }
    }
}

/// Draw the block-drawing character `ch` over all of `pix`
///
/// `fore` and `back` are packed RGB colors, their alpha bits are ignored
///   and the cell is painted fully opaque. Characters without a block
///   rasterization (see [can_draw]) leave `pix` untouched.
///
///     use cellglyph::{Source,Pixfmt,Rgba8,draw_glyph};
///
///     let mut pix = Pixfmt::<Rgba8>::new(10,12);
///     draw_glyph(0x2580, 0xFF0000, 0x0000FF, &mut pix);
///     assert_eq!(pix.get((9,5)),  Rgba8::new(255,0,0,255));
///     assert_eq!(pix.get((0,6)),  Rgba8::new(0,0,255,255));
///
/// [can_draw]: ../glyph/fn.can_draw.html
pub fn draw_glyph<P: Pixel>(ch: u32, fore: u32, back: u32, pix: &mut P) {
    match Glyph::from_code_point(ch) {
        Some(g) => g.draw(Rgb8::from_packed(fore), Rgb8::from_packed(back), pix),
        None => debug!("no block rasterization for U+{:04X}, cell left as is", ch),
    }
}
