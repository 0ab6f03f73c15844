//! Pixel cells for text-mode renderers
//!
//! How does this work
//!
//! ```text
//!    pix = Pixfmt::<Rgba8>::new(cell_w, cell_h)   -- or any `Pixel` surface
//!  Inspection
//!    is_fully_transparent(&pix) / is_fully_opaque(&pix)
//!      scan alpha, stop at first miss
//!  Colors
//!    rgb_distance(a, b)    -- truncated euclidean distance
//!    rgb_move(a, b, f)     -- truncated linear step from a toward b
//!  Glyphs
//!    can_draw(ch)
//!    draw_glyph(ch, fore, back, &mut pix)
//!      Glyph::from_code_point()
//!      Glyph::fills()         -- fixed table, see block.rs
//!      CellGeometry::cols() / rows()  -- half / third split lines
//!        fill_rect()          -- in table order, later fills win
//! ```

pub mod color;
pub mod buffer;
pub mod pixfmt;
pub mod alpha;
pub mod math;
pub mod glyph;
pub mod block;
pub mod render;
pub mod error;
#[cfg(feature = "image")]
pub mod rgba_image;

pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::pixfmt::*;
pub use crate::alpha::*;
pub use crate::math::*;
pub use crate::glyph::*;
pub use crate::block::*;
pub use crate::render::*;
pub use crate::error::Error;

use std::ops::Range;

/// Access to the raw component data of a surface
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Color with 8-bit components
pub trait Color: Copy {
    fn red8(&self) -> u8;
    fn green8(&self) -> u8;
    fn blue8(&self) -> u8;
    fn alpha8(&self) -> u8;
}

/// Dimensions of a surface in pixels
pub trait Size {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// True when the surface holds no pixels
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Read access to pixels
pub trait Source: Size {
    /// Color at (`x`,`y`)
    ///
    /// Panics if (`x`,`y`) is outside of the surface
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Write access to pixels
///
/// Everything the glyph rasterizer needs from a surface: its size and
///   a way to fill rectangles
pub trait Pixel: Size {
    /// Set the pixel at (`x`,`y`) to color `c`
    ///
    /// Panics if (`x`,`y`) is outside of the surface
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);

    /// Fill the rectangle `xs` by `ys` with color `c`
    ///
    /// Ranges are clipped to the surface; empty ranges draw nothing
    fn fill_rect<C: Color>(&mut self, xs: Range<usize>, ys: Range<usize>, c: C) {
        let xs = clip(xs, self.width());
        let ys = clip(ys, self.height());
        for y in ys {
            for x in xs.clone() {
                self.set((x, y), c);
            }
        }
    }
}

/// Clip a range to [0,n)
pub(crate) fn clip(r: Range<usize>, n: usize) -> Range<usize> {
    let end = r.end.min(n);
    r.start.min(end) .. end
}
