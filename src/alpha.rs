//! Alpha inspection
//!
//! A surface without pixels is reported as both fully transparent and
//!   fully opaque.

use crate::Source;

/// Check that no pixel of `src` has a non-zero alpha
///
///     use cellglyph::{Pixel,Pixfmt,Rgba8,is_fully_transparent};
///
///     let mut pix = Pixfmt::<Rgba8>::new(4,4);
///     assert!(is_fully_transparent(&pix));
///     pix.set((3,3), Rgba8::new(0,0,0,1));
///     assert!(! is_fully_transparent(&pix));
///
pub fn is_fully_transparent<S: Source>(src: &S) -> bool {
    all_alpha(src, |a| a == 0)
}

/// Check that every pixel of `src` has an alpha of 255
pub fn is_fully_opaque<S: Source>(src: &S) -> bool {
    all_alpha(src, |a| a == 255)
}

fn all_alpha<S, F>(src: &S, pred: F) -> bool
    where S: Source, F: Fn(u8) -> bool
{
    let (w, h) = (src.width(), src.height());
    (0 .. h).all(|y| (0 .. w).all(|x| pred(src.get((x,y)).a)))
}
