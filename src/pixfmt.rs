//! Pixel Format

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::error::{Error, Result};

use crate::Color;
use crate::Pixel;
use crate::PixelData;
use crate::Size;
use crate::Source;
use crate::clip;

use std::marker::PhantomData;
use std::ops::Range;

/// Layout of a single pixel inside a [RenderingBuffer]
///
/// [RenderingBuffer]: ../buffer/struct.RenderingBuffer.html
pub trait PixelFormat: Color {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Store color `c` into the pixel components `p`
    fn write<C: Color>(p: &mut [u8], c: C);
    /// Load the pixel components `p`
    fn read(p: &[u8]) -> Rgba8;
}

impl PixelFormat for Rgba8 {
    fn bpp() -> usize { 4 }
    fn write<C: Color>(p: &mut [u8], c: C) {
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
        p[3] = c.alpha8();
    }
    fn read(p: &[u8]) -> Rgba8 {
        Rgba8::new(p[0],p[1],p[2],p[3])
    }
}

impl PixelFormat for Rgb8 {
    fn bpp() -> usize { 3 }
    fn write<C: Color>(p: &mut [u8], c: C) {
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
    }
    fn read(p: &[u8]) -> Rgba8 {
        Rgba8::new(p[0],p[1],p[2],255)
    }
}

/// Pixel Format Wrapper around raw pixel component data
///
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T: PixelFormat> Pixfmt<T> {
    /// Create new Pixel Format of width * height * bpp
    ///
    /// Allocates memory of width * height * bpp, all components 0.
    /// A zero width or height is allowed and holds no pixels
    ///
    ///     use cellglyph::{Source,Size,Pixfmt,Rgba8};
    ///
    ///     let pix = Pixfmt::<Rgba8>::new(2,3);
    ///     assert_eq!(pix.width(), 2);
    ///     assert_eq!(pix.height(), 3);
    ///     assert_eq!(pix.get((1,2)), Rgba8::transparent());
    ///
    ///     let empty = Pixfmt::<Rgba8>::new(0,3);
    ///     assert!(empty.is_empty());
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::new(width, height, T::bpp()),
               phantom: PhantomData
        }
    }
    /// Wrap raw component data of width * height * bpp bytes
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let rbuf = RenderingBuffer::from_vec(data, width, height, T::bpp())?;
        Ok(Self { rbuf, phantom: PhantomData })
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Clear the Image
    ///
    /// All color components are set to 255, including `alpha` if present
    ///
    ///     use cellglyph::{Source,Pixfmt,Rgb8,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgb8>::new(2,2);
    ///     pix.clear();
    ///     assert_eq!(pix.get((1,1)), Rgba8::white());
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(2,2);
    ///     pix.clear();
    ///     assert_eq!(pix.get((0,1)), Rgba8::white());
    ///
    pub fn clear(&mut self) {
        self.rbuf.fill(255);
    }
    /// Set every pixel to color `c`
    pub fn fill<C: Color>(&mut self, c: C) {
        let bpp = T::bpp();
        for p in self.rbuf.data.chunks_exact_mut(bpp) {
            T::write(p, c);
        }
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use cellglyph::{Source,Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(1,2);
    ///     let black = Rgba8::black();
    ///     pix.copy_pixel(0,1, black);
    ///     assert_eq!(pix.get((0,0)), Rgba8{r:0, g:0, b:0, a:0});
    ///     assert_eq!(pix.get((0,1)), black);
    ///
    ///     pix.copy_pixel(10,10, black); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_pixel<C: Color>(&mut self, x: usize, y: usize, c: C) {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        T::write(&mut self.rbuf[(x,y)], c);
    }
    /// Copies the [Color] `c` to pixels from (`x`,`y`) to (`x+n-1`,y)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use cellglyph::{Source,Pixfmt,Rgb8,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgb8>::new(10,1);
    ///     let black = Rgba8::black();
    ///     pix.copy_hline(0,0,10, black);
    ///     assert_eq!(pix.get((0,0)), black);
    ///     assert_eq!(pix.get((1,0)), black);
    ///     assert_eq!(pix.get((9,0)), black);
    ///
    ///     pix.copy_hline(1,1,10, black); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_hline<C: Color>(&mut self, x: usize, y: usize, n: usize, c: C) {
        if y >= self.rbuf.height || x >= self.rbuf.width || n == 0 {
            return;
        }
        let n = n.min(self.rbuf.width - x);
        let bpp = T::bpp();
        let row = self.rbuf.row_mut(y);
        for p in row[x * bpp .. (x + n) * bpp].chunks_exact_mut(bpp) {
            T::write(p, c);
        }
    }
}

impl Pixfmt<Rgba8> {
    /// Create from ARGB packed pixels in row-major order
    ///
    ///     use cellglyph::{Source,Pixfmt,Rgba8};
    ///
    ///     let pix = Pixfmt::<Rgba8>::from_argb(2,1, &[0xFF_FF_00_00, 0x00_00_00_FF]).unwrap();
    ///     assert_eq!(pix.get((0,0)), Rgba8::new(255,0,0,255));
    ///     assert_eq!(pix.get((1,0)), Rgba8::new(0,0,255,0));
    ///     assert!(Pixfmt::<Rgba8>::from_argb(2,2, &[0; 3]).is_err());
    ///
    pub fn from_argb(width: usize, height: usize, argb: &[u32]) -> Result<Self> {
        let expected = width * height;
        if argb.len() != expected {
            return Err(Error::BufferSize { expected, actual: argb.len() });
        }
        let mut pix = Self::new(width, height);
        for (p, &v) in pix.rbuf.data.chunks_exact_mut(4).zip(argb.iter()) {
            Rgba8::write(p, Rgba8::from_argb(v));
        }
        Ok(pix)
    }
    /// Pixels as ARGB packed values in row-major order
    pub fn to_argb(&self) -> Vec<u32> {
        self.rbuf.data.chunks_exact(4)
            .map(|p| Rgba8::read(p).argb())
            .collect()
    }
    fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
        self.rbuf.data.chunks_exact(4).map(|p| p[3])
    }
    /// Every alpha component is 0, or there are no pixels
    ///
    /// Same result as [is_fully_transparent] without going through [Source]
    ///
    /// [is_fully_transparent]: ../alpha/fn.is_fully_transparent.html
    /// [Source]: ../trait.Source.html
    pub fn is_fully_transparent(&self) -> bool {
        self.alphas().all(|a| a == 0)
    }
    /// Every alpha component is 255, or there are no pixels
    pub fn is_fully_opaque(&self) -> bool {
        self.alphas().all(|a| a == 255)
    }
}

/// Access Pixeldata from a Pixfmt<T>
///
impl<T> PixelData for Pixfmt<T> {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl<T: PixelFormat> Size for Pixfmt<T> {
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
}

impl<T: PixelFormat> Source for Pixfmt<T> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        T::read(&self.rbuf[id])
    }
}

impl<T: PixelFormat> Pixel for Pixfmt<T> {
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        T::write(&mut self.rbuf[id], c);
    }
    fn fill_rect<C: Color>(&mut self, xs: Range<usize>, ys: Range<usize>, c: C) {
        let xs = clip(xs, self.rbuf.width);
        for y in clip(ys, self.rbuf.height) {
            self.copy_hline(xs.start, y, xs.len(), c);
        }
    }
}
