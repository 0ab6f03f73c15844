//! Cells backed by [image::RgbaImage]
//!
//! Lets inspection and rasterization run directly on an in-memory image;
//!   nothing here reads or writes files.

use image::{Rgba, RgbaImage};

use crate::color::Rgba8;
use crate::error::{Error, Result};
use crate::pixfmt::Pixfmt;
use crate::{Color, Pixel, PixelData, Size, Source};

impl Size for RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }
    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }
}

impl Source for RgbaImage {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let Rgba([r,g,b,a]) = *self.get_pixel(id.0 as u32, id.1 as u32);
        Rgba8::new(r,g,b,a)
    }
}

impl Pixel for RgbaImage {
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = Rgba([c.red8(), c.green8(), c.blue8(), c.alpha8()]);
        self.put_pixel(id.0 as u32, id.1 as u32, p);
    }
}

impl Pixfmt<Rgba8> {
    /// Copy the pixels of `img`
    pub fn from_image(img: &RgbaImage) -> Result<Self> {
        let (w, h) = img.dimensions();
        Self::from_raw(w as usize, h as usize, img.as_raw().clone())
    }
    /// Copy the pixels into a new [image::RgbaImage]
    pub fn to_image(&self) -> Result<RgbaImage> {
        let data = self.pixeldata().to_vec();
        let expected = Size::width(self) * Size::height(self) * 4;
        let actual = data.len();
        RgbaImage::from_raw(Size::width(self) as u32, Size::height(self) as u32, data)
            .ok_or(Error::BufferSize { expected, actual })
    }
}
