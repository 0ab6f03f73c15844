//! Rendering buffer

use crate::error::{Error, Result};

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format)
///
/// A buffer of zero width or height is valid and holds no data
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and zeroed
    ///
    ///     use cellglyph::RenderingBuffer;
    ///
    ///     let buf = RenderingBuffer::new(3, 2, 4);
    ///     assert_eq!(buf.len(), 24);
    ///     assert_eq!(buf.stride(), 12);
    ///     assert_eq!(&buf[(2,1)], &[0,0,0,0]);
    ///     assert!(RenderingBuffer::new(0, 2, 4).is_empty());
    ///
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Wrap existing component data
    ///
    /// Fails if `data` does not hold exactly width * height * bpp bytes
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize, bpp: usize) -> Result<Self> {
        let expected = width * height * bpp;
        if data.len() != expected {
            return Err(Error::BufferSize { expected, actual: data.len() });
        }
        Ok(RenderingBuffer { data, width, height, bpp })
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// True if the buffer holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Bytes in a single row
    pub fn stride(&self) -> usize {
        self.width * self.bpp
    }
    /// Return mutable slice of a single row
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        assert!(i < self.height, "request {} >= {} height :: row_mut", i, self.height);
        let stride = self.stride();
        let start = i * stride;
        &mut self.data[start .. start + stride]
    }
    /// Set every component of every pixel to `v`
    pub fn fill(&mut self, v: u8) {
        self.data.iter_mut().for_each(|p| *p = v);
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &mut self.data[i .. i + self.bpp]
    }
}
