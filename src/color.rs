//! Colors
//!
//! Packed colors follow the usual ARGB layout:
//!
//! | bits    | channel |
//! |---------|---------|
//! | 31 - 24 | alpha   |
//! | 23 - 16 | red     |
//! | 15 - 8  | green   |
//! |  7 - 0  | blue    |

use crate::Color;

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Unpack a color from the low 24 bits of `v`
    ///
    /// Bits 31 - 24 are ignored
    ///
    ///     use cellglyph::Rgb8;
    ///
    ///     assert_eq!(Rgb8::from_packed(0xFF_12_34_56), Rgb8::new(0x12, 0x34, 0x56));
    ///
    pub fn from_packed(v: u32) -> Self {
        Self::new( (v >> 16) as u8, (v >> 8) as u8, v as u8 )
    }
    /// Pack the color into the low 24 bits, alpha bits are 0
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Fully transparent black (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0,0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Unpack a color from an ARGB value
    ///
    ///     use cellglyph::Rgba8;
    ///
    ///     let c = Rgba8::from_argb(0x80_FF_00_10);
    ///     assert_eq!(c, Rgba8::new(0xFF, 0x00, 0x10, 0x80));
    ///     assert_eq!(c.argb(), 0x80_FF_00_10);
    ///
    pub fn from_argb(v: u32) -> Self {
        Self::new( (v >> 16) as u8, (v >> 8) as u8, v as u8, (v >> 24) as u8 )
    }
    /// Pack the color as ARGB
    pub fn argb(self) -> u32 {
        (u32::from(self.a) << 24) | Rgb8::from(self).packed()
    }
}

impl Color for Rgb8 {
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { 255 }
}
impl Color for Rgba8 {
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
    fn alpha8(&self) -> u8 { self.a }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}
