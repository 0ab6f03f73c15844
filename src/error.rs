//! Errors

/// Errors from constructing buffers and glyphs
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Component or pixel data does not match the requested dimensions
    #[error("buffer holds {actual} elements, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    /// Code point has no block rasterization
    #[error("no block rasterization for U+{0:04X}")]
    UnsupportedGlyph(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
