#![cfg(feature = "image")]

extern crate cellglyph;
extern crate image;

use cellglyph::{draw_glyph, is_fully_opaque, is_fully_transparent, Error, Pixfmt, Rgba8, Source};
use image::{Rgba, RgbaImage};

#[test]
fn t08_inspect_image() {
    let img = RgbaImage::new(8, 16);
    assert!(is_fully_transparent(&img));
    assert!(! is_fully_opaque(&img));

    let img = RgbaImage::from_pixel(8, 16, Rgba([1, 2, 3, 255]));
    assert!(is_fully_opaque(&img));
    assert!(! is_fully_transparent(&img));

    let img = RgbaImage::new(0, 0);
    assert!(is_fully_transparent(&img));
    assert!(is_fully_opaque(&img));
}

#[test]
fn t08_draw_into_image() {
    let mut img = RgbaImage::new(10, 12);
    draw_glyph(0x1FB00, 0xFFFFFF, 0x000000, &mut img);
    assert_eq!(*img.get_pixel(4, 3), Rgba([255, 255, 255, 255]));
    assert_eq!(*img.get_pixel(5, 3), Rgba([0, 0, 0, 255]));
    assert_eq!(*img.get_pixel(4, 4), Rgba([0, 0, 0, 255]));
    assert!(is_fully_opaque(&img));
}

#[test]
fn t08_image_and_pixfmt_agree() {
    let mut img = RgbaImage::new(7, 11);
    let mut pix = Pixfmt::<Rgba8>::new(7, 11);
    for ch in 0x1FB00 ..= 0x1FB3B {
        draw_glyph(ch, 0x336699, 0xCC9933, &mut img);
        draw_glyph(ch, 0x336699, 0xCC9933, &mut pix);
        assert_eq!(Pixfmt::<Rgba8>::from_image(&img), Ok(pix.clone()), "U+{:X}", ch);
    }
    assert_eq!(pix.to_image().map(|i| i.into_raw()), Ok(img.clone().into_raw()));
}

#[test]
fn t08_get_reads_rgba() {
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(1, 0, Rgba([9, 8, 7, 6]));
    assert_eq!(Source::get(&img, (1, 0)), Rgba8::new(9, 8, 7, 6));
    assert_eq!(Source::get(&img, (0, 1)), Rgba8::transparent());
}

#[test]
fn t08_raw_size_mismatch() {
    let err = Pixfmt::<Rgba8>::from_raw(2, 2, vec![0; 15]).unwrap_err();
    assert_eq!(err, Error::BufferSize { expected: 16, actual: 15 });
    assert_eq!(err.to_string(), "buffer holds 15 elements, expected 16");
}
