
extern crate cellglyph;

use cellglyph::{rgb_distance, Rgb8};

const COLORS: [u32; 8] = [
    0x000000, 0xFFFFFF, 0xFF0000, 0x00FF00,
    0x0000FF, 0x7F7F7F, 0x123456, 0xFEDCBA,
];

#[test]
fn t02_identical_colors() {
    for &c in COLORS.iter() {
        assert_eq!(rgb_distance(c, c), 0);
    }
}

#[test]
fn t02_symmetric() {
    for &a in COLORS.iter() {
        for &b in COLORS.iter() {
            assert_eq!(rgb_distance(a, b), rgb_distance(b, a), "{:06X} {:06X}", a, b);
        }
    }
}

#[test]
fn t02_black_to_white() {
    // sqrt(3 * 255^2) = 441.67...
    assert_eq!(rgb_distance(0x000000, 0xFFFFFF), 441);
}

#[test]
fn t02_truncates() {
    // sqrt(1 + 1) = 1.41
    assert_eq!(rgb_distance(0x000000, 0x010100), 1);
    // sqrt(3 * 3^2) = 5.19
    assert_eq!(rgb_distance(0x000000, 0x030303), 5);
    // 3-4-5 triangle
    assert_eq!(rgb_distance(0x000000, 0x030400), 5);
}

#[test]
fn t02_alpha_ignored() {
    assert_eq!(rgb_distance(0xFF_000000, 0x00_000000), 0);
    assert_eq!(rgb_distance(0x80_FF0000, 0x00_000000), 255);
}

#[test]
fn t02_typed() {
    let red = Rgb8::new(255, 0, 0);
    let green = Rgb8::new(0, 255, 0);
    // sqrt(2 * 255^2) = 360.62
    assert_eq!(red.distance(green), 360);
    assert_eq!(red.distance(red), 0);
}
