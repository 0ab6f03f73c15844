
extern crate cellglyph;

use cellglyph::{rgb_move, Rgb8};

const COLORS: [u32; 6] = [
    0x000000, 0xFFFFFF, 0xFF8000, 0x00FF7F, 0x123456, 0xFEDCBA,
];

fn channels(c: u32) -> [u8; 3] {
    let c = Rgb8::from_packed(c);
    [c.r, c.g, c.b]
}

#[test]
fn t03_end_points_exact() {
    for &a in COLORS.iter() {
        for &b in COLORS.iter() {
            assert_eq!(rgb_move(a, b, 0.0), a);
            assert_eq!(rgb_move(a, b, 1.0), b);
            assert_eq!(rgb_move(a, b, -0.5), a);
            assert_eq!(rgb_move(a, b, 2.0), b);
        }
    }
}

#[test]
fn t03_end_points_keep_alpha() {
    assert_eq!(rgb_move(0xAB_102030, 0xCD_405060, 0.0), 0xAB_102030);
    assert_eq!(rgb_move(0xAB_102030, 0xCD_405060, 1.0), 0xCD_405060);
}

#[test]
fn t03_interior_drops_alpha() {
    let c = rgb_move(0xFF_000000, 0xFF_FFFFFF, 0.25);
    assert_eq!(c >> 24, 0);
    assert_eq!(c, 0x3F3F3F);
}

#[test]
fn t03_stays_between_end_points() {
    let fractions = [0.001, 0.1, 0.25, 0.333, 0.5, 0.75, 0.999];
    for &a in COLORS.iter() {
        for &b in COLORS.iter() {
            for &f in fractions.iter() {
                let m = channels(rgb_move(a, b, f));
                let (ca, cb) = (channels(a), channels(b));
                for i in 0 .. 3 {
                    let lo = ca[i].min(cb[i]);
                    let hi = ca[i].max(cb[i]);
                    assert!(lo <= m[i] && m[i] <= hi,
                            "{:06X} -> {:06X} at {}: channel {} = {}", a, b, f, i, m[i]);
                }
            }
        }
    }
}

#[test]
fn t03_truncates_toward_zero() {
    // up: 0 + trunc(0.5 * 255) = 127
    assert_eq!(rgb_move(0x000000, 0xFFFFFF, 0.5), 0x7F7F7F);
    // down: 255 + trunc(0.5 * -255) = 255 - 127 = 128
    assert_eq!(rgb_move(0xFFFFFF, 0x000000, 0.5), 0x808080);
    // small steps vanish
    assert_eq!(rgb_move(0x000000, 0x010101, 0.99), 0x000000);
}

#[test]
fn t03_per_channel() {
    // red 0x10 -> 0x30, green 0x80 -> 0x00, blue unchanged
    assert_eq!(rgb_move(0x108040, 0x300040, 0.5), 0x204040);
}

#[test]
fn t03_nan_fraction() {
    assert_eq!(rgb_move(0xFF_123456, 0x00_FFFFFF, std::f64::NAN), 0x123456);
}

#[test]
fn t03_typed() {
    let black = Rgb8::black();
    let white = Rgb8::white();
    assert_eq!(black.moved_toward(white, 0.5), Rgb8::gray(127));
    assert_eq!(black.moved_toward(white, 0.0), black);
    assert_eq!(black.moved_toward(white, 1.0), white);
}
