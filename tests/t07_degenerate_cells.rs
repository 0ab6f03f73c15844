
extern crate cellglyph;
extern crate env_logger;

use cellglyph::{can_draw, draw_glyph, PixelData, Pixfmt, Rgba8, Size, Source};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_glyphs() -> Vec<u32> {
    (0 .. 0x20000).filter(|&ch| can_draw(ch)).collect()
}

#[test]
fn t07_zero_area_is_a_no_op() {
    init();
    for &(w, h) in [(0, 0), (0, 4), (4, 0)].iter() {
        let mut pix = Pixfmt::<Rgba8>::new(w, h);
        for ch in all_glyphs() {
            draw_glyph(ch, 0xFFFFFF, 0x000000, &mut pix);
        }
        assert!(pix.is_empty());
        assert_eq!(pix.size(), 0);
    }
}

#[test]
fn t07_tiny_cells_do_not_panic() {
    init();
    assert_eq!(all_glyphs().len(), 66);
    for w in 1 .. 4 {
        for h in 1 .. 4 {
            for ch in all_glyphs() {
                let mut pix = Pixfmt::<Rgba8>::new(w, h);
                draw_glyph(ch, 0xFFFFFF, 0x000000, &mut pix);
                assert!(pix.is_fully_opaque(), "U+{:X} {}x{}", ch, w, h);
            }
        }
    }
}

#[test]
fn t07_one_pixel_tall_upper_half() {
    init();
    // half height is 0, the background fill covers the single row
    let mut pix = Pixfmt::<Rgba8>::new(4, 1);
    draw_glyph(0x2580, 0xFFFFFF, 0x000000, &mut pix);
    for x in 0 .. 4 {
        assert_eq!(pix.get((x, 0)), Rgba8::black());
    }
    draw_glyph(0x2584, 0xFFFFFF, 0x000000, &mut pix);
    for x in 0 .. 4 {
        assert_eq!(pix.get((x, 0)), Rgba8::white());
    }
}

#[test]
fn t07_two_pixel_tall_sextants_use_bottom_row_only() {
    init();
    // third height is 0, only the bottom cells (5, 6) are visible
    let mut pix = Pixfmt::<Rgba8>::new(2, 2);
    // 12: top cells only, nothing visible
    draw_glyph(0x1FB02, 0xFFFFFF, 0x000000, &mut pix);
    assert!(pix.pixeldata().chunks(4).all(|p| p == [0, 0, 0, 255]));
    // 5: lower left
    draw_glyph(0x1FB0F, 0xFFFFFF, 0x000000, &mut pix);
    assert_eq!(pix.get((0, 0)), Rgba8::white());
    assert_eq!(pix.get((0, 1)), Rgba8::white());
    assert_eq!(pix.get((1, 0)), Rgba8::black());
    assert_eq!(pix.get((1, 1)), Rgba8::black());
}

#[test]
fn t07_one_pixel_wide_left_column_vanishes() {
    init();
    let mut pix = Pixfmt::<Rgba8>::new(1, 6);
    draw_glyph(0x258C, 0xFFFFFF, 0x000000, &mut pix);
    assert!((0 .. 6).all(|y| pix.get((0, y)) == Rgba8::black()));
    draw_glyph(0x2590, 0xFFFFFF, 0x000000, &mut pix);
    assert!((0 .. 6).all(|y| pix.get((0, y)) == Rgba8::white()));
}
