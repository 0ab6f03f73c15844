use crate::color::Rgb8;

/// Distance between two packed colors in RGB space
///
/// Alpha bits are ignored. The euclidean distance is truncated, so the
///   result lies in 0 ..= 441
///
///     use cellglyph::rgb_distance;
///
///     assert_eq!(rgb_distance(0x000000, 0xFFFFFF), 441);
///     assert_eq!(rgb_distance(0xFF_102030, 0x00_102030), 0);
///
pub fn rgb_distance(first: u32, second: u32) -> u32 {
    let (a, b) = (Rgb8::from_packed(first), Rgb8::from_packed(second));
    let d = |p: u8, q: u8| (f64::from(q) - f64::from(p)).powi(2);
    let diff = d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b);
    diff.sqrt() as u32
}

/// Move from `start` toward `end` in RGB space by `fraction`
///
/// A `fraction` at or below 0.0 returns `start` and at or above 1.0
///   returns `end`, both untouched. Otherwise each channel moves by the
///   truncated product `fraction * (end - start)`, clamped to 0 ..= 255,
///   and the alpha bits of the result are 0.
///
///     use cellglyph::rgb_move;
///
///     assert_eq!(rgb_move(0x000000, 0xFFFFFF, 0.5), 0x7F7F7F);
///     assert_eq!(rgb_move(0xFF_000000, 0x00_FFFFFF, 0.0), 0xFF_000000);
///
pub fn rgb_move(start: u32, end: u32, fraction: f64) -> u32 {
    if fraction <= 0.0 {
        return start;
    }
    if fraction >= 1.0 {
        return end;
    }
    let (a, b) = (Rgb8::from_packed(start), Rgb8::from_packed(end));
    let step = |p: u8, q: u8| {
        let (p, q) = (i32::from(p), i32::from(q));
        let v = p + (fraction * f64::from(q - p)) as i32;
        v.max(0).min(255) as u8
    };
    Rgb8::new(step(a.r, b.r), step(a.g, b.g), step(a.b, b.b)).packed()
}

impl Rgb8 {
    /// Distance to `other` in RGB space, see [rgb_distance]
    ///
    /// [rgb_distance]: ../math/fn.rgb_distance.html
    pub fn distance(self, other: Rgb8) -> u32 {
        rgb_distance(self.packed(), other.packed())
    }
    /// Color `fraction` of the way toward `end`, see [rgb_move]
    ///
    /// [rgb_move]: ../math/fn.rgb_move.html
    pub fn moved_toward(self, end: Rgb8, fraction: f64) -> Rgb8 {
        Rgb8::from_packed(rgb_move(self.packed(), end.packed(), fraction))
    }
}
