
extern crate cellglyph;
extern crate log;

use cellglyph::{draw_glyph, Pixfmt, Rgba8};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Keeps every message the crate logs
struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Capture {
    fn take(&self) -> Vec<(Level, String)> {
        self.records.lock().map(|mut r| r.drain(..).collect()).unwrap_or_default()
    }
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("cellglyph")
    }
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut r) = self.records.lock() {
                r.push((record.level(), record.args().to_string()));
            }
        }
    }
    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

// One test per file, the logger is global to the test binary
#[test]
fn t09_draw_log() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    for &(w, h) in [(0, 0), (0, 4), (4, 0)].iter() {
        let mut pix = Pixfmt::<Rgba8>::new(w, h);
        draw_glyph(0x2588, 0xFFFFFF, 0x000000, &mut pix);
        draw_glyph(0x1FB00, 0xFFFFFF, 0x000000, &mut pix);
    }
    assert_eq!(CAPTURE.take(), vec![]);

    let mut pix = Pixfmt::<Rgba8>::new(3, 5);
    draw_glyph(0x2588, 0xFFFFFF, 0x000000, &mut pix);
    assert_eq!(CAPTURE.take(), vec![(Level::Trace, "draw FullBlock into 3x5 cell".to_string())]);

    draw_glyph('A' as u32, 0xFFFFFF, 0x000000, &mut pix);
    assert_eq!(CAPTURE.take(),
               vec![(Level::Debug, "no block rasterization for U+0041, cell left as is".to_string())]);
}
