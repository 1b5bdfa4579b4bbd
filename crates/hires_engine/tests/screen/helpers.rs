//! Shared test helpers for screen tests

#![allow(dead_code)]

use hires_engine::{HiResScreen, Rectangle, BYTES_PER_ROW, SCREEN_HEIGHT};

/// A screen whose pixel bytes are filled from a seeded generator.
pub fn random_screen(seed: u64) -> HiResScreen {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut screen = HiResScreen::new();
    for y in 0..SCREEN_HEIGHT {
        for col in 0..BYTES_PER_ROW {
            screen.set_byte(col, y, rng.u8(..)).unwrap();
        }
    }
    screen
}

/// Raw bytes of the byte columns covering `rect`, row by row.
pub fn area_bytes(screen: &HiResScreen, rect: Rectangle) -> Vec<u8> {
    let first_col = rect.left() / 7;
    let last_col = (rect.right() - 1) / 7;
    let mut bytes = Vec::new();
    for y in rect.y_range() {
        for col in first_col..=last_col {
            bytes.push(screen.byte_at(col, y).unwrap());
        }
    }
    bytes
}

/// Counts pixel bits that differ between two screens.
pub fn changed_pixels(a: &HiResScreen, b: &HiResScreen) -> usize {
    a.data().iter().zip(b.data()).map(|(x, y)| ((x ^ y) & 0x7F).count_ones() as usize).sum()
}

/// Print a row of pixels for debugging (useful in test failures)
pub fn print_row(screen: &HiResScreen, y: i32) {
    let line: String = (0..280).map(|x| if screen.get_pixel(x, y).unwrap() { '#' } else { '.' }).collect();
    println!("{}", line);
}

/// Routes `log` output of the engine into the test output (`RUST_LOG=debug`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
