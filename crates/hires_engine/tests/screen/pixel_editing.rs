//! Pixel and segment writes

use hires_engine::{row_to_offset, ColorPattern, HiResColor, HiResScreen, EngineError, MAX_BUFFER_LEN};
use pretty_assertions::assert_eq;

use crate::helpers::random_screen;

#[test]
fn test_white_segment_sets_first_byte_only() {
    let mut screen = HiResScreen::from_bytes(vec![0; MAX_BUFFER_LEN]).unwrap();
    let white = ColorPattern::Opaque([0x7F; 8]);
    screen.plot_horiz_segment(0, 0, 7, &white).unwrap();

    let mut expected = vec![0; MAX_BUFFER_LEN];
    expected[row_to_offset(0)] = 0x7F;
    assert_eq!(expected, screen.data());
}

#[test]
fn test_set_pixel_is_idempotent() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut screen = random_screen(1);
    for _ in 0..500 {
        let x = rng.i32(0..280);
        let y = rng.i32(0..192);
        let mut bytes = [0u8; 8];
        rng.fill(&mut bytes);
        let pattern = ColorPattern::Opaque(bytes);

        screen.set_pixel(x, y, &pattern).unwrap();
        let once = screen.clone();
        screen.set_pixel(x, y, &pattern).unwrap();
        assert_eq!(once, screen, "pixel ({x}, {y})");
    }
}

#[test]
fn test_set_pixel_leaves_other_pixels() {
    let mut screen = random_screen(2);
    let before = screen.clone();
    screen.set_pixel(100, 50, &ColorPattern::solid(HiResColor::Orange)).unwrap();
    for x in 0..280 {
        if x != 100 {
            assert_eq!(before.get_pixel(x, 50).unwrap(), screen.get_pixel(x, 50).unwrap());
        }
    }
    // only the addressed byte may change
    let offset = row_to_offset(50) + 100 / 7;
    for (i, (a, b)) in before.data().iter().zip(screen.data()).enumerate() {
        if i != offset {
            assert_eq!(a, b, "offset {i}");
        }
    }
}

#[test]
fn test_segment_matches_pixel_by_pixel() {
    let pattern = ColorPattern::Opaque([0x11, 0x22, 0x33, 0x44, 0xD5, 0xAA, 0x80, 0x7F]);
    for (x, width) in [(0, 1), (3, 4), (6, 2), (13, 29), (270, 10), (0, 280)] {
        for y in [0, 1, 100, 191] {
            let mut by_segment = random_screen(3);
            let mut by_pixel = by_segment.clone();
            by_segment.plot_horiz_segment(x, y, width, &pattern).unwrap();
            for px in x..x + width {
                by_pixel.set_pixel(px, y, &pattern).unwrap();
            }
            assert_eq!(by_pixel, by_segment, "segment x={x} width={width} y={y}");
        }
    }
}

#[test]
fn test_invalid_segment_is_rejected_without_change() {
    let mut screen = random_screen(4);
    let before = screen.clone();
    let white = ColorPattern::default();
    assert!(matches!(
        screen.plot_horiz_segment(275, 0, 6, &white),
        Err(EngineError::InvalidScreenArea { .. })
    ));
    assert!(screen.plot_horiz_segment(0, 0, 0, &white).is_err());
    assert!(screen.plot_horiz_segment(0, 192, 1, &white).is_err());
    assert_eq!(before, screen);
}

#[test]
fn test_transparent_high_keeps_pixels() {
    let mut screen = random_screen(5);
    let before = screen.clone();
    screen.plot_horiz_segment(0, 20, 280, &ColorPattern::TransparentHigh).unwrap();
    for x in 0..280 {
        assert_eq!(before.get_pixel(x, 20).unwrap(), screen.get_pixel(x, 20).unwrap());
        assert!(screen.mode_bit(x, 20).unwrap());
    }
}
