//! RGBA rendering

use hires_engine::{HiResColor, HiResScreen, Rectangle, HIRES_PALETTE};

use crate::helpers::random_screen;

#[test]
fn test_region_matches_full_render() {
    let screen = random_screen(50);
    let full = screen.render_to_rgba(false);
    let rect = Rectangle::from(33, 17, 40, 9);
    let region = screen.render_region_to_rgba(rect, false).unwrap();
    let mut i = 0;
    for y in rect.y_range() {
        for x in rect.x_range() {
            let idx = ((y * 280 + x) * 4) as usize;
            assert_eq!(&full[idx..idx + 4], &region[i..i + 4], "pixel ({x}, {y})");
            i += 4;
        }
    }
}

#[test]
fn test_line_agrees_with_get_color() {
    let screen = random_screen(51);
    for mono in [false, true] {
        for y in [0, 77, 191] {
            let line = screen.render_line(y, mono).unwrap();
            for x in 0..280 {
                assert_eq!(screen.get_color(x, y, mono).unwrap(), line[x as usize]);
            }
        }
    }
}

#[test]
fn test_black_screen_renders_black() {
    let rgba = HiResScreen::new().render_to_rgba(false);
    assert!(rgba.chunks_exact(4).all(|px| px == HIRES_PALETTE[HiResColor::Black0 as usize].as_slice()));
}
