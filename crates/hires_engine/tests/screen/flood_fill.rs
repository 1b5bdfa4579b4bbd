//! Color map generation and flood fill

use hires_engine::{ColorPattern, HiResColor, HiResScreen, Rectangle, FILL_MARKER};
use pretty_assertions::assert_eq;

use crate::helpers::{changed_pixels, init_logging};

fn white_screen_with_black_square() -> HiResScreen {
    let mut screen = HiResScreen::new();
    screen.clear(&ColorPattern::solid(HiResColor::White0));
    screen
        .fill_rect(Rectangle::from(50, 50, 5, 5), &ColorPattern::solid(HiResColor::Black0))
        .unwrap();
    screen
}

#[test]
fn test_fill_black_square() {
    init_logging();
    let mut screen = white_screen_with_black_square();
    let before = screen.clone();

    let mut map = screen.generate_color_map(false);
    assert_eq!(25, map.flood_fill(52, 52).unwrap());
    let dirty = screen.replace_color(&map, FILL_MARKER, &ColorPattern::solid(HiResColor::White0)).unwrap();

    assert_eq!(Rectangle::from(50, 50, 5, 5), dirty);
    assert_eq!(Rectangle::from(50, 50, 5, 5), map.marked_bounds(FILL_MARKER));
    assert_eq!(25, changed_pixels(&before, &screen));

    let mut expected = HiResScreen::new();
    expected.clear(&ColorPattern::solid(HiResColor::White0));
    assert_eq!(expected, screen);
}

#[test]
fn test_fill_ignores_mode_bit_of_black() {
    let mut screen = HiResScreen::new();
    // left half black0, right half black1: one visible region
    screen
        .fill_rect(Rectangle::from(140, 0, 140, 192), &ColorPattern::solid(HiResColor::Black1))
        .unwrap();
    let mut map = screen.generate_color_map(false);
    assert_eq!(280 * 192, map.flood_fill(0, 0).unwrap());
}

#[test]
fn test_fill_color_region_respects_artifacts() {
    let mut screen = HiResScreen::new();
    // a green band: isolated odd pixels, the even gaps between them read green too
    screen
        .fill_rect(Rectangle::from(0, 0, 280, 4), &ColorPattern::solid(HiResColor::Green))
        .unwrap();
    let mut map = screen.generate_color_map(false);
    assert_eq!(HiResColor::Green.index(), map.get(10, 1).unwrap());
    assert_eq!(HiResColor::Black0.index(), map.get(0, 0).unwrap());
    let filled = map.flood_fill(10, 1).unwrap();
    assert_eq!(Rectangle::from(1, 0, 279, 4), map.marked_bounds(FILL_MARKER));
    assert_eq!(279 * 4, filled);
}

#[test]
fn test_fill_same_color_is_empty_change() {
    let mut screen = white_screen_with_black_square();
    let before = screen.clone();
    let mut map = screen.generate_color_map(false);
    map.flood_fill(52, 52).unwrap();
    // repainting black with black changes no bits
    let dirty = screen.replace_color(&map, FILL_MARKER, &ColorPattern::solid(HiResColor::Black0)).unwrap();
    assert_eq!(Rectangle::from(50, 50, 5, 5), dirty);
    assert_eq!(before, screen);
}

#[test]
fn test_replace_without_marks() {
    let mut screen = HiResScreen::new();
    let map = screen.generate_color_map(true);
    let dirty = screen.replace_color(&map, FILL_MARKER, &ColorPattern::default()).unwrap();
    assert!(dirty.is_empty());
    assert_eq!(HiResScreen::new(), screen);
}
