use hires_engine::{ColorPattern, HiResColor, HiResScreen, Position, Rectangle, SCREEN_HEIGHT, SCREEN_WIDTH};
use hires_engine_edit::{HiResEditState, LineStyle};
use pretty_assertions::assert_eq;

use crate::helpers::lit_pixels;

fn white() -> ColorPattern {
    ColorPattern::solid(HiResColor::White0)
}

#[test]
fn test_horizontal_line_bytes() {
    let mut state = HiResEditState::new();
    let dirty = state.draw_line(Position::new(0, 10), Position::new(13, 10), &white(), LineStyle::Bresenham).unwrap();
    assert_eq!(Rectangle::from(0, 10, 14, 1), dirty);
    assert_eq!(0x7F, state.screen().byte_at(0, 10).unwrap());
    assert_eq!(0x7F, state.screen().byte_at(1, 10).unwrap());
    assert_eq!(0x00, state.screen().byte_at(2, 10).unwrap());
}

#[test]
fn test_applesoft_line_dirty_rect() {
    let mut state = HiResEditState::new();
    let p0 = Position::new(20, 30);
    let p1 = Position::new(5, 50);
    let dirty = state.draw_line(p0, p1, &white(), LineStyle::Applesoft).unwrap();
    assert_eq!(Rectangle::from_corners(p0, p1), dirty);
    assert_eq!(36, lit_pixels(state.screen(), dirty));
}

#[test]
fn test_rectangle_outline() {
    let mut state = HiResEditState::new();
    let dirty = state.draw_rectangle(Position::new(19, 14), Position::new(10, 10), &white(), false).unwrap();
    assert_eq!(Rectangle::from(10, 10, 10, 5), dirty);
    assert_eq!(26, lit_pixels(state.screen(), dirty));
    assert!(!state.screen().get_pixel(15, 12).unwrap());
}

#[test]
fn test_filled_rectangle() {
    let mut state = HiResEditState::new();
    let dirty = state.draw_rectangle(Position::new(10, 10), Position::new(19, 14), &white(), true).unwrap();
    assert_eq!(50, lit_pixels(state.screen(), dirty));
    assert_eq!(50, lit_pixels(state.screen(), Rectangle::screen()));
}

#[test]
fn test_ellipse_inside_box() {
    let mut state = HiResEditState::new();
    let dirty = state.draw_ellipse(Position::new(40, 40), Position::new(100, 80), &white(), true).unwrap();
    let bounds = Rectangle::from_corners(Position::new(40, 40), Position::new(100, 80));
    assert_eq!(bounds, dirty.union(&bounds));
    assert_eq!(lit_pixels(state.screen(), Rectangle::screen()), lit_pixels(state.screen(), bounds));
    assert!(state.screen().get_pixel(70, 60).unwrap());

    state.undo().unwrap();
    state.draw_ellipse(Position::new(40, 40), Position::new(100, 80), &white(), false).unwrap();
    assert!(!state.screen().get_pixel(70, 60).unwrap());
    assert!(state.screen().get_pixel(70, 40).unwrap());
}

#[test]
fn test_flood_fill_and_undo() {
    let mut state = HiResEditState::new();
    let dirty = state.flood_fill(Position::new(10, 10), &white()).unwrap();
    assert_eq!(Rectangle::screen(), dirty);
    assert_eq!((SCREEN_WIDTH * SCREEN_HEIGHT) as usize, lit_pixels(state.screen(), Rectangle::screen()));
    assert_eq!(Some("Fill".to_string()), state.undo_description());

    state.undo().unwrap();
    assert_eq!(&HiResScreen::new(), state.screen());
}

#[test]
fn test_flood_fill_bounded_by_outline() {
    let mut state = HiResEditState::new();
    state.set_mono(true);
    state.draw_rectangle(Position::new(10, 10), Position::new(30, 20), &white(), false).unwrap();
    let dirty = state.flood_fill(Position::new(20, 15), &white()).unwrap();
    assert_eq!(Rectangle::from(11, 11, 19, 9), dirty);
    assert_eq!(21 * 11, lit_pixels(state.screen(), Rectangle::screen()));
}

#[test]
fn test_flood_fill_same_color_records_nothing() {
    let mut state = HiResEditState::new();
    state.flood_fill(Position::new(10, 10), &ColorPattern::solid(HiResColor::Black0)).unwrap();
    assert!(!state.can_undo());
}

#[test]
fn test_render_dirty_expands() {
    let mut state = HiResEditState::new();
    let dirty = state.set_pixel(Position::new(10, 3), &white()).unwrap();
    let (area, rgba) = state.render_dirty(dirty).unwrap();
    assert_eq!(Rectangle::from(9, 3, 3, 1), area);
    assert_eq!(3 * 4, rgba.len());
}
