use hires_engine::{ColorPattern, EngineError, HiResColor, HiResScreen, Position, Rectangle};
use hires_engine_edit::{EditContext, HiResEditState};
use pretty_assertions::assert_eq;

fn white() -> ColorPattern {
    ColorPattern::solid(HiResColor::White0)
}

#[test]
fn test_undo_redo_plot() {
    let mut state = HiResEditState::new();
    assert!(!state.can_undo());
    state.set_pixel(Position::new(3, 4), &white()).unwrap();
    assert!(state.screen().get_pixel(3, 4).unwrap());
    assert_eq!(Some("Plot".to_string()), state.undo_description());

    assert!(state.undo().unwrap());
    assert_eq!(&HiResScreen::new(), state.screen());
    assert_eq!(Some("Plot".to_string()), state.redo_description());

    assert!(state.redo().unwrap());
    assert!(state.screen().get_pixel(3, 4).unwrap());
    assert!(!state.redo().unwrap());
}

#[test]
fn test_undo_on_empty_history() {
    let mut state = HiResEditState::new();
    assert!(!state.undo().unwrap());
    assert!(!state.redo().unwrap());
}

#[test]
fn test_single_byte_edit_is_diffed() {
    let mut state = HiResEditState::new();
    state.set_pixel(Position::new(0, 0), &white()).unwrap();
    let item = state.undo_stack().peek_undo().unwrap();
    assert!(!item.is_full_copy());
    assert_eq!(1, item.changes().unwrap().len());
}

#[test]
fn test_clear_keeps_full_copies() {
    let mut state = HiResEditState::new();
    state.clear(&ColorPattern::solid(HiResColor::White1)).unwrap();
    assert!(state.undo_stack().peek_undo().unwrap().is_full_copy());
    assert!(state.undo().unwrap());
    assert_eq!(&HiResScreen::new(), state.screen());
}

#[test]
fn test_edit_protocol_errors() {
    let mut state = HiResEditState::new();
    assert!(matches!(state.close_edit(true), Err(EngineError::NoEditOpen)));

    state.open_edit("First").unwrap();
    assert!(state.is_editing());
    assert!(matches!(state.open_edit("Second"), Err(EngineError::EditAlreadyOpen { label }) if label == "First"));
    assert!(matches!(state.undo(), Err(EngineError::EditAlreadyOpen { .. })));
    assert!(!state.close_edit(true).unwrap());
    assert!(matches!(state.context(), EditContext::Idle));
}

#[test]
fn test_failed_edit_is_rolled_back() {
    let mut state = HiResEditState::new();
    // the line leaves the screen after a few pixels
    let result = state.draw_line(Position::new(270, 5), Position::new(290, 5), &white(), Default::default());
    assert!(matches!(result, Err(EngineError::InvalidCoordinate { x: 280, y: 5 })));
    assert_eq!(&HiResScreen::new(), state.screen());
    assert!(!state.can_undo());
    assert!(!state.is_editing());
}

#[test]
fn test_nested_edit_refused() {
    let mut state = HiResEditState::new();
    state.open_edit("Scratch").unwrap();
    let nested = state.with_edit("Nested", |screen| screen.set_pixel(0, 0, &white()));
    assert!(matches!(nested, Err(EngineError::EditAlreadyOpen { .. })));
    assert!(!state.close_edit(false).unwrap());
    assert_eq!(&HiResScreen::new(), state.screen());
}

#[test]
fn test_closure_error_discards_changes() {
    let mut state = HiResEditState::new();
    let result = state.with_edit("Partial", |screen| {
        screen.set_pixel(5, 5, &white())?;
        screen.set_pixel(-1, 5, &white())
    });
    assert!(result.is_err());
    assert!(!state.screen().get_pixel(5, 5).unwrap());
    assert!(!state.can_undo());
}

#[test]
fn test_unchanged_edit_not_recorded() {
    let mut state = HiResEditState::new();
    let dirty = state.fill_rect(Rectangle::from(0, 0, 14, 2), &ColorPattern::solid(HiResColor::Black0)).unwrap();
    assert_eq!(Rectangle::from(0, 0, 14, 2), dirty);
    assert!(!state.can_undo());
    assert!(!state.is_dirty());
}

#[test]
fn test_dirty_flag() {
    let mut state = HiResEditState::new();
    assert!(!state.is_dirty());
    state.set_pixel(Position::new(1, 1), &white()).unwrap();
    assert!(state.is_dirty());
    state.mark_saved();
    assert!(!state.is_dirty());
    state.undo().unwrap();
    assert!(state.is_dirty());
    state.redo().unwrap();
    assert!(!state.is_dirty());
}

#[test]
fn test_new_edit_drops_redo() {
    let mut state = HiResEditState::new();
    state.set_pixel(Position::new(1, 1), &white()).unwrap();
    state.undo().unwrap();
    state.set_pixel(Position::new(2, 2), &white()).unwrap();
    assert!(!state.can_redo());
    assert_eq!(1, state.undo_stack().undo_len());
}

#[test]
fn test_kept_edit_without_change_keeps_redo() {
    let mut state = HiResEditState::new();
    state.set_pixel(Position::new(1, 1), &white()).unwrap();
    state.undo().unwrap();
    assert_eq!(1, state.undo_stack().redo_len());

    state.open_edit("Nothing").unwrap();
    assert!(!state.close_edit(true).unwrap());
    assert!(!state.is_editing());
    assert_eq!(1, state.undo_stack().redo_len());
    assert_eq!(0, state.undo_stack().undo_len());
    assert!(!state.is_dirty());
}
