use std::{fs, path::Path};

use anyhow::{Context, Result};
use hires_engine::{format::HiResFile, HiResColor, HiResScreen, Position, Rectangle, TransferMode, MODE_BIT, SCREEN_HEIGHT, SCREEN_WIDTH};
use hires_engine_edit::{HiResEditState, LineStyle};

use crate::options::Options;

pub fn load(path: &Path) -> Result<HiResFile> {
    let data = fs::read(path).with_context(|| format!("can't read {}", path.display()))?;
    let file = HiResFile::from_bytes(data).with_context(|| format!("can't load {}", path.display()))?;
    log::debug!("loaded {} ({} bytes)", path.display(), file.screen.len());
    Ok(file)
}

/// Loads `path` into an edit session. A missing file starts from a black
/// screen when `allow_new` is set.
pub fn open_session(path: &Path, options: &Options, mono: Option<bool>, allow_new: bool) -> Result<HiResEditState> {
    let mut state = if allow_new && !path.exists() {
        let mut state = HiResEditState::from_screen(HiResScreen::new());
        state.set_mono(options.mono);
        state
    } else {
        let file = load(path)?;
        let file_mono = file.mono_preference;
        let mut state = HiResEditState::from_file(file);
        state.set_mono(file_mono.unwrap_or(options.mono));
        state
    };
    if let Some(mono) = mono {
        state.set_mono(mono);
    }
    Ok(state)
}

pub fn save(state: &mut HiResEditState, path: &Path, options: &Options) -> Result<()> {
    let bytes = state.to_file().to_bytes(state.is_mono(), options.write_signature);
    fs::write(path, bytes).with_context(|| format!("can't write {}", path.display()))?;
    state.mark_saved();
    log::info!("saved {}", path.display());
    Ok(())
}

/// Human readable summary of a screen.
pub fn describe(file: &HiResFile) -> String {
    let screen = &file.screen;
    let mut lit = 0usize;
    let mut counts = [0usize; 8];
    let mut high = 0usize;
    let mono = file.mono_preference.unwrap_or(false);
    for y in Rectangle::screen().y_range() {
        for x in Rectangle::screen().x_range() {
            if screen.get_pixel(x, y).unwrap_or(false) {
                lit += 1;
            }
        }
        if let Ok(line) = screen.render_line(y, mono) {
            for color in line {
                counts[color.index() as usize] += 1;
            }
        }
        for col in 0..hires_engine::BYTES_PER_ROW {
            if screen.byte_at(col, y).is_ok_and(|b| b & MODE_BIT != 0) {
                high += 1;
            }
        }
    }

    let mode = match file.mono_preference {
        Some(true) => "mono",
        Some(false) => "color",
        None => "unknown (no signature)",
    };
    let mut result = format!(
        "size: {} bytes\nrender mode: {mode}\nlit pixels: {lit} of {}\nbytes with mode bit: {high}\n",
        screen.len(),
        SCREEN_WIDTH * SCREEN_HEIGHT
    );
    for (idx, count) in counts.iter().enumerate().filter(|(_, count)| **count > 0) {
        result.push_str(&format!("{:>8}: {count}\n", HiResColor::from_index(idx as u8).name()));
    }
    result
}

pub fn line_style(applesoft: bool) -> LineStyle {
    if applesoft {
        LineStyle::Applesoft
    } else {
        LineStyle::Bresenham
    }
}

/// Copies the `width` x `height` block at `from` to `to`.
pub fn copy_block(state: &mut HiResEditState, from: Position, width: i32, height: i32, to: Position, mode: TransferMode) -> Result<Rectangle> {
    state.copy_selection(Rectangle::new(from, hires_engine::Size::new(width, height)))?;
    Ok(state.paste_clipping(to, mode)?)
}
