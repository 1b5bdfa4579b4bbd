use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{ensure, Context, Result};
use hires_engine::{HiResScreen, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Scales a 280x192 RGBA frame by repeating every pixel `scale` times in
/// both directions.
pub fn scale_rgba(rgba: &[u8], scale: u32) -> Vec<u8> {
    let scale = scale as usize;
    let width = SCREEN_WIDTH as usize;
    let mut result = Vec::with_capacity(rgba.len() * scale * scale);
    for row in rgba.chunks_exact(width * 4) {
        let mut line = Vec::with_capacity(row.len() * scale);
        for px in row.chunks_exact(4) {
            for _ in 0..scale {
                line.extend_from_slice(px);
            }
        }
        for _ in 0..scale {
            result.extend_from_slice(&line);
        }
    }
    result
}

pub fn export_png(screen: &HiResScreen, mono: bool, scale: u32, output: &Path) -> Result<()> {
    ensure!(scale > 0, "scale must be at least 1");
    let data = scale_rgba(&screen.render_to_rgba(mono), scale);

    let file = File::create(output).with_context(|| format!("can't create {}", output.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), SCREEN_WIDTH as u32 * scale, SCREEN_HEIGHT as u32 * scale);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().context("png header")?;
    writer.write_image_data(&data).context("png data")?;
    writer.finish().context("png finish")?;
    log::info!("exported {} at scale {scale}", output.display());
    Ok(())
}
