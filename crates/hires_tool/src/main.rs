use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use hires_engine::{Position, Rectangle, TransferMode};

use crate::options::Options;

mod commands;
mod export;
mod options;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RenderMode {
    Color,
    Mono,
}

#[derive(Parser)]
#[command(version, about = "Inspect and edit hi-res screen images.")]
pub struct Cli {
    #[arg(help = "Options file to use instead of the one in the configuration directory.", long, global = true)]
    config: Option<PathBuf>,

    #[arg(help = "Write the log into this directory instead of stderr.", long, global = true)]
    log_dir: Option<PathBuf>,

    #[arg(help = "Render mode, overriding the file and the options.", long, global = true)]
    mode: Option<RenderMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Print size, render mode and color statistics")]
    Info { path: PathBuf },

    #[command(about = "Render the image into a PNG file")]
    Export {
        path: PathBuf,
        output: PathBuf,
        #[arg(help = "Output pixels per screen pixel.", long)]
        scale: Option<u32>,
    },

    #[command(about = "Paint the whole screen; creates the file if missing")]
    Clear {
        path: PathBuf,
        #[arg(help = "Standard pattern index (0-9).", long)]
        pattern: Option<usize>,
    },

    #[command(about = "Flood fill the area around a pixel")]
    Fill {
        path: PathBuf,
        x: i32,
        y: i32,
        #[arg(help = "Standard pattern index (0-9).", long)]
        pattern: Option<usize>,
    },

    #[command(about = "Draw a line between two pixels")]
    Line {
        path: PathBuf,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[arg(help = "Step like Applesoft's HPLOT TO.", long, default_value_t = false)]
        applesoft: bool,
        #[arg(help = "Standard pattern index (0-9).", long)]
        pattern: Option<usize>,
    },

    #[command(about = "Draw a rectangle given two corners")]
    Rect {
        path: PathBuf,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[arg(long, default_value_t = false)]
        filled: bool,
        #[arg(help = "Standard pattern index (0-9).", long)]
        pattern: Option<usize>,
    },

    #[command(about = "Draw the ellipse inside a bounding box")]
    Ellipse {
        path: PathBuf,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        #[arg(long, default_value_t = false)]
        filled: bool,
        #[arg(help = "Standard pattern index (0-9).", long)]
        pattern: Option<usize>,
    },

    #[command(about = "Copy a block of pixels to another position")]
    Copy {
        path: PathBuf,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        to_x: i32,
        to_y: i32,
        #[arg(help = "copy, merge or xor.", long, default_value = "copy")]
        transfer: TransferMode,
    },

    #[command(about = "Write the effective options to the options file")]
    StoreOptions,
}

fn start_logger(log_dir: Option<&PathBuf>) -> Result<flexi_logger::LoggerHandle> {
    let logger = Logger::try_with_env_or_str("info")?;
    let logger = match log_dir {
        Some(log_dir) => logger
            .log_to_file(FileSpec::default().directory(log_dir).basename("hires_tool").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn),
        None => logger,
    };
    Ok(logger.start()?)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let _logger = start_logger(args.log_dir.as_ref())?;

    let options = Options::load_options(args.config.as_deref());
    let mono = args.mode.map(|mode| mode == RenderMode::Mono);

    match args.command {
        Commands::Info { path } => {
            print!("{}", commands::describe(&commands::load(&path)?));
        }
        Commands::Export { path, output, scale } => {
            let file = commands::load(&path)?;
            let mono = mono.or(file.mono_preference).unwrap_or(options.mono);
            export::export_png(&file.screen, mono, scale.unwrap_or(options.png_scale), &output)?;
        }
        Commands::Clear { path, pattern } => {
            let mut state = commands::open_session(&path, &options, mono, true)?;
            state.clear(&options.pattern(pattern)?)?;
            commands::save(&mut state, &path, &options)?;
        }
        Commands::Fill { path, x, y, pattern } => {
            let mut state = commands::open_session(&path, &options, mono, false)?;
            let dirty = state.flood_fill(Position::new(x, y), &options.pattern(pattern)?)?;
            report(&dirty);
            commands::save(&mut state, &path, &options)?;
        }
        Commands::Line {
            path,
            x0,
            y0,
            x1,
            y1,
            applesoft,
            pattern,
        } => {
            let mut state = commands::open_session(&path, &options, mono, false)?;
            let dirty = state.draw_line(Position::new(x0, y0), Position::new(x1, y1), &options.pattern(pattern)?, commands::line_style(applesoft))?;
            report(&dirty);
            commands::save(&mut state, &path, &options)?;
        }
        Commands::Rect {
            path,
            x0,
            y0,
            x1,
            y1,
            filled,
            pattern,
        } => {
            let mut state = commands::open_session(&path, &options, mono, false)?;
            let dirty = state.draw_rectangle(Position::new(x0, y0), Position::new(x1, y1), &options.pattern(pattern)?, filled)?;
            report(&dirty);
            commands::save(&mut state, &path, &options)?;
        }
        Commands::Ellipse {
            path,
            x0,
            y0,
            x1,
            y1,
            filled,
            pattern,
        } => {
            let mut state = commands::open_session(&path, &options, mono, false)?;
            let dirty = state.draw_ellipse(Position::new(x0, y0), Position::new(x1, y1), &options.pattern(pattern)?, filled)?;
            report(&dirty);
            commands::save(&mut state, &path, &options)?;
        }
        Commands::Copy {
            path,
            x,
            y,
            width,
            height,
            to_x,
            to_y,
            transfer,
        } => {
            let mut state = commands::open_session(&path, &options, mono, false)?;
            let dirty = commands::copy_block(&mut state, Position::new(x, y), width, height, Position::new(to_x, to_y), transfer)?;
            report(&dirty);
            commands::save(&mut state, &path, &options)?;
        }
        Commands::StoreOptions => {
            let file = options.store_options(args.config.as_deref())?;
            println!("options written to {}", file.display());
        }
    }
    Ok(())
}

fn report(dirty: &Rectangle) {
    if dirty.is_empty() {
        log::info!("nothing changed");
    } else {
        log::info!("changed area {}x{} at ({}, {})", dirty.width(), dirty.height(), dirty.left(), dirty.top());
    }
}
