use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use spider_renderer::{CameraMove, EyePoint, DEFAULT_MOVE_STEP};

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Where specular highlights are computed from
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EyeArg {
    /// Fixed world origin (reproduces reference renders)
    Origin,
    /// Actual camera position
    Camera,
}

impl From<EyeArg> for EyePoint {
    fn from(eye: EyeArg) -> Self {
        match eye {
            EyeArg::Origin => EyePoint::WorldOrigin,
            EyeArg::Camera => EyePoint::Camera,
        }
    }
}

/// Camera moves applied before rendering
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MoveArg {
    Forward,
    Backward,
    Up,
    Down,
    Left,
    Right,
}

impl From<MoveArg> for CameraMove {
    fn from(movement: MoveArg) -> Self {
        match movement {
            MoveArg::Forward => CameraMove::Forward,
            MoveArg::Backward => CameraMove::Backward,
            MoveArg::Up => CameraMove::Up,
            MoveArg::Down => CameraMove::Down,
            MoveArg::Left => CameraMove::Left,
            MoveArg::Right => CameraMove::Right,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "spider_viewer")]
#[command(about = "Render a RAYTRACER scene file to an image")]
pub struct Args {
    /// Scene file (RAYTRACER text format, or .json)
    pub scene: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1360)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Maximum reflection bounces
    #[arg(short, long, default_value_t = 3)]
    pub bounces: u32,

    /// Eye point for specular highlights
    #[arg(long, value_enum, default_value_t = EyeArg::Origin)]
    pub eye: EyeArg,

    /// Move the camera before rendering (repeatable, applied in order)
    #[arg(long = "move", value_enum)]
    pub moves: Vec<MoveArg>,

    /// Distance of each camera move
    #[arg(long, default_value_t = DEFAULT_MOVE_STEP)]
    pub step: f32,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
