// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "map-camera")]
#[command(about = "Replays scripted input against the map camera controls", long_about = None)]
pub struct Cli {
    /// JSON camera config; defaults are used for anything it leaves out
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON input script: an array of frames, each an array of input events
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Frames to keep running after the script runs out
    #[arg(long, default_value_t = 600)]
    pub frames: usize,

    /// Viewport height in pixels
    #[arg(long = "viewport-height", default_value_t = 1080.0)]
    pub viewport_height: f32,

    /// Only print the final summary
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}
