// Author: Dustin Pilgrim
// License: MIT

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_CLASS_DIR, DEFAULT_DEVICE, DEFAULT_THRESHOLD_MAX, DEFAULT_THRESHOLD_MIN};

#[derive(Parser, Debug)]
#[command(
    name = "enlighten",
    version = env!("CARGO_PKG_VERSION"),
    about = "Show or adjust backlight brightness",
    disable_help_flag = true
)]
pub struct Args {
    /// Backlight device directory name
    #[arg(long, env = "BACKLIGHT_DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Brightness command giving the highest allowed value
    #[arg(long, env = "BACKLIGHT_THRESHOLD_MAX", default_value = DEFAULT_THRESHOLD_MAX, allow_hyphen_values = true)]
    pub max_threshold: String,

    /// Brightness command giving the lowest allowed value
    #[arg(long, env = "BACKLIGHT_THRESHOLD_MIN", default_value = DEFAULT_THRESHOLD_MIN, allow_hyphen_values = true)]
    pub min_threshold: String,

    /// Directory holding one subdirectory per backlight device
    #[arg(long, env = "BACKLIGHT_CLASS_DIR", value_name = "DIR", default_value = DEFAULT_CLASS_DIR, hide = true)]
    pub class_dir: PathBuf,

    #[arg(short, long, action)]
    pub verbose: bool,

    /// N, +N, -N, N%, +N%, -N%, help or list
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,
}
