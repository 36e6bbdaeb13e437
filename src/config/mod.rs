// Author: Dustin Pilgrim
// License: MIT

use eyre::{Result, WrapErr};
use std::path::PathBuf;

use crate::backlight::DevicePaths;
use crate::cli::Args;
use crate::core::calc::Bounds;
use crate::core::command;
use crate::swarn;

pub const DEFAULT_CLASS_DIR: &str = "/sys/class/backlight";
pub const DEFAULT_DEVICE: &str = "intel_backlight";
pub const DEFAULT_THRESHOLD_MAX: &str = "100%";
pub const DEFAULT_THRESHOLD_MIN: &str = "0";

/// Everything the commands need, resolved once at startup.
///
/// Thresholds stay as written and are only parsed when a brightness
/// change needs them, so showing, listing and help work whatever they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub class_dir: PathBuf,
    pub device: String,
    pub max_threshold: String,
    pub min_threshold: String,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Self {
            class_dir: args.class_dir.clone(),
            device: args.device.clone(),
            max_threshold: args.max_threshold.clone(),
            min_threshold: args.min_threshold.clone(),
        }
    }

    pub fn paths(&self) -> DevicePaths {
        DevicePaths::new(&self.class_dir, &self.device)
    }

    pub fn bounds(&self, max: u32) -> Result<Bounds> {
        let ceiling = parse_threshold("maximum", &self.max_threshold)?;
        let floor = parse_threshold("minimum", &self.min_threshold)?;
        Ok(Bounds::resolve(&floor, &ceiling, max))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            class_dir: PathBuf::from(DEFAULT_CLASS_DIR),
            device: DEFAULT_DEVICE.to_string(),
            max_threshold: DEFAULT_THRESHOLD_MAX.to_string(),
            min_threshold: DEFAULT_THRESHOLD_MIN.to_string(),
        }
    }
}

fn parse_threshold(which: &str, raw: &str) -> Result<command::BrightnessCommand> {
    let threshold = command::parse(raw).wrap_err_with(|| format!("invalid {which} threshold"))?;

    if threshold.is_relative() {
        swarn!(
            "Config",
            "{which} threshold '{raw}' is relative; thresholds are measured from 0, use an absolute value or a percentage"
        );
    }

    Ok(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(overrides: &[(&str, &str)]) -> Args {
        let mut flags = vec![
            ("--device", "intel_backlight"),
            ("--max-threshold", "100%"),
            ("--min-threshold", "0"),
            ("--class-dir", "/sys/class/backlight"),
        ];
        for &(flag, value) in overrides {
            if let Some(slot) = flags.iter_mut().find(|slot| slot.0 == flag) {
                slot.1 = value;
            }
        }

        let mut argv = vec!["enlighten"];
        for (flag, value) in flags {
            argv.push(flag);
            argv.push(value);
        }
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_the_built_in_constants() {
        assert_eq!(Settings::from_args(&args(&[])), Settings::default());
    }

    #[test]
    fn thresholds_are_parsed_as_commands() {
        let settings =
            Settings::from_args(&args(&[("--max-threshold", "80%"), ("--min-threshold", "5")]));
        assert_eq!(settings.bounds(1000).unwrap(), Bounds { floor: 5, ceiling: 800 });
    }

    #[test]
    fn invalid_threshold_only_fails_when_bounds_are_needed() {
        let settings = Settings::from_args(&args(&[("--max-threshold", "lots")]));
        assert_eq!(settings.max_threshold, "lots");

        let err = settings.bounds(100).unwrap_err();
        assert_eq!(err.to_string(), "invalid maximum threshold");
        assert_eq!(
            format!("{err:#}"),
            "invalid maximum threshold: invalid brightness command 'lots'"
        );
    }

    #[test]
    fn relative_threshold_is_kept_but_measured_from_zero() {
        let settings = Settings::from_args(&args(&[("--min-threshold", "+10")]));
        assert_eq!(settings.bounds(500).unwrap().floor, 10);
    }

    #[test]
    fn paths_follow_the_device() {
        let settings = Settings::from_args(&args(&[("--device", "acpi_video0")]));
        assert_eq!(
            settings.paths().brightness,
            PathBuf::from("/sys/class/backlight/acpi_video0/brightness")
        );
    }
}
