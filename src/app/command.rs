// Author: Dustin Pilgrim
// License: MIT

use eyre::Result;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::backlight::sysfs::Sysfs;
use crate::backlight::{BrightnessStore, DeviceLister};
use crate::cli::Args;
use crate::config::Settings;
use crate::core::command;
use crate::{sdebug, sinfo};

pub const USAGE: &str = r#"Usage:
  enlighten              show brightness as "current / max (percent%)"
  enlighten help         show this help
  enlighten list         list available backlight devices
  enlighten N            set brightness to N
  enlighten +N | -N      raise or lower brightness by N
  enlighten N% | +N% | -N%
                         the same, in percent of the maximum brightness

Environment:
  BACKLIGHT_DEVICE         device under /sys/class/backlight (default: intel_backlight)
  BACKLIGHT_THRESHOLD_MAX  highest brightness command allowed (default: 100%)
  BACKLIGHT_THRESHOLD_MIN  lowest brightness command allowed (default: 0)

Notes:
  - Any argument starting with `h` shows this help, any starting with `l` lists devices.
  - Thresholds are measured from 0, so give them as absolute values or percentages.
"#;

/// What the single positional argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Show,
    Help,
    List,
    Adjust(String),
}

impl Request {
    pub fn classify(arg: Option<&str>) -> Self {
        match arg {
            None => Request::Show,
            Some(a) if a.starts_with('h') => Request::Help,
            Some(a) if a.starts_with('l') => Request::List,
            Some(a) => Request::Adjust(a.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The brightness command could not be parsed; usage was printed.
    Rejected,
}

pub fn run(args: &Args) -> Result<ExitCode> {
    let settings = Settings::from_args(args);
    let request = Request::classify(args.command.as_deref());
    sdebug!("Command", "{request:?} on device '{}'", settings.device);

    let outcome = dispatch(
        &settings,
        request,
        &mut Sysfs,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Rejected => ExitCode::FAILURE,
    })
}

pub fn dispatch<B, O, E>(
    settings: &Settings,
    request: Request,
    backlight: &mut B,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome>
where
    B: BrightnessStore + DeviceLister,
    O: Write,
    E: Write,
{
    match request {
        Request::Help => {
            err.write_all(USAGE.as_bytes())?;
        }

        Request::List => {
            // a missing class directory just lists nothing
            if let Some(devices) = backlight.list(&settings.class_dir) {
                writeln!(out, "{}", devices.join("\t"))?;
            }
        }

        Request::Show => {
            let paths = settings.paths();
            let current = backlight.get(&paths.brightness)?;
            let max = backlight.get(&paths.max_brightness)?;
            writeln!(out, "{current} / {max} ({}%)", percent_of(current, max))?;
        }

        Request::Adjust(raw) => {
            let cmd = match command::parse(&raw) {
                Ok(cmd) => cmd,
                Err(e) => {
                    sdebug!("Command", "{e}");
                    err.write_all(USAGE.as_bytes())?;
                    return Ok(Outcome::Rejected);
                }
            };

            let paths = settings.paths();
            let current = backlight.get(&paths.brightness)?;
            let max = backlight.get(&paths.max_brightness)?;

            let bounds = settings.bounds(max)?;
            let target = cmd.calculate(current, max);
            let level = bounds.clamp(target);

            sdebug!(
                "Brightness",
                "{cmd}: {current}/{max} -> {target}, bounds [{}, {}] -> {level}",
                bounds.floor,
                bounds.ceiling
            );

            backlight.set(&paths.brightness, level)?;
            sinfo!("Brightness", "'{}' set to {level}", settings.device);
        }
    }

    Ok(Outcome::Done)
}

fn percent_of(current: u32, max: u32) -> u64 {
    if max == 0 {
        return 0;
    }
    u64::from(current) * 100 / u64::from(max)
}
