// Author: Dustin Pilgrim
// License: MIT

mod app;
mod backlight;
mod cli;
mod config;
mod core;
mod log;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    log::set_verbose(args.verbose);

    match app::command::run(&args) {
        Ok(code) => code,
        Err(e) => {
            serror!("enlighten", "{e:#}");
            ExitCode::FAILURE
        }
    }
}
