//! hslstat - HSL color statistics CLI
//!
//! Accumulates an average image and an HSL histogram over PNG files in a
//! resumable state file, and converts RGB cube tables to HSL histograms.

mod args;

use args::{Args, Command};
use clap::Parser;
use hslstat::{BatchResult, batch};
use log::error;
use std::process::ExitCode;

fn run(command: Command) -> BatchResult<()> {
    match command {
        Command::In {
            width,
            height,
            data_file,
            images,
        } => {
            batch::accumulate_images(&data_file, width, height, &images)?;
        }
        Command::Out {
            width,
            height,
            data_file,
            out_png,
            out_hsl,
        } => {
            batch::export_results(&data_file, width, height, &out_png, &out_hsl)?;
        }
        Command::Rgb2Hsl { in_cube, out_hsl } => {
            batch::cube_to_hsl(&in_cube, &out_hsl)?;
        }
        Command::Cube { out_cube, images } => {
            batch::count_cube(&out_cube, &images)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
