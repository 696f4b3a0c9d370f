//! Command-line argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hslstat")]
#[command(version, about = "HSL color statistics and average images over PNG collections")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add PNG images to a run state file, creating it if needed
    #[command(name = "in")]
    In {
        /// Width of the average image
        width: u32,
        /// Height of the average image
        height: u32,
        /// Run state file
        data_file: PathBuf,
        /// PNG images to add
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// Write the average image and HSL histogram of a run state file
    #[command(name = "out")]
    Out {
        /// Width of the average image
        width: u32,
        /// Height of the average image
        height: u32,
        /// Run state file
        data_file: PathBuf,
        /// Output PNG for the average image
        out_png: PathBuf,
        /// Output file for the raw HSL histogram
        out_hsl: PathBuf,
    },

    /// Convert a raw RGB cube into a raw HSL histogram
    #[command(name = "rgb2hsl")]
    Rgb2Hsl {
        /// Input RGB cube file
        in_cube: PathBuf,
        /// Output HSL histogram file
        out_hsl: PathBuf,
    },

    /// Count the RGB cube of PNG images, adding to an existing cube file
    #[command(name = "cube")]
    Cube {
        /// RGB cube file
        out_cube: PathBuf,
        /// PNG images to count
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
}
