// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use carv::{GridView, PixelGrid, SeamCarver};
use clap::{value_parser, Arg, ArgMatches, Command};
use failure::{Error, ResultExt};
use log::info;
use std::path::PathBuf;
use std::process;

struct Options {
    input: PathBuf,
    output: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Self {
        Options {
            input: matches.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            output: matches.get_one::<PathBuf>("output").cloned().unwrap_or_default(),
            width: matches.get_one::<u32>("width").copied(),
            height: matches.get_one::<u32>("height").copied(),
        }
    }
}

fn cli() -> Command {
    Command::new("carv")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::new("input")
                .help("The image to carve")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the carved image; the extension picks the format")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .short('w')
                .help("Target width in pixels (default: unchanged)")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .short('H')
                .help("Target height in pixels (default: unchanged)")
                .value_parser(value_parser!(u32).range(1..)),
        )
}

fn run(options: &Options) -> Result<(), Error> {
    let image = image::open(&options.input)
        .with_context(|_| format!("could not read {}", options.input.display()))?
        .to_rgb8();
    let grid = PixelGrid::from_image(&image)?;
    let (width, height) = grid.dimensions();
    let new_width = options.width.unwrap_or(width);
    let new_height = options.height.unwrap_or(height);

    info!(
        "{}: {}x{} -> {}x{}",
        options.input.display(),
        width,
        height,
        new_width,
        new_height
    );
    let mut carver = SeamCarver::new(grid);
    carver.carve(new_width, new_height)?;

    carver
        .into_grid()
        .to_image()
        .save(&options.output)
        .with_context(|_| format!("could not write {}", options.output.display()))?;
    Ok(())
}

fn main() {
    env_logger::init();
    let options = Options::from_matches(&cli().get_matches());
    if let Err(err) = run(&options) {
        eprintln!("carv: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
