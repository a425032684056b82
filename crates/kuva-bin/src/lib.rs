/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end
//!
//! Scripts come from a file via `--script` or from standard input,
//! `--probe` prints image metadata as JSON instead of running
//! anything.
use std::process::exit;

use clap::parser::ValueSource;
use clap::ArgMatches;
use kuva_image::errors::ImageErrors;
use log::error;

mod cmd_args;
mod probe;
mod script;
mod serde;

pub fn main()
{
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_args::setup_logger(&options);

    let result = run(&options);

    if let Err(e) = result
    {
        println!();
        error!(" Could not complete the run, reason {:?}", e);

        println!();
        exit(-1);
    }
}

fn run(options: &ArgMatches) -> Result<(), ImageErrors>
{
    if options.value_source("probe") == Some(ValueSource::CommandLine)
    {
        return probe::probe_files(options);
    }

    if let Some(path) = options.get_one::<String>("script")
    {
        return script::run_file(path);
    }

    script::run_stdin()
}
