/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use kuva_image::codecs::{self, ImageFormat};
use kuva_image::errors::ImageErrors;

use crate::serde::ProbeReport;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_files(options: &ArgMatches) -> Result<(), ImageErrors>
{
    if let Some(paths) = options.get_many::<String>("probe")
    {
        for path in paths
        {
            let format = ImageFormat::from_path(Path::new(path)).ok_or_else(|| {
                ImageErrors::LoadFailed(format!("{path}: unknown or missing file extension"))
            })?;

            let image = codecs::read_image(path)?;
            let report = ProbeReport::new(path, format, &image);

            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }

    Ok(())
}
