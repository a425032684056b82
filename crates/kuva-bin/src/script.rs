/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Script sources
//!
//! A run reads the whole source first, commands may span lines so
//! there is no meaningful way to execute partial input. Standard
//! input is consumed to end of file, `q`/`quit` inside the source
//! still stops execution early.
use std::fs;
use std::io::Read;

use kuva_image::commands::run_script;
use kuva_image::errors::ImageErrors;
use kuva_image::store::ImageStore;
use log::info;

pub fn run_file(path: &str) -> Result<(), ImageErrors>
{
    let source = fs::read_to_string(path)
        .map_err(|e| ImageErrors::GenericString(format!("{path}: {e}")))?;

    info!("Running script `{path}`");

    let mut store = ImageStore::new();

    run_script(&source, &mut store)
}

pub fn run_stdin() -> Result<(), ImageErrors>
{
    let mut source = String::new();

    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| ImageErrors::GenericString(format!("could not read standard input: {e}")))?;

    let mut store = ImageStore::new();

    run_script(&source, &mut store)
}
