/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end runs of the command surface against real files
use std::path::PathBuf;
use std::{fs, process};

use kuva_core::bit_depth::BitDepth;
use kuva_core::pixel::Pixel;
use kuva_image::codecs;
use kuva_image::commands::run_script;
use kuva_image::errors::ImageErrors;
use kuva_image::image::Image;
use kuva_image::store::ImageStore;

fn fixture(name: &str) -> String
{
    env!("CARGO_MANIFEST_DIR").to_string() + "/tests/images/" + name
}

fn temp_path(name: &str) -> PathBuf
{
    std::env::temp_dir().join(format!("kuva-{}-{}", process::id(), name))
}

#[test]
fn load_edit_save_round_trips_through_ppm()
{
    let source = fixture("small.ppm");
    let out = temp_path("brightened.ppm");

    let script = format!(
        "load {} base brighten 10 base bright save {} bright q",
        source,
        out.display()
    );

    let mut store = ImageStore::new();

    run_script(&script, &mut store).unwrap();

    let saved = codecs::read_image(&out).unwrap();

    assert_eq!(&saved, store.get("bright").unwrap());
    assert_eq!(saved.pixel(0, 0).red(), 20);

    let _ = fs::remove_file(out);
}

#[test]
fn failed_commands_keep_the_bindings_made_before_them()
{
    let source = fixture("small.ppm");

    let script = format!(
        "load {source} base brighten 10 base bright brighten 10 missing broken"
    );

    let mut store = ImageStore::new();
    let err = run_script(&script, &mut store).unwrap_err();

    assert!(matches!(err, ImageErrors::UnknownImage(name) if name == "missing"));

    assert!(store.contains("base"));
    assert!(store.contains("bright"));
    assert!(!store.contains("broken"));
}

#[test]
fn png_save_and_load_round_trips_losslessly()
{
    let image = Image::from_fn(5, 4, BitDepth::EIGHT, |x, y| {
        Pixel::new_clamped(BitDepth::EIGHT, (x * 50) as u16, (y * 60) as u16, 128)
    })
    .unwrap();

    let out = temp_path("roundtrip.png");

    codecs::write_image(&image, &out).unwrap();

    let reloaded = codecs::read_image(&out).unwrap();

    assert_eq!(reloaded, image);

    let _ = fs::remove_file(out);
}

#[test]
fn saved_ppm_keeps_the_source_depth()
{
    let depth = BitDepth::new(10).unwrap();
    let image = Image::from_fn(2, 2, depth, |x, y| {
        Pixel::new_clamped(depth, (x * 1000) as u16, (y * 500) as u16, 1023)
    })
    .unwrap();

    let out = temp_path("deep.ppm");

    codecs::write_image(&image, &out).unwrap();

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("P3\n2\n2\n1023\n"));

    let reloaded = codecs::read_image(&out).unwrap();

    assert_eq!(reloaded.depth(), depth);
    assert_eq!(reloaded, image);

    let _ = fs::remove_file(out);
}

#[test]
fn malformed_scripts_stop_with_parse_errors()
{
    let mut store = ImageStore::new();

    let err = run_script("posterize a b", &mut store).unwrap_err();
    assert!(matches!(err, ImageErrors::MalformedCommand(_)));

    let err = run_script("brighten ten a b", &mut store).unwrap_err();
    assert!(matches!(err, ImageErrors::MalformedCommand(_)));

    let err = run_script("load", &mut store).unwrap_err();
    assert!(matches!(err, ImageErrors::MalformedCommand(_)));
}

#[test]
fn loading_a_missing_file_is_a_load_error()
{
    let mut store = ImageStore::new();

    let err = run_script("load /nowhere/at/all.ppm ghost", &mut store).unwrap_err();

    assert!(matches!(err, ImageErrors::LoadFailed(_)));
    assert!(store.is_empty());
}
