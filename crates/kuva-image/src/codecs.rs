/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image readers and writers
//!
//! The file extension chooses the codec. Plain text PPM is handled
//! by [`kuva_ppm`] and keeps the image's own bit depth end to end,
//! the binary formats go through the `image` crate at 8 bits per
//! channel. Whatever goes wrong inside a codec surfaces as a load or
//! save error carrying the offending path, callers never see codec
//! internals.
use std::fs;
use std::path::Path;

use kuva_core::bit_depth::BitDepth;
use kuva_core::pixel::Pixel;
use kuva_ppm::{PpmDecoder, PpmEncoder};
use log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Supported on disk formats
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImageFormat
{
    /// Plain text PPM, `P3`
    Ppm,
    /// Portable Network Graphics
    Png,
    /// JPEG
    Jpeg,
    /// Windows bitmap
    Bmp
}

impl ImageFormat
{
    /// Choose a format from a path's extension
    ///
    /// Matching is case insensitive, a missing or unknown extension
    /// yields `None`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<ImageFormat>
    {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        match extension.as_str()
        {
            "ppm" => Some(ImageFormat::Ppm),
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None
        }
    }

    /// Short lowercase name of the format
    #[must_use]
    pub const fn name(self) -> &'static str
    {
        match self
        {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Bmp => "bmp"
        }
    }
}

/// Read an image from `path`, choosing the codec by extension
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors>
{
    let path = path.as_ref();

    let format = ImageFormat::from_path(path).ok_or_else(|| {
        ImageErrors::LoadFailed(format!(
            "{}: unknown or missing file extension",
            path.display()
        ))
    })?;

    trace!("reading {} as {}", path.display(), format.name());

    match format
    {
        ImageFormat::Ppm => read_ppm(path),
        _ => read_binary(path)
    }
}

/// Write `image` to `path`, choosing the codec by extension
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), ImageErrors>
{
    let path = path.as_ref();

    let format = ImageFormat::from_path(path).ok_or_else(|| {
        ImageErrors::SaveFailed(format!(
            "{}: unknown or missing file extension",
            path.display()
        ))
    })?;

    trace!("writing {} as {}", path.display(), format.name());

    match format
    {
        ImageFormat::Ppm => write_ppm(image, path),
        _ => write_binary(image, path)
    }
}

fn read_ppm(path: &Path) -> Result<Image, ImageErrors>
{
    let contents = fs::read(path)
        .map_err(|e| ImageErrors::LoadFailed(format!("{}: {}", path.display(), e)))?;

    let mut decoder = PpmDecoder::new(&contents);

    let pixels = decoder
        .decode()
        .map_err(|e| ImageErrors::LoadFailed(format!("{}: {:?}", path.display(), e)))?;

    // headers are guaranteed decoded once decode succeeds
    let (width, height) = decoder.dimensions().ok_or_else(|| {
        ImageErrors::LoadFailed(format!("{}: headers were not decoded", path.display()))
    })?;
    let depth = decoder.bit_depth().ok_or_else(|| {
        ImageErrors::LoadFailed(format!("{}: headers were not decoded", path.display()))
    })?;

    Image::new(width, height, depth, pixels)
}

fn write_ppm(image: &Image, path: &Path) -> Result<(), ImageErrors>
{
    let mut sink = Vec::new();
    let mut encoder = PpmEncoder::new(&mut sink);

    encoder
        .encode(
            image.width(),
            image.height(),
            image.max_value(),
            image.pixels()
        )
        .map_err(|e| ImageErrors::SaveFailed(format!("{}: {:?}", path.display(), e)))?;

    fs::write(path, sink)
        .map_err(|e| ImageErrors::SaveFailed(format!("{}: {}", path.display(), e)))
}

fn read_binary(path: &Path) -> Result<Image, ImageErrors>
{
    let decoded = image::open(path)
        .map_err(|e| ImageErrors::LoadFailed(format!("{}: {}", path.display(), e)))?
        .to_rgb8();

    let width = decoded.width() as usize;
    let height = decoded.height() as usize;

    let pixels = decoded
        .as_raw()
        .chunks_exact(3)
        .map(|rgb| {
            Pixel::new_clamped(
                BitDepth::EIGHT,
                u16::from(rgb[0]),
                u16::from(rgb[1]),
                u16::from(rgb[2])
            )
        })
        .collect();

    Image::new(width, height, BitDepth::EIGHT, pixels)
}

fn write_binary(image: &Image, path: &Path) -> Result<(), ImageErrors>
{
    let buffer = image.to_rgb8();

    let raster = image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        buffer
    )
    .ok_or_else(|| {
        ImageErrors::SaveFailed(format!(
            "{}: raster buffer does not match the image dimensions",
            path.display()
        ))
    })?;

    raster
        .save(path)
        .map_err(|e| ImageErrors::SaveFailed(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests
{
    use std::path::Path;

    use crate::codecs::{read_image, ImageFormat};
    use crate::errors::ImageErrors;

    #[test]
    fn extensions_choose_formats_case_insensitively()
    {
        assert_eq!(
            ImageFormat::from_path(Path::new("a/b/photo.PPM")),
            Some(ImageFormat::Ppm)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("out.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("x.JpG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("x.jpeg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_path(Path::new("x.bmp")),
            Some(ImageFormat::Bmp)
        );

        assert_eq!(ImageFormat::from_path(Path::new("x.gif")), None);
        assert_eq!(ImageFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn missing_files_surface_as_load_errors()
    {
        let err = read_image("/definitely/not/here.ppm").unwrap_err();

        assert!(matches!(err, ImageErrors::LoadFailed(_)));
    }

    #[test]
    fn unknown_extensions_surface_as_load_errors()
    {
        let err = read_image("picture.tiff").unwrap_err();

        match err
        {
            ImageErrors::LoadFailed(reason) =>
            {
                assert!(reason.contains("unknown or missing file extension"));
            }
            _ => panic!("expected a load error")
        }
    }
}
