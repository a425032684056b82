/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is a 2 dimensional grid of [`Pixel`]s sharing one bit
//! depth. Images are immutable, every operation hands back a new
//! image and leaves the receiver untouched, which keeps a sequence
//! of edits free of aliasing surprises.
use std::fmt::{Debug, Formatter};

use kuva_core::bit_depth::BitDepth;
use kuva_core::channel::{GreyMethod, HistogramChannel};
use kuva_core::pixel::Pixel;

use crate::errors::ImageErrors;
use crate::filter::Filter;
use crate::transform::Transform;

/// An immutable 2 dimensional grid of pixels
///
/// Pixels are stored row major, the accessor contract is `(x, y)`
/// with `x` running across the width. All pixels share the image's
/// bit depth, the constructor rejects grids where they do not.
///
/// Equality is structural, two images are equal when dimensions,
/// depth and every pixel position agree.
#[derive(Clone, PartialEq, Eq)]
pub struct Image
{
    width:  usize,
    height: usize,
    depth:  BitDepth,
    pixels: Vec<Pixel>
}

impl Debug for Image
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Image {{ width: {}, height: {}, depth: {:?} }}",
            self.width, self.height, self.depth
        )
    }
}

impl Image
{
    /// Create a new image from a row major pixel grid
    ///
    /// Returns an error when the pixel count does not match the
    /// dimensions or when any pixel carries a different bit depth.
    pub fn new(
        width: usize, height: usize, depth: BitDepth, pixels: Vec<Pixel>
    ) -> Result<Image, ImageErrors>
    {
        if pixels.len() != width * height
        {
            return Err(ImageErrors::DimensionsMismatch(width * height, pixels.len()));
        }
        if pixels.iter().any(|pixel| pixel.depth() != depth)
        {
            return Err(ImageErrors::GenericStr(
                "All pixels in an image must share the image's bit depth"
            ));
        }

        Ok(Image {
            width,
            height,
            depth,
            pixels
        })
    }

    /// Create an image by calling `pixel_fn(x, y)` for every position
    ///
    /// Positions are visited row by row. Every pixel the function
    /// returns must carry `depth`, construction fails otherwise.
    pub fn from_fn<F>(
        width: usize, height: usize, depth: BitDepth, mut pixel_fn: F
    ) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height
        {
            for x in 0..width
            {
                pixels.push(pixel_fn(x, y));
            }
        }

        Image::new(width, height, depth, pixels)
    }

    /// Return the image width in pixels
    #[must_use]
    pub const fn width(&self) -> usize
    {
        self.width
    }

    /// Return the image height in pixels
    #[must_use]
    pub const fn height(&self) -> usize
    {
        self.height
    }

    /// Return the shared bit depth of the image's pixels
    #[must_use]
    pub const fn depth(&self) -> BitDepth
    {
        self.depth
    }

    /// Return the largest channel sample the image's depth allows
    #[must_use]
    pub const fn max_value(&self) -> u16
    {
        self.depth.max_value()
    }

    /// Return the pixels in row major order
    #[must_use]
    pub fn pixels(&self) -> &[Pixel]
    {
        &self.pixels
    }

    /// Return the pixel at `(x, y)`, `x` runs across the width
    ///
    /// Panics when `x` or `y` is outside the image.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Pixel
    {
        self.pixels[y * self.width + x]
    }

    /// Return a new image with `delta` added to every channel of
    /// every pixel
    ///
    /// Results clamp to `[0, max_value]` at the image's own depth,
    /// `delta` may be negative to darken.
    #[must_use]
    pub fn brighten(&self, delta: i32) -> Image
    {
        let pixels = self
            .pixels
            .iter()
            .map(|pixel| pixel.with_brightness(delta))
            .collect();

        Image {
            width: self.width,
            height: self.height,
            depth: self.depth,
            pixels
        }
    }

    /// Return a new image mirrored along the vertical axis
    ///
    /// The pixel at `x` moves to `width - 1 - x`
    ///
    /// ```text
    /// old image     new image
    /// ┌─────────┐   ┌─────────┐
    /// │A B C D E│   │E D C B A│
    /// │F G H I J│   │J I H G F│
    /// └─────────┘   └─────────┘
    /// ```
    #[must_use]
    pub fn flip_horizontal(&self) -> Image
    {
        if self.pixels.is_empty()
        {
            return self.clone();
        }
        let mut pixels = Vec::with_capacity(self.pixels.len());

        for row in self.pixels.chunks_exact(self.width)
        {
            pixels.extend(row.iter().rev().copied());
        }

        Image {
            width: self.width,
            height: self.height,
            depth: self.depth,
            pixels
        }
    }

    /// Return a new image mirrored along the horizontal axis
    ///
    /// The row at `y` moves to `height - 1 - y`
    ///
    /// ```text
    /// old image     new image
    /// ┌─────────┐   ┌─────────┐
    /// │A B C D E│   │F G H I J│
    /// │F G H I J│   │A B C D E│
    /// └─────────┘   └─────────┘
    /// ```
    #[must_use]
    pub fn flip_vertical(&self) -> Image
    {
        if self.pixels.is_empty()
        {
            return self.clone();
        }
        let mut pixels = Vec::with_capacity(self.pixels.len());

        for row in self.pixels.chunks_exact(self.width).rev()
        {
            pixels.extend_from_slice(row);
        }

        Image {
            width: self.width,
            height: self.height,
            depth: self.depth,
            pixels
        }
    }

    /// Return a new greyscale image using the given derivation
    ///
    /// Every output pixel has three equal channels and keeps the
    /// source bit depth.
    #[must_use]
    pub fn to_greyscale(&self, method: GreyMethod) -> Image
    {
        let pixels = self
            .pixels
            .iter()
            .map(|pixel| Pixel::grey(self.depth, pixel.grey_value(method)))
            .collect();

        Image {
            width: self.width,
            height: self.height,
            depth: self.depth,
            pixels
        }
    }

    /// Return a new image with `filter` convolved over every channel
    ///
    /// For each pixel the `k x k` neighborhood of each channel is
    /// gathered with zero padding outside the image bounds, the
    /// three channel results assemble into the output pixel at that
    /// position.
    pub fn apply_filter(&self, filter: &Filter) -> Result<Image, ImageErrors>
    {
        let size = filter.size();
        let half = (size / 2) as isize;
        let window_len = size * size;

        let mut window_red = vec![0_u16; window_len];
        let mut window_green = vec![0_u16; window_len];
        let mut window_blue = vec![0_u16; window_len];

        let max = self.max_value();
        let mut pixels = Vec::with_capacity(self.pixels.len());

        for y in 0..self.height
        {
            for x in 0..self.width
            {
                for ky in 0..size
                {
                    for kx in 0..size
                    {
                        let sample_x = x as isize + kx as isize - half;
                        let sample_y = y as isize + ky as isize - half;
                        let slot = ky * size + kx;

                        let inside = sample_x >= 0
                            && sample_y >= 0
                            && (sample_x as usize) < self.width
                            && (sample_y as usize) < self.height;

                        if inside
                        {
                            let sample = self.pixel(sample_x as usize, sample_y as usize);

                            window_red[slot] = sample.red();
                            window_green[slot] = sample.green();
                            window_blue[slot] = sample.blue();
                        }
                        else
                        {
                            // zero padding outside the image
                            window_red[slot] = 0;
                            window_green[slot] = 0;
                            window_blue[slot] = 0;
                        }
                    }
                }

                let red = filter.apply(&window_red, max)?;
                let green = filter.apply(&window_green, max)?;
                let blue = filter.apply(&window_blue, max)?;

                pixels.push(Pixel::new_clamped(self.depth, red, green, blue));
            }
        }

        Image::new(self.width, self.height, self.depth, pixels)
    }

    /// Return a new image with every pixel mapped through `transform`
    #[must_use]
    pub fn apply_transform(&self, transform: &Transform) -> Image
    {
        let pixels = self
            .pixels
            .iter()
            .map(|pixel| transform.apply(*pixel))
            .collect();

        Image {
            width: self.width,
            height: self.height,
            depth: self.depth,
            pixels
        }
    }

    /// Count how often each sample value occurs in the selected
    /// distribution
    ///
    /// The result has `max_value + 1` bins, one per representable
    /// sample, bins of absent values stay zero. The counts always sum
    /// to `width * height`.
    #[must_use]
    pub fn histogram(&self, channel: HistogramChannel) -> Vec<u32>
    {
        let mut counts = vec![0_u32; usize::from(self.max_value()) + 1];

        for pixel in &self.pixels
        {
            let value = match channel
            {
                HistogramChannel::Red => pixel.red(),
                HistogramChannel::Green => pixel.green(),
                HistogramChannel::Blue => pixel.blue(),
                HistogramChannel::Intensity => pixel.intensity()
            };

            counts[usize::from(value)] += 1;
        }

        counts
    }

    /// Return an 8 bit RGB raster for the display and binary codec
    /// boundary
    ///
    /// Samples of images deeper than 8 bits scale down linearly so
    /// that `max_value` maps to 255, 8 bit images pass through
    /// unchanged.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8>
    {
        let max = u32::from(self.max_value());
        let mut buffer = Vec::with_capacity(self.pixels.len() * 3);

        for pixel in &self.pixels
        {
            buffer.push((u32::from(pixel.red()) * 255 / max) as u8);
            buffer.push((u32::from(pixel.green()) * 255 / max) as u8);
            buffer.push((u32::from(pixel.blue()) * 255 / max) as u8);
        }

        buffer
    }
}

#[cfg(test)]
mod tests
{
    use kuva_core::bit_depth::BitDepth;
    use kuva_core::channel::{GreyMethod, HistogramChannel};
    use kuva_core::pixel::Pixel;
    use nanorand::{Rng, WyRand};

    use crate::filter::Filter;
    use crate::image::Image;
    use crate::transform::Transform;

    fn pixel(red: u16, green: u16, blue: u16) -> Pixel
    {
        Pixel::new(BitDepth::EIGHT, red, green, blue).unwrap()
    }

    fn random_image(width: usize, height: usize) -> Image
    {
        let mut rng = WyRand::new();

        Image::from_fn(width, height, BitDepth::EIGHT, |_, _| {
            pixel(
                rng.generate_range(0..=255),
                rng.generate_range(0..=255),
                rng.generate_range(0..=255)
            )
        })
        .unwrap()
    }

    #[test]
    fn construction_validates_the_grid()
    {
        let pixels = vec![pixel(0, 0, 0); 5];

        assert!(Image::new(2, 2, BitDepth::EIGHT, pixels.clone()).is_err());
        assert!(Image::new(5, 1, BitDepth::EIGHT, pixels.clone()).is_ok());

        // depth of the pixels must match the image depth
        let ten_bits = BitDepth::new(10).unwrap();
        assert!(Image::new(5, 1, ten_bits, pixels).is_err());
    }

    #[test]
    fn pixel_addressing_is_x_across_the_width()
    {
        let image = Image::from_fn(4, 3, BitDepth::EIGHT, |x, y| {
            pixel(x as u16, y as u16, 0)
        })
        .unwrap();

        assert_eq!(image.pixel(3, 0).red(), 3);
        assert_eq!(image.pixel(3, 0).green(), 0);
        assert_eq!(image.pixel(0, 2).red(), 0);
        assert_eq!(image.pixel(0, 2).green(), 2);
    }

    #[test]
    fn flip_horizontal_reverses_each_row()
    {
        let image = Image::from_fn(3, 2, BitDepth::EIGHT, |x, y| {
            pixel(x as u16, y as u16, 0)
        })
        .unwrap();

        let flipped = image.flip_horizontal();

        // x moves to width - 1 - x, y stays
        assert_eq!(flipped.pixel(0, 0), image.pixel(2, 0));
        assert_eq!(flipped.pixel(2, 1), image.pixel(0, 1));
        assert_eq!(flipped.pixel(1, 0), image.pixel(1, 0));
    }

    #[test]
    fn flip_vertical_reverses_the_rows()
    {
        let image = Image::from_fn(2, 3, BitDepth::EIGHT, |x, y| {
            pixel(x as u16, y as u16, 0)
        })
        .unwrap();

        let flipped = image.flip_vertical();

        assert_eq!(flipped.pixel(0, 0), image.pixel(0, 2));
        assert_eq!(flipped.pixel(1, 2), image.pixel(1, 0));
    }

    #[test]
    fn flips_are_involutions()
    {
        let image = random_image(13, 7);

        assert_eq!(image.flip_horizontal().flip_horizontal(), image);
        assert_eq!(image.flip_vertical().flip_vertical(), image);
    }

    #[test]
    fn brighten_zero_is_identity()
    {
        let image = random_image(9, 4);

        assert_eq!(image.brighten(0), image);
    }

    #[test]
    fn brighten_clamps_at_the_images_depth()
    {
        let image = Image::from_fn(1, 1, BitDepth::EIGHT, |_, _| pixel(250, 10, 0)).unwrap();
        let brightened = image.brighten(20);

        assert_eq!(brightened.pixel(0, 0).red(), 255);
        assert_eq!(brightened.pixel(0, 0).green(), 30);
    }

    #[test]
    fn greyscale_produces_equal_channels_and_keeps_depth()
    {
        let depth = BitDepth::new(12).unwrap();
        let image = Image::from_fn(4, 4, depth, |x, y| {
            Pixel::new(depth, (x * 91) as u16, (y * 131) as u16, 77).unwrap()
        })
        .unwrap();

        for method in [
            GreyMethod::Red,
            GreyMethod::Green,
            GreyMethod::Blue,
            GreyMethod::Value,
            GreyMethod::Intensity,
            GreyMethod::Luma
        ]
        {
            let grey = image.to_greyscale(method);

            assert_eq!(grey.depth(), depth);

            for pixel in grey.pixels()
            {
                assert_eq!(pixel.red(), pixel.green());
                assert_eq!(pixel.green(), pixel.blue());
            }
        }
    }

    #[test]
    fn greyscale_luma_uses_the_derived_scalar()
    {
        let image = Image::from_fn(1, 1, BitDepth::EIGHT, |_, _| pixel(10, 20, 30)).unwrap();
        let grey = image.to_greyscale(GreyMethod::Luma);

        assert_eq!(grey.pixel(0, 0).red(), 18);
    }

    #[test]
    fn identity_kernel_reproduces_the_image()
    {
        let image = random_image(8, 5);
        let identity = Filter::new(1, vec![1.0]).unwrap();

        assert_eq!(image.apply_filter(&identity).unwrap(), image);
    }

    #[test]
    fn filtering_zero_pads_outside_the_image()
    {
        // a constant white image averaged with the 3x3 blur kernel
        // keeps its center but darkens the border, the padding
        // contributes zeros there
        let image = Image::from_fn(3, 3, BitDepth::EIGHT, |_, _| pixel(255, 255, 255)).unwrap();
        let blurred = image.apply_filter(&Filter::blur()).unwrap();

        // the kernel weights sum to exactly one
        assert_eq!(blurred.pixel(1, 1).red(), 255);
        // a corner sees only 4 of the 9 samples, 255 * 9/16 = 143.4
        assert_eq!(blurred.pixel(0, 0).red(), 143);
    }

    #[test]
    fn transform_maps_every_pixel()
    {
        let image = Image::from_fn(2, 2, BitDepth::EIGHT, |_, _| pixel(100, 150, 200)).unwrap();
        let mapped = image.apply_transform(&Transform::sepia());

        for pixel in mapped.pixels()
        {
            assert_eq!(pixel.red(), 192);
            assert_eq!(pixel.green(), 171);
            assert_eq!(pixel.blue(), 133);
        }
    }

    #[test]
    fn histogram_counts_sum_to_the_pixel_count()
    {
        let image = random_image(31, 17);

        for channel in [
            HistogramChannel::Red,
            HistogramChannel::Green,
            HistogramChannel::Blue,
            HistogramChannel::Intensity
        ]
        {
            let counts = image.histogram(channel);

            assert_eq!(counts.len(), 256);
            assert_eq!(counts.iter().sum::<u32>(), 31 * 17);
        }
    }

    #[test]
    fn histogram_bins_follow_the_depth()
    {
        let depth = BitDepth::new(10).unwrap();
        let image = Image::from_fn(2, 1, depth, |x, _| {
            Pixel::new(depth, 1000 + x as u16, 0, 0).unwrap()
        })
        .unwrap();

        let counts = image.histogram(HistogramChannel::Red);

        assert_eq!(counts.len(), 1024);
        assert_eq!(counts[1000], 1);
        assert_eq!(counts[1001], 1);
    }

    #[test]
    fn rgb8_scales_deep_images_down()
    {
        let depth = BitDepth::new(10).unwrap();
        let image = Image::from_fn(1, 1, depth, |_, _| {
            Pixel::new(depth, 1023, 0, 512).unwrap()
        })
        .unwrap();

        let buffer = image.to_rgb8();

        assert_eq!(buffer, vec![255, 0, 127]);

        // 8 bit images pass through unchanged
        let eight = Image::from_fn(1, 1, BitDepth::EIGHT, |_, _| pixel(1, 128, 255)).unwrap();
        assert_eq!(eight.to_rgb8(), vec![1, 128, 255]);
    }
}
