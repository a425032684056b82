/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The pixel value type and its derived scalars
//!
//! A [`Pixel`] is an immutable RGB triple tied to a [`BitDepth`], every
//! channel sample is validated against the depth's maximum on
//! construction. Operations never mutate a pixel, they hand back a new
//! one at the same depth.
use crate::bit_depth::BitDepth;
use crate::channel::{Channel, GreyMethod};
use crate::errors::CoreErrors;

/// Red weight of the Rec. 709 luma derivation
pub const LUMA_RED: f64 = 0.2126;
/// Green weight of the Rec. 709 luma derivation
pub const LUMA_GREEN: f64 = 0.7152;
/// Blue weight of the Rec. 709 luma derivation
pub const LUMA_BLUE: f64 = 0.0722;

/// An immutable RGB pixel with a fixed bit depth
///
/// Channel samples are stored as `u16` and always lie inside
/// `[0, depth.max_value()]`, the validating constructor rejects
/// anything outside that range instead of clamping it.
///
/// Pixels are plain value objects, equality and hashing are
/// structural over the three channels and the depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel
{
    depth: BitDepth,
    red:   u16,
    green: u16,
    blue:  u16
}

impl Pixel
{
    /// Create a new pixel, validating every channel against the depth
    ///
    /// Returns an error when any channel sample is greater than
    /// `depth.max_value()`.
    ///
    /// # Example
    /// ```
    /// use kuva_core::bit_depth::BitDepth;
    /// use kuva_core::pixel::Pixel;
    ///
    /// let pixel = Pixel::new(BitDepth::EIGHT, 12, 134, 255).unwrap();
    /// assert_eq!(pixel.value(), 255);
    ///
    /// // 300 does not fit 8 bits, construction is rejected
    /// assert!(Pixel::new(BitDepth::EIGHT, 300, 0, 0).is_err());
    /// ```
    pub const fn new(depth: BitDepth, red: u16, green: u16, blue: u16)
        -> Result<Pixel, CoreErrors>
    {
        let max = depth.max_value();

        if red > max
        {
            return Err(CoreErrors::ChannelOutOfRange(red, max));
        }
        if green > max
        {
            return Err(CoreErrors::ChannelOutOfRange(green, max));
        }
        if blue > max
        {
            return Err(CoreErrors::ChannelOutOfRange(blue, max));
        }

        Ok(Pixel {
            depth,
            red,
            green,
            blue
        })
    }

    /// Create a new pixel, saturating each channel at the depth's maximum
    ///
    /// Used where channel values were already computed against the
    /// depth, e.g when assembling results of a convolution, and a
    /// validation failure cannot occur.
    #[must_use]
    pub fn new_clamped(depth: BitDepth, red: u16, green: u16, blue: u16) -> Pixel
    {
        let max = depth.max_value();

        Pixel {
            depth,
            red: red.min(max),
            green: green.min(max),
            blue: blue.min(max)
        }
    }

    /// Create an equal channel grey pixel
    ///
    /// `value` is saturated at the depth's maximum sample.
    #[must_use]
    pub fn grey(depth: BitDepth, value: u16) -> Pixel
    {
        let value = value.min(depth.max_value());

        Pixel {
            depth,
            red: value,
            green: value,
            blue: value
        }
    }

    /// Return the pixel's bit depth
    #[must_use]
    pub const fn depth(self) -> BitDepth
    {
        self.depth
    }

    /// Return the largest sample this pixel's depth can represent
    #[must_use]
    pub const fn max_value(self) -> u16
    {
        self.depth.max_value()
    }

    /// Return the red channel sample
    #[must_use]
    pub const fn red(self) -> u16
    {
        self.red
    }

    /// Return the green channel sample
    #[must_use]
    pub const fn green(self) -> u16
    {
        self.green
    }

    /// Return the blue channel sample
    #[must_use]
    pub const fn blue(self) -> u16
    {
        self.blue
    }

    /// Return the sample of the selected channel
    #[must_use]
    pub const fn channel(self, channel: Channel) -> u16
    {
        match channel
        {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue
        }
    }

    /// Return the largest of the three channel samples
    #[must_use]
    pub fn value(self) -> u16
    {
        self.red.max(self.green).max(self.blue)
    }

    /// Return the average of the three channel samples
    ///
    /// The division is an integer division, the result truncates
    /// toward zero.
    #[must_use]
    pub fn intensity(self) -> u16
    {
        let sum = u32::from(self.red) + u32::from(self.green) + u32::from(self.blue);

        (sum / 3) as u16
    }

    /// Return the Rec. 709 weighted average of the three channels
    ///
    /// Computed in `f64` and truncated toward zero, the weights sum
    /// to one so the result always fits the pixel's depth.
    #[must_use]
    pub fn luma(self) -> u16
    {
        let luma = LUMA_RED * f64::from(self.red)
            + LUMA_GREEN * f64::from(self.green)
            + LUMA_BLUE * f64::from(self.blue);

        luma as u16
    }

    /// Return the grey sample the given derivation produces
    #[must_use]
    pub fn grey_value(self, method: GreyMethod) -> u16
    {
        match method
        {
            GreyMethod::Red => self.red,
            GreyMethod::Green => self.green,
            GreyMethod::Blue => self.blue,
            GreyMethod::Value => self.value(),
            GreyMethod::Intensity => self.intensity(),
            GreyMethod::Luma => self.luma()
        }
    }

    /// Return a new pixel with `delta` added to every channel
    ///
    /// Each result is clamped to `[0, max_value]` for the pixel's own
    /// depth, so brightening can saturate but never overflow. `delta`
    /// may be negative to darken.
    #[must_use]
    pub fn with_brightness(self, delta: i32) -> Pixel
    {
        // widen so that delta values near i32::MAX cannot overflow the sum
        let max = i64::from(self.depth.max_value());

        let clamp = |sample: u16| (i64::from(sample) + i64::from(delta)).clamp(0, max) as u16;

        Pixel {
            depth: self.depth,
            red: clamp(self.red),
            green: clamp(self.green),
            blue: clamp(self.blue)
        }
    }
}
