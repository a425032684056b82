/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Validation errors raised by the core primitives
use std::fmt::{Debug, Formatter};

/// Errors raised when constructing or querying core types
pub enum CoreErrors
{
    /// Bit count outside of the supported `1..=16` range
    BadBitDepth(u8),
    /// A channel sample does not fit the pixel's bit depth,
    /// contains the sample and the largest allowed value
    ChannelOutOfRange(u16, u16),
    /// Unknown channel name
    InvalidChannel(String),
    /// Unknown greyscale derivation name
    InvalidMethod(String),
    /// Unknown histogram component name
    InvalidComponent(String)
}

impl Debug for CoreErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::BadBitDepth(bits) =>
            {
                writeln!(f, "Unsupported bit depth {bits}, supported depths are 1 to 16")
            }
            Self::ChannelOutOfRange(value, max) =>
            {
                writeln!(
                    f,
                    "Channel value {value} out of range, maximum for this depth is {max}"
                )
            }
            Self::InvalidChannel(name) =>
            {
                writeln!(f, "Unknown channel `{name}`, expected one of red, green or blue")
            }
            Self::InvalidMethod(name) =>
            {
                writeln!(
                    f,
                    "Unknown greyscale method `{name}`, expected one of red, green, blue, value, intensity or luma"
                )
            }
            Self::InvalidComponent(name) =>
            {
                writeln!(
                    f,
                    "Unknown histogram component `{name}`, expected one of red, green, blue or intensity"
                )
            }
        }
    }
}
