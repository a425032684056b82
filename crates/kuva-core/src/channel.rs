/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel and component selectors
//!
//! The selectors in this module name the data a caller wants out of a
//! pixel, a single color channel, the derivation used to build a grey
//! value, or the distribution a histogram should count.
//!
//! Each selector parses from its lowercase name via [`FromStr`], parse
//! failures carry the offending name so the textual surface can report
//! it back verbatim.
use std::str::FromStr;

use crate::errors::CoreErrors;

/// A single color channel of a pixel
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel
{
    Red,
    Green,
    Blue
}

impl FromStr for Channel
{
    type Err = CoreErrors;

    fn from_str(s: &str) -> Result<Channel, CoreErrors>
    {
        match s
        {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            _ => Err(CoreErrors::InvalidChannel(s.to_string()))
        }
    }
}

/// How a grey value is derived from an RGB pixel
///
/// The three channel variants select that channel directly, the
/// remaining variants use the matching derived scalar of
/// [`Pixel`](crate::pixel::Pixel).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GreyMethod
{
    Red,
    Green,
    Blue,
    /// Largest of the three channels
    Value,
    /// Average of the three channels
    Intensity,
    /// Weighted average, weights from Rec. 709
    Luma
}

impl FromStr for GreyMethod
{
    type Err = CoreErrors;

    fn from_str(s: &str) -> Result<GreyMethod, CoreErrors>
    {
        match s
        {
            "red" => Ok(GreyMethod::Red),
            "green" => Ok(GreyMethod::Green),
            "blue" => Ok(GreyMethod::Blue),
            "value" => Ok(GreyMethod::Value),
            "intensity" => Ok(GreyMethod::Intensity),
            "luma" => Ok(GreyMethod::Luma),
            _ => Err(CoreErrors::InvalidMethod(s.to_string()))
        }
    }
}

/// The distribution a histogram counts
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HistogramChannel
{
    Red,
    Green,
    Blue,
    Intensity
}

impl FromStr for HistogramChannel
{
    type Err = CoreErrors;

    fn from_str(s: &str) -> Result<HistogramChannel, CoreErrors>
    {
        match s
        {
            "red" => Ok(HistogramChannel::Red),
            "green" => Ok(HistogramChannel::Green),
            "blue" => Ok(HistogramChannel::Blue),
            "intensity" => Ok(HistogramChannel::Intensity),
            _ => Err(CoreErrors::InvalidComponent(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests
{
    use crate::channel::{Channel, GreyMethod, HistogramChannel};
    use crate::errors::CoreErrors;

    #[test]
    fn parse_channel_names()
    {
        assert_eq!("red".parse::<Channel>().unwrap(), Channel::Red);
        assert_eq!("green".parse::<Channel>().unwrap(), Channel::Green);
        assert_eq!("blue".parse::<Channel>().unwrap(), Channel::Blue);

        let err = "alpha".parse::<Channel>().unwrap_err();
        assert!(matches!(err, CoreErrors::InvalidChannel(name) if name == "alpha"));
    }

    #[test]
    fn parse_grey_method_names()
    {
        assert_eq!("value".parse::<GreyMethod>().unwrap(), GreyMethod::Value);
        assert_eq!(
            "intensity".parse::<GreyMethod>().unwrap(),
            GreyMethod::Intensity
        );
        assert_eq!("luma".parse::<GreyMethod>().unwrap(), GreyMethod::Luma);

        let err = "lightness".parse::<GreyMethod>().unwrap_err();
        assert!(matches!(err, CoreErrors::InvalidMethod(name) if name == "lightness"));
    }

    #[test]
    fn parse_histogram_channel_names()
    {
        assert_eq!(
            "intensity".parse::<HistogramChannel>().unwrap(),
            HistogramChannel::Intensity
        );

        // luma histograms are not a thing, only greyscale conversion has it
        let err = "luma".parse::<HistogramChannel>().unwrap_err();
        assert!(matches!(err, CoreErrors::InvalidComponent(name) if name == "luma"));
    }
}
