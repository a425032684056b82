use kuva_core::channel::HistogramChannel;
use kuva_image::codecs::ImageFormat;
use kuva_image::image::Image;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Number of distinct sample values present per distribution
pub struct DistinctValues
{
    red:       usize,
    green:     usize,
    blue:      usize,
    intensity: usize
}

/// Everything `--probe` reports about one file
pub struct ProbeReport
{
    path:      String,
    format:    &'static str,
    width:     usize,
    height:    usize,
    bit_depth: u8,
    max_value: u16,
    distinct:  DistinctValues
}

fn distinct_count(image: &Image, channel: HistogramChannel) -> usize
{
    image
        .histogram(channel)
        .iter()
        .filter(|count| **count > 0)
        .count()
}

impl ProbeReport
{
    pub fn new(path: &str, format: ImageFormat, image: &Image) -> ProbeReport
    {
        let distinct = DistinctValues {
            red:       distinct_count(image, HistogramChannel::Red),
            green:     distinct_count(image, HistogramChannel::Green),
            blue:      distinct_count(image, HistogramChannel::Blue),
            intensity: distinct_count(image, HistogramChannel::Intensity)
        };

        ProbeReport {
            path: path.to_string(),
            format: format.name(),
            width: image.width(),
            height: image.height(),
            bit_depth: image.depth().bits(),
            max_value: image.max_value(),
            distinct
        }
    }
}

impl Serialize for DistinctValues
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DistinctValues", 4)?;

        state.serialize_field("red", &self.red)?;
        state.serialize_field("green", &self.green)?;
        state.serialize_field("blue", &self.blue)?;
        state.serialize_field("intensity", &self.intensity)?;

        state.end()
    }
}

impl Serialize for ProbeReport
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ProbeReport", 7)?;

        state.serialize_field("file", &self.path)?;
        state.serialize_field("format", &self.format)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("bit_depth", &self.bit_depth)?;
        state.serialize_field("max_value", &self.max_value)?;
        state.serialize_field("distinct_values", &self.distinct)?;

        state.end()
    }
}
