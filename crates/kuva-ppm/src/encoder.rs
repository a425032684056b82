use std::fmt::{Debug, Formatter};
use std::io;
use std::io::{Error, Write};

use kuva_core::pixel::Pixel;

/// Errors occurring during encoding
pub enum PpmEncodeErrors
{
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for PpmEncodeErrors
{
    fn from(err: Error) -> Self
    {
        PpmEncodeErrors::IoErrors(err)
    }
}

impl Debug for PpmEncodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            PpmEncodeErrors::Static(ref errors) =>
            {
                writeln!(f, "{errors}")
            }
            PpmEncodeErrors::IoErrors(ref err) =>
            {
                writeln!(f, "{err}")
            }
        }
    }
}

/// A plain text ppm encoder
///
/// Writes the `P3` format, the headers carry the image's true
/// maximum sample value so bit depths above 8 round trip intact.
pub struct PpmEncoder<'a, W: Write>
{
    writer: &'a mut W
}

impl<'a, W: Write> PpmEncoder<'a, W>
{
    /// Create a new ppm encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PpmEncoder<'a, W>
    {
        Self { writer }
    }

    /// Write headers for the P3 format
    fn write_headers(
        &mut self, width: usize, height: usize, max_value: u16
    ) -> Result<(), PpmEncodeErrors>
    {
        let header = format!("P3\n{width}\n{height}\n{max_value}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `pixels` as a plain text P3 file
    ///
    /// `pixels` are expected in row major order, one sample triple is
    /// written per line which keeps lines comfortably short.
    pub fn encode(
        &mut self, width: usize, height: usize, max_value: u16, pixels: &[Pixel]
    ) -> Result<(), PpmEncodeErrors>
    {
        if width * height != pixels.len()
        {
            return Err(PpmEncodeErrors::Static(
                "Pixel count does not match image dimensions"
            ));
        }

        self.write_headers(width, height, max_value)?;

        // sample triples are tiny, building the body up front keeps
        // this a single write call
        let mut body = String::with_capacity(pixels.len() * 12);

        for pixel in pixels
        {
            body.push_str(&format!(
                "{} {} {}\n",
                pixel.red(),
                pixel.green(),
                pixel.blue()
            ));
        }

        self.writer.write_all(body.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use kuva_core::bit_depth::BitDepth;
    use kuva_core::pixel::Pixel;

    use crate::decoder::PpmDecoder;
    use crate::encoder::PpmEncoder;

    fn pixel(depth: BitDepth, red: u16, green: u16, blue: u16) -> Pixel
    {
        Pixel::new(depth, red, green, blue).unwrap()
    }

    #[test]
    fn headers_carry_the_true_max_value()
    {
        let depth = BitDepth::new(10).unwrap();
        let pixels = vec![pixel(depth, 1000, 0, 4), pixel(depth, 1, 2, 3)];

        let mut sink = Vec::new();
        PpmEncoder::new(&mut sink)
            .encode(2, 1, depth.max_value(), &pixels)
            .unwrap();

        let text = String::from_utf8(sink).unwrap();

        assert!(text.starts_with("P3\n2\n1\n1023\n"));
        assert!(text.contains("1000 0 4"));
    }

    #[test]
    fn encoded_images_decode_back()
    {
        let depth = BitDepth::EIGHT;
        let pixels = vec![
            pixel(depth, 0, 0, 0),
            pixel(depth, 255, 128, 1),
            pixel(depth, 12, 34, 56),
            pixel(depth, 9, 8, 7),
        ];

        let mut sink = Vec::new();
        PpmEncoder::new(&mut sink)
            .encode(2, 2, depth.max_value(), &pixels)
            .unwrap();

        let mut decoder = PpmDecoder::new(&sink);
        let decoded = decoder.decode().unwrap();

        assert_eq!(decoder.dimensions(), Some((2, 2)));
        assert_eq!(decoder.bit_depth(), Some(depth));
        assert_eq!(decoded, pixels);
    }

    #[test]
    fn reject_wrong_pixel_count()
    {
        let pixels = vec![pixel(BitDepth::EIGHT, 0, 0, 0)];

        let mut sink = Vec::new();
        let result = PpmEncoder::new(&mut sink).encode(2, 2, 255, &pixels);

        assert!(result.is_err());
    }
}
