use std::fmt::{Debug, Formatter};

use kuva_core::bit_depth::BitDepth;
use kuva_core::bytestream::ByteReader;
use kuva_core::errors::CoreErrors;
use kuva_core::pixel::Pixel;
use log::info;

/// Errors that may occur during decoding
pub enum PpmDecodeErrors
{
    Generic(String),
    GenericStatic(&'static str),
    /// Dimensions larger than the decoder limits,
    /// contains the limit and the value found
    LargeDimensions(usize, usize),
    /// A sample failed pixel validation
    CoreErrors(CoreErrors)
}

impl Debug for PpmDecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::Generic(val) =>
            {
                writeln!(f, "{val}")
            }
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::LargeDimensions(expected, found) =>
            {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::CoreErrors(err) =>
            {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl From<CoreErrors> for PpmDecodeErrors
{
    fn from(err: CoreErrors) -> Self
    {
        PpmDecodeErrors::CoreErrors(err)
    }
}

/// Limits obeyed while decoding
///
/// The defaults allow anything up to 16384 pixels per side, a
/// caller that trusts its input can raise them.
#[derive(Copy, Clone, Debug)]
pub struct DecoderOptions
{
    max_width:  usize,
    max_height: usize
}

impl Default for DecoderOptions
{
    fn default() -> DecoderOptions
    {
        DecoderOptions {
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl DecoderOptions
{
    /// Return the largest width the decoder will accept
    #[must_use]
    pub const fn max_width(&self) -> usize
    {
        self.max_width
    }

    /// Return the largest height the decoder will accept
    #[must_use]
    pub const fn max_height(&self) -> usize
    {
        self.max_height
    }

    /// Set the largest width the decoder will accept
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self
    {
        self.max_width = width;
        self
    }

    /// Set the largest height the decoder will accept
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self
    {
        self.max_height = height;
        self
    }
}

/// An instance of a plain text ppm decoder
///
/// The decoder currently handles the `P3` format, an ASCII grid of
/// RGB sample triples preceded by width, height and maxval headers.
pub struct PpmDecoder<'a>
{
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    max_value:       u16,
    depth:           BitDepth,
    options:         DecoderOptions
}

impl<'a> PpmDecoder<'a>
{
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded bytes
    ///
    /// # Example
    /// ```
    /// use kuva_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PpmDecoder<'a>
    {
        PpmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new ppm decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded bytes
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PpmDecoder<'a>
    {
        let reader = ByteReader::new(data);

        PpmDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader,
            max_value: 0,
            depth: BitDepth::EIGHT,
            options
        }
    }

    /// Read the magic, width, height and maxval headers and store
    /// them in internal state
    ///
    /// The bit depth is derived from the maxval header, e.g a maxval
    /// of 255 gives an 8 bit image and a maxval of 1023 a 10 bit one.
    pub fn read_headers(&mut self) -> Result<(), PpmDecodeErrors>
    {
        if !self.reader.has(2)
        {
            let len = self.reader.remaining();
            let msg = format!("Expected at least 2 bytes in header but stream has {len}");

            return Err(PpmDecodeErrors::Generic(msg));
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        if p != b'P'
        {
            let msg = format!("Expected P as first PPM byte but got '{}' ", p as char);

            return Err(PpmDecodeErrors::Generic(msg));
        }

        if version != b'3'
        {
            let msg = format!(
                "Unsupported PPM version `{}`, only the plain text version 3 is supported",
                version as char
            );

            return Err(PpmDecodeErrors::Generic(msg));
        }

        self.width = self.get_integer()?;

        if self.width == 0
        {
            return Err(PpmDecodeErrors::GenericStatic("Width cannot be zero"));
        }
        if self.width > self.options.max_width()
        {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.max_width(),
                self.width
            ));
        }

        self.height = self.get_integer()?;

        if self.height == 0
        {
            return Err(PpmDecodeErrors::GenericStatic("Height cannot be zero"));
        }
        if self.height > self.options.max_height()
        {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.max_height(),
                self.height
            ));
        }

        let max_value = self.get_integer()?;

        if max_value == 0
        {
            return Err(PpmDecodeErrors::GenericStatic("Max value cannot be zero"));
        }
        if max_value > usize::from(u16::MAX)
        {
            let msg = format!("MAX value {max_value} greater than 65535");

            return Err(PpmDecodeErrors::Generic(msg));
        }
        self.max_value = max_value as u16;
        self.depth = BitDepth::from_max_value(self.max_value)?;

        self.decoded_headers = true;

        info!("Width: {}, height: {}", self.width, self.height);
        info!("Max value: {}", self.max_value);
        info!("Bit Depth: {:?}", self.depth);

        Ok(())
    }

    /// Decode the sample grid into pixels
    ///
    /// Headers are read first when [`read_headers`](Self::read_headers)
    /// was not called. Pixels come back in row major order, every
    /// sample is validated against the maxval header.
    pub fn decode(&mut self) -> Result<Vec<Pixel>, PpmDecodeErrors>
    {
        if !self.decoded_headers
        {
            self.read_headers()?;
        }
        let count = self.width * self.height;
        let mut pixels = Vec::with_capacity(count);

        for _ in 0..count
        {
            let red = self.get_sample()?;
            let green = self.get_sample()?;
            let blue = self.get_sample()?;

            pixels.push(Pixel::new(self.depth, red, green, blue)?);
        }

        Ok(pixels)
    }

    /// Read one sample and check it against the maxval header
    fn get_sample(&mut self) -> Result<u16, PpmDecodeErrors>
    {
        let value = self.get_integer()?;

        if value > usize::from(self.max_value)
        {
            let msg = format!(
                "Sample value {value} greater than the max value {}",
                self.max_value
            );

            return Err(PpmDecodeErrors::Generic(msg));
        }

        Ok(value as u16)
    }

    /// Read the next ASCII integer, skipping whitespace and comments
    fn get_integer(&mut self) -> Result<usize, PpmDecodeErrors>
    {
        self.skip_whitespace_and_comments();

        if self.reader.eof()
        {
            return Err(PpmDecodeErrors::GenericStatic(
                "No more bytes, expected a numeric value"
            ));
        }

        let byte = self.reader.get_u8();

        if !byte.is_ascii_digit()
        {
            let msg = format!("Expected a numeric value but found '{}'", byte as char);

            return Err(PpmDecodeErrors::Generic(msg));
        }

        let mut value = usize::from(byte - b'0');

        while !self.reader.eof()
        {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit()
            {
                // if it overflows, the dimension and maxval limits
                // downstream reject the result anyway
                value = value
                    .wrapping_mul(10_usize)
                    .wrapping_add(usize::from(byte - b'0'));
            }
            else
            {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }

        Ok(value)
    }

    /// Skip whitespace, a `#` starts a comment running to the end of
    /// the line and counts as whitespace wherever it appears
    fn skip_whitespace_and_comments(&mut self)
    {
        loop
        {
            while !self.reader.eof() && self.reader.peek_u8().is_ascii_whitespace()
            {
                self.reader.get_u8();
            }

            if self.reader.peek_u8() == b'#' && !self.reader.eof()
            {
                while !self.reader.eof() && self.reader.get_u8() != b'\n'
                {}
            }
            else
            {
                break;
            }
        }
    }

    /// Return image dimensions as `(width, height)` or `None` if
    /// headers are not decoded
    #[must_use]
    pub const fn dimensions(&self) -> Option<(usize, usize)>
    {
        if self.decoded_headers
        {
            Some((self.width, self.height))
        }
        else
        {
            None
        }
    }

    /// Return the image bit depth or `None` if headers are not decoded
    #[must_use]
    pub const fn bit_depth(&self) -> Option<BitDepth>
    {
        if self.decoded_headers
        {
            Some(self.depth)
        }
        else
        {
            None
        }
    }

    /// Return the maxval header value or `None` if headers are not
    /// decoded
    #[must_use]
    pub const fn max_value(&self) -> Option<u16>
    {
        if self.decoded_headers
        {
            Some(self.max_value)
        }
        else
        {
            None
        }
    }
}
