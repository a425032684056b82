//! A simple implementation of a bytestream reader
//!
//! Useful for codecs walking an in memory buffer byte by byte,
//! reads past the end return a filler value instead of panicking.

/// A byte reader over an in memory buffer
pub struct ByteReader<'a>
{
    buffer:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a>
{
    /// Create a new reader starting at the beginning of `buffer`
    pub const fn new(buffer: &'a [u8]) -> ByteReader<'a>
    {
        ByteReader {
            buffer,
            position: 0
        }
    }

    /// Return true when the whole buffer has been consumed
    #[must_use]
    pub const fn eof(&self) -> bool
    {
        self.position >= self.buffer.len()
    }

    /// Return the number of bytes not yet consumed
    #[must_use]
    pub const fn remaining(&self) -> usize
    {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return true when at least `count` bytes are not yet consumed
    #[must_use]
    pub const fn has(&self, count: usize) -> bool
    {
        self.remaining() >= count
    }

    /// Consume and return one byte, or `0` past the end of the buffer
    pub fn get_u8(&mut self) -> u8
    {
        if self.eof()
        {
            return 0;
        }
        let byte = self.buffer[self.position];
        self.position += 1;

        byte
    }

    /// Return the next byte without consuming it, or `0` past the end
    #[must_use]
    pub fn peek_u8(&self) -> u8
    {
        if self.eof()
        {
            return 0;
        }
        self.buffer[self.position]
    }

    /// Move the cursor `count` bytes back, stopping at the beginning
    pub fn rewind(&mut self, count: usize)
    {
        self.position = self.position.saturating_sub(count);
    }
}
