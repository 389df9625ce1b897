//! Private utility module
use crate::error::Result;
use byteordered::{ByteOrdered, Endianness};

/// Reader of fixed-position fields in a byte buffer, all of them
/// decoded with the same byte order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldReader<'a> {
    bytes: &'a [u8],
    endianness: Endianness,
}

impl<'a> FieldReader<'a> {
    pub fn new(bytes: &'a [u8], endianness: Endianness) -> Self {
        FieldReader { bytes, endianness }
    }

    /// Start a byte-ordered reader at the given offset. Offsets past the
    /// end yield an empty source, so reads fail with `UnexpectedEof`.
    fn at(&self, offset: usize) -> ByteOrdered<&'a [u8], Endianness> {
        let src = self.bytes.get(offset..).unwrap_or(&[]);
        ByteOrdered::runtime(src, self.endianness)
    }

    pub fn u16_at(&self, offset: usize) -> Result<u16> {
        Ok(self.at(offset).read_u16()?)
    }

    pub fn u32_at(&self, offset: usize) -> Result<u32> {
        Ok(self.at(offset).read_u32()?)
    }

    pub fn f32_at(&self, offset: usize) -> Result<f32> {
        Ok(self.at(offset).read_f32()?)
    }
}
