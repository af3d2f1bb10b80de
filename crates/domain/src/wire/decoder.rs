use super::name::{unpack_domain_name_with, PointerWidth};
use super::primitives::{unpack_bytes, unpack_u16, unpack_u32, unpack_u8};
use crate::errors::WireError;

/// Read-only view over a received message.
///
/// Carries the pointer-offset interpretation so that every name inside the
/// message, including those embedded in record payloads, is decoded the same
/// way.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pointer_width: PointerWidth,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_pointer_width(buf, PointerWidth::default())
    }

    pub fn with_pointer_width(buf: &'a [u8], pointer_width: PointerWidth) -> Self {
        Self { buf, pointer_width }
    }

    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn pointer_width(&self) -> PointerWidth {
        self.pointer_width
    }

    pub fn u8_at(&self, off: usize) -> Result<(u8, usize), WireError> {
        unpack_u8(self.buf, off)
    }

    pub fn u16_at(&self, off: usize) -> Result<(u16, usize), WireError> {
        unpack_u16(self.buf, off)
    }

    pub fn u32_at(&self, off: usize) -> Result<(u32, usize), WireError> {
        unpack_u32(self.buf, off)
    }

    pub fn bytes_at(&self, off: usize, len: usize) -> Result<(&'a [u8], usize), WireError> {
        unpack_bytes(self.buf, off, len)
    }

    pub fn name_at(&self, off: usize) -> Result<(String, usize), WireError> {
        unpack_domain_name_with(self.buf, off, self.pointer_width)
    }
}
