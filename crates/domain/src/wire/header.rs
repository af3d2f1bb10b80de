use super::constants::HEADER_SIZE;
use super::primitives::{pack_u16, unpack_u16};
use crate::errors::WireError;

/// The fixed 12-byte message header, flags still packed into `bits`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub bits: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn pack(&self, buf: &mut [u8], off: usize) -> Result<usize, WireError> {
        let off = pack_u16(self.id, buf, off)?;
        let off = pack_u16(self.bits, buf, off)?;
        let off = pack_u16(self.qdcount, buf, off)?;
        let off = pack_u16(self.ancount, buf, off)?;
        let off = pack_u16(self.nscount, buf, off)?;
        pack_u16(self.arcount, buf, off)
    }

    pub fn unpack(buf: &[u8], off: usize) -> Result<(Self, usize), WireError> {
        let (id, off) = unpack_u16(buf, off)?;
        let (bits, off) = unpack_u16(buf, off)?;
        let (qdcount, off) = unpack_u16(buf, off)?;
        let (ancount, off) = unpack_u16(buf, off)?;
        let (nscount, off) = unpack_u16(buf, off)?;
        let (arcount, off) = unpack_u16(buf, off)?;
        Ok((
            Self {
                id,
                bits,
                qdcount,
                ancount,
                nscount,
                arcount,
            },
            off,
        ))
    }

    pub const fn wire_len() -> usize {
        HEADER_SIZE
    }
}
