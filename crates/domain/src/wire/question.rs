use super::constants::CLASS_INET;
use super::decoder::Decoder;
use super::name::{domain_name_len, pack_domain_name, CompressionMap};
use super::primitives::pack_u16;
use crate::errors::WireError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// A question in the Internet class.
    pub fn new(name: impl Into<String>, qtype: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass: CLASS_INET,
        }
    }

    /// Uncompressed wire length.
    pub fn wire_len(&self) -> usize {
        domain_name_len(&self.name) + 4
    }

    pub fn pack(
        &self,
        buf: &mut [u8],
        off: usize,
        compression: &mut CompressionMap,
    ) -> Result<usize, WireError> {
        let off = pack_domain_name(&self.name, buf, off, compression)?;
        let off = pack_u16(self.qtype, buf, off)?;
        pack_u16(self.qclass, buf, off)
    }

    pub fn unpack(decoder: &Decoder<'_>, off: usize) -> Result<(Self, usize), WireError> {
        let (name, off) = decoder.name_at(off)?;
        let (qtype, off) = decoder.u16_at(off)?;
        let (qclass, off) = decoder.u16_at(off)?;
        Ok((
            Self {
                name,
                qtype,
                qclass,
            },
            off,
        ))
    }
}
