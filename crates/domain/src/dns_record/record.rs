use super::{RData, RecordType};
use crate::errors::WireError;
use crate::wire::constants::CLASS_INET;
use crate::wire::name::{domain_name_len, pack_domain_name, CompressionMap};
use crate::wire::primitives::{pack_u16, pack_u32};
use crate::wire::Decoder;
use tracing::debug;

/// Fixed part of a record after its owner name: type, class, ttl, rdlength.
const FIXED_FIELDS_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub name: String,
    pub rrtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdlength: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: RecordHeader,
    pub data: RData,
}

impl Record {
    /// Builds an Internet-class record; type and rdlength follow `data`.
    pub fn new(name: impl Into<String>, ttl: u32, data: impl Into<RData>) -> Self {
        let data = data.into();
        Self {
            header: RecordHeader {
                name: name.into(),
                rrtype: data.rrtype(),
                class: CLASS_INET,
                ttl,
                rdlength: u16::try_from(data.wire_len()).unwrap_or(u16::MAX),
            },
            data,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.header.rrtype)
    }

    pub fn ttl(&self) -> u32 {
        self.header.ttl
    }

    /// Upper bound on the packed size: owner name and payload uncompressed.
    pub fn wire_len(&self) -> usize {
        domain_name_len(&self.header.name) + FIXED_FIELDS_LEN + self.data.wire_len()
    }

    /// Packs the record, backfilling rdlength with what the payload actually
    /// took after compression.
    pub fn pack(
        &self,
        buf: &mut [u8],
        off: usize,
        compression: &mut CompressionMap,
    ) -> Result<usize, WireError> {
        let off = pack_domain_name(&self.header.name, buf, off, compression)?;
        let off = pack_u16(self.header.rrtype, buf, off)?;
        let off = pack_u16(self.header.class, buf, off)?;
        let off = pack_u32(self.header.ttl, buf, off)?;

        let rdlength_at = off;
        let off = pack_u16(0, buf, off)?;
        let end = self.data.pack(buf, off, compression)?;

        let rdlength = end - off;
        let rdlength = u16::try_from(rdlength).map_err(|_| WireError::RdataTooLong(rdlength))?;
        pack_u16(rdlength, buf, rdlength_at)?;
        Ok(end)
    }

    /// Reads one record at `off`.
    ///
    /// Returns `None` for a type without a codec; its payload is skipped using
    /// the declared rdlength.
    pub fn unpack(decoder: &Decoder<'_>, off: usize) -> Result<(Option<Self>, usize), WireError> {
        let (name, off) = decoder.name_at(off)?;
        let (rrtype, off) = decoder.u16_at(off)?;
        let (class, off) = decoder.u16_at(off)?;
        let (ttl, off) = decoder.u32_at(off)?;
        let (rdlength, off) = decoder.u16_at(off)?;

        let end = off + usize::from(rdlength);
        if end > decoder.len() {
            return Err(WireError::BufferOverflow {
                context: "unpacking rdata",
            });
        }

        let Some(record_type) = RecordType::from_u16(rrtype) else {
            debug!(rrtype, name = %name, "unsupported rr type, skipping record");
            return Ok((None, end));
        };

        let (data, off) = RData::unpack(record_type, decoder, off, rdlength)?;
        let header = RecordHeader {
            name,
            rrtype,
            class,
            ttl,
            rdlength,
        };
        Ok((Some(Self { header, data }), off))
    }
}
