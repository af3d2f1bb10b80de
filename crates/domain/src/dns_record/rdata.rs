use super::RecordType;
use crate::errors::WireError;
use crate::wire::address::{pack_a, pack_aaaa, unpack_a, unpack_aaaa};
use crate::wire::name::{domain_name_len, pack_domain_name, CompressionMap};
use crate::wire::primitives::{pack_bytes, pack_u16, pack_u32};
use crate::wire::txt::{pack_txt, txt_len, unpack_txt};
use crate::wire::Decoder;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Payload codec implemented by every supported record type.
pub trait RecordData: Sized {
    const TYPE: RecordType;

    /// Payload length with every name written in full.
    fn wire_len(&self) -> usize;

    fn pack(
        &self,
        buf: &mut [u8],
        off: usize,
        compression: &mut CompressionMap,
    ) -> Result<usize, WireError>;

    /// Decodes the payload that starts at `off`; `end` is where the declared
    /// rdlength says it stops.
    fn unpack(decoder: &Decoder<'_>, off: usize, end: usize) -> Result<(Self, usize), WireError>;

    /// Value used for a record whose rdlength is zero.
    fn empty() -> Self;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct A {
    pub address: Option<Ipv4Addr>,
}

impl A {
    pub fn new(address: Ipv4Addr) -> Self {
        Self {
            address: Some(address),
        }
    }
}

impl RecordData for A {
    const TYPE: RecordType = RecordType::A;

    fn wire_len(&self) -> usize {
        if self.address.is_some() {
            4
        } else {
            0
        }
    }

    fn pack(&self, buf: &mut [u8], off: usize, _: &mut CompressionMap) -> Result<usize, WireError> {
        pack_a(self.address, buf, off)
    }

    fn unpack(decoder: &Decoder<'_>, off: usize, _end: usize) -> Result<(Self, usize), WireError> {
        let (address, off) = unpack_a(decoder.buf(), off)?;
        Ok((Self::new(address), off))
    }

    fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AAAA {
    pub address: Option<Ipv6Addr>,
}

impl AAAA {
    pub fn new(address: Ipv6Addr) -> Self {
        Self {
            address: Some(address),
        }
    }
}

impl RecordData for AAAA {
    const TYPE: RecordType = RecordType::AAAA;

    fn wire_len(&self) -> usize {
        if self.address.is_some() {
            16
        } else {
            0
        }
    }

    fn pack(&self, buf: &mut [u8], off: usize, _: &mut CompressionMap) -> Result<usize, WireError> {
        pack_aaaa(self.address, buf, off)
    }

    fn unpack(decoder: &Decoder<'_>, off: usize, _end: usize) -> Result<(Self, usize), WireError> {
        let (address, off) = unpack_aaaa(decoder.buf(), off)?;
        Ok((Self::new(address), off))
    }

    fn empty() -> Self {
        Self::default()
    }
}

/// Record types whose whole payload is one compressible domain name.
macro_rules! name_record {
    ($(#[$meta:meta])* $ty:ident { $field:ident }, $rtype:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            pub $field: String,
        }

        impl $ty {
            pub fn new($field: impl Into<String>) -> Self {
                Self {
                    $field: $field.into(),
                }
            }
        }

        impl RecordData for $ty {
            const TYPE: RecordType = $rtype;

            fn wire_len(&self) -> usize {
                domain_name_len(&self.$field)
            }

            fn pack(
                &self,
                buf: &mut [u8],
                off: usize,
                compression: &mut CompressionMap,
            ) -> Result<usize, WireError> {
                pack_domain_name(&self.$field, buf, off, compression)
            }

            fn unpack(
                decoder: &Decoder<'_>,
                off: usize,
                _end: usize,
            ) -> Result<(Self, usize), WireError> {
                let ($field, off) = decoder.name_at(off)?;
                Ok((Self { $field }, off))
            }

            fn empty() -> Self {
                Self::new(".")
            }
        }
    };
}

name_record!(
    /// Authoritative name server.
    NS { ns },
    RecordType::NS
);
name_record!(
    /// Canonical name for an alias.
    CNAME { target },
    RecordType::CNAME
);
name_record!(PTR { ptr }, RecordType::PTR);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MX {
    pub preference: u16,
    pub exchange: String,
}

impl MX {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

impl RecordData for MX {
    const TYPE: RecordType = RecordType::MX;

    fn wire_len(&self) -> usize {
        2 + domain_name_len(&self.exchange)
    }

    fn pack(
        &self,
        buf: &mut [u8],
        off: usize,
        compression: &mut CompressionMap,
    ) -> Result<usize, WireError> {
        let off = pack_u16(self.preference, buf, off)?;
        pack_domain_name(&self.exchange, buf, off, compression)
    }

    fn unpack(decoder: &Decoder<'_>, off: usize, _end: usize) -> Result<(Self, usize), WireError> {
        let (preference, off) = decoder.u16_at(off)?;
        let (exchange, off) = decoder.name_at(off)?;
        Ok((
            Self {
                preference,
                exchange,
            },
            off,
        ))
    }

    fn empty() -> Self {
        Self::new(0, ".")
    }
}

/// Start of a zone of authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SOA {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl RecordData for SOA {
    const TYPE: RecordType = RecordType::SOA;

    fn wire_len(&self) -> usize {
        domain_name_len(&self.mname) + domain_name_len(&self.rname) + 20
    }

    fn pack(
        &self,
        buf: &mut [u8],
        off: usize,
        compression: &mut CompressionMap,
    ) -> Result<usize, WireError> {
        let off = pack_domain_name(&self.mname, buf, off, compression)?;
        let off = pack_domain_name(&self.rname, buf, off, compression)?;
        let off = pack_u32(self.serial, buf, off)?;
        let off = pack_u32(self.refresh, buf, off)?;
        let off = pack_u32(self.retry, buf, off)?;
        let off = pack_u32(self.expire, buf, off)?;
        pack_u32(self.minimum, buf, off)
    }

    fn unpack(decoder: &Decoder<'_>, off: usize, _end: usize) -> Result<(Self, usize), WireError> {
        let (mname, off) = decoder.name_at(off)?;
        let (rname, off) = decoder.name_at(off)?;
        let (serial, off) = decoder.u32_at(off)?;
        let (refresh, off) = decoder.u32_at(off)?;
        let (retry, off) = decoder.u32_at(off)?;
        let (expire, off) = decoder.u32_at(off)?;
        let (minimum, off) = decoder.u32_at(off)?;
        Ok((
            Self {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            },
            off,
        ))
    }

    fn empty() -> Self {
        Self {
            mname: ".".to_string(),
            rname: ".".to_string(),
            serial: 0,
            refresh: 0,
            retry: 0,
            expire: 0,
            minimum: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TXT {
    pub txt: Vec<Vec<u8>>,
}

impl TXT {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self {
            txt: segments.into_iter().map(Into::into).collect(),
        }
    }
}

impl RecordData for TXT {
    const TYPE: RecordType = RecordType::TXT;

    fn wire_len(&self) -> usize {
        txt_len(&self.txt)
    }

    fn pack(&self, buf: &mut [u8], off: usize, _: &mut CompressionMap) -> Result<usize, WireError> {
        pack_txt(&self.txt, buf, off)
    }

    fn unpack(decoder: &Decoder<'_>, off: usize, end: usize) -> Result<(Self, usize), WireError> {
        let (txt, off) = unpack_txt(decoder.buf(), off, end)?;
        Ok((Self { txt }, off))
    }

    fn empty() -> Self {
        Self::default()
    }
}

/// Type-specific payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(A),
    AAAA(AAAA),
    NS(NS),
    CNAME(CNAME),
    SOA(SOA),
    PTR(PTR),
    MX(MX),
    TXT(TXT),
    /// Opaque payload of a type without a codec. Packed verbatim; never
    /// produced by decoding.
    Unknown { rrtype: u16, data: Vec<u8> },
}

impl RData {
    pub fn rrtype(&self) -> u16 {
        match self {
            RData::Unknown { rrtype, .. } => *rrtype,
            known => known
                .record_type()
                .map(|t| t.to_u16())
                .unwrap_or_default(),
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            RData::A(_) => Some(A::TYPE),
            RData::AAAA(_) => Some(AAAA::TYPE),
            RData::NS(_) => Some(NS::TYPE),
            RData::CNAME(_) => Some(CNAME::TYPE),
            RData::SOA(_) => Some(SOA::TYPE),
            RData::PTR(_) => Some(PTR::TYPE),
            RData::MX(_) => Some(MX::TYPE),
            RData::TXT(_) => Some(TXT::TYPE),
            RData::Unknown { .. } => None,
        }
    }

    pub fn wire_len(&self) -> usize {
        match self {
            RData::A(rr) => rr.wire_len(),
            RData::AAAA(rr) => rr.wire_len(),
            RData::NS(rr) => rr.wire_len(),
            RData::CNAME(rr) => rr.wire_len(),
            RData::SOA(rr) => rr.wire_len(),
            RData::PTR(rr) => rr.wire_len(),
            RData::MX(rr) => rr.wire_len(),
            RData::TXT(rr) => rr.wire_len(),
            RData::Unknown { data, .. } => data.len(),
        }
    }

    pub fn pack(
        &self,
        buf: &mut [u8],
        off: usize,
        compression: &mut CompressionMap,
    ) -> Result<usize, WireError> {
        match self {
            RData::A(rr) => rr.pack(buf, off, compression),
            RData::AAAA(rr) => rr.pack(buf, off, compression),
            RData::NS(rr) => rr.pack(buf, off, compression),
            RData::CNAME(rr) => rr.pack(buf, off, compression),
            RData::SOA(rr) => rr.pack(buf, off, compression),
            RData::PTR(rr) => rr.pack(buf, off, compression),
            RData::MX(rr) => rr.pack(buf, off, compression),
            RData::TXT(rr) => rr.pack(buf, off, compression),
            RData::Unknown { data, .. } => pack_bytes(data, buf, off),
        }
    }

    pub fn empty(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => RData::A(A::empty()),
            RecordType::AAAA => RData::AAAA(AAAA::empty()),
            RecordType::NS => RData::NS(NS::empty()),
            RecordType::CNAME => RData::CNAME(CNAME::empty()),
            RecordType::SOA => RData::SOA(SOA::empty()),
            RecordType::PTR => RData::PTR(PTR::empty()),
            RecordType::MX => RData::MX(MX::empty()),
            RecordType::TXT => RData::TXT(TXT::empty()),
        }
    }

    /// Decodes a `record_type` payload of `rdlength` bytes at `off`.
    ///
    /// Fails unless the payload decoder consumed exactly `rdlength` bytes. A
    /// zero `rdlength` yields the type's empty value without reading.
    pub fn unpack(
        record_type: RecordType,
        decoder: &Decoder<'_>,
        off: usize,
        rdlength: u16,
    ) -> Result<(Self, usize), WireError> {
        if rdlength == 0 {
            return Ok((Self::empty(record_type), off));
        }

        let declared = usize::from(rdlength);
        let end = off + declared;
        let (data, next) = match record_type {
            RecordType::A => A::unpack(decoder, off, end).map(|(rr, o)| (RData::A(rr), o))?,
            RecordType::AAAA => {
                AAAA::unpack(decoder, off, end).map(|(rr, o)| (RData::AAAA(rr), o))?
            }
            RecordType::NS => NS::unpack(decoder, off, end).map(|(rr, o)| (RData::NS(rr), o))?,
            RecordType::CNAME => {
                CNAME::unpack(decoder, off, end).map(|(rr, o)| (RData::CNAME(rr), o))?
            }
            RecordType::SOA => {
                SOA::unpack(decoder, off, end).map(|(rr, o)| (RData::SOA(rr), o))?
            }
            RecordType::PTR => {
                PTR::unpack(decoder, off, end).map(|(rr, o)| (RData::PTR(rr), o))?
            }
            RecordType::MX => MX::unpack(decoder, off, end).map(|(rr, o)| (RData::MX(rr), o))?,
            RecordType::TXT => {
                TXT::unpack(decoder, off, end).map(|(rr, o)| (RData::TXT(rr), o))?
            }
        };

        if next != end {
            return Err(WireError::RdlengthMismatch {
                declared,
                consumed: next.saturating_sub(off),
            });
        }
        Ok((data, next))
    }
}

impl From<A> for RData {
    fn from(rr: A) -> Self {
        RData::A(rr)
    }
}

impl From<AAAA> for RData {
    fn from(rr: AAAA) -> Self {
        RData::AAAA(rr)
    }
}

impl From<NS> for RData {
    fn from(rr: NS) -> Self {
        RData::NS(rr)
    }
}

impl From<CNAME> for RData {
    fn from(rr: CNAME) -> Self {
        RData::CNAME(rr)
    }
}

impl From<SOA> for RData {
    fn from(rr: SOA) -> Self {
        RData::SOA(rr)
    }
}

impl From<PTR> for RData {
    fn from(rr: PTR) -> Self {
        RData::PTR(rr)
    }
}

impl From<MX> for RData {
    fn from(rr: MX) -> Self {
        RData::MX(rr)
    }
}

impl From<TXT> for RData {
    fn from(rr: TXT) -> Self {
        RData::TXT(rr)
    }
}
