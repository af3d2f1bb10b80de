use super::constants::{
    BIT_AA, BIT_QR, BIT_RA, BIT_RD, BIT_TC, BIT_Z, CLASS_INET, HEADER_SIZE, NIBBLE_MASK,
    OPCODE_SHIFT,
};
use super::decoder::Decoder;
use super::header::Header;
use super::name::{CompressionMap, PointerWidth};
use super::question::Question;
use super::section::{pack_records, section_count, unpack_records};
use crate::dns_record::Record;
use crate::errors::WireError;

/// A DNS message with its header flags flattened into plain fields.
///
/// `opcode` and `rcode` are 4-bit fields; higher bits are masked off when
/// packing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Msg {
    pub id: u16,
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub zero: bool,
    pub rcode: u8,
    pub question: Vec<Question>,
    pub answer: Vec<Record>,
    pub ns: Vec<Record>,
    pub extra: Vec<Record>,
}

impl Msg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an Internet-class question.
    pub fn set_question(&mut self, name: impl Into<String>, qtype: u16) -> &mut Self {
        self.question.push(Question {
            name: name.into(),
            qtype,
            qclass: CLASS_INET,
        });
        self
    }

    pub fn flags(&self) -> u16 {
        let mut bits = (u16::from(self.opcode) & NIBBLE_MASK) << OPCODE_SHIFT
            | (u16::from(self.rcode) & NIBBLE_MASK);
        for (set, bit) in [
            (self.response, BIT_QR),
            (self.authoritative, BIT_AA),
            (self.truncated, BIT_TC),
            (self.recursion_desired, BIT_RD),
            (self.recursion_available, BIT_RA),
            (self.zero, BIT_Z),
        ] {
            if set {
                bits |= bit;
            }
        }
        bits
    }

    pub fn header(&self) -> Result<Header, WireError> {
        Ok(Header {
            id: self.id,
            bits: self.flags(),
            qdcount: section_count("question", self.question.len())?,
            ancount: section_count("answer", self.answer.len())?,
            nscount: section_count("authority", self.ns.len())?,
            arcount: section_count("additional", self.extra.len())?,
        })
    }

    /// Size of the message with no compression applied. Compression only
    /// ever shrinks the output, so this always fits.
    pub fn wire_len_bound(&self) -> usize {
        HEADER_SIZE
            + self.question.iter().map(Question::wire_len).sum::<usize>()
            + self
                .answer
                .iter()
                .chain(&self.ns)
                .chain(&self.extra)
                .map(Record::wire_len)
                .sum::<usize>()
    }

    pub fn pack(&self) -> Result<Vec<u8>, WireError> {
        self.pack_with(CompressionMap::new())
    }

    /// Packs with every name written in full.
    pub fn pack_uncompressed(&self) -> Result<Vec<u8>, WireError> {
        self.pack_with(CompressionMap::disabled())
    }

    fn pack_with(&self, mut compression: CompressionMap) -> Result<Vec<u8>, WireError> {
        let header = self.header()?;
        let mut buf = vec![0u8; self.wire_len_bound()];

        let mut off = header.pack(&mut buf, 0)?;
        for question in &self.question {
            off = question.pack(&mut buf, off, &mut compression)?;
        }
        off = pack_records(&self.answer, &mut buf, off, &mut compression)?;
        off = pack_records(&self.ns, &mut buf, off, &mut compression)?;
        off = pack_records(&self.extra, &mut buf, off, &mut compression)?;

        buf.truncate(off);
        Ok(buf)
    }

    pub fn unpack(data: &[u8]) -> Result<Self, WireError> {
        Self::unpack_with(data, PointerWidth::default())
    }

    pub fn unpack_with(data: &[u8], pointer_width: PointerWidth) -> Result<Self, WireError> {
        let decoder = Decoder::with_pointer_width(data, pointer_width);
        let (header, mut off) = Header::unpack(data, 0)?;

        let mut question = Vec::with_capacity(usize::from(header.qdcount).min(16));
        for _ in 0..header.qdcount {
            let (q, next) = Question::unpack(&decoder, off)?;
            question.push(q);
            off = next;
        }

        let (answer, off) = unpack_records(&decoder, off, header.ancount)?;
        let (ns, off) = unpack_records(&decoder, off, header.nscount)?;
        let (extra, _) = unpack_records(&decoder, off, header.arcount)?;

        let bits = header.bits;
        Ok(Self {
            id: header.id,
            response: bits & BIT_QR != 0,
            opcode: ((bits >> OPCODE_SHIFT) & NIBBLE_MASK) as u8,
            authoritative: bits & BIT_AA != 0,
            truncated: bits & BIT_TC != 0,
            recursion_desired: bits & BIT_RD != 0,
            recursion_available: bits & BIT_RA != 0,
            zero: bits & BIT_Z != 0,
            rcode: (bits & NIBBLE_MASK) as u8,
            question,
            answer,
            ns,
            extra,
        })
    }
}
