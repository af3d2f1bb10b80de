use super::decoder::Decoder;
use super::name::CompressionMap;
use crate::dns_record::Record;
use crate::errors::WireError;

pub(crate) fn pack_records(
    records: &[Record],
    buf: &mut [u8],
    off: usize,
    compression: &mut CompressionMap,
) -> Result<usize, WireError> {
    let mut off = off;
    for record in records {
        off = record.pack(buf, off, compression)?;
    }
    Ok(off)
}

/// Reads `count` records, keeping only the types that have a codec.
pub(crate) fn unpack_records(
    decoder: &Decoder<'_>,
    off: usize,
    count: u16,
) -> Result<(Vec<Record>, usize), WireError> {
    let mut off = off;
    let mut records = Vec::with_capacity(usize::from(count).min(64));
    for _ in 0..count {
        let (record, next) = Record::unpack(decoder, off)?;
        if let Some(record) = record {
            records.push(record);
        }
        off = next;
    }
    Ok((records, off))
}

pub(crate) fn section_count(section: &'static str, len: usize) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| WireError::SectionTooLarge {
        section,
        count: len,
    })
}
