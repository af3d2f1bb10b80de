use super::primitives::{pack_bytes, pack_u8, unpack_bytes, unpack_u8};
use crate::errors::WireError;

const MAX_CHARACTER_STRING_LEN: usize = 255;

/// Packs a sequence of character-strings back to back.
pub fn pack_txt(segments: &[Vec<u8>], buf: &mut [u8], off: usize) -> Result<usize, WireError> {
    let mut off = off;
    for segment in segments {
        if segment.len() > MAX_CHARACTER_STRING_LEN {
            return Err(WireError::CharacterStringTooLong(segment.len()));
        }
        off = pack_u8(segment.len() as u8, buf, off)?;
        off = pack_bytes(segment, buf, off)?;
    }
    Ok(off)
}

/// Unpacks character-strings from `off` up to `end`, which must be hit
/// exactly.
pub fn unpack_txt(buf: &[u8], off: usize, end: usize) -> Result<(Vec<Vec<u8>>, usize), WireError> {
    if end > buf.len() {
        return Err(WireError::BufferOverflow {
            context: "unpacking txt",
        });
    }

    let start = off;
    let mut off = off;
    let mut segments = Vec::new();
    while off < end {
        let (len, next) = unpack_u8(buf, off)?;
        let (segment, next) = unpack_bytes(buf, next, usize::from(len))?;
        segments.push(segment.to_vec());
        off = next;
    }

    if off != end {
        return Err(WireError::RdlengthMismatch {
            declared: end.saturating_sub(start),
            consumed: off - start,
        });
    }
    Ok((segments, off))
}

pub fn txt_len(segments: &[Vec<u8>]) -> usize {
    segments.iter().map(|s| 1 + s.len()).sum()
}
