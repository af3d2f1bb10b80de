use super::constants::{MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_HOPS};
use super::primitives::{pack_bytes, pack_u16, pack_u8, unpack_bytes, unpack_u8};
use crate::errors::WireError;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::fmt::Write as _;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TAG: u16 = 0xC000;
/// Largest offset a 14-bit compression pointer can address.
const MAX_POINTER_OFFSET: usize = 0x3FFF;

/// How the target of a compression pointer is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerWidth {
    /// RFC 1035: low 6 bits of the first byte followed by all 8 bits of the
    /// second byte form a 14-bit offset.
    #[default]
    Full,
    /// Only the low 6 bits of the second byte are used, so pointers can reach
    /// the first 64 bytes of the message and nothing beyond. Kept for byte
    /// compatibility with peers that decode this way.
    Legacy6Bit,
}

impl PointerWidth {
    fn target(self, high: u8, low: u8) -> usize {
        match self {
            PointerWidth::Full => (usize::from(high & 0x3F) << 8) | usize::from(low),
            PointerWidth::Legacy6Bit => usize::from(low & 0x3F),
        }
    }
}

/// Suffix to offset dictionary built while packing one message.
///
/// Append-only: an entry records where a name tail was first written, so a
/// later name sharing that tail can be replaced by a pointer. Owned by a single
/// pack call and dropped with it.
#[derive(Debug)]
pub struct CompressionMap {
    offsets: FxHashMap<String, u16>,
    enabled: bool,
}

impl CompressionMap {
    pub fn new() -> Self {
        Self {
            offsets: FxHashMap::default(),
            enabled: true,
        }
    }

    /// A map that never records or returns suffixes; every name is written
    /// in full.
    pub fn disabled() -> Self {
        Self {
            offsets: FxHashMap::default(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn get(&self, suffix: &str) -> Option<u16> {
        if !self.enabled {
            return None;
        }
        self.offsets.get(suffix).copied()
    }

    fn record(&mut self, suffix: &str, off: usize) {
        if !self.enabled || off > MAX_POINTER_OFFSET {
            return;
        }
        if let Ok(off) = u16::try_from(off) {
            self.offsets.entry(suffix.to_owned()).or_insert(off);
        }
    }
}

impl Default for CompressionMap {
    fn default() -> Self {
        Self::new()
    }
}

fn is_root(name: &str) -> bool {
    name.is_empty() || name == "."
}

/// One wire label of a presentation-form name. `start` is the byte index in
/// the text where the label begins, so `&text[start..]` is the name tail.
struct Label {
    start: usize,
    bytes: Vec<u8>,
}

/// Splits a presentation-form name into wire labels.
///
/// `\.` and `\\` stand for a literal dot and backslash inside a label, `\DDD`
/// for the byte with decimal value DDD, and any other escaped character for
/// itself. Returns whether the text ended in an unescaped dot.
fn parse_labels(name: &str) -> Result<(Vec<Label>, bool), WireError> {
    let text = name.as_bytes();
    let mut labels = Vec::new();
    let mut current = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < text.len() {
        match text[i] {
            b'.' => {
                if current.is_empty() {
                    return Err(WireError::MalformedName("empty label"));
                }
                labels.push(Label {
                    start,
                    bytes: std::mem::take(&mut current),
                });
                i += 1;
                start = i;
            }
            b'\\' => {
                let escaped = text
                    .get(i + 1)
                    .ok_or(WireError::MalformedName("dangling escape"))?;
                if escaped.is_ascii_digit() {
                    let digits = text
                        .get(i + 1..i + 4)
                        .filter(|d| d.iter().all(u8::is_ascii_digit))
                        .ok_or(WireError::MalformedName("bad escape"))?;
                    let value = digits
                        .iter()
                        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
                    let byte =
                        u8::try_from(value).map_err(|_| WireError::MalformedName("bad escape"))?;
                    current.push(byte);
                    i += 4;
                } else {
                    current.push(*escaped);
                    i += 2;
                }
            }
            byte => {
                current.push(byte);
                i += 1;
            }
        }
    }

    let qualified = current.is_empty();
    if !qualified {
        labels.push(Label {
            start,
            bytes: current,
        });
    }
    Ok((labels, qualified))
}

fn labels_wire_len(labels: &[Label]) -> usize {
    labels.iter().map(|l| l.bytes.len() + 1).sum::<usize>() + 1
}

/// Appends one label in presentation form.
fn escape_label(label: &[u8], text: &mut String) {
    for &byte in label {
        match byte {
            b'.' | b'\\' => {
                text.push('\\');
                text.push(char::from(byte));
            }
            0x21..=0x7E => text.push(char::from(byte)),
            _ => {
                let _ = write!(text, "\\{:03}", byte);
            }
        }
    }
    text.push('.');
}

/// Uncompressed wire length of `name`, terminator included.
///
/// For text that does not parse, the text length is returned instead; it is
/// still an upper bound because every escape is longer than its byte.
pub fn domain_name_len(name: &str) -> usize {
    if is_root(name) {
        return 1;
    }
    match parse_labels(name) {
        Ok((labels, _)) => labels_wire_len(&labels),
        Err(_) => name.len() + 2,
    }
}

/// Writes `name` at `off`, replacing the longest already-written tail with a
/// compression pointer.
pub fn pack_domain_name(
    name: &str,
    buf: &mut [u8],
    off: usize,
    compression: &mut CompressionMap,
) -> Result<usize, WireError> {
    if is_root(name) {
        return pack_u8(0, buf, off);
    }

    let (labels, qualified) = parse_labels(name)?;
    if let Some(label) = labels.iter().find(|l| l.bytes.len() > MAX_LABEL_LEN) {
        return Err(WireError::LabelTooLong(label.bytes.len()));
    }
    let wire_len = labels_wire_len(&labels);
    if wire_len > MAX_NAME_LEN {
        return Err(WireError::NameTooLong(wire_len));
    }

    let fqdn: Cow<'_, str> = if qualified {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{}.", name))
    };
    let mut off = off;

    for label in &labels {
        let suffix = &fqdn[label.start..];
        if let Some(pointer) = compression.get(suffix) {
            return pack_u16(POINTER_TAG | pointer, buf, off);
        }

        compression.record(suffix, off);
        // label length <= 63 was checked above
        off = pack_u8(label.bytes.len() as u8, buf, off)?;
        off = pack_bytes(&label.bytes, buf, off)?;
    }

    pack_u8(0, buf, off)
}

/// Reads a name at `off` using standard 14-bit pointer offsets.
pub fn unpack_domain_name(buf: &[u8], off: usize) -> Result<(String, usize), WireError> {
    unpack_domain_name_with(buf, off, PointerWidth::Full)
}

/// Reads a name at `off`.
///
/// Label bytes that are not printable ASCII, and literal dots or backslashes,
/// come back escaped so the text packs to the same wire bytes. The returned
/// offset is where the caller should continue reading: right after the
/// terminator, or right after the first pointer if one was followed.
pub fn unpack_domain_name_with(
    buf: &[u8],
    off: usize,
    width: PointerWidth,
) -> Result<(String, usize), WireError> {
    let mut text = String::new();
    let mut wire_len = 1;
    let mut cursor = off;
    let mut resume = None;
    let mut hops = 0usize;

    loop {
        let (len, next) = unpack_u8(buf, cursor)?;
        match len & LABEL_TYPE_MASK {
            0x00 => {
                if len == 0 {
                    cursor = next;
                    break;
                }
                let (label, next) = unpack_bytes(buf, next, usize::from(len))?;
                wire_len += label.len() + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong(wire_len));
                }
                escape_label(label, &mut text);
                cursor = next;
            }
            LABEL_TYPE_MASK => {
                let (low, next) = unpack_u8(buf, next)?;
                if resume.is_none() {
                    resume = Some(next);
                }
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(WireError::MalformedName("infinite loop"));
                }
                cursor = width.target(len, low);
            }
            _ => return Err(WireError::MalformedName("reserved label type")),
        }
    }

    let end = resume.unwrap_or(cursor);
    if text.is_empty() {
        return Ok((".".to_string(), end));
    }
    Ok((text, end))
}
