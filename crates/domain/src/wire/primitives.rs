use crate::errors::WireError;

#[inline]
fn span(buf_len: usize, off: usize, width: usize, context: &'static str) -> Result<usize, WireError> {
    off.checked_add(width)
        .filter(|&end| end <= buf_len)
        .ok_or(WireError::BufferOverflow { context })
}

pub fn pack_u8(value: u8, buf: &mut [u8], off: usize) -> Result<usize, WireError> {
    let end = span(buf.len(), off, 1, "packing uint8")?;
    buf[off] = value;
    Ok(end)
}

pub fn pack_u16(value: u16, buf: &mut [u8], off: usize) -> Result<usize, WireError> {
    let end = span(buf.len(), off, 2, "packing uint16")?;
    buf[off..end].copy_from_slice(&value.to_be_bytes());
    Ok(end)
}

pub fn pack_u32(value: u32, buf: &mut [u8], off: usize) -> Result<usize, WireError> {
    let end = span(buf.len(), off, 4, "packing uint32")?;
    buf[off..end].copy_from_slice(&value.to_be_bytes());
    Ok(end)
}

pub fn pack_bytes(data: &[u8], buf: &mut [u8], off: usize) -> Result<usize, WireError> {
    let end = span(buf.len(), off, data.len(), "packing bytes")?;
    buf[off..end].copy_from_slice(data);
    Ok(end)
}

pub fn unpack_u8(buf: &[u8], off: usize) -> Result<(u8, usize), WireError> {
    let end = span(buf.len(), off, 1, "unpacking uint8")?;
    Ok((buf[off], end))
}

pub fn unpack_u16(buf: &[u8], off: usize) -> Result<(u16, usize), WireError> {
    let end = span(buf.len(), off, 2, "unpacking uint16")?;
    Ok((u16::from_be_bytes([buf[off], buf[off + 1]]), end))
}

pub fn unpack_u32(buf: &[u8], off: usize) -> Result<(u32, usize), WireError> {
    let end = span(buf.len(), off, 4, "unpacking uint32")?;
    Ok((
        u32::from_be_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]]),
        end,
    ))
}

pub fn unpack_bytes(buf: &[u8], off: usize, len: usize) -> Result<(&[u8], usize), WireError> {
    let end = span(buf.len(), off, len, "unpacking bytes")?;
    Ok((&buf[off..end], end))
}
