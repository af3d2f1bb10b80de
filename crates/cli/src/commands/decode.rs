use super::{decode_base64, render::render_msg};
use spirit_dns_domain::{Msg, PointerWidth};

/// Prints a base64 wire message in a dig-like layout.
pub fn decode(input: &str, legacy_pointers: bool) -> anyhow::Result<()> {
    let bytes = decode_base64(input)?;
    let width = if legacy_pointers {
        PointerWidth::Legacy6Bit
    } else {
        PointerWidth::Full
    };

    let msg = Msg::unpack_with(&bytes, width)?;
    print!("{}", render_msg(&msg));
    Ok(())
}
