use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use spirit_dns_domain::{Msg, RecordType};

/// Builds a recursive query and prints its wire form as base64.
pub fn query(name: &str, record_type: RecordType, id: u16) -> anyhow::Result<()> {
    let mut msg = Msg::new();
    msg.id = id;
    msg.recursion_desired = true;
    msg.set_question(name, record_type.to_u16());

    let packed = msg.pack()?;
    println!("{}", STANDARD.encode(packed));
    Ok(())
}
