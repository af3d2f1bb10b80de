mod decode;
mod query;
mod render;
mod replay;
mod run;

pub use decode::decode;
pub use query::query;
pub use replay::replay;
pub use run::run;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

fn decode_base64(input: &str) -> anyhow::Result<Vec<u8>> {
    STANDARD
        .decode(input.trim())
        .map_err(|e| anyhow::anyhow!("invalid base64 message: {}", e))
}
