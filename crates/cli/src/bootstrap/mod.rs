mod logging;
mod store;

pub use logging::init_logging;
pub use store::{connect_store, init_store};

use spirit_dns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
