use serde::{Deserialize, Serialize};

pub const SPIRIT_DNS_LOG: &str = "spirit_dns_log";
pub const SPIRIT_DNS_BACKEND_LOG: &str = "spirit_dns_backend_log";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_destination")]
    pub destination: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            destination: default_destination(),
        }
    }
}

fn default_destination() -> String {
    SPIRIT_DNS_BACKEND_LOG.to_string()
}
