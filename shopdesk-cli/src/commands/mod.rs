//! Command implementations for the shopdesk CLI

pub mod catalog;
pub mod users;

use std::net::SocketAddr;
use std::time::Duration;

use clap::Args;
use shopdesk_server::ServerConfig;

pub use catalog::run_catalog;
pub use users::run_users;

/// HTTP options shared by both services
#[derive(Args, Debug, Clone)]
pub struct HttpArgs {
    /// Address to bind to (default depends on the service)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,
}

impl HttpArgs {
    pub fn into_config(self, default_addr: SocketAddr) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind.unwrap_or(default_addr),
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_falls_back_to_service_default() {
        let args = HttpArgs {
            bind: None,
            cors_permissive: false,
            timeout: 5,
        };
        let config = args.into_config(shopdesk_server::http::USERS_ADDR);
        assert_eq!(config.bind_addr.port(), 8001);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
