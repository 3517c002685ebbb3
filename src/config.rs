use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let host = match host {
            Some(value) => value.parse::<IpAddr>().unwrap_or_else(|err| {
                warn!("ignoring HOST={value}: {err}");
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
