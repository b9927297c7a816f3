// Runtime configuration read from the environment.
//
// Variables
// - HOST: bind address, default 0.0.0.0.
// - PORT: bind port, default 8080.
// - RESPONSE_STYLE: `bare` or `envelope`, default `bare`.
// - RUST_LOG: read by the tracing subscriber, not here.

use crate::shared::inbound::response::{ResponseStyle, UnknownResponseStyle};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOST is not a valid ip address: {0}")]
    InvalidHost(String),

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error(transparent)]
    InvalidStyle(#[from] UnknownResponseStyle),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub response_style: ResponseStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            response_style: ResponseStyle::Bare,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host: IpAddr = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host,
        };
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let response_style: ResponseStyle = match lookup("RESPONSE_STYLE") {
            Some(raw) => raw.parse()?,
            None => defaults.response_style,
        };

        Ok(Self {
            host,
            port,
            response_style,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
