//! Easy-Connect style connect string handling.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How a connection reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// In-process access over shared memory.
    Direct,
    /// Access through the client/server listener.
    Client,
}

impl FromStr for ConnectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "timesten_direct" => Ok(Self::Direct),
            "timesten_client" => Ok(Self::Client),
            other => Err(Error::invalid_connect_string(format!(
                "unknown access mode '{other}' (expected timesten_direct or timesten_client)"
            ))),
        }
    }
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("timesten_direct"),
            Self::Client => f.write_str("timesten_client"),
        }
    }
}

/// Parsed form of a connect string.
///
/// The accepted grammar is the one the usage text documents:
/// `{<net_service_name> | <host>/<host_service_name>:{timesten_direct | timesten_client}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectDescriptor {
    /// A net service name resolved by the driver's naming layer.
    NetServiceName(String),
    /// A host, the service it exposes, and the access mode.
    HostService {
        host: String,
        service: String,
        mode: ConnectionMode,
    },
}

impl ConnectDescriptor {
    /// Parse a connect string like "localhost/sampledb:timesten_direct".
    pub fn parse(connect_string: &str) -> Result<Self> {
        if connect_string.is_empty() {
            return Err(Error::invalid_connect_string("connect string is empty"));
        }

        let Some((addr_part, mode)) = connect_string.rsplit_once(':') else {
            if connect_string.contains('/') {
                return Err(Error::invalid_connect_string(format!(
                    "'{connect_string}' is missing the access mode \
                     (expected :timesten_direct or :timesten_client)"
                )));
            }
            return Ok(Self::NetServiceName(connect_string.to_string()));
        };

        let mode = mode.parse::<ConnectionMode>()?;
        let (host, service) =
            addr_part
                .split_once('/')
                .ok_or_else(|| Error::InvalidConnectString {
                    message: format!(
                        "expected <host>/<host_service_name> before ':{mode}', got '{addr_part}'"
                    ),
                })?;
        if host.is_empty() || service.is_empty() {
            return Err(Error::invalid_connect_string(format!(
                "empty host or service name in '{connect_string}'"
            )));
        }

        Ok(Self::HostService {
            host: host.to_string(),
            service: service.to_string(),
            mode,
        })
    }
}

impl fmt::Display for ConnectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetServiceName(name) => f.write_str(name),
            Self::HostService {
                host,
                service,
                mode,
            } => write!(f, "{host}/{service}:{mode}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_service() {
        let desc = ConnectDescriptor::parse("localhost/sampledb:timesten_direct").unwrap();
        assert_eq!(
            desc,
            ConnectDescriptor::HostService {
                host: "localhost".to_string(),
                service: "sampledb".to_string(),
                mode: ConnectionMode::Direct,
            }
        );
    }

    #[test]
    fn test_parse_client_mode() {
        let desc = ConnectDescriptor::parse("tthost/appdb:timesten_client").unwrap();
        match desc {
            ConnectDescriptor::HostService { mode, .. } => {
                assert_eq!(mode, ConnectionMode::Client)
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn test_parse_net_service_name() {
        let desc = ConnectDescriptor::parse("sampledb_ds").unwrap();
        assert_eq!(desc, ConnectDescriptor::NetServiceName("sampledb_ds".to_string()));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ConnectDescriptor::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let err = ConnectDescriptor::parse("localhost/sampledb:odbc").unwrap_err();
        assert!(err.to_string().contains("unknown access mode"));
    }

    #[test]
    fn test_parse_rejects_host_service_without_mode() {
        assert!(ConnectDescriptor::parse("localhost/sampledb").is_err());
    }

    #[test]
    fn test_parse_rejects_mode_without_service() {
        assert!(ConnectDescriptor::parse("sampledb:timesten_direct").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["localhost/sampledb:timesten_direct", "sampledb_ds"] {
            let desc = ConnectDescriptor::parse(text).unwrap();
            assert_eq!(desc.to_string(), text);
        }
    }
}
