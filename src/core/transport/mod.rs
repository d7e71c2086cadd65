//! Transport layer for the MCP server.
//!
//! Three transports, conditionally compiled:
//! - **STDIO** (feature `stdio`, default): standard MCP mode
//! - **TCP** (feature `tcp`): line-delimited JSON-RPC over a socket
//! - **HTTP** (feature `http`): JSON-RPC 2.0 over POST requests
//!
//! Each transport owns the connection lifecycle and hands message
//! processing to the server handler.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
