//! Trinity Lens Fast MCP server library.
//!
//! A Model Context Protocol server that injects a four-dimension
//! analytical framework (Knowledge, Social, Generative, Convergence)
//! into any query. The server is a stateless template renderer behind a
//! thin tool dispatch surface.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler, and
//!   the transport layer (stdio/tcp/http behind features)
//! - **domains**: business logic organized by bounded contexts
//!   - **framework**: the constant dimension table, term glossary, and
//!     pure template renderer
//!   - **tools**: the `analyze`, `convergence_guide`, and `list_terms`
//!     operations
//!   - **prompts**: the same templates exposed as MCP prompts
//!   - **resources**: read-only views of the tables and docs
//!
//! # Example
//!
//! ```rust,no_run
//! use trinity_lens_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
