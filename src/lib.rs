//! Blink Actions MCP Server
//!
//! An MCP server that turns Solana DeFi intents (swaps, lending, perps,
//! liquidity, staking) into unsigned transactions by calling the Dialect
//! Blink API. Each action is a declarative record; tools, prompts and input
//! schemas are derived from it.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **actions**: action catalog and the validate/build/dispatch/normalize pipeline
//!   - **tools**: MCP tools generated from the catalog
//!   - **prompts**: one guidance prompt per action
//!
//! # Example
//!
//! ```rust,no_run
//! use blink_actions_mcp_server::{Config, McpServer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config)?;
//!     println!("{}", server.instructions());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
