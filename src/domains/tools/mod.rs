//! Tools domain module.
//!
//! This module exposes the Blink actions as MCP tools. Tools are executable
//! functions that can be called by MCP clients; here each one builds an
//! unsigned Solana transaction through the Blink API.
//!
//! ## Architecture
//!
//! - `definitions/` - The generic action tool definition
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool registry and in-process dispatch
//! - `error.rs` - Tool-specific error types
//!
//! **No need to modify `server.rs` to add a tool!** Adding an action record
//! to the catalog is enough.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::ActionTool;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
