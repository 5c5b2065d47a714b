//! Domains module containing business logic organized by bounded contexts.
//!
//! `actions` owns the Blink request pipeline; `tools` and `prompts` expose
//! it over MCP.

pub mod actions;
pub mod prompts;
pub mod tools;
