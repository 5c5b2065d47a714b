//! Actions domain module.
//!
//! Every tool call flows through the same linear pipeline:
//!
//! ```text
//! arguments -> validate -> build -> dispatch -> normalize -> ToolResult
//! ```
//!
//! ## Architecture
//!
//! - `schema.rs` - Declarative action records (parameters and routes)
//! - `catalog/` - The built-in action records, one file per provider
//! - `validator.rs` - Argument validation, no network access
//! - `request.rs` - Maps a validated request onto a Blink API call
//! - `client.rs` - Dispatcher trait and the `reqwest` implementation
//! - `response.rs` - Normalizes whatever came back into a `ToolResult`
//! - `pipeline.rs` - Runs the stages in order

pub mod catalog;
pub mod client;
mod error;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod schema;
pub mod validator;

pub use catalog::ActionCatalog;
pub use client::{ActionDispatcher, BlinkClient};
pub use error::{ActionError, ActionResult};
pub use pipeline::ActionPipeline;
pub use request::{ActionRequest, RequestBuilder};
pub use response::{ActionResponse, ErrorKind, ToolResult, normalize};
pub use schema::ActionSpec;
pub use validator::{ToolRequest, ValidationError, validate};
