//! Prompts domain module.
//!
//! Prompts are messages that can be customized with arguments and used to
//! generate consistent interactions with language models. Each enabled
//! action exposes one prompt describing how to call its tool.
//!
//! ## Architecture
//!
//! - `definitions/` - The action prompt definition
//! - `registry.rs` - Prompt registration from the action catalog
//! - `service.rs` - Prompt service for listing and rendering

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ActionPrompt;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
