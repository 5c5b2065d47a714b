//! Prompt definitions module.
//!
//! Each enabled action gets one prompt, `<tool>_prompt`, derived from its
//! action record: the arguments mirror the tool parameters and the rendered
//! message carries the action's example requests.

pub mod action;

pub use action::{ActionPrompt, PROMPT_SUFFIX};
