//! Tool definitions module.
//!
//! Every Blink action is served by the generic [`ActionTool`] definition.

pub mod action;

pub use action::ActionTool;
