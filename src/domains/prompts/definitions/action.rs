//! Action prompt definition.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{Prompt, PromptArgument};

use crate::domains::actions::ActionSpec;
use crate::domains::actions::schema::ParamKind;
use crate::domains::prompts::error::PromptError;

/// Appended to the tool name to form the prompt name.
pub const PROMPT_SUFFIX: &str = "_prompt";

/// Prompt guiding a model through one action tool.
#[derive(Debug, Clone)]
pub struct ActionPrompt {
    spec: Arc<ActionSpec>,
}

impl ActionPrompt {
    pub fn new(spec: Arc<ActionSpec>) -> Self {
        Self { spec }
    }

    /// Prompt name, e.g. `kamino_deposit_prompt`.
    pub fn name(&self) -> String {
        format!("{}{}", self.spec.name, PROMPT_SUFFIX)
    }

    pub fn description(&self) -> String {
        format!(
            "Prepare a {} transaction. {}",
            self.spec.title, self.spec.description
        )
    }

    /// Arguments mirror the tool parameters, required flags included.
    pub fn arguments(&self) -> Vec<PromptArgument> {
        self.spec
            .params
            .iter()
            .map(|param| PromptArgument {
                name: param.name.to_string(),
                title: None,
                description: Some(argument_description(param.description, param.kind)),
                required: Some(param.required),
            })
            .collect()
    }

    pub fn to_prompt(&self) -> Prompt {
        Prompt {
            name: self.name(),
            title: Some(self.spec.title.to_string()),
            description: Some(self.description()),
            arguments: Some(self.arguments()),
            icons: None,
            meta: None,
        }
    }

    /// Render the user message for the given argument values.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let spec = &self.spec;
        let mut message = format!(
            "Build a {} transaction with the `{}` tool.\n\n{}\n",
            spec.title, spec.name, spec.description
        );

        if !spec.params.is_empty() {
            message.push_str("\nParameters:\n");
        }
        for param in &spec.params {
            let value = match arguments.get(param.name) {
                Some(value) => {
                    if let ParamKind::Choice(allowed) = param.kind {
                        if !allowed.contains(&value.as_str()) {
                            return Err(PromptError::invalid_argument(
                                param.name,
                                format!("expected one of [{}]", allowed.join(", ")),
                            ));
                        }
                    }
                    value.as_str()
                }
                None => "(not provided)",
            };
            message.push_str(&format!("- {}: {}\n", param.name, value));
        }

        if !spec.suggestions.is_empty() {
            message.push_str("\nTypical requests for this action:\n");
            for suggestion in spec.suggestions {
                message.push_str(&format!("- \"{}\"\n", suggestion));
            }
        }

        message.push_str(
            "\nThe tool returns an unsigned transaction. Show it to the user for review and signing; never sign or broadcast it yourself.",
        );

        Ok(message)
    }
}

fn argument_description(description: &str, kind: ParamKind) -> String {
    match kind {
        ParamKind::Choice(allowed) => format!("{} (one of: {})", description, allowed.join(", ")),
        _ => description.to_string(),
    }
}
