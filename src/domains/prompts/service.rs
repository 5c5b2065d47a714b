//! Prompt service implementation.
//!
//! The PromptService keeps the prompts of the enabled actions and handles
//! listing and rendering. Prompts are registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

use super::definitions::ActionPrompt;
use super::error::PromptError;
use super::registry::get_all_prompts;
use crate::domains::actions::ActionCatalog;

/// Service for listing and rendering prompts.
pub struct PromptService {
    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt definition
    prompts: BTreeMap<String, ActionPrompt>,
}

impl PromptService {
    /// Create a PromptService for the actions in `catalog`.
    pub fn new(catalog: &ActionCatalog) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: BTreeMap::new(),
        };

        for prompt in get_all_prompts(catalog) {
            service.register_prompt(prompt);
        }

        service
    }

    /// Register a prompt.
    pub fn register_prompt(&mut self, prompt: ActionPrompt) {
        let name = prompt.name();
        info!("Registering prompt: {}", name);
        self.prompts.insert(name, prompt);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts.values().map(ActionPrompt::to_prompt).collect()
    }

    /// Get a prompt rendered with the given arguments.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let prompt = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        // Validate required arguments
        for arg in prompt.arguments() {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = prompt.render(&arguments)?;

        Ok(GetPromptResult {
            description: Some(prompt.description()),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PromptService {
        PromptService::new(&ActionCatalog::builtin())
    }

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 33);
        assert!(prompts.iter().any(|p| p.name == "kamino_deposit_prompt"));
    }

    #[tokio::test]
    async fn test_get_prompt_with_arguments() {
        let result = service()
            .get_prompt(
                "marginfi_supply_prompt",
                Some(args(&[
                    ("token", "USDC"),
                    ("amount", "100"),
                    ("tx_sender_pubkey", "C7GCggFP3464XJK4DudqkSkMjQSeKbNa9SMTf26tPQ5E"),
                ])),
            )
            .await
            .unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(result.description.unwrap().contains("MarginFi Supply"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = service().get_prompt("marginfi_supply_prompt", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
