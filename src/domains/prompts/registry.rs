//! Prompt Registry - one prompt per enabled action.
//!
//! Prompts follow the action catalog, so enabling or adding an action
//! registers its prompt without touching this file.

use super::definitions::ActionPrompt;
use crate::domains::actions::ActionCatalog;

/// Get all prompts for the actions in `catalog`.
pub fn get_all_prompts(catalog: &ActionCatalog) -> Vec<ActionPrompt> {
    catalog
        .iter()
        .map(|spec| ActionPrompt::new(spec.clone()))
        .collect()
}

/// Get the list of all prompt names.
pub fn prompt_names(catalog: &ActionCatalog) -> Vec<String> {
    get_all_prompts(catalog)
        .iter()
        .map(ActionPrompt::name)
        .collect()
}
