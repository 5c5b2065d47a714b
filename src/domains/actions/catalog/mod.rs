//! Built-in Blink actions, grouped by provider.
//!
//! ## Adding a New Action
//!
//! 1. Add an [`ActionSpec`] record to the provider file (or create one).
//! 2. Register a new provider file in [`ActionCatalog::builtin`].
//!
//! Tools, prompts and schemas are derived from the record.

mod drift;
mod jupiter;
mod kamino;
mod lulo;
mod marginfi;
mod meteora;
mod raydium;
mod save;

use std::sync::Arc;

use super::error::{ActionError, ActionResult};
use super::schema::ActionSpec;

/// The set of actions served by one deployment.
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    actions: Vec<Arc<ActionSpec>>,
}

impl ActionCatalog {
    /// Every action this crate knows about.
    pub fn builtin() -> Self {
        let providers = [
            drift::actions(),
            jupiter::actions(),
            kamino::actions(),
            lulo::actions(),
            marginfi::actions(),
            meteora::actions(),
            raydium::actions(),
            save::actions(),
        ];

        Self::from_actions(providers.into_iter().flatten())
    }

    pub fn from_actions(actions: impl IntoIterator<Item = ActionSpec>) -> Self {
        Self {
            actions: actions.into_iter().map(Arc::new).collect(),
        }
    }

    /// Restrict the catalog to `names`, keeping catalog order.
    ///
    /// An empty list keeps every action.
    pub fn select<S: AsRef<str>>(self, names: &[S]) -> ActionResult<Self> {
        if names.is_empty() {
            return Ok(self);
        }

        if let Some(unknown) = names
            .iter()
            .map(AsRef::as_ref)
            .find(|name| self.get(name).is_none())
        {
            return Err(ActionError::unknown_action(unknown));
        }

        let actions = self
            .actions
            .into_iter()
            .filter(|spec| names.iter().any(|name| name.as_ref() == spec.name))
            .collect();
        Ok(Self { actions })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ActionSpec>> {
        self.actions.iter().find(|spec| spec.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ActionSpec>> {
        self.actions.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|spec| spec.name).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::actions::schema::{ParamKind, QueryParam, TX_SENDER_FIELD};
    use crate::domains::actions::validator::is_plausible_pubkey;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_size() {
        assert_eq!(ActionCatalog::builtin().len(), 33);
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = ActionCatalog::builtin();
        let names: HashSet<_> = catalog.names().into_iter().collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_every_action_requires_sender() {
        for spec in ActionCatalog::builtin().iter() {
            let sender = spec
                .param_spec(TX_SENDER_FIELD)
                .unwrap_or_else(|| panic!("{} lacks {}", spec.name, TX_SENDER_FIELD));
            assert!(sender.required, "{}", spec.name);
            assert_eq!(sender.kind, ParamKind::Pubkey, "{}", spec.name);
        }
    }

    #[test]
    fn test_route_fields_are_declared() {
        for spec in ActionCatalog::builtin().iter() {
            for route in spec.routes() {
                for field in route.fields() {
                    assert!(
                        spec.param_spec(field).is_some(),
                        "{} references undeclared field '{}'",
                        spec.name,
                        field
                    );
                }
            }
        }
    }

    #[test]
    fn test_optional_fields_are_branch_requirements() {
        // A route must never read an optional field unless its branch requires it.
        for spec in ActionCatalog::builtin().iter() {
            if let crate::domains::actions::schema::RouteSpec::Switch { branches, .. } = &spec.route
            {
                for branch in branches {
                    for field in branch.route.fields() {
                        let param = spec.param_spec(field).unwrap();
                        assert!(
                            param.required || branch.requires.contains(&field),
                            "{} branch '{}' reads optional '{}'",
                            spec.name,
                            branch.value,
                            field
                        );
                    }
                }
            } else {
                for field in spec.routes()[0].fields() {
                    assert!(spec.param_spec(field).unwrap().required, "{}", spec.name);
                }
            }
        }
    }

    #[test]
    fn test_amount_mode_fields_are_choices() {
        for spec in ActionCatalog::builtin().iter() {
            for route in spec.routes() {
                for query in &route.query {
                    if let QueryParam::AmountByMode { mode_field, .. } = query {
                        let param = spec.param_spec(mode_field).unwrap();
                        assert!(matches!(param.kind, ParamKind::Choice(_)), "{}", spec.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pubkey_examples_are_plausible() {
        for spec in ActionCatalog::builtin().iter() {
            for param in spec.params.iter().filter(|p| p.kind == ParamKind::Pubkey) {
                for example in param.examples {
                    assert!(
                        is_plausible_pubkey(example),
                        "{}.{} example {}",
                        spec.name,
                        param.name,
                        example
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_action_has_suggestions() {
        for spec in ActionCatalog::builtin().iter() {
            assert!(!spec.suggestions.is_empty(), "{}", spec.name);
            assert!(!spec.description.is_empty(), "{}", spec.name);
        }
    }

    #[test]
    fn test_select_subset_keeps_catalog_order() {
        let catalog = ActionCatalog::builtin()
            .select(&["kamino_withdraw", "drift_perps_open"])
            .unwrap();
        assert_eq!(catalog.names(), vec!["drift_perps_open", "kamino_withdraw"]);
    }

    #[test]
    fn test_select_unknown_name() {
        let err = ActionCatalog::builtin()
            .select(&["orca_swap".to_string()])
            .unwrap_err();
        assert!(matches!(err, ActionError::UnknownAction(name) if name == "orca_swap"));
    }

    #[test]
    fn test_select_empty_keeps_everything() {
        let empty: [&str; 0] = [];
        let catalog = ActionCatalog::builtin().select(&empty).unwrap();
        assert_eq!(catalog.len(), 33);
    }

    #[test]
    fn test_swap_carries_provider_wording() {
        let catalog = ActionCatalog::builtin();
        let swap = catalog.get("jupiter_swap").unwrap();
        assert_eq!(swap.description, "Execute a token swap on Jupiter via Dialect Blink.");
        assert_eq!(
            swap.suggestions,
            &[
                "Swap 0.1 SOL for DARK tokens",
                "Exchange USDC for SOL using my wallet address",
            ]
        );
        assert_eq!(swap.param_spec("token_out").unwrap().examples, &["DARK", "SOL"]);
    }
}
