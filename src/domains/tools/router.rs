//! Tool Router - builds the rmcp ToolRouter from the action catalog.
//!
//! One route per enabled action; each action knows how to create its own
//! route through [`ActionTool::create_route`].

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::ActionTool;
use crate::domains::actions::{ActionCatalog, ActionPipeline};

/// Build the tool router with every action in `catalog`.
pub fn build_tool_router<S>(catalog: &ActionCatalog, pipeline: &ActionPipeline) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    catalog.iter().fold(ToolRouter::new(), |router, spec| {
        router.with_route(ActionTool::create_route(spec.clone(), pipeline.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::BlinkConfig;
    use std::sync::Arc;

    struct TestServer {}

    fn test_pipeline() -> ActionPipeline {
        ActionPipeline::from_config(&BlinkConfig::default()).unwrap()
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> =
            build_tool_router(&ActionCatalog::builtin(), &test_pipeline());
        let tools = router.list_all();
        assert_eq!(tools.len(), 33);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"drift_perps_open"));
        assert!(names.contains(&"jupiter_swap"));
        assert!(names.contains(&"kamino_deposit"));
        assert!(names.contains(&"lulo_withdraw"));
        assert!(names.contains(&"marginfi_supply"));
        assert!(names.contains(&"meteora_launch_token"));
        assert!(names.contains(&"raydium_staking_claim"));
        assert!(names.contains(&"save_reserves_withdraw"));
    }

    #[test]
    fn test_build_router_for_single_action() {
        let catalog = ActionCatalog::builtin().select(&["kamino_deposit"]).unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(&catalog, &test_pipeline());
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "kamino_deposit");
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let catalog = Arc::new(ActionCatalog::builtin());
        let pipeline = test_pipeline();
        let registry = ToolRegistry::new(catalog.clone(), pipeline.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&catalog, &pipeline);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
