//! MarginFi lending pools.

use crate::domains::actions::schema::{ActionSpec, Bounds, ParamSpec, Route};

const PROVIDER: &str = "marginfi";

fn pool_action(
    name: &'static str,
    title: &'static str,
    description: &'static str,
    token_description: &'static str,
    path: &'static str,
) -> ActionSpec {
    ActionSpec::new(name, title, PROVIDER, description)
        .param(ParamSpec::text("token", token_description).examples(&["USDC", "SOL"]))
        .param(
            ParamSpec::number("amount", "Amount of the token", Bounds::POSITIVE)
                .examples(&["100", "500", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new(path))
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        pool_action(
            "marginfi_supply",
            "MarginFi Supply",
            "Supply tokens to a MarginFi lending pool.",
            "Token symbol to supply (e.g., USDC)",
            "/supply/{token}/{amount}",
        )
        .suggestions(&["Supply 100 USDC to MarginFi", "Supply 1 SOL to MarginFi lending pool"]),
        pool_action(
            "marginfi_withdraw",
            "MarginFi Withdraw",
            "Withdraw tokens from a MarginFi lending pool.",
            "Token symbol to withdraw (e.g., USDC)",
            "/withdraw/{token}/{amount}",
        )
        .suggestions(&[
            "Withdraw 100 USDC from MarginFi",
            "Withdraw 1 SOL from MarginFi lending pool",
        ]),
    ]
}
