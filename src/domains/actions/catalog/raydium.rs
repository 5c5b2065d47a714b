//! Raydium liquidity, concentrated positions and RAY staking.

use crate::domains::actions::schema::{ActionSpec, Bounds, ParamSpec, Route};

const PROVIDER: &str = "raydium";

fn pool_id(description: &'static str) -> ParamSpec {
    ParamSpec::pubkey("pool_id", description)
        .examples(&["58oQChx4yWmvKdwLLZzBi4ChoCc2fqCUWBkwMihLYQo2"])
}

fn positive(name: &'static str, description: &'static str, examples: &'static [&'static str]) -> ParamSpec {
    ParamSpec::number(name, description, Bounds::POSITIVE).examples(examples)
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec::new(
            "raydium_add_liquidity",
            "Raydium Add Liquidity",
            PROVIDER,
            "Add liquidity to a Raydium pool.",
        )
        .param(pool_id("Pool ID for the Raydium liquidity pool"))
        .param(positive("amount_a", "Amount of token A to add", &["10", "100", "1000"]))
        .param(positive("amount_b", "Amount of token B to add", &["10", "100", "1000"]))
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/liquidity/add/{pool_id}")
                .field("amountA", "amount_a")
                .field("amountB", "amount_b"),
        )
        .suggestions(&["Add liquidity to Raydium pool", "Add 100 USDC and 10 SOL to Raydium pool"]),
        ActionSpec::new(
            "raydium_create_position",
            "Raydium Create Position",
            PROVIDER,
            "Create a position with a custom price range in a Raydium concentrated liquidity pool.",
        )
        .param(pool_id("Pool ID for the Raydium concentrated liquidity pool"))
        .param(positive("price_lower", "Lower price bound for the position", &["10", "100", "1000"]))
        .param(positive("price_upper", "Upper price bound for the position", &["20", "200", "2000"]))
        .param(positive("amount_a", "Amount of token A to add", &["10", "100", "1000"]))
        .param(positive("amount_b", "Amount of token B to add", &["10", "100", "1000"]))
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/clmm/create-position/{pool_id}")
                .field("priceLower", "price_lower")
                .field("priceUpper", "price_upper")
                .field("amountA", "amount_a")
                .field("amountB", "amount_b"),
        )
        .suggestions(&[
            "Create a position in Raydium concentrated liquidity pool",
            "Create a position with price range 10-20 USDC for SOL-USDC pool",
        ]),
        ActionSpec::new(
            "raydium_staking",
            "Raydium Staking",
            PROVIDER,
            "Stake or unstake tokens in a Raydium staking pool.",
        )
        .param(ParamSpec::choice(
            "action",
            "Action to perform (stake or unstake)",
            &["stake", "unstake"],
        ))
        .param(pool_id("Pool ID for the Raydium staking pool"))
        .param(positive("amount", "Amount to stake or unstake", &["100", "500", "1000"]))
        .param(ParamSpec::tx_sender())
        .route(Route::new("/staking/{action}/{pool_id}/{amount}"))
        .suggestions(&[
            "Stake 100 tokens in Raydium pool",
            "Unstake 500 tokens from Raydium staking pool",
        ]),
        ActionSpec::new("raydium_staking_stake", "Raydium Staking Stake", PROVIDER, "Stake RAY tokens on Raydium.")
            .param(positive("amount", "Amount of RAY to stake", &["25", "100", "1000"]))
            .param(ParamSpec::tx_sender())
            .route(Route::new("/staking").literal("action", "stake").field("amount", "amount"))
            .suggestions(&["Stake 25 RAY on Raydium", "Stake 100 RAY tokens"]),
        ActionSpec::new(
            "raydium_staking_unstake",
            "Raydium Staking Unstake",
            PROVIDER,
            "Unstake RAY tokens from Raydium.",
        )
        .param(positive("amount", "Amount of RAY to unstake", &["25", "100", "1000"]))
        .param(ParamSpec::tx_sender())
        .route(Route::new("/staking").literal("action", "unstake").field("amount", "amount"))
        .suggestions(&["Unstake 25 RAY from Raydium", "Unstake 100 RAY tokens"]),
        ActionSpec::new(
            "raydium_staking_claim",
            "Raydium Staking Claim",
            PROVIDER,
            "Claim RAY staking rewards on Raydium.",
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/staking").literal("action", "claim"))
        .suggestions(&["Claim my RAY staking rewards", "Claim rewards from Raydium staking"]),
    ]
}
