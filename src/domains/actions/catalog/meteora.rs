//! Meteora DLMM pools and token launches.

use crate::domains::actions::schema::{ActionSpec, Bounds, ParamSpec, Route};

const PROVIDER: &str = "meteora";

fn dlmm_pool() -> ParamSpec {
    ParamSpec::pubkey("dlmm_pool", "DLMM pool address")
        .examples(&["5rCf1DM8LjKTw4YqhnoLcngyZYeNnQqztScTogYHAS6"])
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec::new(
            "meteora_add_liquidity",
            "Meteora Add Liquidity",
            PROVIDER,
            "Add liquidity to a Meteora DLMM pool.",
        )
        .param(dlmm_pool())
        .param(
            ParamSpec::number(
                "amount",
                "Amount of the base mint token to be deposited",
                Bounds::POSITIVE,
            )
            .examples(&["5", "10", "100"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/api/actions/dlmm/{dlmm_pool}/add-liquidity/{amount}"))
        .suggestions(&[
            "Add 5 tokens of liquidity to Meteora DLMM pool",
            "Add liquidity to Meteora pool 5rCf1DM8LjKTw4YqhnoLcngyZYeNnQqztScTogYHAS6",
        ]),
        ActionSpec::new(
            "meteora_remove_liquidity",
            "Meteora Remove Liquidity",
            PROVIDER,
            "Remove a share of your liquidity from a Meteora DLMM pool.",
        )
        .param(dlmm_pool())
        .param(
            ParamSpec::number(
                "amount",
                "Percentage of liquidity to be removed (e.g., 50 for 50%)",
                Bounds::PERCENTAGE,
            )
            .examples(&["25", "50", "100"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/api/actions/dlmm/{dlmm_pool}")
                .literal("action", "remove-liquidity")
                .field("amount", "amount"),
        )
        .suggestions(&[
            "Remove 50% of my liquidity from Meteora DLMM pool",
            "Remove liquidity from Meteora pool 5rCf1DM8LjKTw4YqhnoLcngyZYeNnQqztScTogYHAS6",
        ]),
        ActionSpec::new(
            "meteora_launch_token",
            "Meteora Launch Token",
            PROVIDER,
            "Create a new token pool on Meteora.",
        )
        .param(
            ParamSpec::pubkey("token_mint", "Token mint address to launch")
                .examples(&["EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"]),
        )
        .param(
            ParamSpec::pubkey("base_token_mint", "Base token mint address (e.g., USDC)")
                .examples(&["EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"]),
        )
        .param(
            ParamSpec::number("initial_price", "Initial price for the token", Bounds::POSITIVE)
                .examples(&["0.1", "1", "10"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/api/actions/launch-token")
                .field("tokenMint", "token_mint")
                .field("baseTokenMint", "base_token_mint")
                .field("initialPrice", "initial_price"),
        )
        .suggestions(&[
            "Launch my token on Meteora with initial price of 0.1 USDC",
            "Create a new token pool on Meteora",
        ]),
    ]
}
