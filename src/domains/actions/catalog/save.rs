//! Save protocol reserves.

use crate::domains::actions::schema::{ActionSpec, Bounds, ParamSpec, Route};

const PROVIDER: &str = "save";

fn reserve_action(
    name: &'static str,
    title: &'static str,
    description: &'static str,
    action: &'static str,
) -> ActionSpec {
    ActionSpec::new(name, title, PROVIDER, description)
        .param(
            ParamSpec::pubkey("reserve_address", "Reserve address identifier")
                .examples(&["8PbodeaosQP19SjYFx855UMqWxH2HynZLdBXmsrbac36"]),
        )
        .param(
            ParamSpec::pubkey("token_mint", "Token mint address")
                .examples(&["So11111111111111111111111111111111111111112"]),
        )
        .param(
            ParamSpec::number("amount", "Amount of tokens", Bounds::POSITIVE)
                .examples(&["25", "100", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/reserves")
                .literal("action", action)
                .field("reserveAddress", "reserve_address")
                .field("tokenMint", "token_mint")
                .field("amount", "amount"),
        )
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec::new(
            "save_reserves",
            "Save Reserves",
            PROVIDER,
            "Deposit into or withdraw from Save reserves.",
        )
        .param(ParamSpec::choice(
            "action",
            "Action to perform (deposit or withdraw)",
            &["deposit", "withdraw"],
        ))
        .param(ParamSpec::text("token", "Token symbol (e.g., USDC)").examples(&["USDC", "SOL"]))
        .param(
            ParamSpec::number("amount", "Amount to deposit or withdraw", Bounds::POSITIVE)
                .examples(&["100", "500", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/reserves/{token}/{action}/{amount}"))
        .suggestions(&[
            "Deposit 100 USDC to Save Reserves",
            "Withdraw 500 USDC from Save Reserves",
        ]),
        reserve_action(
            "save_reserves_deposit",
            "Save Reserves Deposit",
            "Deposit tokens into a Save Protocol reserve.",
            "deposit",
        )
        .suggestions(&[
            "Deposit 25 SOL into Save Protocol",
            "Deposit 100 tokens into Save Protocol reserve",
        ]),
        reserve_action(
            "save_reserves_withdraw",
            "Save Reserves Withdraw",
            "Withdraw tokens from a Save Protocol reserve.",
            "withdraw",
        )
        .suggestions(&[
            "Withdraw 25 SOL from Save Protocol",
            "Withdraw 100 tokens from Save Protocol reserve",
        ]),
    ]
}
