//! Lulo lending.

use crate::domains::actions::schema::{ActionSpec, Bounds, ParamSpec, Route};

pub fn actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec::new(
            "lulo_withdraw",
            "Lulo Withdraw",
            "lulo",
            "Withdraw Solana-based tokens from a Lulo account.",
        )
        .param(
            ParamSpec::text("symbol", "Symbol of the token to withdraw (e.g., USDC)")
                .examples(&["USDC", "SOL"]),
        )
        .param(
            ParamSpec::number("amount", "Amount of the token to withdraw", Bounds::POSITIVE)
                .examples(&["100", "1", "10"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/api/actions/withdraw/{symbol}/{amount}"))
        .suggestions(&["Withdraw 100 USDC from Lulo", "Withdraw 1 SOL from my Lulo account"]),
    ]
}
