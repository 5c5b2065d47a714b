//! Drift perpetuals and vaults.

use crate::domains::actions::schema::{ActionSpec, Bounds, ParamSpec, Route};

const PROVIDER: &str = "drift";

const VAULT_TYPES: &[&str] = &["strategy-vaults", "insurance-fund-vaults"];

fn perp_token() -> ParamSpec {
    ParamSpec::text("perp_token", "Token market for the perpetual").examples(&["SOL"])
}

fn vault_type() -> ParamSpec {
    ParamSpec::choice(
        "vault_type",
        "Vault type (strategy-vaults or insurance-fund-vaults)",
        VAULT_TYPES,
    )
}

fn vault_id() -> ParamSpec {
    ParamSpec::pubkey("vault_id", "Identifier for a specific vault")
        .examples(&["FbaXoNjvii97vwqM6m6rgdEarekTJ3ZAdsc1JH5Ym9Gb"])
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec::new(
            "drift_perps_open",
            "Drift Perps Open",
            PROVIDER,
            "Open a long or short position in Drift Perps DEX with the given leverage.",
        )
        .param(perp_token())
        .param(ParamSpec::choice(
            "position_type",
            "Specifies which position is to be opened",
            &["long", "short"],
        ))
        .param(ParamSpec::text("paying_token", "Token to be used to open position").examples(&["USDC"]))
        .param(
            ParamSpec::number("amount", "Amount to be deposited", Bounds::POSITIVE)
                .examples(&["25", "100", "1000"]),
        )
        .param(
            ParamSpec::number("leverage", "Leverage multiplier to be used", Bounds::POSITIVE)
                .examples(&["10", "20", "50"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/perps/{perp_token}-PERP/open")
                .field("positionType", "position_type")
                .field("payingToken", "paying_token")
                .field("amount", "amount")
                .field("leverage", "leverage"),
        )
        .suggestions(&[
            "Open a long SOL position with 10x leverage using 25 USDC",
            "Open a short SOL position with 20x leverage using 100 USDC",
        ]),
        ActionSpec::new(
            "drift_perps_close",
            "Drift Perps Close",
            PROVIDER,
            "Close an open long or short position in Drift Perps DEX.",
        )
        .param(perp_token())
        .param(
            ParamSpec::number("amount", "Amount to close", Bounds::POSITIVE)
                .examples(&["25", "100", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/perps/{perp_token}-PERP/close").field("amount", "amount"))
        .suggestions(&[
            "Close my SOL position with 25 units",
            "Close my SOL position with 100 units",
        ]),
        ActionSpec::new(
            "drift_vaults",
            "Drift Vaults",
            PROVIDER,
            "Deposit into or withdraw from a Drift vault.",
        )
        .param(ParamSpec::choice(
            "action",
            "Action to perform (deposit or withdraw)",
            &["deposit", "withdraw"],
        ))
        .param(ParamSpec::pubkey("vault_id", "Vault identifier").examples(&[
            "DxXdAyU3kCjnyggvHmY5nAwg5cRbbmdyX3npfDMjjMek",
        ]))
        .param(
            ParamSpec::number("amount", "Amount to deposit or withdraw", Bounds::POSITIVE)
                .examples(&["100", "500", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/vaults/{vault_id}/{action}/{amount}"))
        .suggestions(&[
            "Deposit 100 USDC to Drift Vault",
            "Withdraw 500 USDC from Drift Vault",
        ]),
        ActionSpec::new(
            "drift_vaults_deposit",
            "Drift Vaults Deposit",
            PROVIDER,
            "Deposit into a Drift strategy vault or insurance fund vault.",
        )
        .param(vault_type())
        .param(vault_id())
        .param(
            ParamSpec::number("amount", "Amount to be deposited in the vault", Bounds::POSITIVE)
                .examples(&["25", "100", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/vaults/{vault_type}/{vault_id}")
                .literal("action", "deposit")
                .field("amount", "amount"),
        )
        .suggestions(&[
            "Deposit 25 tokens in Drift strategy vault",
            "Deposit 100 tokens in Drift insurance fund vault",
        ]),
        ActionSpec::new(
            "drift_vaults_withdraw",
            "Drift Vaults Withdraw",
            PROVIDER,
            "Withdraw from a Drift strategy vault or insurance fund vault.",
        )
        .param(vault_type())
        .param(vault_id())
        .param(
            ParamSpec::number("amount", "Amount to be withdrawn from the vault", Bounds::POSITIVE)
                .examples(&["25", "100", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/vaults/{vault_type}/{vault_id}")
                .literal("action", "withdraw")
                .field("amount", "amount"),
        )
        .suggestions(&[
            "Withdraw 25 tokens from Drift strategy vault",
            "Withdraw 100 tokens from Drift insurance fund vault",
        ]),
    ]
}
