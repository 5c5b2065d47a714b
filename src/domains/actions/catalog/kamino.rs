//! Kamino lending reserves.

use crate::domains::actions::schema::{ActionSpec, AmountMode, Bounds, ParamSpec, Route};

const PROVIDER: &str = "kamino";

fn reserve_action(
    name: &'static str,
    title: &'static str,
    description: &'static str,
    amount_description: &'static str,
    path: &'static str,
) -> ActionSpec {
    ActionSpec::new(name, title, PROVIDER, description)
        .param(
            ParamSpec::pubkey("market", "Kamino lending market address")
                .examples(&["DxXdAyU3kCjnyggvHmY5nAwg5cRbbmdyX3npfDMjjMek"]),
        )
        .param(
            ParamSpec::pubkey("reserve", "Reserve address within the market")
                .examples(&["Ga4rZytCpq1unD4DbEJ5bkHeUz9g3oh9AAFEi6vSauXp"]),
        )
        .param(ParamSpec::choice(
            "amount_type",
            "Type of amount value (percentage or absolute amount)",
            AmountMode::TOKENS,
        ))
        .param(
            ParamSpec::number("amount", amount_description, Bounds::POSITIVE)
                .examples(&["25", "50", "100"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new(path).amount_by_mode("amount_type", "amount"))
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        reserve_action(
            "kamino_deposit",
            "Kamino Deposit",
            "Deposit into a Kamino lending market reserve.",
            "Amount to deposit; a percentage in (0, 100] when amount_type is percentage",
            "/lending/reserve/{market}/{reserve}",
        )
        .suggestions(&["Deposit 25% into Kamino reserve", "Deposit into Kamino lending market"]),
        reserve_action(
            "kamino_withdraw",
            "Kamino Withdraw",
            "Withdraw from a Kamino lending market reserve.",
            "Amount to withdraw; a percentage in (0, 100] when amount_type is percentage",
            "/lending/reserve/{market}/{reserve}/withdraw",
        )
        .suggestions(&[
            "Withdraw 25% from Kamino reserve",
            "Withdraw from Kamino lending market",
        ]),
    ]
}
