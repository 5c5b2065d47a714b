//! Jupiter swaps, DAO and perpetuals.

use crate::domains::actions::schema::{ActionSpec, Branch, Bounds, ParamSpec, Route};

const PROVIDER: &str = "jupiter";

const SIDES: &[&str] = &["long", "short"];

/// Shared `position_type`, `paying_token` and `perp_token` parameters of the
/// position management actions.
fn position(spec: ActionSpec, position_description: &'static str) -> ActionSpec {
    spec.param(ParamSpec::choice("position_type", position_description, SIDES))
        .param(ParamSpec::text("paying_token", "Token used to open position").examples(&["USDC"]))
        .param(
            ParamSpec::text("perp_token", "Token market for the perpetual")
                .examples(&["SOL", "BTC"]),
        )
}

fn position_route(action: &'static str) -> Route {
    Route::new("/perps/{position_type}/{paying_token}-{perp_token}").literal("action", action)
}

fn amount(description: &'static str) -> ParamSpec {
    ParamSpec::number("amount", description, Bounds::POSITIVE).examples(&["25", "100", "1000"])
}

pub fn actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec::new(
            "jupiter_swap",
            "Jupiter Swap",
            PROVIDER,
            "Execute a token swap on Jupiter via Dialect Blink.",
        )
        .param(
            ParamSpec::text("token_in", "Input token symbol (e.g., SOL)").examples(&["SOL", "USDC"]),
        )
        .param(
            ParamSpec::text("token_out", "Output token symbol (e.g., DARK)").examples(&["DARK", "SOL"]),
        )
        .param(
            ParamSpec::number("amount", "Amount of token_in to swap", Bounds::POSITIVE)
                .examples(&["0.1", "1.0", "10.0"]),
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/swap/{token_in}-{token_out}/{amount}"))
        .suggestions(&[
            "Swap 0.1 SOL for DARK tokens",
            "Exchange USDC for SOL using my wallet address",
        ]),
        ActionSpec::new(
            "jupiter_dao",
            "Jupiter DAO",
            PROVIDER,
            "Vote on proposals, claim rewards or stake tokens in Jupiter DAO.",
        )
        .param(ParamSpec::choice(
            "action",
            "DAO action to perform (vote, claim, or stake)",
            &["vote", "claim", "stake"],
        ))
        .param(
            ParamSpec::text("proposal_id", "Proposal ID (required for vote action)")
                .optional()
                .examples(&["123", "456"]),
        )
        .param(
            ParamSpec::choice(
                "vote_type",
                "Vote type (required for vote action)",
                &["for", "against"],
            )
            .optional(),
        )
        .param(
            ParamSpec::number(
                "amount",
                "Amount to stake (required for stake action)",
                Bounds::POSITIVE,
            )
            .optional()
            .examples(&["100", "500", "1000"]),
        )
        .param(ParamSpec::tx_sender())
        .switch(
            "action",
            vec![
                Branch::new("vote", Route::new("/dao/vote/{proposal_id}/{vote_type}"))
                    .requires(&["proposal_id", "vote_type"]),
                Branch::new("claim", Route::new("/dao/claim")),
                Branch::new("stake", Route::new("/dao/stake/{amount}")).requires(&["amount"]),
            ],
        )
        .suggestions(&[
            "Vote for proposal 123 on Jupiter DAO",
            "Claim my Jupiter DAO rewards",
            "Stake 1000 tokens in Jupiter DAO",
        ]),
        ActionSpec::new(
            "jupiter_dao_claim",
            "Jupiter DAO Claim",
            PROVIDER,
            "Claim ASR rewards from Jupiter DAO.",
        )
        .param(ParamSpec::tx_sender())
        .route(Route::new("/dao/asr").literal("action", "claim"))
        .suggestions(&[
            "Claim my ASR rewards from Jupiter DAO",
            "Claim ASR rewards from Jupiter DAO",
        ]),
        ActionSpec::new(
            "jupiter_dao_stake",
            "Jupiter DAO Stake",
            PROVIDER,
            "Stake JUP tokens in Jupiter DAO.",
        )
        .param(amount("Amount of JUP tokens to stake"))
        .param(ParamSpec::tx_sender())
        .route(Route::new("/dao").literal("action", "stake").field("amount", "amount"))
        .suggestions(&[
            "Stake 25 JUP tokens in Jupiter DAO",
            "Stake 1000 JUP tokens in Jupiter DAO",
        ]),
        ActionSpec::new(
            "jupiter_perps",
            "Jupiter Perps",
            PROVIDER,
            "Open a perpetual position on a Jupiter market.",
        )
        .param(
            ParamSpec::text("market", "Market identifier (e.g., SOL-PERP)")
                .examples(&["SOL-PERP", "BTC-PERP"]),
        )
        .param(ParamSpec::choice("side", "Position side (long or short)", SIDES))
        .param(
            ParamSpec::number("size", "Size of the position in USD", Bounds::POSITIVE)
                .examples(&["100", "500", "1000"]),
        )
        .param(
            ParamSpec::number("leverage", "Leverage to use (e.g., 5 for 5x)", Bounds::at_least(1.0))
                .examples(&["1", "5", "10"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            Route::new("/perps/{market}/{side}")
                .field("size", "size")
                .field("leverage", "leverage"),
        )
        .suggestions(&[
            "Open a 5x long position on SOL-PERP with 100 USD",
            "Create a short position on BTC-PERP with 10x leverage",
        ]),
        position(
            ActionSpec::new(
                "jupiter_perps_open",
                "Jupiter Perps Open",
                PROVIDER,
                "Open a long or short position in Jupiter Perps DEX with the given leverage.",
            ),
            "Position type to open (long or short)",
        )
        .param(amount("Amount to be deposited"))
        .param(
            ParamSpec::number(
                "leverage",
                "Leverage multiplier to be used",
                Bounds::greater_than(1.0),
            )
            .examples(&["10", "20", "50"]),
        )
        .param(ParamSpec::tx_sender())
        .route(
            position_route("open")
                .field("amount", "amount")
                .field("leverage", "leverage"),
        )
        .suggestions(&[
            "Open a long position in SOL with 25 USDC at 10x leverage",
            "Create a short position in BTC with 100 USDC at 5x leverage",
        ]),
        position(
            ActionSpec::new(
                "jupiter_perps_close",
                "Jupiter Perps Close",
                PROVIDER,
                "Close a long or short position in Jupiter Perps DEX.",
            ),
            "Position type to close (long or short)",
        )
        .param(amount("Amount to close"))
        .param(ParamSpec::tx_sender())
        .route(position_route("close").field("amount", "amount"))
        .suggestions(&[
            "Close a long position in SOL with 25 USDC",
            "Close a short position in BTC with 100 USDC",
        ]),
        position(
            ActionSpec::new(
                "jupiter_perps_add_collateral",
                "Jupiter Perps Add Collateral",
                PROVIDER,
                "Add collateral to a long or short position in Jupiter Perps DEX.",
            ),
            "Position type to add collateral to (long or short)",
        )
        .param(amount("Amount of collateral to add"))
        .param(ParamSpec::tx_sender())
        .route(position_route("add-collateral").field("amount", "amount"))
        .suggestions(&[
            "Add 25 USDC collateral to a long position in SOL",
            "Add 100 USDC collateral to a short position in BTC",
        ]),
        position(
            ActionSpec::new(
                "jupiter_perps_remove_collateral",
                "Jupiter Perps Remove Collateral",
                PROVIDER,
                "Remove collateral from a long or short position in Jupiter Perps DEX.",
            ),
            "Position type to remove collateral from (long or short)",
        )
        .param(amount("Amount of collateral to remove"))
        .param(ParamSpec::tx_sender())
        .route(position_route("remove-collateral").field("amount", "amount"))
        .suggestions(&[
            "Remove 25 USDC collateral from a long position in SOL",
            "Remove 100 USDC collateral from a short position in BTC",
        ]),
        position(
            ActionSpec::new(
                "jupiter_perps_take_profit",
                "Jupiter Perps Take Profit",
                PROVIDER,
                "Create or edit a take profit order on a position in Jupiter Perps DEX.",
            ),
            "Position type to set take profit for (long or short)",
        )
        .param(
            ParamSpec::number(
                "price",
                "Price target at which the take profit strategy will execute",
                Bounds::POSITIVE,
            )
            .examples(&["136", "200", "50000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(position_route("tp").field("price", "price"))
        .suggestions(&[
            "Set take profit at $136 for a long position in SOL",
            "Create a take profit strategy at $50,000 for a short position in BTC",
        ]),
        position(
            ActionSpec::new(
                "jupiter_perps_stop_loss",
                "Jupiter Perps Stop Loss",
                PROVIDER,
                "Create or edit a stop loss order on a position in Jupiter Perps DEX.",
            ),
            "Position type to set stop loss for (long or short)",
        )
        .param(
            ParamSpec::number(
                "price",
                "Price at which the stop loss will execute",
                Bounds::POSITIVE,
            )
            .examples(&["120", "150", "40000"]),
        )
        .param(ParamSpec::tx_sender())
        .route(position_route("sl").field("price", "price"))
        .suggestions(&[
            "Set a stop loss at $120 for a long position in SOL",
            "Create a stop loss at $40,000 for a short position in BTC",
        ]),
    ]
}
