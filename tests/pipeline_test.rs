//! End-to-end tool calls against a mock Blink API.

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blink_actions_mcp_server::core::config::{BlinkConfig, DEFAULT_BIN_UUID};
use blink_actions_mcp_server::domains::actions::{ActionCatalog, ActionPipeline};
use blink_actions_mcp_server::{Config, McpServer};

const SENDER: &str = "C7GCggFP3464XJK4DudqkSkMjQSeKbNa9SMTf26tPQ5E";
const CLIENT_KEY: &str = "integration-client-key";
const TRANSACTION: &str = "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA+/=";

fn blink_config(server: &MockServer) -> BlinkConfig {
    BlinkConfig {
        client_key: Some(CLIENT_KEY.to_string()),
        host_template: format!("{}/{{provider}}", server.uri()),
        timeout_secs: 1,
        ..BlinkConfig::default()
    }
}

fn args(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().unwrap()
}

async fn run(server: &MockServer, action: &str, arguments: Value) -> Value {
    let catalog = ActionCatalog::builtin();
    let spec = catalog.get(action).unwrap();
    let pipeline = ActionPipeline::from_config(&blink_config(server)).unwrap();
    let result = pipeline.execute(spec, &args(arguments)).await;
    serde_json::to_value(&result).unwrap()
}

#[tokio::test]
async fn test_swap_success_preserves_transaction() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/jupiter/swap/SOL-USDC/1"))
        .and(query_param("_bin", DEFAULT_BIN_UUID))
        .and(header("X-Blink-Client-Key", CLIENT_KEY))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"type": "transaction", "account": SENDER})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction": TRANSACTION,
            "message": "Swap 1 SOL for USDC",
            "computeUnits": 120000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = run(
        &server,
        "jupiter_swap",
        json!({
            "token_in": "SOL",
            "token_out": "USDC",
            "amount": 1,
            "tx_sender_pubkey": SENDER
        }),
    )
    .await;

    assert_eq!(
        result,
        json!({
            "success": true,
            "result": {
                "transaction": TRANSACTION,
                "message": "Swap 1 SOL for USDC",
                "metadata": { "computeUnits": 120000 }
            }
        })
    );
}

#[tokio::test]
async fn test_kamino_percentage_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/kamino/lending/reserve/DxXdAyU3kCjnyggvHmY5nAwg5cRbbmdyX3npfDMjjMek/Ga4rZytCpq1unD4DbEJ5bkHeUz9g3oh9AAFEi6vSauXp",
        ))
        .and(query_param("percentage", "50"))
        .and(query_param("_bin", DEFAULT_BIN_UUID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction": TRANSACTION
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = run(
        &server,
        "kamino_deposit",
        json!({
            "market": "DxXdAyU3kCjnyggvHmY5nAwg5cRbbmdyX3npfDMjjMek",
            "reserve": "Ga4rZytCpq1unD4DbEJ5bkHeUz9g3oh9AAFEi6vSauXp",
            "amount_type": "percentage",
            "amount": 50,
            "tx_sender_pubkey": SENDER
        }),
    )
    .await;

    assert_eq!(result["success"], json!(true));
    assert_eq!(result["result"]["transaction"], json!(TRANSACTION));
    assert!(result["result"].get("metadata").is_none());
}

#[tokio::test]
async fn test_drift_open_uses_remote_field_names() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drift/perps/SOL-PERP/open"))
        .and(query_param("positionType", "long"))
        .and(query_param("payingToken", "USDC"))
        .and(query_param("amount", "25"))
        .and(query_param("leverage", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction": TRANSACTION
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = run(
        &server,
        "drift_perps_open",
        json!({
            "perp_token": "SOL",
            "position_type": "long",
            "paying_token": "USDC",
            "amount": 25,
            "leverage": 10,
            "tx_sender_pubkey": SENDER
        }),
    )
    .await;

    assert_eq!(result["success"], json!(true));
}

#[tokio::test]
async fn test_client_error_is_remote_error() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Invalid amount"
        })))
        .mount(&server)
        .await;

    let result = run(
        &server,
        "jupiter_swap",
        json!({
            "token_in": "SOL",
            "token_out": "USDC",
            "amount": 1,
            "tx_sender_pubkey": SENDER
        }),
    )
    .await;

    assert_eq!(
        result,
        json!({
            "success": false,
            "error": { "kind": "remote_error", "message": "Invalid amount", "status": 400 }
        })
    );
}

#[tokio::test]
async fn test_server_error_is_remote_error() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Internal failure"
        })))
        .mount(&server)
        .await;

    let result = run(
        &server,
        "jupiter_swap",
        json!({
            "token_in": "SOL",
            "token_out": "USDC",
            "amount": 1,
            "tx_sender_pubkey": SENDER
        }),
    )
    .await;

    assert_eq!(result["error"]["kind"], json!("remote_error"));
    assert_eq!(result["error"]["status"], json!(500));
    assert_eq!(result["error"]["message"], json!("Internal failure"));
}

#[tokio::test]
async fn test_slow_remote_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "transaction": TRANSACTION }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let result = run(
        &server,
        "jupiter_swap",
        json!({
            "token_in": "SOL",
            "token_out": "USDC",
            "amount": 1,
            "tx_sender_pubkey": SENDER
        }),
    )
    .await;

    assert_eq!(result["success"], json!(false));
    assert_eq!(result["error"]["kind"], json!("transport_error"));
    assert!(result["error"].get("status").is_none());
}

#[tokio::test]
async fn test_missing_sender_never_reaches_remote() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = run(
        &server,
        "jupiter_swap",
        json!({ "token_in": "SOL", "token_out": "USDC", "amount": 1 }),
    )
    .await;

    assert_eq!(result["error"]["kind"], json!("validation_error"));
    assert!(
        result["error"]["message"]
            .as_str()
            .unwrap()
            .contains("tx_sender_pubkey")
    );
}

#[tokio::test]
async fn test_server_registry_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/lulo/api/actions/withdraw/USDC/100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction": TRANSACTION,
            "message": "Withdrawal ready"
        })))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.blink = blink_config(&server);
    config.actions.enabled = vec!["lulo_withdraw".to_string()];
    assert!(config.validate().is_ok());

    let mcp = McpServer::new(config).unwrap();
    let registry = mcp.registry();
    assert_eq!(registry.tool_names(), vec!["lulo_withdraw"]);

    let call = registry
        .call_tool(
            "lulo_withdraw",
            json!({ "symbol": "USDC", "amount": 100, "tx_sender_pubkey": SENDER }),
        )
        .await
        .unwrap();
    assert_eq!(call.is_error, Some(false));
    let structured = call.structured_content.unwrap();
    assert_eq!(structured["result"]["message"], json!("Withdrawal ready"));

    assert!(registry.call_tool("kamino_deposit", json!({})).await.is_err());
}
