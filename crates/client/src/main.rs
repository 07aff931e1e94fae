//! `emmis-validate` -- run one field through the rule service.
//!
//! Reads `{"field": {...}, "sessionData": {...}}` from stdin, posts it to
//! the rule endpoint and prints the verification outcome as JSON.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                 | Description                    |
//! |----------------------|----------|-------------------------|--------------------------------|
//! | `EMMIS_BASE_URL`     | no       | `http://localhost:8080` | Portal origin                  |
//! | `VALIDATION_API_URL` | no       | --                      | Full rule endpoint URL override |

use std::io::Read;

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emmis_client::{ClientConfig, ValidationClient};
use emmis_core::Field;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FieldRequest {
    field: Field,
    #[serde(default)]
    session_data: Map<String, Value>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emmis_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    let client = ValidationClient::from_config(&config);
    tracing::info!(url = %client.url(), "Loaded client configuration");

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read request from stdin")?;
    let request: FieldRequest =
        serde_json::from_str(&raw).context("stdin is not a valid field request")?;

    let outcome = client
        .verify_field(&request.field, request.session_data)
        .await
        .with_context(|| format!("validation call to {} failed", client.url()))?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
