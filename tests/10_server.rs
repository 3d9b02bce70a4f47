mod common;

use std::time::Duration;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn binary_serves_health_and_rpc() -> Result<()> {
    let server = common::TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(20)).await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", server.base_url)).send().await?;
    let status = res.status();
    let body: Value = res.json().await?;
    assert!(
        status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected /health status {}",
        status
    );
    assert_eq!(body["success"], status == StatusCode::OK);

    let res = client.get(format!("{}/rpc/healthcheck", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["data"]["status"], "ok");

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn unknown_procedure_is_not_found() -> Result<()> {
    let server = common::TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(20)).await?;

    let res = reqwest::Client::new()
        .post(format!("{}/rpc/deleteProject", server.base_url))
        .json(&serde_json::json!({ "id": 1 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
