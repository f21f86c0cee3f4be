mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_reports_starting_before_first_spawn() -> Result<()> {
    let (base, _gateway) = common::spawn_wrapper(common::test_config(18789)).await?;

    let resp = reqwest::get(format!("{base}/health")).await?;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = resp.json().await?;
    assert_eq!(body["status"], "starting");
    assert_eq!(body["gateway"], "initializing");
    assert!(body.get("port").is_none());
    Ok(())
}

#[tokio::test]
async fn health_reports_ok_once_gateway_is_ready() -> Result<()> {
    let (base, gateway) = common::spawn_wrapper(common::test_config(18789)).await?;

    let generation = gateway.begin_spawn(Some(4242));
    assert!(gateway.mark_ready(generation));

    let resp = reqwest::get(format!("{base}/health")).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await?;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["gateway"], "running");
    assert_eq!(body["port"], 18789);
    Ok(())
}

#[tokio::test]
async fn health_clears_immediately_after_gateway_exit() -> Result<()> {
    let (base, gateway) = common::spawn_wrapper(common::test_config(18789)).await?;

    let generation = gateway.begin_spawn(Some(4242));
    assert!(gateway.mark_ready(generation));
    gateway.mark_exited(generation);

    let resp = reqwest::get(format!("{base}/health")).await?;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = resp.json().await?;
    assert_eq!(body["status"], "starting");
    Ok(())
}

#[tokio::test]
async fn setup_page_mentions_the_gateway_port() -> Result<()> {
    let (base, _gateway) = common::spawn_wrapper(common::test_config(18789)).await?;

    let resp = reqwest::get(format!("{base}/setup")).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = resp.text().await?;
    assert!(body.contains("18789"));
    assert!(body.contains("OpenClaw Setup"));
    Ok(())
}
