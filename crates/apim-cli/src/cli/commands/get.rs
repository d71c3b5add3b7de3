//! `apim get <endpoint>` – fetch and print a JSON body.

use anyhow::{bail, Context, Result};
use apim_core::client::{ApiClient, RequestOptions};
use apim_core::config::ApimConfig;
use apim_core::records;
use serde_json::Value;

pub async fn run_get(
    cfg: &ApimConfig,
    endpoint: &str,
    base_url: Option<&str>,
    headers: &[String],
    process: bool,
    pretty: bool,
) -> Result<()> {
    let base = match base_url.or(cfg.base_url.as_deref()) {
        Some(base) => base.to_string(),
        None => bail!("no base URL: pass --base-url or set base_url in the config"),
    };
    validate_base_url(&base)?;

    let mut options = RequestOptions::from_config(cfg);
    for header in headers {
        let (name, value) = parse_header(header)?;
        options.headers.insert(name, value);
    }

    let client = ApiClient::with_options(base, options);
    let body = client
        .fetch(endpoint)
        .await
        .with_context(|| format!("GET {}{} failed", client.base_url(), endpoint))?;

    let output = if process {
        records::mark_processed_json(&body)?
    } else {
        body
    };
    print_json(&output, pretty)?;
    Ok(())
}

/// The client concatenates blindly, so catch obviously broken bases here.
fn validate_base_url(base: &str) -> Result<()> {
    let parsed = url::Url::parse(base).with_context(|| format!("invalid base URL: {}", base))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("unsupported base URL scheme: {}", other),
    }
}

/// Splits "Name: value" at the first colon.
fn parse_header(raw: &str) -> Result<(String, String)> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => bail!("invalid header {:?}, expected \"Name: value\"", raw),
    }
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
