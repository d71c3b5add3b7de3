//! `apim process [path]` – mark records in a JSON array as processed.

use anyhow::{Context, Result};
use apim_core::records;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub fn run_process(path: Option<&Path>, pretty: bool) -> Result<()> {
    let input = read_input(path)?;
    let value: Value = serde_json::from_str(&input).context("input is not valid JSON")?;
    let marked = records::mark_processed_json(&value)?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&marked)?
    } else {
        serde_json::to_string(&marked)?
    };
    println!("{rendered}");
    Ok(())
}

/// Reads the file, or stdin when the path is missing or "-".
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}
