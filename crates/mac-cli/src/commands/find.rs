use crate::config::Config;
use anyhow::{Context, Result};
use ieee_mac::{find_addresses, MacAddress, Notation};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// One address found in the scanned text
#[derive(Debug, Serialize)]
struct Found {
    address: String,
    notation: Notation,
    octets: [u8; 6],
}

impl Found {
    fn new(config: &Config, mac: &MacAddress) -> Self {
        Self {
            address: config.styled(mac.to_string()),
            notation: mac.notation(),
            octets: mac.octets(),
        }
    }
}

pub fn handle(
    out: &mut impl Write,
    config: &Config,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    scan(out, config, &text, json)
}

fn scan(out: &mut impl Write, config: &Config, text: &str, json: bool) -> Result<()> {
    let found: Vec<Found> = find_addresses(text)
        .map(|mac| Found::new(config, &mac))
        .collect();
    info!("Found {} mac addresses", found.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &found)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in &found {
        writeln!(
            out,
            "{:<width$} {}",
            entry.notation.as_str(),
            entry.address,
            width = config.label_width
        )?;
    }
    Ok(())
}
