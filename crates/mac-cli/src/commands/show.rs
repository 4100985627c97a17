use crate::config::Config;
use anyhow::{Context, Result};
use ieee_mac::MacAddress;
use std::io::Write;

pub fn handle(out: &mut impl Write, config: &Config, mac: &str) -> Result<()> {
    let mac = MacAddress::parse(mac).context("Cannot show address")?;

    writeln!(out, "Input mac address in {} format", mac.notation())?;
    for notation in &config.notations {
        writeln!(
            out,
            "{:<width$} {}",
            notation.as_str(),
            config.styled(mac.to_notation(*notation)),
            width = config.label_width
        )?;
    }

    Ok(())
}
