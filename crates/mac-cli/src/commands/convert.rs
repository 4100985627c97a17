use crate::config::Config;
use anyhow::{Context, Result};
use ieee_mac::{MacAddress, Notation};
use std::io::Write;

pub fn handle(out: &mut impl Write, config: &Config, mac: &str, to: Notation) -> Result<()> {
    let mac = MacAddress::parse(mac).context("Cannot convert address")?;
    writeln!(out, "{}", config.styled(mac.to_notation(to)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        let mut out = Vec::new();
        handle(&mut out, &Config::default(), "00:01:02:03:04:05", Notation::Cisco).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0001.0203.0405\n");
    }

    #[test]
    fn test_convert_invalid() {
        let mut out = Vec::new();
        let err = handle(&mut out, &Config::default(), "", Notation::Unix).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid mac address: None"));
        assert!(out.is_empty());
    }
}
