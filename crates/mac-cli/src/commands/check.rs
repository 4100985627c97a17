use anyhow::Result;
use ieee_mac::is_mac;
use std::io::Write;
use tracing::debug;

/// Print `valid` or `invalid` for each candidate, true when all are valid
pub fn handle(out: &mut impl Write, candidates: &[String]) -> Result<bool> {
    let mut all_valid = true;

    for candidate in candidates {
        let valid = is_mac(candidate);
        if !valid {
            debug!("{:?} is not a mac address", candidate);
            all_valid = false;
        }
        writeln!(
            out,
            "{:<20} {}",
            candidate,
            if valid { "valid" } else { "invalid" }
        )?;
    }

    Ok(all_valid)
}
