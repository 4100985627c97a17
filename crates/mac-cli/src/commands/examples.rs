use crate::config::Config;
use anyhow::Result;
use std::io::Write;

pub fn handle(out: &mut impl Write, config: &Config) -> Result<()> {
    for notation in &config.notations {
        writeln!(
            out,
            "{:<width$} {}",
            notation.as_str(),
            notation.example(),
            width = config.label_width
        )?;
    }
    Ok(())
}
