//! Rule inspection command

use super::load_settings;
use anyhow::Result;

pub fn run(config: Option<&str>) -> Result<()> {
    let settings = load_settings(config)?;
    print!("{}", settings.rules.to_toml_string()?);
    Ok(())
}
