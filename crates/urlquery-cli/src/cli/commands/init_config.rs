//! `urlquery init-config` – write the default config file.

use anyhow::Result;
use urlquery_core::config;

pub fn run_init_config(force: bool) -> Result<()> {
    let path = config::config_path()?;
    config::write_default(&path, force)?;
    println!("wrote {}", path.display());
    Ok(())
}
