//! `iconctl config` – show where the config lives and what is in effect.

use anyhow::Result;
use iconctl_core::config::{self, IconctlConfig};
use std::path::Path;

pub fn run_config(cfg: &IconctlConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
