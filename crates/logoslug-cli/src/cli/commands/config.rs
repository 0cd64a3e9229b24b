//! `logoslug config` – show where the config lives and what is in effect.

use anyhow::Result;
use logoslug_core::config::{self, SlugConfig};

pub fn run_config(cfg: &SlugConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", config::render(cfg)?);
    Ok(())
}
