//! Initialize .qreport.toml configuration

use anyhow::Result;
use qreport_core::config::CONFIG_FILE;
use qreport_core::QualityConfig;
use std::path::{Path, PathBuf};

/// Write a default configuration unless one already exists.
///
/// Returns the config path and whether it was created.
pub fn write_default(target_path: &Path) -> Result<(PathBuf, bool)> {
    let config_path = target_path.join(CONFIG_FILE);
    if config_path.exists() {
        return Ok((config_path, false));
    }
    QualityConfig::default().save(&config_path)?;
    Ok((config_path, true))
}

pub fn run(path: Option<&Path>) -> Result<()> {
    let target_path = path.unwrap_or_else(|| Path::new("."));
    let (config_path, created) = write_default(target_path)?;

    if !created {
        println!("⚠️  {} already exists at {:?}", CONFIG_FILE, config_path);
        return Ok(());
    }

    println!("✅ Created {} at {:?}", CONFIG_FILE, config_path);
    println!("\nAdjust the report paths if your build differs, then run:");
    println!("  qreport");

    Ok(())
}
