use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_wellness_home;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub export: ExportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Used by `plan` when --format is not given
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Where `export` writes when --out is not given
    pub directory: String,
}

impl Default for ExportSection {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_wellness_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let cfg = load_config()?;
    let s = toml::to_string_pretty(&cfg).context("serialize config")?;
    println!("# {}", config_path()?.display());
    print!("{}", s);
    Ok(())
}
