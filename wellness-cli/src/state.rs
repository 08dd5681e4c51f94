use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wellness_core::FinancialProfile;

/// `$WELLNESS_HOME`, or `~/.wellness`
pub fn wellness_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("WELLNESS_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".wellness"))
}

pub fn ensure_wellness_home() -> Result<PathBuf> {
    let dir = wellness_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_wellness_home()?.join("profile.json"))
}

const CREATED_AT_KEY: &str = "created_at_utc";

/// Profile file contents. A bare profile JSON (no timestamp) also parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_utc: Option<String>,
    #[serde(flatten)]
    pub profile: FinancialProfile,
}

pub fn write_profile(path: &Path, saved: &SavedProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(saved)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Parse profile JSON. Keys outside the profile fields are an error, so a
/// misspelled or camelCase key can't silently zero a field.
pub fn parse_profile(s: &str) -> Result<SavedProfile> {
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(s).context("profile must be a JSON object")?;

    let unknown: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|k| *k != CREATED_AT_KEY && !FinancialProfile::FIELD_NAMES.contains(k))
        .collect();
    if !unknown.is_empty() {
        bail!(
            "unknown profile field(s): {} (expected: {})",
            unknown.join(", "),
            FinancialProfile::FIELD_NAMES.join(", ")
        );
    }

    Ok(serde_json::from_value(serde_json::Value::Object(map))?)
}

pub fn read_profile(path: &Path) -> Result<SavedProfile> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_profile(&s).with_context(|| format!("parse {}", path.display()))
}
