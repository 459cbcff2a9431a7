//! Application service: configuration use-cases.
//!
//! The `.env` file fills in keys the process environment leaves unset; a key
//! present in the process environment always wins.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{EnvFileLoader, EnvMap, ProcessEnv};
use crate::domain::Settings;
use crate::domain::config::{ACCOUNT_KEY, ENV_FILE_KEY, OUTDIR_KEY, REGION_KEY};

/// Where to look for the `.env` file: `CDK_ENV_FILE` if set, else `default`.
#[must_use]
pub fn env_file_path(env: &impl ProcessEnv, default: Option<&Path>) -> Option<PathBuf> {
    env.var(ENV_FILE_KEY)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| default.map(Path::to_path_buf))
}

/// Load the `.env` file, or nothing when no location could be determined.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_env_file(loader: &impl EnvFileLoader, path: Option<&Path>) -> Result<EnvMap> {
    let Some(path) = path else {
        tracing::debug!("no env file location, using process environment only");
        return Ok(EnvMap::new());
    };
    let vars = loader.load(path)?;
    tracing::debug!(path = %path.display(), keys = vars.len(), "env file loaded");
    Ok(vars)
}

/// Overlay `process` on top of `file`.
#[must_use]
pub fn merge(file: EnvMap, process: EnvMap) -> EnvMap {
    let mut merged = file;
    merged.extend(process);
    merged
}

/// Keys `Settings` is decoded from. Matching is exact: `aws_region` is a
/// different variable from `AWS_REGION`.
const SETTINGS_KEYS: [&str; 3] = [ACCOUNT_KEY, REGION_KEY, OUTDIR_KEY];

/// Deserialize settings from the merged sources.
///
/// # Errors
///
/// Returns an error if a known key holds a value its field cannot accept.
pub fn resolve_settings(file: EnvMap, process: EnvMap) -> Result<Settings> {
    let settings: Settings = envy::from_iter(settings_vars(merge(file, process)))
        .context("cannot read configuration")?;
    tracing::info!(
        account = settings.aws_account_id.as_deref().unwrap_or("-"),
        region = settings.aws_region.as_deref().unwrap_or("-"),
        outdir = %settings.outdir().display(),
        "deployment environment resolved"
    );
    Ok(settings)
}

/// Drop every key `envy` would otherwise fold onto a settings field.
fn settings_vars(merged: EnvMap) -> EnvMap {
    merged
        .into_iter()
        .filter(|(key, _)| SETTINGS_KEYS.contains(&key.as_str()))
        .collect()
}
