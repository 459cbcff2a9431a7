//! `.env` file loading: implements `EnvFileLoader` with `dotenvy`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use crate::application::ports::{EnvFileLoader, EnvMap};

/// Errors from reading an existing `.env` file.
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Production `EnvFileLoader`. Does not touch the process environment:
/// pairs are returned, never exported.
pub struct DotenvFileLoader;

impl EnvFileLoader for DotenvFileLoader {
    fn load(&self, path: &Path) -> Result<EnvMap> {
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                tracing::debug!(path = %path.display(), "env file not found");
                return Ok(EnvMap::new());
            }
            Err(source) => {
                return Err(EnvFileError::Read {
                    path: path.to_path_buf(),
                    source,
                }
                .into());
            }
        };

        let mut vars = EnvMap::new();
        for item in iter {
            let (key, value) = item.map_err(|source| EnvFileError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            vars.insert(key, value);
        }
        Ok(vars)
    }
}

/// `.env` two directory levels above the running executable's directory.
///
/// For `<repo>/target/debug/customer-agent-cdk` this is `<repo>/.env`.
/// Returns `None` when the executable path cannot be determined or is too
/// shallow.
#[must_use]
pub fn default_env_file() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    env_file_for_exe(&exe)
}

fn env_file_for_exe(exe: &Path) -> Option<PathBuf> {
    let root = exe.parent()?.parent()?.parent()?;
    Some(root.join(".env"))
}
