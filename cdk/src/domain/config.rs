//! Settings resolved from the `.env` file and the process environment.
//!
//! Pure types only, no I/O. Loading and merging live in
//! `application::services::config_service`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::environment::DeployEnv;

// ── Constants ────────────────────────────────────────────────────────────────

/// Key holding the target account id.
pub const ACCOUNT_KEY: &str = "AWS_ACCOUNT_ID";
/// Key holding the target region.
pub const REGION_KEY: &str = "AWS_REGION";
/// Key the CDK toolkit sets to tell the app where to write its assembly.
pub const OUTDIR_KEY: &str = "CDK_OUTDIR";
/// Key overriding the `.env` location.
pub const ENV_FILE_KEY: &str = "CDK_ENV_FILE";
/// Assembly directory used when `CDK_OUTDIR` is not set.
pub const DEFAULT_OUTDIR: &str = "cdk.out";

// ── Settings schema ──────────────────────────────────────────────────────────

/// Flat settings record. Field names map to upper-case keys
/// (`aws_account_id` ← `AWS_ACCOUNT_ID`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub aws_account_id: Option<String>,
    pub aws_region: Option<String>,
    pub cdk_outdir: Option<PathBuf>,
}

impl Settings {
    /// The deployment target passed to the stack.
    #[must_use]
    pub fn deploy_env(&self) -> DeployEnv {
        DeployEnv::new(self.aws_account_id.clone(), self.aws_region.clone())
    }

    /// Where the cloud assembly is written.
    #[must_use]
    pub fn outdir(&self) -> PathBuf {
        self.cdk_outdir
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTDIR))
    }
}
