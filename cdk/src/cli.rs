//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::commands;
use crate::infra::{
    CustomerAgentStackFactory, DotenvFileLoader, FsAssemblyWriter, OsProcessEnv, default_env_file,
};
use crate::output::OutputContext;

/// Register the CustomerAgentStack and write its cloud assembly.
///
/// Reads AWS_ACCOUNT_ID and AWS_REGION from the process environment and from
/// the `.env` file two directories above the executable (override with
/// CDK_ENV_FILE). Writes to CDK_OUTDIR, default `cdk.out`.
#[derive(Parser)]
#[command(name = "customer-agent-cdk", version)]
pub struct Cli {}

impl Cli {
    /// Execute the bootstrap.
    ///
    /// # Errors
    ///
    /// Returns an error if any bootstrap step fails.
    pub fn run(self) -> Result<ExitCode> {
        let ctx = OutputContext::new(std::env::var_os("NO_COLOR").is_some());
        let default_env_file = default_env_file();
        commands::synth::run(
            &ctx,
            &DotenvFileLoader,
            &OsProcessEnv,
            &CustomerAgentStackFactory,
            &FsAssemblyWriter,
            default_env_file.as_deref(),
        )
    }
}
