//! Bootstrap and synthesize: the app's only command.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use crate::application::ports::{AssemblyWriter, EnvFileLoader, ProcessEnv, StackFactory};
use crate::application::services::{bootstrap, config_service, synth};
use crate::domain::App;
use crate::output::OutputContext;

/// Load configuration, register `CustomerAgentStack`, and write the cloud
/// assembly.
///
/// `default_env_file` is the `.env` location used when `CDK_ENV_FILE` is not
/// set.
///
/// # Errors
///
/// Returns an error if the `.env` file is malformed, the stack cannot be
/// constructed, or the assembly cannot be written.
pub fn run(
    ctx: &OutputContext,
    loader: &impl EnvFileLoader,
    process_env: &impl ProcessEnv,
    factory: &impl StackFactory,
    writer: &impl AssemblyWriter,
    default_env_file: Option<&Path>,
) -> Result<ExitCode> {
    let env_file = config_service::env_file_path(process_env, default_env_file);
    let file_vars = config_service::load_env_file(loader, env_file.as_deref())?;
    if let Some(path) = env_file.as_deref().filter(|_| !file_vars.is_empty()) {
        ctx.info(&format!("Loaded {} keys from {}", file_vars.len(), path.display()));
    }
    let settings = config_service::resolve_settings(file_vars, process_env.vars())?;
    let env = settings.deploy_env();

    let mut app = App::new();
    let stack = bootstrap::bootstrap(&mut app, factory, &env)?;

    ctx.success(&format!("{}  {}", stack.name(), env.target()));
    if env.is_agnostic() {
        ctx.warn(&format!(
            "{} is environment-agnostic: account/region lookups will not work",
            stack.name()
        ));
    } else if !env.is_complete() {
        ctx.warn(&format!(
            "{} has a partial environment: set both AWS_ACCOUNT_ID and AWS_REGION",
            stack.name()
        ));
    }

    let outdir = settings.outdir();
    synth::synth(&app, writer, &outdir)?;
    ctx.kv("Cloud assembly:", &outdir.display().to_string());

    Ok(ExitCode::SUCCESS)
}
