//! Application service: register the customer agent stack.
//!
//! Pure with respect to the process environment: the deployment target comes
//! in as a value, so these functions are testable without `std::env`.

use anyhow::{Context, Result};

use crate::application::ports::StackFactory;
use crate::domain::{App, DeployEnv, Stack, StackProps};

/// Name the stack is registered under.
pub const CUSTOMER_AGENT_STACK: &str = "CustomerAgentStack";

/// Props handed to the stack factory: the target under `env`.
#[must_use]
pub fn stack_props(env: &DeployEnv) -> StackProps {
    StackProps { env: env.clone() }
}

/// Build and register exactly one `CustomerAgentStack` in `app`.
///
/// # Errors
///
/// Returns an error if the factory fails, or if it returns without having
/// registered the stack in `app`.
pub fn bootstrap(app: &mut App, factory: &impl StackFactory, env: &DeployEnv) -> Result<Stack> {
    let stack = factory
        .build(app, CUSTOMER_AGENT_STACK, stack_props(env))
        .with_context(|| format!("failed to construct {CUSTOMER_AGENT_STACK}"))?;

    if app.stack(stack.name()).is_none() {
        anyhow::bail!(
            "stack factory returned '{}' without registering it in the app",
            stack.name()
        );
    }

    tracing::info!(
        stack = stack.name(),
        environment = %stack.env().target(),
        "stack registered"
    );
    Ok(stack)
}
