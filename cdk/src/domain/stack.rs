//! Stack construct and its name rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::environment::DeployEnv;
use crate::domain::error::StackError;

/// CloudFormation stack name rule: a letter followed by up to 127 letters,
/// digits or hyphens.
pub static STACK_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z][A-Za-z0-9-]{0,127}$").expect("valid regex")
});

/// Validate a stack name.
///
/// # Errors
///
/// Returns `StackError::InvalidName` if the name does not match `STACK_NAME_RE`.
pub fn validate_stack_name(name: &str) -> Result<(), StackError> {
    if STACK_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(StackError::InvalidName(name.to_string()))
    }
}

/// Configuration object handed to a stack factory. The deployment target
/// lives under `env`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackProps {
    pub env: DeployEnv,
}

/// A named, deployable unit registered in an [`App`](crate::domain::App).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    name: String,
    env: DeployEnv,
}

impl Stack {
    /// Create a stack after validating its name.
    ///
    /// # Errors
    ///
    /// Returns `StackError::InvalidName` for names CloudFormation would reject.
    pub fn new(name: &str, props: StackProps) -> Result<Self, StackError> {
        validate_stack_name(name)?;
        Ok(Self {
            name: name.to_string(),
            env: props.env,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn env(&self) -> &DeployEnv {
        &self.env
    }

    /// File name of this stack's template inside the cloud assembly.
    #[must_use]
    pub fn template_file(&self) -> String {
        format!("{}.template.json", self.name)
    }

    /// Template body. Resource definitions are contributed by the stack
    /// definition, not by this crate, so the section starts out empty.
    #[must_use]
    pub fn template(&self) -> Value {
        json!({ "Resources": {} })
    }
}
