//! Production stack definition: implements `StackFactory`.

use anyhow::Result;

use crate::application::ports::StackFactory;
use crate::domain::{App, Stack, StackProps};

/// Builds the customer agent stack.
///
/// The stack's resource definitions are maintained outside this repository;
/// this factory contributes the named shell with its deployment target.
pub struct CustomerAgentStackFactory;

impl StackFactory for CustomerAgentStackFactory {
    fn build(&self, app: &mut App, name: &str, props: StackProps) -> Result<Stack> {
        let stack = Stack::new(name, props)?;
        app.add_stack(stack.clone())?;
        Ok(stack)
    }
}
