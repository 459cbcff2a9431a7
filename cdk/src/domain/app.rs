//! Application context: the top-level container stacks register into.

use crate::domain::error::StackError;
use crate::domain::stack::Stack;

/// Top-level container aggregating stacks for synthesis.
///
/// Stacks keep their registration order; names are unique.
#[derive(Debug, Default)]
pub struct App {
    stacks: Vec<Stack>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stack.
    ///
    /// # Errors
    ///
    /// Returns `StackError::DuplicateStack` if a stack with the same name is
    /// already registered.
    pub fn add_stack(&mut self, stack: Stack) -> Result<(), StackError> {
        if self.stack(stack.name()).is_some() {
            return Err(StackError::DuplicateStack(stack.name().to_string()));
        }
        self.stacks.push(stack);
        Ok(())
    }

    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    #[must_use]
    pub fn stack(&self, name: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.name() == name)
    }
}
