// src/tools/composer.rs

//! Composer, the PHP package manager.

use crate::args;
use crate::stack::CommandStack;
use crate::tools::Tool;

#[derive(Debug, Clone)]
pub struct Composer {
    stack: CommandStack,
}

impl Composer {
    pub fn new() -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("composer");
        Composer { stack }
    }

    /// Install the project dependencies from the lock file if present,
    /// falling back on the manifest.
    pub fn install(&mut self, no_interaction: bool) -> &mut Self {
        self.stack.push_to_stack(
            args!["install", no_interaction.then_some("-n")],
            false,
            None,
            &[],
        );
        self
    }

    /// Clear composer's internal package cache.
    pub fn clear_cache(&mut self) -> &mut Self {
        self.stack.push_to_stack("clear-cache", false, None, &[]);
        self
    }

    /// Diagnose the system to identify common errors.
    pub fn diagnose(&mut self) -> &mut Self {
        self.stack.push_to_stack("diagnose", false, None, &[]);
        self
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for Composer {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}
