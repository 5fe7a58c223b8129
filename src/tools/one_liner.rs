// src/tools/one_liner.rs

//! One-liners over *different* executables.
//!
//! A plain stack concerns a single default executable; [`OneLiner`] makes
//! it easy to line up commands that each bring their own.

use crate::command::ArgList;
use crate::stack::CommandStack;
use crate::tools::Tool;

/// ```
/// use shellstack::tools::{OneLiner, Tool};
///
/// let mut one_liner = OneLiner::new();
/// one_liner
///     .add_cmd("source", "/path/to/some/envvarsfile", false, &[])
///     .add_cmd("cat", "/tmp/example/script.sh", false, &[]);
/// assert_eq!(
///     one_liner.get_stacked(),
///     "source /path/to/some/envvarsfile && cat /tmp/example/script.sh"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct OneLiner {
    stack: CommandStack,
}

impl OneLiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. With `allow_fail`, the chained join after this
    /// command becomes `;` so the rest of the line runs regardless of its
    /// outcome.
    pub fn add_cmd(
        &mut self,
        executable: &str,
        options: impl Into<ArgList>,
        allow_fail: bool,
        env_vars: &[(&str, &str)],
    ) -> &mut Self {
        self.stack
            .push_to_stack(options, allow_fail, Some(executable), env_vars);
        self
    }

    /// Prepend a command.
    pub fn prepend_cmd(
        &mut self,
        executable: &str,
        options: impl Into<ArgList>,
        allow_fail: bool,
        env_vars: &[(&str, &str)],
    ) -> &mut Self {
        self.stack
            .prepend_to_stack(options, allow_fail, Some(executable), env_vars);
        self
    }
}

impl Tool for OneLiner {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}
