// src/tools/git.rs

//! Git commands. Use `chained(true)` to run the whole stack as one
//! `&&`-joined line.
//!
//! ```
//! use shellstack::tools::{git::Git, Tool};
//!
//! let mut git = Git::new();
//! git.add("-A")
//!     .commit("adding everything", "")
//!     .push("origin", "master")
//!     .tag("0.6.0", "")
//!     .push("origin", "0.6.0");
//! assert_eq!(
//!     git.get_stacked_array().len(),
//!     5,
//! );
//! ```

use crate::args;
use crate::stack::CommandStack;
use crate::tools::Tool;

#[derive(Debug, Clone)]
pub struct Git {
    stack: CommandStack,
}

impl Git {
    pub fn new() -> Self {
        let mut stack = CommandStack::new();
        stack.set_executable("git");
        Git { stack }
    }

    /// Clone `repo` into `to` (empty: git picks the directory). A non-empty
    /// `branch_or_tag` becomes `-b <name>`; `shallow` adds `--depth 1`.
    pub fn clone_repo(
        &mut self,
        repo: &str,
        to: &str,
        branch_or_tag: &str,
        shallow: bool,
    ) -> &mut Self {
        self.stack.push_to_stack(
            args![
                "clone",
                shallow.then_some("--depth 1"),
                (!branch_or_tag.is_empty()).then(|| format!("-b {branch_or_tag}")),
                repo,
                to
            ],
            false,
            None,
            &[],
        );
        self
    }

    /// `git add` with a files-to-add pattern.
    pub fn add(&mut self, pattern: &str) -> &mut Self {
        self.stack.push_to_stack(args!["add", pattern], false, None, &[]);
        self
    }

    /// `git commit` with a message and optional extra options.
    pub fn commit(&mut self, message: &str, options: &str) -> &mut Self {
        self.stack.push_to_stack(
            args!["commit", format!("-m '{message}'"), options],
            false,
            None,
            &[],
        );
        self
    }

    pub fn pull(&mut self, origin: &str, branch: &str) -> &mut Self {
        self.stack
            .push_to_stack(args!["pull", origin, branch], false, None, &[]);
        self
    }

    pub fn push(&mut self, origin: &str, branch: &str) -> &mut Self {
        self.stack
            .push_to_stack(args!["push", origin, branch], false, None, &[]);
        self
    }

    pub fn merge(&mut self, branch: &str, options: &str) -> &mut Self {
        self.stack
            .push_to_stack(args!["merge", options, branch], false, None, &[]);
        self
    }

    pub fn checkout(&mut self, branch: &str) -> &mut Self {
        self.stack
            .push_to_stack(args!["checkout", branch], false, None, &[]);
        self
    }

    /// `git tag`; a non-empty `message` renders as `-m '<message>'` before
    /// the tag name.
    pub fn tag(&mut self, tag_name: &str, message: &str) -> &mut Self {
        let message = (!message.is_empty()).then(|| format!("-m '{message}'"));
        self.stack
            .push_to_stack(args!["tag", message, tag_name], false, None, &[]);
        self
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for Git {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}
