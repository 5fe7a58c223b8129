// src/tools/os.rs

//! Generic operating-system commands (`cd`, `rm`, `mv`, `ln`, ...).
//!
//! [`OsOps`] is a blanket mixin: every adapter gets these operations for
//! free, so tool-specific commands mix with plain OS plumbing on the same
//! stack.

use crate::args;
use crate::stack::CommandStack;
use crate::tools::Tool;

/// Basic OS-level commands, pushed with per-command executables so they
/// interleave with whatever the adapter itself stacks.
pub trait OsOps: Tool + Sized {
    /// Add a change-dir command to the stack.
    fn change_dir(&mut self, dir: &str) -> &mut Self {
        self.stack_mut().push_to_stack(args![dir], false, Some("cd"), &[]);
        self
    }

    /// Add an `mkdir`; `recursive` maps to `-p`.
    fn make_dir(&mut self, dir: &str, recursive: bool) -> &mut Self {
        self.stack_mut().push_to_stack(
            args![recursive.then_some("-p"), dir],
            false,
            Some("mkdir"),
            &[],
        );
        self
    }

    /// Add an `rm`. Remember: `-f` won't complain about missing files.
    fn delete(&mut self, target: &str, force: bool, recursive: bool) -> &mut Self {
        self.stack_mut().push_to_stack(
            args![force.then_some("-f"), recursive.then_some("-r"), target],
            false,
            Some("rm"),
            &[],
        );
        self
    }

    /// Add an `ln`; `symbolic` maps to `-s`.
    fn link(&mut self, source: &str, dest: &str, symbolic: bool, allow_fail: bool) -> &mut Self {
        self.stack_mut().push_to_stack(
            args![symbolic.then_some("-s"), source, dest],
            allow_fail,
            Some("ln"),
            &[],
        );
        self
    }

    /// Add an `mv`.
    fn rename(&mut self, source: &str, dest: &str, force: bool, allow_fail: bool) -> &mut Self {
        self.stack_mut().push_to_stack(
            args![force.then_some("-f"), source, dest],
            allow_fail,
            Some("mv"),
            &[],
        );
        self
    }

    /// Add an `mv` guarded by an existence test on the source, so the move
    /// is skipped instead of failing when there is nothing to move.
    fn rename_if_exists(&mut self, source: &str, dest: &str, force: bool) -> &mut Self {
        let guarded = format!("if [ -d {source} -o -f {source} -o -L {source} ]; then mv");
        self.stack_mut().push_to_stack(
            args![force.then_some("-f"), source, dest, "; fi"],
            false,
            Some(guarded.as_str()),
            &[],
        );
        self
    }

    /// Add a `setfacl` granting `permissions` to `user` on `destination`.
    fn set_facl(
        &mut self,
        destination: &str,
        user: &str,
        permissions: &str,
        recursive: bool,
        default: bool,
        allow_fail: bool,
    ) -> &mut Self {
        self.stack_mut().push_to_stack(
            args![
                recursive.then_some("-R"),
                default.then_some("-d"),
                format!("-m u:\"{user}\":{permissions}"),
                destination
            ],
            allow_fail,
            Some("setfacl"),
            &[],
        );
        self
    }

    /// Perform `action` on a service via the `service` wrapper.
    fn service(&mut self, name: &str, action: &str, allow_fail: bool) -> &mut Self {
        self.stack_mut()
            .push_to_stack(args![name, action], allow_fail, Some("service"), &[]);
        self
    }

    /// Perform `action` on a unit via `systemctl` (action comes first).
    fn systemctl(&mut self, name: &str, action: &str, allow_fail: bool) -> &mut Self {
        self.stack_mut()
            .push_to_stack(args![action, name], allow_fail, Some("systemctl"), &[]);
        self
    }
}

impl<T: Tool> OsOps for T {}

/// Free-standing adapter exposing just the OS operations.
#[derive(Debug, Clone, Default)]
pub struct Os {
    stack: CommandStack,
}

impl Os {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for Os {
    fn stack(&self) -> &CommandStack {
        &self.stack
    }

    fn stack_mut(&mut self) -> &mut CommandStack {
        &mut self.stack
    }
}
