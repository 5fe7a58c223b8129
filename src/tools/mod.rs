// src/tools/mod.rs

//! Per-tool adapters over the core stack.
//!
//! The adapters are thin argument-assembly layers: each one embeds a
//! [`CommandStack`] and translates domain intent ("clone a repo", "destroy
//! a dataset") into the core primitives (`push_to_stack`, `add_option`,
//! `add_argument`). Shared behaviour comes from the [`Tool`] trait instead
//! of an inheritance chain, and the generic OS operations are a blanket
//! mixin ([`os::OsOps`]) available to every adapter.

pub mod composer;
pub mod git;
pub mod lxc;
pub mod mysql;
pub mod one_liner;
pub mod os;
pub mod zfs;

use std::path::PathBuf;

use crate::errors::Result;
use crate::exec::ExecutorBackend;
use crate::result::RunResult;
use crate::stack::{CommandStack, RunOptions};

pub use os::{Os, OsOps};
pub use one_liner::OneLiner;

/// Shared surface of every adapter: access to the embedded stack plus the
/// stack-consumer operations forwarded to it.
pub trait Tool {
    fn stack(&self) -> &CommandStack;
    fn stack_mut(&mut self) -> &mut CommandStack;

    /// Called right before execution. Adapters that defer tokens until run
    /// time (e.g. a trailing dataset argument) override this.
    fn finalize(&mut self) {}

    /// See [`CommandStack::dir`].
    fn dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self
    where
        Self: Sized,
    {
        self.stack_mut().dir(dir);
        self
    }

    /// See [`CommandStack::chained`].
    fn chained(&mut self, chained: bool) -> &mut Self
    where
        Self: Sized,
    {
        self.stack_mut().chained(chained);
        self
    }

    /// See [`CommandStack::set_bash_options`].
    fn set_bash_options(&mut self, options: &[&str]) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.stack_mut().set_bash_options(options)?;
        Ok(self)
    }

    /// See [`CommandStack::get_stacked`].
    fn get_stacked(&self) -> String {
        self.stack().get_stacked()
    }

    /// See [`CommandStack::get_stacked_array`].
    fn get_stacked_array(&self) -> Vec<String> {
        self.stack().get_stacked_array()
    }

    /// See [`CommandStack::to_script`].
    fn to_script(&self) -> String {
        self.stack().to_script()
    }

    /// Run with the default executor. See [`CommandStack::run`].
    fn run(&mut self, options: RunOptions) -> Result<RunResult>
    where
        Self: Sized,
    {
        self.finalize();
        self.stack().run(options)
    }

    /// Run against an arbitrary executor backend. See
    /// [`CommandStack::run_with`].
    fn run_with<E: ExecutorBackend>(
        &mut self,
        executor: &mut E,
        options: RunOptions,
    ) -> Result<RunResult>
    where
        Self: Sized,
    {
        self.finalize();
        self.stack().run_with(executor, options)
    }
}
