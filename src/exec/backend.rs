// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! - [`Invocation`] is what the stack hands over: either a literal
//!   shell-interpreted command line, or an argv vector spawned without any
//!   shell in between.
//! - [`ShellExecutor`] is the production implementation used by
//!   [`CommandStack::run`](crate::stack::CommandStack::run). Tests provide
//!   their own `ExecutorBackend` that records invocations and replays
//!   canned outcomes.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::errors::{Result, StackError};

/// One process invocation, ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A literal command line, interpreted by the shell. Required whenever
    /// the line relies on shell operators (`&&`, `;`, `>`, `<`, `|`) or
    /// embedded quoting.
    Shell { command_line: String },
    /// An argv vector spawned directly: every element reaches the process
    /// as exactly one argument, no shell interpretation happens.
    Argv {
        argv: Vec<String>,
        env: Vec<(String, String)>,
    },
}

impl Invocation {
    /// The literal command line this invocation stands for.
    ///
    /// Argv elements are rendered single-quoted, the way they would have to
    /// be written to survive a shell unchanged.
    pub fn command_line(&self) -> String {
        match self {
            Invocation::Shell { command_line } => command_line.clone(),
            Invocation::Argv { argv, .. } => argv
                .iter()
                .map(|token| shell_quote(token))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Captured streams and exit code of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Trait abstracting how invocations are executed.
///
/// Production code uses [`ShellExecutor`]; tests can provide an
/// implementation that doesn't spawn real processes.
pub trait ExecutorBackend {
    /// Execute one invocation, blocking until it finishes.
    fn execute(
        &mut self,
        invocation: &Invocation,
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput>;
}

/// Production executor: `std::process::Command`, blocking, and deliberately
/// without a timeout — long-running commands are part of the contract and
/// must not be killed here. Cancellation, if needed, belongs to a layer
/// above this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl ExecutorBackend for ShellExecutor {
    fn execute(
        &mut self,
        invocation: &Invocation,
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput> {
        let mut command = match invocation {
            Invocation::Shell { command_line } => {
                let mut command = Command::new("sh");
                command.arg("-c").arg(command_line);
                command
            }
            Invocation::Argv { argv, env } => {
                let (program, arguments) =
                    argv.split_first().ok_or(StackError::MissingExecutable)?;
                let mut command = Command::new(program);
                command.args(arguments);
                command.envs(env.iter().map(|(name, value)| (name.as_str(), value.as_str())));
                command
            }
        };

        if let Some(dir) = working_dir {
            command.current_dir(dir);
        }

        info!(command = %invocation.command_line(), "spawning process");

        let output = command.output().map_err(|source| StackError::Spawn {
            command: invocation.command_line(),
            source,
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        info!(exit_code, success = output.status.success(), "process exited");

        Ok(ProcessOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Quote one token so a shell passes it through verbatim.
///
/// The token is wrapped in single quotes; embedded single quotes are
/// closed, escaped and reopened (`'` becomes `'\''`).
pub fn shell_quote(token: &str) -> String {
    format!("'{}'", token.replace('\'', r"'\''"))
}
