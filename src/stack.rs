// src/stack.rs

//! Ordered command accumulation, rendering and execution.
//!
//! [`CommandStack`] is the engine the per-tool adapters build on. It
//! accumulates [`Command`]s plus stack-wide state (working directory, shell
//! options, chained-vs-sequential mode) and owns the three consumers of that
//! state:
//!
//! - [`get_stacked`](CommandStack::get_stacked) — one shell line, each
//!   command joined by its own `&&`/`;` policy.
//! - [`to_script`](CommandStack::to_script) — a portable bash script, one
//!   statement per line.
//! - [`run`](CommandStack::run) — execution through an
//!   [`ExecutorBackend`], honouring chained vs sequential failure
//!   semantics, raw vs escaped quoting, and dry-run reporting.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::command::{ArgList, Command};
use crate::errors::{Result, StackError};
use crate::exec::{ExecutorBackend, Invocation, ShellExecutor};
use crate::result::RunResult;

/// How `add_option` fuses a flag with its argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Concat {
    /// Flag and argument become two separate tokens.
    #[default]
    Space,
    /// Flag and argument fuse into a single token (`-ppassword`).
    Glued,
    /// Flag and argument fuse with a `=` in between (`--env=prod`).
    Equals,
}

impl FromStr for Concat {
    type Err = StackError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            " " => Ok(Concat::Space),
            "" => Ok(Concat::Glued),
            "=" => Ok(Concat::Equals),
            other => Err(StackError::InvalidConcat(other.to_string())),
        }
    }
}

/// Flags steering one `run()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Report the command lines without spawning anything.
    pub dry_run: bool,
    /// Escape every token and spawn argv-style instead of handing the
    /// literal line to a shell. Incompatible with commands that rely on
    /// shell operators (`>`, `<`, `|`) or embedded quoting; those callers
    /// set this to `false`.
    pub escape: bool,
    /// Render stdout and stderr as separate labelled blocks. When `false`
    /// only stdout is reported; merging the streams is then the executor's
    /// concern.
    pub split_output: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            dry_run: false,
            escape: true,
            split_output: true,
        }
    }
}

/// Ordered accumulator of commands plus stack-wide execution state.
///
/// Accumulation is fluent, `std::process::Command`-style: every builder
/// method returns `&mut Self`. The stack itself is not thread-safe builder
/// state; construct one per logical script.
#[derive(Debug, Clone, Default)]
pub struct CommandStack {
    executable: Option<String>,
    working_directory: Option<PathBuf>,
    bash_options: Vec<String>,
    stack: Vec<Command>,
    options: Vec<String>,
    arguments: Vec<String>,
    chained: bool,
}

impl CommandStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default program for pushed entries that don't override it.
    pub fn set_executable(&mut self, executable: impl Into<String>) -> &mut Self {
        self.executable = Some(executable.into());
        self
    }

    pub fn executable(&self) -> Option<&str> {
        self.executable.as_deref()
    }

    /// Working directory for sequential execution.
    ///
    /// Chained and script renderings ignore it: a shell script controls its
    /// own `cd`.
    pub fn dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.working_directory = Some(dir.into());
        self
    }

    /// Options for the shell's `set` builtin (`-e`, `+x`, `-o pipefail`).
    ///
    /// Each token must start with `-` or `+`; nothing is recorded when any
    /// token is invalid.
    pub fn set_bash_options(&mut self, options: &[&str]) -> Result<&mut Self> {
        for option in options {
            if !option.starts_with('-') && !option.starts_with('+') {
                return Err(StackError::InvalidShellOption(option.to_string()));
            }
        }
        self.bash_options
            .extend(options.iter().map(|option| option.to_string()));
        Ok(self)
    }

    /// Switch between chained (one joined shell line) and sequential
    /// (independent process per entry) execution.
    pub fn chained(&mut self, chained: bool) -> &mut Self {
        self.chained = chained;
        self
    }

    /// Push a command onto the execution stack.
    ///
    /// `options` may be a single string (kept as one token) or an
    /// [`args!`](crate::args)-built list; either way the falsy filter
    /// applies. `allow_fail` turns the command's chained join into `;`.
    /// `executable` overrides the stack default, and `env_vars` are
    /// rendered/applied in the given order.
    pub fn push_to_stack(
        &mut self,
        options: impl Into<ArgList>,
        allow_fail: bool,
        executable: Option<&str>,
        env_vars: &[(&str, &str)],
    ) -> &mut Self {
        let command = self.build_entry(options, allow_fail, executable, env_vars);
        self.stack.push(command);
        self
    }

    /// Like [`push_to_stack`](Self::push_to_stack), but the command goes to
    /// the front of the stack.
    pub fn prepend_to_stack(
        &mut self,
        options: impl Into<ArgList>,
        allow_fail: bool,
        executable: Option<&str>,
        env_vars: &[(&str, &str)],
    ) -> &mut Self {
        let command = self.build_entry(options, allow_fail, executable, env_vars);
        self.stack.insert(0, command);
        self
    }

    fn build_entry(
        &self,
        options: impl Into<ArgList>,
        allow_fail: bool,
        executable: Option<&str>,
        env_vars: &[(&str, &str)],
    ) -> Command {
        let executable = executable
            .map(str::to_string)
            .or_else(|| self.executable.clone())
            .unwrap_or_default();
        let mut command = Command::new(executable, options).allow_fail(allow_fail);
        for (name, value) in env_vars {
            command = command.env(*name, *value);
        }
        command
    }

    /// Buffer an option for the implicit single-command path (used when
    /// `run()` is called with an empty stack).
    ///
    /// With [`Concat::Space`] the flag and a non-empty argument become two
    /// tokens; otherwise they fuse into one (just the flag when the
    /// argument is empty).
    pub fn add_option(&mut self, option: &str, argument: &str, concat: Concat) -> &mut Self {
        match concat {
            Concat::Space => {
                self.options.push(option.to_string());
                if !argument.is_empty() {
                    self.options.push(argument.to_string());
                }
            }
            Concat::Glued | Concat::Equals if argument.is_empty() => {
                self.options.push(option.to_string());
            }
            Concat::Glued => self.options.push(format!("{option}{argument}")),
            Concat::Equals => self.options.push(format!("{option}={argument}")),
        }
        self
    }

    /// Buffer an argument; arguments always render after the buffered
    /// options.
    pub fn add_argument(&mut self, argument: impl Into<String>) -> &mut Self {
        self.arguments.push(argument.into());
        self
    }

    /// The commands pushed so far.
    pub fn commands(&self) -> &[Command] {
        &self.stack
    }

    fn bash_options_prefix(&self, terminator: &str) -> String {
        if self.bash_options.is_empty() {
            String::new()
        } else {
            format!("set {}{}", self.bash_options.join(" "), terminator)
        }
    }

    /// Everything as one shell line: the `set <opts>;` prefix when shell
    /// options were given, then each command joined by its own policy. The
    /// last command is never followed by a join.
    pub fn get_stacked(&self) -> String {
        let last = self.stack.len().saturating_sub(1);
        let mut chain = self.bash_options_prefix(";");
        for (index, command) in self.stack.iter().enumerate() {
            chain.push_str(&command.generate_script(false));
            if index != last {
                chain.push_str(command.join());
            }
        }
        chain
    }

    /// Everything as separate literal strings: the raw bash-option tokens
    /// first, then one string per command, no joins anywhere.
    pub fn get_stacked_array(&self) -> Vec<String> {
        let mut lines = self.bash_options.clone();
        lines.extend(self.stack.iter().map(|command| command.generate_script(false)));
        lines
    }

    /// Canonical script-file rendering: shebang, optional `set` line, then
    /// one statement per line. Join policies play no role here; every
    /// statement ends with a line break.
    pub fn to_script(&self) -> String {
        let mut script = String::from("#!/bin/bash\n\n");
        script.push_str(&self.bash_options_prefix("\n\n"));
        for command in &self.stack {
            script.push_str(&command.generate_script(true));
        }
        script
    }

    /// Run the stack with the default [`ShellExecutor`].
    pub fn run(&self, options: RunOptions) -> Result<RunResult> {
        self.run_with(&mut ShellExecutor, options)
    }

    /// Run the stack against an arbitrary executor backend.
    ///
    /// Chained mode spawns one shell for the whole joined line and leaves
    /// the failure semantics to the shell's `&&`/`;`. Sequential mode
    /// spawns one process per command and stops at the first non-zero exit,
    /// returning that failing result. Dry runs never spawn and never stop
    /// early; the last synthesised result is returned.
    pub fn run_with<E: ExecutorBackend>(
        &self,
        executor: &mut E,
        options: RunOptions,
    ) -> Result<RunResult> {
        let executable = self
            .executable
            .as_deref()
            .filter(|executable| !executable.is_empty())
            .ok_or(StackError::MissingExecutable)?;

        if self.chained {
            if self.stack.is_empty() {
                return Err(StackError::EmptyChain);
            }
            let invocation = Invocation::Shell {
                command_line: self.get_stacked(),
            };
            if options.dry_run {
                debug!(command = %invocation.command_line(), "dry-run, nothing spawned");
                return Ok(RunResult::dry_run(invocation.command_line()));
            }
            // The shell owns the failure semantics of the joined line; the
            // working directory intentionally does not apply (see `dir`).
            return self.execute(executor, &invocation, None, options);
        }

        // Sequential mode: the explicit stack, or a single command
        // synthesised from the option/argument buffers.
        let synthesised;
        let commands = if self.stack.is_empty() {
            let mut tokens = self.options.clone();
            tokens.extend(self.arguments.iter().cloned());
            synthesised = vec![Command::new(executable, tokens)];
            &synthesised
        } else {
            &self.stack
        };

        let (final_command, leading) = match commands.split_last() {
            Some(split) => split,
            None => return Err(StackError::MissingExecutable),
        };

        for command in leading {
            let result = self.sequential_step(executor, command, options)?;
            if !options.dry_run && !result.was_successful() {
                warn!(
                    command = %result.command_line,
                    exit_code = result.exit_code,
                    "command failed, aborting remaining stack"
                );
                return Ok(result);
            }
        }
        self.sequential_step(executor, final_command, options)
    }

    fn sequential_step<E: ExecutorBackend>(
        &self,
        executor: &mut E,
        command: &Command,
        options: RunOptions,
    ) -> Result<RunResult> {
        let invocation = if options.escape {
            let mut argv = vec![command.executable().to_string()];
            argv.extend(command.options().iter().cloned());
            Invocation::Argv {
                argv,
                env: command.env_vars().to_vec(),
            }
        } else {
            Invocation::Shell {
                command_line: command.generate_script(false),
            }
        };

        if options.dry_run {
            debug!(command = %invocation.command_line(), "dry-run, nothing spawned");
            return Ok(RunResult::dry_run(invocation.command_line()));
        }

        self.execute(
            executor,
            &invocation,
            self.working_directory.as_deref(),
            options,
        )
    }

    fn execute<E: ExecutorBackend>(
        &self,
        executor: &mut E,
        invocation: &Invocation,
        working_dir: Option<&Path>,
        options: RunOptions,
    ) -> Result<RunResult> {
        let output = executor.execute(invocation, working_dir)?;
        let rendered = if options.split_output {
            format!("StdOut:\n{}\n\nStdErr:\n{}", output.stdout, output.stderr)
        } else {
            output.stdout
        };
        Ok(RunResult::new(
            invocation.command_line(),
            output.exit_code,
            rendered,
        ))
    }
}

impl fmt::Display for CommandStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_script())
    }
}
