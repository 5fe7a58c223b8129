// src/errors.rs

//! Crate-wide error type and helpers.
//!
//! Only configuration mistakes are errors here. A spawned process exiting
//! non-zero is *data*, reported through
//! [`RunResult`](crate::result::RunResult), never through `Err`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    /// `run()` was called with nothing to execute: no default executable
    /// and no buffered command.
    #[error("you must add at least one command")]
    MissingExecutable,

    /// Chained execution was requested on an empty stack.
    #[error("this command cannot be chained: the stack is empty")]
    EmptyChain,

    /// A shell option handed to `set_bash_options` had no `-`/`+` prefix.
    #[error("the shell option {0:?} must start with a '-' or '+' sign")]
    InvalidShellOption(String),

    /// An option concat string was not one of `""`, `" "`, `"="`.
    #[error("invalid option concat {0:?}: expected \"\", \" \" or \"=\"")]
    InvalidConcat(String),

    /// A statement builder needs a database before users can be granted.
    #[error("no database set: call add_database() or set_database() first")]
    NoDatabase,

    /// The process facility could not start the command at all.
    #[error("failed to spawn {command:?}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, StackError>;
