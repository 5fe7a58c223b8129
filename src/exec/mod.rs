// src/exec/mod.rs

//! Process execution layer.
//!
//! The stack never spawns processes directly; it hands an [`Invocation`] to
//! an [`ExecutorBackend`]. That keeps the production implementation
//! ([`ShellExecutor`]) in one place and lets tests swap in a recording
//! executor that doesn't touch the OS at all.

pub mod backend;

pub use backend::{ExecutorBackend, Invocation, ProcessOutput, ShellExecutor, shell_quote};
