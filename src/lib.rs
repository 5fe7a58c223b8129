// src/lib.rs

//! Compose shell command lines and scripts from structured data, and
//! execute them with exact `&&` / `;` semantics.
//!
//! - [`command`] models one invocation and the token filter applied to it.
//! - [`stack`] owns accumulation, the join/run logic and script rendering.
//! - [`result`] is what an execution hands back.
//! - [`exec`] is the process-execution seam (production or test executor).
//! - [`tools`] holds the per-tool adapters built on the core primitives.
//!
//! ```
//! use shellstack::tools::{git::Git, Tool};
//!
//! let mut git = Git::new();
//! git.clone_repo("https://my.com/repo.git", "/opt/approot", "", true)
//!     .checkout("main");
//!
//! assert_eq!(
//!     git.get_stacked(),
//!     "git clone --depth 1 https://my.com/repo.git /opt/approot && git checkout main"
//! );
//! ```

pub mod command;
pub mod errors;
pub mod exec;
pub mod macros;
pub mod result;
pub mod stack;
pub mod tools;

pub use command::{Arg, ArgList, Command, JoinPolicy};
pub use errors::{Result, StackError};
pub use exec::{ExecutorBackend, Invocation, ProcessOutput, ShellExecutor};
pub use result::RunResult;
pub use stack::{CommandStack, Concat, RunOptions};
