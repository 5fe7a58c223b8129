// src/result.rs

//! Outcome of a single executed or rendered command.

/// What `run()` hands back for one command: the literal command line, the
/// exit code, the captured (or synthesised) output, and whether a process
/// was actually spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub command_line: String,
    pub exit_code: i32,
    pub output: String,
    pub dry_run: bool,
}

impl RunResult {
    pub const EXIT_OK: i32 = 0;

    pub fn new(command_line: impl Into<String>, exit_code: i32, output: impl Into<String>) -> Self {
        RunResult {
            command_line: command_line.into(),
            exit_code,
            output: output.into(),
            dry_run: false,
        }
    }

    /// Synthetic success reporting what would have been executed.
    pub fn dry_run(command_line: impl Into<String>) -> Self {
        let command_line = command_line.into();
        RunResult {
            output: format!("Dryrun: {command_line} would have been executed."),
            command_line,
            exit_code: Self::EXIT_OK,
            dry_run: true,
        }
    }

    pub fn was_successful(&self) -> bool {
        self.exit_code == Self::EXIT_OK
    }

    /// The output split into lines.
    pub fn output_lines(&self) -> Vec<&str> {
        self.output.split('\n').collect()
    }
}
