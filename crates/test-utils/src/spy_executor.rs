use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use shellstack::errors::Result;
use shellstack::exec::{ExecutorBackend, Invocation, ProcessOutput};

/// What the spy saw for one `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInvocation {
    pub invocation: Invocation,
    pub working_dir: Option<PathBuf>,
}

/// A recording executor:
/// - records every invocation (plus the working directory it came with)
/// - replays scripted outcomes, defaulting to a silent success.
#[derive(Debug, Default)]
pub struct SpyExecutor {
    invocations: Vec<RecordedInvocation>,
    outcomes: VecDeque<ProcessOutput>,
}

impl SpyExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome replayed for the next recorded invocation.
    pub fn push_outcome(&mut self, outcome: ProcessOutput) -> &mut Self {
        self.outcomes.push_back(outcome);
        self
    }

    /// Shorthand for queueing a bare exit code.
    pub fn push_exit_code(&mut self, exit_code: i32) -> &mut Self {
        self.push_outcome(ProcessOutput {
            exit_code,
            ..Default::default()
        })
    }

    pub fn invocations(&self) -> &[RecordedInvocation] {
        &self.invocations
    }

    /// Command lines in execution order.
    pub fn executed(&self) -> Vec<String> {
        self.invocations
            .iter()
            .map(|record| record.invocation.command_line())
            .collect()
    }
}

impl ExecutorBackend for SpyExecutor {
    fn execute(
        &mut self,
        invocation: &Invocation,
        working_dir: Option<&Path>,
    ) -> Result<ProcessOutput> {
        self.invocations.push(RecordedInvocation {
            invocation: invocation.clone(),
            working_dir: working_dir.map(Path::to_path_buf),
        });
        Ok(self.outcomes.pop_front().unwrap_or_default())
    }
}
