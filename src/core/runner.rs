use crate::domain::ports::{Outcome, Program};
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

pub struct KataRunner<P: Program> {
    program: P,
}

impl<P: Program> KataRunner<P> {
    pub fn new(program: P) -> Self {
        Self { program }
    }

    /// Runs the program against arbitrary handles. Output is flushed before
    /// returning, also when the program failed part way.
    pub fn run_with(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Outcome> {
        tracing::info!("Starting {}", self.program.name());

        let result = self.program.run(input, output);
        output.flush()?;

        match &result {
            Ok(outcome) => tracing::info!(?outcome, "{} finished", self.program.name()),
            Err(e) => tracing::error!("{} failed: {}", self.program.name(), e),
        }
        result
    }

    /// Runs the program on the process console and returns the exit code.
    /// Failures are reported on stderr.
    pub fn run_console(&self) -> i32 {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut input = stdin.lock();
        let mut output = stdout.lock();

        let result = self.run_with(&mut input, &mut output);
        exit_code(&result, &mut io::stderr())
    }
}

/// Maps a finished run to the process exit code. Reported domain errors
/// already went to stdout and count as success; failures are written to
/// `stderr`.
pub fn exit_code(result: &Result<Outcome>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(Outcome::Completed) | Ok(Outcome::Reported) => 0,
        Err(e) => {
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(stderr, "{}", e.user_friendly_message());
            e.exit_code()
        }
    }
}
