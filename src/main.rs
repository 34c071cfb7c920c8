use std::{io, path::Path, process::ExitCode};

use eyre::Result;

use self::{
    compiler::{Glslang, OUTPUT_DIR},
    runner::Summary,
};

//

mod compiler;
mod discover;
mod record;
mod report;
mod runner;
#[cfg(test)]
mod testutil;

//

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let dir = Path::new(".");

    // not created here, the compiler reports every file as failed instead
    if !dir.join(OUTPUT_DIR).is_dir() {
        tracing::warn!("output directory {OUTPUT_DIR} does not exist");
    }

    let summary = runner::run(dir, &mut Glslang::new(dir), &mut io::stdout().lock())?;
    Ok(exit_code(&summary))
}

/// any failed file fails the whole run
fn exit_code(summary: &Summary) -> ExitCode {
    if summary.is_success() {
        return ExitCode::SUCCESS;
    }

    tracing::debug!(
        "{} of {} shaders failed",
        summary.failures().count(),
        summary.records().len()
    );
    ExitCode::FAILURE
}

//
