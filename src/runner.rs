use std::{io::Write, path::Path};

use eyre::{Result, WrapErr};

use crate::{
    compiler::{Compiler, output_path},
    discover::discover,
    record::CompilationRecord,
    report::write_failures,
};

//

/// every record of one run, in discovery order
#[derive(Debug)]
pub struct Summary {
    records: Vec<CompilationRecord>,
}

impl Summary {
    pub fn records(&self) -> &[CompilationRecord] {
        &self.records
    }

    pub fn failures(&self) -> impl Iterator<Item = &CompilationRecord> {
        self.records.iter().filter(|r| r.is_failed())
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl From<Vec<CompilationRecord>> for Summary {
    fn from(records: Vec<CompilationRecord>) -> Self {
        Self { records }
    }
}

/// compiles every shader source in `dir` one at a time, then reports the failures
///
/// a failing file never stops the files after it
pub fn run(dir: &Path, compiler: &mut impl Compiler, out: &mut impl Write) -> Result<Summary> {
    let mut records: Vec<CompilationRecord> = discover(dir)?
        .into_iter()
        .map(CompilationRecord::new)
        .collect();

    for record in &mut records {
        let source = record.source_path();
        writeln!(out, "compiling {}", source.display()).wrap_err("failed to write progress")?;
        out.flush().wrap_err("failed to write progress")?;

        tracing::debug!("{} stage {:?}", source.display(), record.stage());
        let succeeded = compiler.compile(source, &output_path(source));
        record.finish(succeeded);
    }

    write_failures(&records, out).wrap_err("failed to write failure report")?;

    Ok(records.into())
}

//
