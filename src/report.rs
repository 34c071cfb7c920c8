use std::io::{self, Write};

use crate::record::CompilationRecord;

//

/// writes one line per failed record, in the order given
pub fn write_failures<'a>(
    records: impl IntoIterator<Item = &'a CompilationRecord>,
    out: &mut impl Write,
) -> io::Result<()> {
    for record in records.into_iter().filter(|r| r.is_failed()) {
        writeln!(out, "Failed to compile {}", record.source_path().display())?;
    }
    Ok(())
}

//
