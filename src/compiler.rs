use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::Command,
};

//

/// external compiler, looked up through `PATH`
pub const PROGRAM: &str = "glslangvalidator";

/// artifact directory, relative to the shader directory
pub const OUTPUT_DIR: &str = "../bin";

/// `a.vert` -> `../bin/a.vert.spv`
pub fn output_path(source: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".spv");
    Path::new(OUTPUT_DIR).join(name)
}

//

pub trait Compiler {
    /// compiles `source` into `output`, blocking until done
    ///
    /// returns true only on success
    fn compile(&mut self, source: &Path, output: &Path) -> bool;
}

/// runs `glslangvalidator -V <source> -o <output>` from the shader directory
pub struct Glslang {
    program: OsString,
    working_dir: PathBuf,
}

impl Glslang {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self::with_program(PROGRAM, working_dir)
    }

    pub fn with_program(program: impl AsRef<OsStr>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            working_dir: working_dir.into(),
        }
    }
}

impl Compiler for Glslang {
    fn compile(&mut self, source: &Path, output: &Path) -> bool {
        let status = Command::new(&self.program)
            .arg("-V")
            .arg(source)
            .arg("-o")
            .arg(output)
            .current_dir(&self.working_dir)
            .status();

        match status {
            Ok(status) => {
                tracing::debug!("{} exited with {status}", self.program.to_string_lossy());
                status.success()
            }
            Err(err) => {
                tracing::error!(
                    "failed to launch {}: {err}",
                    self.program.to_string_lossy()
                );
                false
            }
        }
    }
}

//
