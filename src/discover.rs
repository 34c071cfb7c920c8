use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr, bail, eyre};
use glob::{MatchOptions, Pattern};

use crate::record::ShaderStage;

//

/// lists the shader sources directly inside `dir`
///
/// files are grouped by stage in [`ShaderStage::ALL`] order and sorted
/// by name within a stage, subdirectories are not searched, and the
/// returned paths are relative to `dir`
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(dir)
        .wrap_err_with(|| format!("cannot read shader directory {}", dir.display()))?;
    if !meta.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let dir_str = dir
        .to_str()
        .ok_or_else(|| eyre!("shader directory {} is not valid utf-8", dir.display()))?;
    let prefix = Pattern::escape(dir_str);

    // `*` never matches a leading dot, like a shell glob
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut found = Vec::new();
    for stage in ShaderStage::ALL {
        let pattern = format!("{prefix}/*.{}", stage.extension());
        let entries = glob::glob_with(&pattern, options)
            .wrap_err_with(|| format!("bad pattern {pattern}"))?;

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    tracing::warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            if !path.is_file() {
                continue;
            }

            if let Some(name) = path.file_name() {
                found.push(PathBuf::from(name));
            }
        }
    }

    tracing::debug!("found {} shader sources in {}", found.len(), dir.display());
    Ok(found)
}

//
