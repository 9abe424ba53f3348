use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use derive_new::new;

/// One data file discovered in the array library, with the experiment folder
/// and file name it will be reported under.
#[derive(new, Debug, Clone)]
pub struct ArrayFile {
    pub exp_folder: String,
    pub array: String,
    pub path: PathBuf,
}

/// Enumerates the array files of a microarray experiment library.
///
/// Each subdirectory of `root` is an experiment folder; regular files
/// directly inside one qualify as data files if they are not hidden and
/// carry no filename extension. Nothing below that level is visited.
///
/// Output is sorted by (experiment folder, file name) so downstream result
/// tables assemble in a deterministic order regardless of directory listing
/// order. A missing or non-directory root fails the whole run.
pub fn scan_library(root: &Path) -> Result<Vec<ArrayFile>> {
    if !root.is_dir() {
        bail!("array library root '{}' does not exist or is not a directory", root.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(root)
        .with_context(|| format!("failed to list array library root '{}'", root.display()))?
    {
        let folder = entry?.path();
        if !folder.is_dir() {
            continue;
        }
        let folder_name = match folder.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        for entry in fs::read_dir(&folder)
            .with_context(|| format!("failed to list experiment folder '{}'", folder.display()))?
        {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let file_name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            if file_name.starts_with('.') || path.extension().is_some() {
                continue;
            }
            files.push(ArrayFile::new(folder_name.clone(), file_name, path));
        }
    }

    files.sort_unstable_by(|a, b| {
        (a.exp_folder.as_str(), a.array.as_str()).cmp(&(b.exp_folder.as_str(), b.array.as_str()))
    });
    Ok(files)
}
