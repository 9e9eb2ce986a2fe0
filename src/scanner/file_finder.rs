use crate::config::FileConfig;
use crate::error::{RdbSumError, Result};
use crate::scanner::file_filter::FileFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Builds the list of input files from path arguments. Each argument may be
/// a plain file, a directory (searched recursively for the configured text
/// extension), or a glob pattern with `*` and `?` wildcards.
pub struct FileFinder {
    filter: FileFilter,
    max_depth: usize,
}

impl FileFinder {
    pub fn new(config: &FileConfig) -> Self {
        Self {
            filter: FileFilter::new(config),
            max_depth: config.max_depth,
        }
    }

    /// Expands every argument and returns the combined file list, sorted
    /// and deduplicated so processing order is deterministic. I/O errors
    /// during traversal are fatal for the run.
    pub fn collect(&self, paths: &[String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for argument in paths {
            // Stray quotes and commas from shell-pasted lists are ignored.
            let cleaned: String = argument
                .chars()
                .filter(|&c| c != '"' && c != ',')
                .collect();

            let entries = glob::glob(&cleaned).map_err(|e| RdbSumError::InvalidPattern {
                pattern: cleaned.clone(),
                source: e,
            })?;

            for entry in entries {
                let path = entry.map_err(|e| RdbSumError::Io(e.into_error()))?;
                if path.is_file() {
                    files.push(path);
                } else if path.is_dir() {
                    self.walk(&path, &mut files)?;
                }
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    fn walk(&self, root: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let walker = WalkDir::new(root)
            .max_depth(self.max_depth)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                entry.file_type().is_file()
                    || entry.depth() == 0
                    || self.filter.should_traverse_directory(entry.path())
            });

        for entry in walker {
            let entry = entry.map_err(|e| match e.into_io_error() {
                Some(io) => RdbSumError::Io(io),
                None => RdbSumError::InvalidPath {
                    path: root.display().to_string(),
                },
            })?;

            if entry.file_type().is_file() && self.filter.matches_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(())
    }
}
