//! Command-line interface module for dirsweep.
//!
//! This module holds the argument parser and the orchestration of the sweep
//! pipeline: enumerate the directory, classify names by extension, provision
//! the extension directories, and move the files.

use crate::classifier::classify;
use crate::organizer::{FileSweeper, SweepResult};
use clap::Parser;
use std::collections::HashSet;
use std::path::Path;

/// Sweep the working directory's loose files into per-extension folders.
#[derive(Parser, Debug)]
#[command(name = "dirsweep")]
#[command(version)]
#[command(about = "Sweep loose files into per-extension subdirectories", long_about = None)]
pub struct Cli {
    /// Filenames to leave untouched (exact match, case-sensitive)
    #[arg(value_name = "EXCLUDE")]
    pub exclude: Vec<String>,
}

/// Runs the sweep pipeline on a directory.
///
/// Stages run strictly in order and fail fast: the first error aborts the
/// run and files moved before it stay moved. All extension directories are
/// provisioned before the first move. On success nothing is printed.
///
/// # Arguments
///
/// * `dir` - The directory to sweep
/// * `exclude` - Exact filenames to skip entirely
///
/// # Examples
///
/// ```no_run
/// use dirsweep::cli::run;
/// use std::collections::HashSet;
/// use std::path::Path;
///
/// let exclude = HashSet::new();
/// match run(Path::new("/path/to/directory"), &exclude) {
///     Ok(()) => {}
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run(dir: &Path, exclude: &HashSet<String>) -> SweepResult<()> {
    let names = FileSweeper::list_entries(dir, exclude)?;
    let map = classify(names);

    FileSweeper::provision_dirs(dir, &map)?;

    for (extension, filenames) in &map {
        FileSweeper::move_files(dir, extension, filenames)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_positional_args_become_exclusions() {
        let cli = Cli::parse_from(["dirsweep", "keep.txt", "Cargo.toml"]);
        assert_eq!(cli.exclude, vec!["keep.txt", "Cargo.toml"]);
    }

    #[test]
    fn test_no_args_means_empty_exclusion_list() {
        let cli = Cli::parse_from(["dirsweep"]);
        assert!(cli.exclude.is_empty());
    }

    #[test]
    fn test_run_on_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let exclude = HashSet::new();

        run(temp_dir.path(), &exclude).expect("Sweep of empty directory should succeed");
    }

    #[test]
    fn test_run_moves_classified_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        fs::write(base.join("a.txt"), "a").expect("Failed to write test file");

        let exclude = HashSet::new();
        run(base, &exclude).expect("Sweep should succeed");

        assert!(base.join(".txt").join("a.txt").is_file());
        assert!(!base.join("a.txt").exists());
    }
}
