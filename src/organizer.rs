/// Filesystem stages of the sweep pipeline.
///
/// This module provides the three stages that touch the filesystem:
/// enumerating a directory's regular files, provisioning one subdirectory
/// per observed extension, and moving files into their extension directory
/// with collision-safe renaming.
use chrono::{DateTime, Datelike, Local, Timelike};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during a sweep run.
#[derive(Debug)]
pub enum SweepError {
    /// The scanned directory could not be read.
    DirectoryReadFailed { path: PathBuf, source: io::Error },
    /// Failed to create an extension directory.
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// An extension directory's name is already taken by a non-directory.
    DestinationNotADirectory { path: PathBuf },
    /// Failed to move a file into its extension directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryReadFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::DestinationNotADirectory { path } => {
                write!(
                    f,
                    "Destination {} already exists and is not a directory",
                    path.display()
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Renders the collision prefix for a renamed file.
///
/// The shape is `YYYY-M-D|H:M:S-` with numeric fields not zero-padded, so
/// `2024-3-5|9:7:2-notes.txt` is a typical renamed collision.
pub fn collision_prefix(now: &DateTime<Local>) -> String {
    format!(
        "{}-{}-{}|{}:{}:{}-",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Moves files into per-extension subdirectories of a base directory.
///
/// The three associated functions map onto the sweep stages and are called
/// in order: [`FileSweeper::list_entries`], [`FileSweeper::provision_dirs`],
/// [`FileSweeper::move_files`]. Each stage fails fast; a failed run leaves
/// already-moved files in place.
pub struct FileSweeper;

impl FileSweeper {
    /// Lists the names of a directory's immediate non-directory entries,
    /// skipping any name present in the exclusion set.
    ///
    /// Entries are returned sorted by name so repeated runs classify in a
    /// stable order. Entries whose type cannot be determined are skipped.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory to enumerate
    /// * `exclude` - Exact, case-sensitive filenames to leave untouched
    ///
    /// # Errors
    ///
    /// Returns `SweepError::DirectoryReadFailed` if the directory does not
    /// exist or cannot be read.
    pub fn list_entries(dir: &Path, exclude: &HashSet<String>) -> SweepResult<Vec<String>> {
        let entries = fs::read_dir(dir).map_err(|e| SweepError::DirectoryReadFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut names = Vec::new();

        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && !file_type.is_dir()
            {
                let name = entry.file_name().to_string_lossy().to_string();
                if !exclude.contains(&name) {
                    names.push(name);
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Ensures one subdirectory exists per extension key of the map.
    ///
    /// Creation is idempotent: a directory that already exists is reused.
    /// A name taken by a regular file is fatal, which is exactly what
    /// happens when a lone dotfile like `.gitignore` classifies under its
    /// own full name. All keys are provisioned before any file is moved, so
    /// a provisioning failure means zero moves for the run.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::DestinationNotADirectory` when the name is
    /// occupied by a non-directory, or `SweepError::DirectoryCreationFailed`
    /// for any other creation error.
    pub fn provision_dirs(
        base: &Path,
        map: &crate::classifier::ClassificationMap,
    ) -> SweepResult<()> {
        for extension in map.keys() {
            let dir_path = base.join(extension);

            match fs::create_dir(&dir_path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    if !dir_path.is_dir() {
                        return Err(SweepError::DestinationNotADirectory { path: dir_path });
                    }
                }
                Err(e) => {
                    return Err(SweepError::DirectoryCreationFailed {
                        path: dir_path,
                        source: e,
                    });
                }
            }
        }

        Ok(())
    }

    /// Moves each named file from the base directory into the extension's
    /// subdirectory.
    ///
    /// The filename is preserved unless the destination path already exists,
    /// in which case the name is prefixed with the current local timestamp
    /// (see [`collision_prefix`]). The existence check and the rename are
    /// not atomic against concurrent changes to the destination directory.
    ///
    /// # Arguments
    ///
    /// * `base` - The directory being swept
    /// * `extension` - The extension key, which is also the subdirectory name
    /// * `filenames` - The files classified under this extension
    ///
    /// # Errors
    ///
    /// Returns `SweepError::FileMoveFailure` on the first rename that fails;
    /// files moved before the failure stay moved.
    pub fn move_files(base: &Path, extension: &str, filenames: &[String]) -> SweepResult<()> {
        let dest_dir = base.join(extension);

        for name in filenames {
            let source_path = base.join(name);
            let mut destination_path = dest_dir.join(name);

            if destination_path.exists() {
                let renamed = format!("{}{}", collision_prefix(&Local::now()), name);
                destination_path = dest_dir.join(renamed);
            }

            fs::rename(&source_path, &destination_path).map_err(|e| {
                SweepError::FileMoveFailure {
                    source: source_path.clone(),
                    destination: destination_path.clone(),
                    source_error: e,
                }
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_collision_prefix_fields_not_padded() {
        let moment = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 2).unwrap();
        assert_eq!(collision_prefix(&moment), "2024-3-5|9:7:2-");
    }

    #[test]
    fn test_collision_prefix_wide_fields() {
        let moment = Local.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap();
        assert_eq!(collision_prefix(&moment), "2025-12-31|23:59:58-");
    }

    #[test]
    fn test_list_entries_skips_directories_and_exclusions() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        fs::write(base.join("b.txt"), "b").expect("Failed to write test file");
        fs::write(base.join("a.txt"), "a").expect("Failed to write test file");
        fs::write(base.join("skip.txt"), "s").expect("Failed to write test file");
        fs::create_dir(base.join("subdir")).expect("Failed to create subdirectory");

        let exclude: HashSet<String> = ["skip.txt".to_string()].into_iter().collect();
        let names = FileSweeper::list_entries(base, &exclude).expect("Failed to list entries");

        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_list_entries_missing_directory() {
        let exclude = HashSet::new();
        let result = FileSweeper::list_entries(Path::new("/non/existent/path"), &exclude);

        assert!(matches!(
            result,
            Err(SweepError::DirectoryReadFailed { .. })
        ));
    }

    #[test]
    fn test_provision_dirs_creates_and_reuses() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        fs::create_dir(base.join(".md")).expect("Failed to create directory");

        let mut map = HashMap::new();
        map.insert(".txt".to_string(), vec!["a.txt".to_string()]);
        map.insert(".md".to_string(), vec!["b.md".to_string()]);

        FileSweeper::provision_dirs(base, &map).expect("Failed to provision directories");

        assert!(base.join(".txt").is_dir());
        assert!(base.join(".md").is_dir());
    }

    #[test]
    fn test_provision_dirs_rejects_name_taken_by_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        fs::write(base.join(".txt"), "not a directory").expect("Failed to write test file");

        let mut map = HashMap::new();
        map.insert(".txt".to_string(), vec!["a.txt".to_string()]);

        let result = FileSweeper::provision_dirs(base, &map);

        assert!(matches!(
            result,
            Err(SweepError::DestinationNotADirectory { .. })
        ));
    }

    #[test]
    fn test_move_files_plain_move() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        fs::write(base.join("a.txt"), "content").expect("Failed to write test file");
        fs::create_dir(base.join(".txt")).expect("Failed to create directory");

        FileSweeper::move_files(base, ".txt", &["a.txt".to_string()])
            .expect("Failed to move files");

        assert!(!base.join("a.txt").exists());
        assert!(base.join(".txt").join("a.txt").is_file());
    }

    #[test]
    fn test_move_files_collision_gets_timestamp_prefix() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        fs::create_dir(base.join(".txt")).expect("Failed to create directory");
        fs::write(base.join(".txt").join("a.txt"), "incumbent").expect("Failed to write file");
        fs::write(base.join("a.txt"), "incoming").expect("Failed to write test file");

        FileSweeper::move_files(base, ".txt", &["a.txt".to_string()])
            .expect("Failed to move files");

        // The incumbent keeps its name and content.
        let incumbent =
            fs::read_to_string(base.join(".txt").join("a.txt")).expect("Failed to read file");
        assert_eq!(incumbent, "incumbent");

        let renamed: Vec<String> = fs::read_dir(base.join(".txt"))
            .expect("Failed to read directory")
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|n| n != "a.txt")
            .collect();

        assert_eq!(renamed.len(), 1);
        assert!(renamed[0].ends_with("-a.txt"));
        assert!(renamed[0].contains('|'));
    }

    #[test]
    fn test_move_files_missing_destination_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        fs::write(base.join("a.txt"), "content").expect("Failed to write test file");

        let result = FileSweeper::move_files(base, ".txt", &["a.txt".to_string()]);

        assert!(matches!(result, Err(SweepError::FileMoveFailure { .. })));
        assert!(base.join("a.txt").exists());
    }
}
