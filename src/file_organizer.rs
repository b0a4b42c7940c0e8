//! Moving files into category subdirectories.
//!
//! Handles the filesystem side of organization: creating the category
//! directory on demand, resolving destination name collisions according to
//! the configured policy, and performing the move itself.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CollisionPolicy;

/// Errors that can occur while moving a file into its category directory.
#[derive(Debug)]
pub enum MoveError {
    /// Failed to create the category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The destination already exists and the policy is `fail`.
    DestinationExists { destination: PathBuf },
    /// The move itself (or clearing the destination for `overwrite`) failed.
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::DestinationExists { destination } => {
                write!(f, "Destination already exists: {}", destination.display())
            }
            Self::MoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Result type for move operations.
pub type MoveResult<T> = Result<T, MoveError>;

/// Moves files into category subdirectories of a source directory.
pub struct FileMover;

impl FileMover {
    /// Move `file_path` into `<source_dir>/<category>/`, creating the
    /// category directory if it does not exist yet.
    ///
    /// When a file with the same name already sits in the category directory,
    /// `on_collision` decides the outcome: `Fail` returns
    /// [`MoveError::DestinationExists`], `Overwrite` replaces the existing
    /// file, and `Rename` moves the incoming file under a timestamp-suffixed
    /// name so both survive.
    ///
    /// Returns the path the file ended up at.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sortbox::config::CollisionPolicy;
    /// use sortbox::file_organizer::FileMover;
    /// use std::path::Path;
    ///
    /// let moved = FileMover::move_to_category(
    ///     Path::new("/home/me/Downloads"),
    ///     Path::new("/home/me/Downloads/report.pdf"),
    ///     "Documents",
    ///     CollisionPolicy::Rename,
    /// );
    /// ```
    pub fn move_to_category(
        source_dir: &Path,
        file_path: &Path,
        category: &str,
        on_collision: CollisionPolicy,
    ) -> MoveResult<PathBuf> {
        let category_dir = source_dir.join(category);

        fs::create_dir_all(&category_dir).map_err(|e| MoveError::DirectoryCreationFailed {
            path: category_dir.clone(),
            source: e,
        })?;

        let file_name = file_path.file_name().ok_or_else(|| MoveError::MoveFailed {
            from: file_path.to_path_buf(),
            to: category_dir.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "file has no name component",
            ),
        })?;

        let mut destination = category_dir.join(file_name);

        if destination.exists() {
            match on_collision {
                CollisionPolicy::Fail => {
                    return Err(MoveError::DestinationExists { destination });
                }
                CollisionPolicy::Overwrite => {
                    // fs::rename only clobbers on some platforms; clear the
                    // destination first so overwrite means overwrite everywhere.
                    fs::remove_file(&destination).map_err(|e| MoveError::MoveFailed {
                        from: file_path.to_path_buf(),
                        to: destination.clone(),
                        source: e,
                    })?;
                }
                CollisionPolicy::Rename => {
                    destination = Self::timestamped_destination(&destination);
                }
            }
        }

        fs::rename(file_path, &destination).map_err(|e| MoveError::MoveFailed {
            from: file_path.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;

        Ok(destination)
    }

    /// Alternate destination for a colliding file.
    ///
    /// Example: `report.pdf` becomes `report.pdf.20260807-101530`.
    fn timestamped_destination(destination: &Path) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let file_name = destination
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file");

        let alternate = format!("{}.{}", file_name, timestamp);

        if let Some(parent) = destination.parent() {
            parent.join(alternate)
        } else {
            PathBuf::from(alternate)
        }
    }
}
