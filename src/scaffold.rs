use derive_builder::Builder;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::layout::{Entry, ENTRIES, TEMPLATE_FILES};
use crate::templates::TemplateSource;

/// Everything that can go wrong while scaffolding, with the offending path
/// and the underlying cause where there is one.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("destination {} is not an accessible directory", .path.display())]
    DestinationNotADirectory { path: PathBuf },

    /// The project root is already present. Expected condition, reported
    /// rather than treated as a failure by the CLI.
    #[error("{} already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("template source {} is not an accessible directory", .path.display())]
    TemplatesMissing { path: PathBuf },

    #[error("failed to resolve the current working directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy template {}", .path.display())]
    CopyTemplate {
        path: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },
}

/// What a successful run created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub dirs: usize,
    pub files: usize,
}

/// Creates the canonical project skeleton under `destination/name`.
///
/// All paths are joined under the resolved root; the working directory is
/// never changed. There is no rollback: a failure partway leaves the
/// entries created so far on disk.
#[derive(Builder)]
pub struct Scaffolder {
    /// Name of the project root directory.
    name: String,
    /// Existing directory the root is created in.
    destination: PathBuf,
    /// Source of the copied boilerplate files.
    templates: TemplateSource,
}

impl Scaffolder {
    /// Create a new [`Scaffolder`] builder
    #[must_use]
    pub fn builder() -> ScaffolderBuilder {
        ScaffolderBuilder::create_empty()
    }

    /// The project root this scaffolder creates.
    #[must_use]
    pub fn root(&self) -> PathBuf {
        self.destination.join(&self.name)
    }

    /// Creates the skeleton: the root, every layout entry in order, then the
    /// boilerplate copies.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the destination is not a directory, the root
    /// already exists, or any create/copy step fails. Entries inside the
    /// root are created exclusively, so anything already present there
    /// (e.g. leftovers of an earlier aborted run under a root that was
    /// removed and renamed back) is a hard error, never overwritten.
    pub fn run(&self) -> Result<ScaffoldReport, ScaffoldError> {
        if !self.destination.is_dir() {
            return Err(ScaffoldError::DestinationNotADirectory {
                path: self.destination.clone(),
            });
        }

        let root = self.root();

        // Only a directory counts as the reported condition; a plain file
        // of the same name falls through to a fatal create error below.
        if root.is_dir() {
            return Err(ScaffoldError::AlreadyExists { path: root });
        }

        let mut report = ScaffoldReport::default();

        Self::create_dir(&root)?;
        report.dirs += 1;

        for entry in ENTRIES {
            match entry {
                Entry::Dir(rel) => {
                    Self::create_dir(&root.join(rel))?;
                    report.dirs += 1;
                }
                Entry::EmptyFile(rel) => {
                    Self::create_empty_file(&root.join(rel))?;
                    report.files += 1;
                }
            }
        }

        for name in TEMPLATE_FILES {
            let from = self.templates.file(name);

            fs_extra::file::copy(&from, root.join(name), &fs_extra::file::CopyOptions::new())
                .map_err(|source| ScaffoldError::CopyTemplate { path: from, source })?;
            report.files += 1;
        }

        Ok(report)
    }

    fn create_dir(path: &Path) -> Result<(), ScaffoldError> {
        fs::create_dir(path).map_err(|source| ScaffoldError::Create {
            path: path.to_owned(),
            source,
        })
    }

    fn create_empty_file(path: &Path) -> Result<(), ScaffoldError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|source| ScaffoldError::Create {
                path: path.to_owned(),
                source,
            })
    }
}
