use std::path::{Path, PathBuf};

use crate::scaffold::ScaffoldError;

/// Directory the boilerplate files are looked up in when no explicit
/// template directory is given, relative to the invoking working directory.
pub const DEFAULT_DIR: &str = "ressources";

/// The directory the boilerplate `README.md` and `LICENSE` are copied from.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    dir: PathBuf,
}

impl TemplateSource {
    /// Resolves the template source, falling back to [`DEFAULT_DIR`] under
    /// the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the current directory cannot be resolved or the
    /// resulting path is not a directory. Individual template files are not
    /// checked here; a missing file surfaces when it is copied.
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self, ScaffoldError> {
        let dir = match dir {
            Some(dir) => dir,
            None => std::env::current_dir()
                .map_err(ScaffoldError::CurrentDir)?
                .join(DEFAULT_DIR),
        };

        if !dir.is_dir() {
            return Err(ScaffoldError::TemplatesMissing { path: dir });
        }

        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    /// Path of a single template file inside the source directory.
    #[must_use]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}
