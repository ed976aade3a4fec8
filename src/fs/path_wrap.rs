use std::path::{self, Component, Path, PathBuf};

use crate::collections::ListWrap;
use crate::error::IoError;
use crate::fs::files;
use crate::text::StringWrap;
use crate::wrap::Wrap;

/// A wrapped [`PathBuf`].
///
/// Queries go through [`files`], so an absent path doesn't exist, isn't a file and can't be
/// written to.
///
/// ```no_run
/// # use fluent_wrap::wrap;
/// let log = wrap(std::path::Path::new("target/app.log"));
/// if log.touch() {
///     log.write_string("started\n").unwrap();
/// }
/// assert_eq!(log.size(), 2);
/// ```
pub type PathWrap = Wrap<PathBuf>;

impl Wrap<PathBuf> {
    fn path(&self) -> Option<&Path> {
        self.value.as_deref()
    }

    pub fn exists(&self) -> bool {
        files::exists(self.path())
    }

    pub fn is_file(&self) -> bool {
        files::is_file(self.path())
    }

    pub fn is_dir(&self) -> bool {
        files::is_dir(self.path())
    }

    pub fn is_empty_file(&self) -> bool {
        files::is_empty_file(self.path())
    }

    /// See [`files::is_empty_dir`].
    ///
    /// # Errors
    /// Returns an [`IoError`] if the path can't be listed as a directory.
    pub fn is_empty_dir(&self) -> Result<bool, IoError> {
        files::is_empty_dir(self.path())
    }

    pub fn contains_files(&self, recursive: bool) -> bool {
        files::contains_files(self.path(), recursive)
    }

    pub fn contains_files_recursive(&self) -> bool {
        self.contains_files(true)
    }

    pub fn can_write(&self) -> bool {
        files::can_write(self.path())
    }

    /// Creates an empty file at the path if nothing is there yet. Returns true if the path exists
    /// afterwards.
    pub fn touch(&self) -> bool {
        files::touch(self.path())
    }

    /// Writes `content` to the path. An absent path writes nothing.
    ///
    /// # Errors
    /// Returns the [`IoError`] of the underlying write.
    pub fn write_string(&self, content: &str) -> Result<&Self, IoError> {
        if let Some(path) = self.path() {
            files::write_string(path, content)?;
        }
        Ok(self)
    }

    /// Makes the path absolute against the current directory, without touching the filesystem
    /// or resolving symlinks.
    ///
    /// # Errors
    /// Returns an [`IoError`] if the path is empty or the current directory can't be read.
    pub fn absolute(&mut self) -> Result<&mut Self, IoError> {
        if let Some(path) = self.value.take() {
            self.value = Some(path::absolute(path)?);
        }
        Ok(self)
    }

    /// The absolute form of the path as a string, absent if the path is or can't be made absolute.
    pub fn absolute_path(&self) -> StringWrap {
        let absolute = self.path().and_then(|path| path::absolute(path).ok());
        Wrap::from_option(absolute.map(|path| path.to_string_lossy().into_owned()))
    }

    /// Replaces the path with its canonical form, which requires it to exist.
    ///
    /// # Errors
    /// Returns an [`IoError`] if the path can't be resolved.
    pub fn canonical(&mut self) -> Result<&mut Self, IoError> {
        if let Some(path) = self.path() {
            self.value = Some(std::fs::canonicalize(path)?);
        }
        Ok(self)
    }

    /// The named components of the path, without the root or any `.` segments.
    ///
    /// ```
    /// # use fluent_wrap::wrap;
    /// let path = wrap(std::path::Path::new("/usr/./lib/../bin"));
    /// assert_eq!(path.components().to_string(), "[usr, lib, .., bin]");
    /// ```
    pub fn components(&self) -> ListWrap<String> {
        Wrap::from_option(self.path().map(|path| {
            path.components()
                .filter_map(|component| match component {
                    Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                    Component::ParentDir => Some(String::from("..")),
                    Component::RootDir | Component::CurDir | Component::Prefix(_) => None,
                })
                .collect()
        }))
    }

    /// The number of [`components`](Wrap::components), zero for an absent path.
    pub fn size(&self) -> usize {
        self.path()
            .map_or(0, |path| {
                path.components()
                    .filter(|component| {
                        matches!(component, Component::Normal(_) | Component::ParentDir)
                    })
                    .count()
            })
    }
}
