//! Directories searched when resolving the external tool.

use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::ffi::OsStr;

/// Ordered list of directories searched for the external binary.
///
/// The search path is an explicit value: it is captured once (usually from
/// `PATH`) and then handed to the runner, so nothing reads process
/// environment while commands run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<Utf8PathBuf>,
}

impl SearchPath {
    /// Captures the current `PATH`. Entries that are not valid UTF-8 are
    /// skipped.
    #[must_use]
    pub fn from_env() -> Self {
        env::var_os("PATH").map_or_else(Self::default, |path| Self::parse(&path))
    }

    /// Parses a platform-formatted path list such as the value of `PATH`.
    #[must_use]
    pub fn parse(value: &OsStr) -> Self {
        let dirs = env::split_paths(value)
            .filter_map(|entry| Utf8PathBuf::from_path_buf(entry).ok())
            .filter(|dir| !dir.as_str().is_empty())
            .collect();
        Self { dirs }
    }

    /// Builds a search path from explicit directories.
    #[must_use]
    pub fn from_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy with `dir` searched before every existing entry.
    #[must_use]
    pub fn prepend(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.dirs.insert(0, dir.into());
        self
    }

    /// Iterates the directories in search order.
    pub fn dirs(&self) -> impl Iterator<Item = &Utf8Path> {
        self.dirs.iter().map(Utf8PathBuf::as_path)
    }

    /// Returns whether no directory would be searched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SearchPath;
    use camino::Utf8Path;
    use std::ffi::OsString;

    #[cfg(unix)]
    #[test]
    fn parse_splits_entries_in_order() {
        let search_path = SearchPath::parse(&OsString::from("/opt/bin:/usr/bin::/bin"));

        let dirs: Vec<&Utf8Path> = search_path.dirs().collect();

        assert_eq!(
            dirs,
            vec![
                Utf8Path::new("/opt/bin"),
                Utf8Path::new("/usr/bin"),
                Utf8Path::new("/bin")
            ]
        );
    }

    #[test]
    fn prepend_takes_precedence() {
        let search_path = SearchPath::from_dirs(["/usr/bin"]).prepend("/tmp/mock");

        let first = search_path.dirs().next();

        assert_eq!(first, Some(Utf8Path::new("/tmp/mock")));
    }

    #[test]
    fn default_is_empty() {
        assert!(SearchPath::default().is_empty());
    }
}
