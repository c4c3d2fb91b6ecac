//! Binary discovery over an explicit search path.

use crate::process::domain::SearchPath;
use camino::{Utf8Path, Utf8PathBuf};

/// Locates an executable by name in a [`SearchPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryLocator {
    binary: String,
    search_path: SearchPath,
}

impl BinaryLocator {
    /// Creates a locator for `binary` over `search_path`.
    #[must_use]
    pub fn new(binary: impl Into<String>, search_path: SearchPath) -> Self {
        Self {
            binary: binary.into(),
            search_path,
        }
    }

    /// Returns the binary name being searched for.
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Returns the first executable match in search order.
    ///
    /// A binary name containing a path separator is checked as-is instead of
    /// being searched for.
    #[must_use]
    pub fn locate(&self) -> Option<Utf8PathBuf> {
        let direct = Utf8Path::new(&self.binary);
        if direct.components().count() > 1 {
            return is_executable(direct).then(|| direct.to_path_buf());
        }

        self.search_path.dirs().find_map(|dir| {
            candidate_names(&self.binary)
                .map(|name| dir.join(name))
                .find(|candidate| is_executable(candidate))
        })
    }
}

fn candidate_names(binary: &str) -> impl Iterator<Item = String> {
    let windows_name = cfg!(windows).then(|| format!("{binary}.exe"));
    std::iter::once(binary.to_owned()).chain(windows_name)
}

#[cfg(unix)]
fn is_executable(path: &Utf8Path) -> bool {
    use nix::unistd::{AccessFlags, access};

    path.is_file() && access(path.as_std_path(), AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn is_executable(path: &Utf8Path) -> bool {
    path.is_file()
}
