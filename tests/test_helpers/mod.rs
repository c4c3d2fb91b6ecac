//! Stateful fake `k3d` binary for integration tests.
//!
//! The fake is a POSIX shell script written into a temporary directory. It
//! keeps its clusters and registries in files next to itself, records every
//! invocation, and is reached through an injected search path that puts its
//! directory ahead of the inherited `PATH`, so tests never modify the
//! process environment.

use camino::Utf8PathBuf;
use eyre::{WrapErr, eyre};
use k3dctl::k3d::domain::VersionRequirement;
use k3dctl::process::adapters::ProcessToolRunner;
use k3dctl::process::domain::SearchPath;
use k3dctl::{K3d, K3dConfig};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

/// Version reported by default, inside the default requirement.
pub const COMPATIBLE_VERSION: &str = "v5.4.6";

const SCRIPT_TEMPLATE: &str = r#"#!/bin/sh
state='__STATE__'
clusters="$state/clusters"
registries="$state/registries"
touch "$clusters" "$registries"
printf '%s\n' "$*" >> "$state/invocations"

list_json() {
  sep=''
  printf '['
  while IFS= read -r entry; do
    [ -n "$entry" ] || continue
    printf '%s{"name":"%s"}' "$sep" "$entry"
    sep=','
  done < "$1"
  printf ']\n'
}

remove_entry() {
  grep -vx -- "$2" "$1" > "$1.tmp" || true
  mv "$1.tmp" "$1"
}

case "$1" in
  version)
    echo "k3d version __VERSION__"
    echo "k3s version v1.24.4-k3s1 (default)"
    exit 0
    ;;
  cluster)
    case "$2" in
      list)
        list_json "$clusters"
        exit 0
        ;;
      create)
        if grep -qx -- "$3" "$clusters"; then
          echo "FATA[0000] Failed to create cluster '$3' because a cluster with that name already exists" >&2
          exit 1
        fi
        echo "INFO[0000] Prep: Network"
        echo "$3" >> "$clusters"
        echo "INFO[0001] Cluster '$3' created successfully!"
        exit 0
        ;;
      delete)
        if ! grep -qx -- "$3" "$clusters"; then
          echo "ERRO[0000] No nodes found for given cluster" >&2
          exit 1
        fi
        remove_entry "$clusters" "$3"
        echo "INFO[0000] Successfully deleted cluster $3!"
        exit 0
        ;;
    esac
    ;;
  registry)
    case "$2" in
      list)
        list_json "$registries"
        exit 0
        ;;
      create)
        if grep -qx -- "k3d-$3" "$registries"; then
          echo "FATA[0000] Failed to create registry: container 'k3d-$3' already exists" >&2
          exit 1
        fi
        echo "k3d-$3" >> "$registries"
        echo "INFO[0000] Successfully created registry 'k3d-$3'"
        exit 0
        ;;
      delete)
        if ! grep -qx -- "$3" "$registries"; then
          echo "FATA[0000] failed to get nodes for node filter" >&2
          exit 1
        fi
        remove_entry "$registries" "$3"
        exit 0
        ;;
    esac
    ;;
  sleep)
    echo "sleeping"
    exec sleep "$2"
    ;;
esac

echo "Error: unknown command \"$2\" for \"k3d $1\"" >&2
exit 1
"#;

/// A fake k3d installation living in a temporary directory.
pub struct FakeK3d {
    _dir: TempDir,
    bin_dir: Utf8PathBuf,
    state_dir: Utf8PathBuf,
}

impl FakeK3d {
    /// Installs a fake reporting [`COMPATIBLE_VERSION`].
    pub fn install() -> Result<Self, eyre::Report> {
        Self::with_version(COMPATIBLE_VERSION)
    }

    /// Installs a fake reporting `version` from `k3d version`.
    pub fn with_version(version: &str) -> Result<Self, eyre::Report> {
        let dir = tempfile::tempdir().wrap_err("temp dir should be created")?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| eyre!("temp dir is not UTF-8: {}", path.display()))?;
        let bin_dir = root.join("bin");
        let state_dir = root.join("state");
        fs::create_dir_all(&bin_dir).wrap_err("bin dir should be created")?;
        fs::create_dir_all(&state_dir).wrap_err("state dir should be created")?;

        let script = SCRIPT_TEMPLATE
            .replace("__STATE__", state_dir.as_str())
            .replace("__VERSION__", version);
        let script_path = bin_dir.join("k3d");
        fs::write(&script_path, script).wrap_err("fake k3d should be written")?;
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
            .wrap_err("fake k3d should be executable")?;

        Ok(Self {
            _dir: dir,
            bin_dir,
            state_dir,
        })
    }

    /// Returns the inherited `PATH` with the fake searched first.
    pub fn search_path(&self) -> SearchPath {
        SearchPath::from_env().prepend(self.bin_dir.clone())
    }

    /// Returns a configuration resolving the fake with the default
    /// requirement.
    pub fn config(&self) -> K3dConfig {
        K3dConfig::new(self.search_path()).with_version_requirement(VersionRequirement::new(5, 0))
    }

    /// Returns a client wired to the fake.
    pub fn client(&self) -> K3d<ProcessToolRunner> {
        K3d::from_config(&self.config())
    }

    /// Returns every recorded invocation, one argument line per call.
    pub fn invocations(&self) -> Result<Vec<String>, eyre::Report> {
        let path = self.state_dir.join("invocations");
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path).wrap_err("invocations should be readable")?;
        Ok(contents.lines().map(str::to_owned).collect())
    }
}
