//! Template directory loading.
//! The template directory holds two roots: `theme/` with the files owned by
//! the theme generator and `shared/` with files shared across generators.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Template directory in the source tree the binary was built from.
pub const BUILD_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Name of the template directory in an installation.
pub const TEMPLATE_DIR_NAME: &str = "templates";

/// Name of the generator root inside the template directory.
pub const GENERATOR_ROOT: &str = "theme";

/// Name of the shared root inside the template directory.
pub const SHARED_ROOT: &str = "shared";

/// Which template root a manifest source is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRoot {
    Generator,
    Shared,
}

/// Resolved locations of both template roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoots {
    generator: PathBuf,
    shared: PathBuf,
}

impl TemplateRoots {
    pub fn new<P: Into<PathBuf>>(generator: P, shared: P) -> Self {
        Self { generator: generator.into(), shared: shared.into() }
    }

    /// Returns the directory for `root`.
    pub fn path(&self, root: TemplateRoot) -> &Path {
        match root {
            TemplateRoot::Generator => &self.generator,
            TemplateRoot::Shared => &self.shared,
        }
    }
}

fn has_template_roots(dir: &Path) -> bool {
    dir.join(GENERATOR_ROOT).is_dir() && dir.join(SHARED_ROOT).is_dir()
}

/// Places an installation may keep its templates, nearest to `exe` first:
/// `<bin>/templates` and `<prefix>/share/wpmake/templates`.
pub fn template_dir_candidates(exe: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(bin_dir) = exe.parent() {
        candidates.push(bin_dir.join(TEMPLATE_DIR_NAME));
        if let Some(prefix) = bin_dir.parent() {
            candidates.push(
                prefix.join("share").join(env!("CARGO_PKG_NAME")).join(TEMPLATE_DIR_NAME),
            );
        }
    }
    candidates
}

/// Finds the template directory belonging to the binary at `exe`.
///
/// Falls back to `BUILD_TEMPLATE_DIR` when the installation carries no
/// templates, which is the case for `cargo run` and `cargo test`.
pub fn find_template_dir(exe: &Path) -> PathBuf {
    template_dir_candidates(exe)
        .into_iter()
        .find(|dir| has_template_roots(dir))
        .unwrap_or_else(|| PathBuf::from(BUILD_TEMPLATE_DIR))
}

/// Template directory used when `--template-dir` is not given.
pub fn default_template_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => find_template_dir(&exe),
        Err(e) => {
            debug!("Cannot locate the running executable: {e}");
            PathBuf::from(BUILD_TEMPLATE_DIR)
        }
    }
}

/// Locates both template roots inside `template_dir`.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if the directory or one of its roots is missing
pub fn load_template_roots<P: AsRef<Path>>(template_dir: P) -> Result<TemplateRoots> {
    let template_dir = template_dir.as_ref();
    let roots = TemplateRoots::new(
        template_dir.join(GENERATOR_ROOT),
        template_dir.join(SHARED_ROOT),
    );

    for root in [TemplateRoot::Generator, TemplateRoot::Shared] {
        let path = roots.path(root);
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
    }

    debug!("Using templates from '{}'", template_dir.display());
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_template_roots() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join(GENERATOR_ROOT)).unwrap();

        match load_template_roots(temp_dir.path()) {
            Err(Error::TemplateDoesNotExistsError { template_dir }) => {
                assert!(template_dir.ends_with(SHARED_ROOT))
            }
            other => panic!("Expected TemplateDoesNotExistsError, got {other:?}"),
        }

        std::fs::create_dir(temp_dir.path().join(SHARED_ROOT)).unwrap();
        let roots = load_template_roots(temp_dir.path()).unwrap();
        assert_eq!(roots.path(TemplateRoot::Shared), temp_dir.path().join(SHARED_ROOT));
    }
}
