//! Materialization of a resolved manifest into the output directory.
//! Render entries are passed through the template engine, copy entries are
//! written byte for byte. Existing files are overwritten.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::manifest::{Mode, ResolvedEntry};
use crate::options::Variables;
use crate::renderer::TemplateRenderer;

/// What was done to produce a destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Rendered,
    Copied,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Rendered => write!(f, "Rendered"),
            FileAction::Copied => write!(f, "Copied"),
        }
    }
}

/// Outcome of materializing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub action: FileAction,
    pub target: PathBuf,
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| Error::io_failure(parent, e)),
        None => Ok(()),
    }
}

fn write_file(content: &str, dest_path: &Path) -> Result<()> {
    create_parent_dirs(dest_path)?;
    fs::write(dest_path, content).map_err(|e| Error::io_failure(dest_path, e))
}

fn copy_file(source_path: &Path, dest_path: &Path) -> Result<()> {
    let bytes = fs::read(source_path).map_err(|e| Error::io_failure(source_path, e))?;
    create_parent_dirs(dest_path)?;
    fs::write(dest_path, bytes).map_err(|e| Error::io_failure(dest_path, e))
}

/// Writes resolved manifest entries below an output directory.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    output_root: &'a Path,
    context: serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        output_root: &'a Path,
        variables: &Variables,
    ) -> Self {
        Self { engine, output_root, context: variables.to_context() }
    }

    /// Materializes a single entry.
    ///
    /// # Errors
    /// * `Error::IoFailure` naming the path that could not be read or written
    /// * `Error::TemplateError` if a render entry fails to render
    pub fn process(&self, entry: &ResolvedEntry) -> Result<ProcessResult> {
        let target = self.output_root.join(&entry.destination);

        let action = match entry.mode {
            Mode::Copy => {
                debug!("Copying '{}' to '{}'", entry.source.display(), target.display());
                copy_file(&entry.source, &target)?;
                FileAction::Copied
            }
            Mode::Render => {
                debug!("Rendering '{}' to '{}'", entry.source.display(), target.display());
                let template = fs::read_to_string(&entry.source)
                    .map_err(|e| Error::io_failure(&entry.source, e))?;
                let content = self.engine.render(&template, &self.context).map_err(|e| {
                    Error::TemplateError(format!(
                        "failed to render '{}': {e}",
                        entry.source.display()
                    ))
                })?;
                write_file(&content, &target)?;
                FileAction::Rendered
            }
        };

        Ok(ProcessResult { action, target })
    }

    /// Materializes every entry in order, stopping at the first failure.
    ///
    /// Files written before a failure are left in place.
    pub fn process_all(&self, entries: &[ResolvedEntry]) -> Result<Vec<ProcessResult>> {
        entries.iter().map(|entry| self.process(entry)).collect()
    }
}
