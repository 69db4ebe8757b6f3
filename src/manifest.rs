//! The static manifest of files generated for a theme and its resolution
//! against the answers of a run.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};
use crate::loader::TemplateRoot::{self, Generator, Shared};
use crate::loader::TemplateRoots;
use crate::options::Variables;

/// How a source file becomes its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bytes are copied unchanged
    Copy,
    /// Source is rendered as a template
    Render,
}

/// A single manifest instruction.
///
/// `destination` may contain `{field}` placeholders, e.g. `{fileSlug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub root: TemplateRoot,
    pub source: &'static str,
    pub destination: &'static str,
    pub mode: Mode,
}

const fn render(
    root: TemplateRoot,
    source: &'static str,
    destination: &'static str,
) -> ManifestEntry {
    ManifestEntry { root, source, destination, mode: Mode::Render }
}

const fn copy(
    root: TemplateRoot,
    source: &'static str,
    destination: &'static str,
) -> ManifestEntry {
    ManifestEntry { root, source, destination, mode: Mode::Copy }
}

/// Everything a WordPress theme project is generated from.
pub const MANIFEST: &[ManifestEntry] = &[
    // theme
    render(Generator, "theme/_style.css", "style.css"),
    render(Generator, "theme/_index.php", "index.php"),
    render(Generator, "theme/_header.php", "header.php"),
    render(Generator, "theme/_footer.php", "footer.php"),
    render(Generator, "theme/_functions.php", "functions.php"),
    render(Shared, "theme/_core.php", "includes/functions/core.php"),
    render(Shared, "theme/_humans.txt", "humans.txt"),
    copy(Generator, "theme/screenshot.png", "screenshot.png"),
    // i18n
    render(Shared, "i18n/_language.pot", "languages/{funcPrefix}.pot"),
    // js
    render(Shared, "js/_script.js", "assets/js/src/{fileSlug}.js"),
    // scss
    render(Generator, "css/_global.css", "assets/css/scss/global/global.scss"),
    render(Generator, "css/_reset.css", "assets/css/scss/base/reset.scss"),
    render(Generator, "css/_typography.css", "assets/css/scss/base/typography.scss"),
    render(Generator, "css/_icons.css", "assets/css/scss/base/icons.scss"),
    render(Generator, "css/_wordpress.css", "assets/css/scss/base/wordpress.scss"),
    render(Generator, "css/_buttons.css", "assets/css/scss/components/buttons.scss"),
    render(Generator, "css/_callouts.css", "assets/css/scss/components/callouts.scss"),
    render(Generator, "css/_toggles.css", "assets/css/scss/components/toggles.scss"),
    render(Generator, "css/_header.css", "assets/css/scss/layout/header.scss"),
    render(Generator, "css/_footer.css", "assets/css/scss/layout/footer.scss"),
    render(Generator, "css/_sidebar.css", "assets/css/scss/layout/sidebar.scss"),
    render(Generator, "css/_home-page.css", "assets/css/scss/templates/home-page.scss"),
    render(Generator, "css/_single.css", "assets/css/scss/templates/single.scss"),
    render(Generator, "css/_archives.css", "assets/css/scss/templates/archives.scss"),
    render(Generator, "css/_blog.css", "assets/css/scss/templates/blog.scss"),
    render(Generator, "css/_admin.css", "assets/css/scss/admin/admin.scss"),
    render(Generator, "css/_editor.css", "assets/css/scss/templates/editor.scss"),
    render(Generator, "css/_project.css", "assets/css/scss/{fileSlug}.scss"),
    render(Generator, "css/_editor-style.css", "assets/css/scss/{fileSlug}-editor-style.scss"),
    render(Generator, "css/_project-admin.css", "assets/css/scss/{fileSlug}-admin.scss"),
    // bin
    render(Generator, "bin/_class-wp-cli-utils.php", "bin/class-wp-cli-utils.php"),
    // tests
    render(Shared, "tests/phpunit/_Core_Tests.php", "tests/php/phpunit/Core_Tests.php"),
    render(Shared, "tests/phpunit/_TestCase.php", "tests/php/phpunit/test-tools/TestCase.php"),
    render(Shared, "tests/phpunit/_bootstrap.php", "bootstrap.php.dist"),
    copy(Shared, "tests/phpunit/phpunit.xml.dist", "phpunit.xml.dist"),
    render(Shared, "tests/qunit/_test.html", "tests/js/qunit/{fileSlug}.html"),
    copy(Shared, "tests/qunit/test.js", "tests/js/qunit/tests/{fileSlug}.js"),
    // grunt
    render(Generator, "grunt/_package.json", "package.json"),
    render(Generator, "grunt/_Gruntfile.js", "Gruntfile.js"),
    copy(Shared, "grunt/_jshintrc", ".jshintrc"),
    // bower
    render(Shared, "bower/_bower.json", "bower.json"),
    copy(Shared, "bower/bowerrc", ".bowerrc"),
    // composer
    render(Generator, "composer/_composer.json", "composer.json"),
    // git
    copy(Shared, "git/gitignore", ".gitignore"),
];

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// A manifest entry bound to concrete paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// Absolute path of the source file
    pub source: PathBuf,
    /// Destination relative to the output directory
    pub destination: PathBuf,
    pub mode: Mode,
}

/// Substitutes every `{field}` placeholder in `destination`.
///
/// # Errors
/// * `Error::MissingField` if a placeholder names an unknown field
pub fn interpolate(destination: &str, variables: &Variables) -> Result<String> {
    let mut resolved = String::with_capacity(destination.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(destination) {
        let (Some(whole), Some(field)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = variables.get(field.as_str()).ok_or_else(|| Error::MissingField {
            field: field.as_str().to_string(),
            entry: destination.to_string(),
        })?;
        resolved.push_str(&destination[last..whole.start()]);
        resolved.push_str(&value);
        last = whole.end();
    }
    resolved.push_str(&destination[last..]);

    Ok(resolved)
}

/// Binds `entries` to the template roots and the answers of a run.
///
/// Order is preserved; every entry yields exactly one resolved entry.
///
/// # Errors
/// * `Error::MissingField` if a destination names an unknown field
/// * `Error::ConfigError` if a destination resolves to an empty path or two
///   entries resolve to the same destination
pub fn resolve_manifest(
    entries: &[ManifestEntry],
    roots: &TemplateRoots,
    variables: &Variables,
) -> Result<Vec<ResolvedEntry>> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(entries.len());

    for entry in entries {
        let destination = interpolate(entry.destination, variables)?;
        if destination.is_empty() {
            return Err(Error::ConfigError(format!(
                "manifest entry '{}' resolves to an empty destination",
                entry.destination
            )));
        }
        if !seen.insert(destination.clone()) {
            return Err(Error::ConfigError(format!(
                "destination '{destination}' is written by more than one manifest entry"
            )));
        }
        debug!("Resolved '{}' to '{}'", entry.source, destination);

        resolved.push(ResolvedEntry {
            source: roots.path(entry.root).join(entry.source),
            destination: PathBuf::from(destination),
            mode: entry.mode,
        });
    }

    Ok(resolved)
}
