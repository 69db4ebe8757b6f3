use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wpmake::loader::{
    find_template_dir, load_template_roots, template_dir_candidates, BUILD_TEMPLATE_DIR,
    GENERATOR_ROOT, SHARED_ROOT,
};

fn make_template_dir(dir: &Path) {
    fs::create_dir_all(dir.join(GENERATOR_ROOT)).unwrap();
    fs::create_dir_all(dir.join(SHARED_ROOT)).unwrap();
}

#[test]
fn test_templates_next_to_binary() {
    let install = TempDir::new().unwrap();
    let exe = install.path().join("bin").join("wpmake");
    make_template_dir(&install.path().join("bin").join("templates"));

    let found = find_template_dir(&exe);

    assert_eq!(found, install.path().join("bin").join("templates"));
    assert_ne!(found, PathBuf::from(BUILD_TEMPLATE_DIR));
    assert!(load_template_roots(&found).is_ok());
}

#[test]
fn test_templates_in_share_prefix() {
    let install = TempDir::new().unwrap();
    let exe = install.path().join("bin").join("wpmake");
    let share = install.path().join("share").join("wpmake").join("templates");
    make_template_dir(&share);

    assert_eq!(find_template_dir(&exe), share);
}

#[test]
fn test_binary_dir_wins_over_share_prefix() {
    let install = TempDir::new().unwrap();
    let exe = install.path().join("bin").join("wpmake");
    make_template_dir(&install.path().join("bin").join("templates"));
    make_template_dir(&install.path().join("share").join("wpmake").join("templates"));

    let candidates = template_dir_candidates(&exe);
    assert_eq!(candidates[0], install.path().join("bin").join("templates"));
    assert_eq!(find_template_dir(&exe), candidates[0]);
}

#[test]
fn test_incomplete_installation_is_ignored() {
    let install = TempDir::new().unwrap();
    let exe = install.path().join("bin").join("wpmake");
    // Only one of the two roots is present
    fs::create_dir_all(install.path().join("bin").join("templates").join(GENERATOR_ROOT))
        .unwrap();

    assert_eq!(find_template_dir(&exe), PathBuf::from(BUILD_TEMPLATE_DIR));
}
