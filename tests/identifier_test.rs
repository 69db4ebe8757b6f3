use wpmake::error::Error;
use wpmake::identifier::{derive_namespace, derive_slug, validate_namespace, DerivedIdentifiers};

const TITLES: &[&str] = &[
    "",
    "My Theme",
    "Awesome!! Theme_2",
    "  leading and trailing  ",
    "Tabs\tand\nnewlines",
    "already-a-slug",
    "UPPER CASE-Title",
    "Ünïcödé Thème",
    "---",
    "a|b|c",
    "123 go",
];

#[test]
fn test_slug_examples() {
    assert_eq!(derive_slug("My Theme"), "my-theme");
    // Digits are outside [a-z-_] and are dropped
    assert_eq!(derive_slug("Awesome!! Theme_2"), "awesome-theme_");
    assert_eq!(derive_slug("Tabs\tand\n\nnewlines"), "tabs-and-newlines");
    assert_eq!(derive_slug(""), "");
}

#[test]
fn test_slug_contains_only_allowed_characters() {
    for title in TITLES {
        let slug = derive_slug(title);
        assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c == '-' || c == '_'),
            "slug '{slug}' of '{title}' has characters outside [a-z-_]"
        );
    }
}

#[test]
fn test_slug_is_idempotent() {
    for title in TITLES {
        let slug = derive_slug(title);
        assert_eq!(derive_slug(&slug), slug, "slug of '{title}' is not stable");
    }
}

#[test]
fn test_namespace_examples() {
    assert_eq!(derive_namespace("My Theme"), "My_Theme");
    assert_eq!(derive_namespace("wp theme"), "Wp_Theme");
    assert_eq!(derive_namespace("my-cool theme"), "My_Cool_Theme");
    assert_eq!(derive_namespace("WP Theme"), "WP_Theme");
    assert_eq!(derive_namespace("a|b|c"), "A_B_C");
    assert_eq!(derive_namespace("news | blog"), "News___Blog");
}

#[test]
fn test_namespace_has_no_separators() {
    for title in TITLES {
        let namespace = derive_namespace(title);
        assert!(
            !namespace.contains([' ', '-', '|']),
            "namespace '{namespace}' of '{title}' contains a separator"
        );
    }
}

#[test]
fn test_validate_namespace() {
    assert!(validate_namespace("My_Theme").is_ok());
    assert!(validate_namespace("_Theme2").is_ok());
    assert!(validate_namespace("").is_err());
    assert!(validate_namespace("123_Go").is_err());
    assert!(validate_namespace("Awesome!!_Theme").is_err());
}

#[test]
fn test_derived_identifiers() {
    let ids = DerivedIdentifiers::derive("My Theme").unwrap();
    assert_eq!(ids.file_slug(), "my-theme");
    assert_eq!(ids.namespace(), "My_Theme");
}

#[test]
fn test_derived_identifiers_reject_unusable_titles() {
    for title in ["", "!!!", "123 go", "Awesome!! Theme"] {
        match DerivedIdentifiers::derive(title) {
            Err(Error::ValidationError(_)) => (),
            other => panic!("Expected ValidationError for '{title}', got {other:?}"),
        }
    }
}
