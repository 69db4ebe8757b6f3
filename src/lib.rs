//! wpmake is a scaffolding tool for WordPress themes.
//! It collects theme metadata, derives identifiers from the theme name,
//! materializes a fixed manifest of templates and runs the package installers.

/// Command-line interface module for the wpmake application
pub mod cli;

/// Error types and handling for the wpmake application
pub mod error;

/// Slug and namespace derivation from the theme title
pub mod identifier;

/// Author defaults from the user's git configuration
pub mod identity;

/// Parallel post-generation package installs
pub mod installer;

/// Template directory and template roots
pub mod loader;

/// Logger initialization
pub mod logger;

/// Static manifest of generated files and destination interpolation
pub mod manifest;

/// Collected answers and the variables derived from them
pub mod options;

/// Answer collection across the prompt stages
pub mod parser;

/// Writes resolved manifest entries to the output directory
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering functionality
pub mod renderer;
