//! Author defaults read from the user's git configuration.

use log::debug;

/// Author name and email used as prompt defaults.
///
/// Missing values are empty strings; a missing git configuration is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitIdentity {
    pub name: String,
    pub email: String,
}

impl GitIdentity {
    /// Reads `user.name` and `user.email` from the default git configuration.
    pub fn from_git_config() -> Self {
        match git2::Config::open_default() {
            Ok(config) => Self::from_config(&config),
            Err(e) => {
                debug!("Git configuration unavailable: {e}");
                Self::default()
            }
        }
    }

    /// Reads the identity from an already opened git configuration.
    pub fn from_config(config: &git2::Config) -> Self {
        let read = |key: &str| config.get_string(key).unwrap_or_default();
        Self { name: read("user.name"), email: read("user.email") }
    }
}
