//! The answers collected for a run and the variables derived from them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::identifier::DerivedIdentifiers;

/// Immutable theme metadata collected once per run.
///
/// Serialized field names (`projectTitle`, `funcPrefix`, ...) are the names
/// templates and manifest destinations refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionsRecord {
    project_title: String,
    func_prefix: String,
    description: String,
    project_home: String,
    author_name: String,
    author_email: String,
    author_url: String,
    autoprefixer: bool,
}

impl OptionsRecord {
    /// Builds the record from a JSON object of answers keyed by field name.
    ///
    /// # Errors
    /// * `Error::ValidationError` if a field is missing or has the wrong type
    pub fn from_answers(answers: serde_json::Value) -> Result<Self> {
        serde_json::from_value(answers)
            .map_err(|e| Error::ValidationError(format!("invalid answers: {e}")))
    }

    pub fn project_title(&self) -> &str {
        &self.project_title
    }

    pub fn func_prefix(&self) -> &str {
        &self.func_prefix
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn project_home(&self) -> &str {
        &self.project_home
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    pub fn author_url(&self) -> &str {
        &self.author_url
    }

    pub fn autoprefixer(&self) -> bool {
        self.autoprefixer
    }
}

/// Read-only view over the options and derived identifiers of a run.
#[derive(Debug, Clone, Copy)]
pub struct Variables<'a> {
    options: &'a OptionsRecord,
    identifiers: &'a DerivedIdentifiers,
}

impl<'a> Variables<'a> {
    pub fn new(options: &'a OptionsRecord, identifiers: &'a DerivedIdentifiers) -> Self {
        Self { options, identifiers }
    }

    pub fn options(&self) -> &'a OptionsRecord {
        self.options
    }

    pub fn identifiers(&self) -> &'a DerivedIdentifiers {
        self.identifiers
    }

    /// Looks up a field by its serialized name as a string.
    ///
    /// Derived identifiers are checked first, then the options record.
    /// Returns `None` for unknown names.
    pub fn get(&self, field: &str) -> Option<String> {
        let value = match field {
            "fileSlug" => self.identifiers.file_slug().to_string(),
            "namespace" => self.identifiers.namespace().to_string(),
            "projectTitle" => self.options.project_title.clone(),
            "funcPrefix" => self.options.func_prefix.clone(),
            "description" => self.options.description.clone(),
            "projectHome" => self.options.project_home.clone(),
            "authorName" => self.options.author_name.clone(),
            "authorEmail" => self.options.author_email.clone(),
            "authorUrl" => self.options.author_url.clone(),
            "autoprefixer" => self.options.autoprefixer.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Builds the template render context.
    pub fn to_context(&self) -> serde_json::Value {
        serde_json::json!({
            "opts": self.options,
            "fileSlug": self.identifiers.file_slug(),
            "namespace": self.identifiers.namespace(),
        })
    }
}
