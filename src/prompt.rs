//! User input and interaction handling.
//! Questions are answered either interactively through dialoguer or
//! non-interactively from their defaults.

use dialoguer::{Confirm, Input};

use crate::error::{Error, Result};
use crate::parser::{Question, ValueType};

/// Answers a single question.
pub trait Prompter {
    /// Returns the answer for `key`, blocking until it is available.
    ///
    /// # Errors
    /// * `Error::InputUnavailable` if no answer can be obtained
    fn answer(&self, key: &str, question: &Question) -> Result<serde_json::Value>;
}

/// Interactive prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn input_unavailable(key: &str) -> impl FnOnce(dialoguer::Error) -> Error + '_ {
    move |e| Error::InputUnavailable(format!("cannot prompt for '{key}': {e}"))
}

impl Prompter for DialoguerPrompter {
    fn answer(&self, key: &str, question: &Question) -> Result<serde_json::Value> {
        match question.value_type {
            ValueType::Str => {
                let mut input =
                    Input::<String>::new().with_prompt(&question.help).allow_empty(true);
                let default = question.default.as_str().unwrap_or_default();
                if !default.is_empty() {
                    input = input.default(default.to_string());
                }
                if let Some(validator) = question.validator {
                    input = input.validate_with(move |value: &String| validator(value));
                }
                let value = input.interact_text().map_err(input_unavailable(key))?;
                Ok(serde_json::Value::String(value))
            }
            ValueType::Bool => {
                let value = Confirm::new()
                    .with_prompt(&question.help)
                    .default(question.default.as_bool().unwrap_or(false))
                    .interact()
                    .map_err(input_unavailable(key))?;
                Ok(serde_json::Value::Bool(value))
            }
        }
    }
}

/// Non-interactive prompter that accepts every default.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn answer(&self, key: &str, question: &Question) -> Result<serde_json::Value> {
        if let (Some(validator), Some(default)) = (question.validator, question.default.as_str())
        {
            validator(default).map_err(|reason| {
                Error::InputUnavailable(format!("no usable default for '{key}': {reason}"))
            })?;
        }
        Ok(question.default.clone())
    }
}
