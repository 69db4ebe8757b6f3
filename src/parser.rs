//! Answer collection.
//! Asks the primary questions, then the secondary ones, and turns the
//! answers into an `OptionsRecord`. Answers may be preloaded from stdin or
//! an answers file, in which case those questions are not asked.

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use url::Url;

use crate::error::{Error, Result};
use crate::identifier::DerivedIdentifiers;
use crate::identity::GitIdentity;
use crate::options::OptionsRecord;
use crate::prompt::Prompter;

/// Checks a typed answer and returns a message when it is rejected.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Str,
    Bool,
}

/// A single question with its default answer.
#[derive(Debug, Clone)]
pub struct Question {
    pub help: String,
    pub value_type: ValueType,
    pub default: serde_json::Value,
    pub validator: Option<Validator>,
}

impl Question {
    pub fn text<S: Into<String>, D: Into<String>>(help: S, default: D) -> Self {
        Self {
            help: help.into(),
            value_type: ValueType::Str,
            default: serde_json::Value::String(default.into()),
            validator: None,
        }
    }

    pub fn yes_no<S: Into<String>>(help: S, default: bool) -> Self {
        Self {
            help: help.into(),
            value_type: ValueType::Bool,
            default: serde_json::Value::Bool(default),
            validator: None,
        }
    }

    pub fn validated(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

static FUNC_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z_]+$").unwrap());

pub fn validate_title(value: &str) -> std::result::Result<(), String> {
    DerivedIdentifiers::derive(value).map(|_| ()).map_err(|e| e.to_string())
}

pub fn validate_func_prefix(value: &str) -> std::result::Result<(), String> {
    if FUNC_PREFIX.is_match(value) {
        Ok(())
    } else {
        Err(format!("'{value}' must contain only lowercase letters and underscores"))
    }
}

/// Accepts an empty value or an absolute URL.
pub fn validate_optional_url(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    Url::parse(value).map(|_| ()).map_err(|e| format!("'{value}' is not a valid URL: {e}"))
}

/// Questions asked first, in order.
pub fn primary_questions(identity: &GitIdentity) -> IndexMap<&'static str, Question> {
    IndexMap::from([
        ("projectTitle", Question::text("Theme name", "WP Theme").validated(validate_title)),
        (
            "funcPrefix",
            Question::text(
                "PHP function prefix ( lowercase letters and underscores only )",
                "wptheme",
            )
            .validated(validate_func_prefix),
        ),
        ("description", Question::text("Description", "The best WordPress theme ever made!")),
        (
            "projectHome",
            Question::text("Theme homepage", "http://wordpress.org/themes")
                .validated(validate_optional_url),
        ),
        ("authorName", Question::text("Author name", identity.name.as_str())),
        ("authorEmail", Question::text("Author email", identity.email.as_str())),
        ("authorUrl", Question::text("Author URL", "").validated(validate_optional_url)),
    ])
}

/// Questions asked once the primary stage is complete.
pub fn secondary_questions() -> IndexMap<&'static str, Question> {
    IndexMap::from([("autoprefixer", Question::yes_no("Use Autoprefixer?", true))])
}

fn check_preloaded(key: &str, question: &Question, value: &serde_json::Value) -> Result<()> {
    let invalid = |reason: String| {
        Error::ValidationError(format!("invalid answer for '{key}': {reason}"))
    };
    match (question.value_type, value) {
        (ValueType::Str, serde_json::Value::String(s)) => match question.validator {
            Some(validator) => validator(s).map_err(invalid),
            None => Ok(()),
        },
        (ValueType::Bool, serde_json::Value::Bool(_)) => Ok(()),
        (ValueType::Str, other) => Err(invalid(format!("expected a string, got {other}"))),
        (ValueType::Bool, other) => Err(invalid(format!("expected a boolean, got {other}"))),
    }
}

/// Answers every question of one stage, in order.
fn ask_stage(
    prompter: &dyn Prompter,
    questions: &IndexMap<&'static str, Question>,
    preloaded: &serde_json::Value,
    answers: &mut serde_json::Map<String, serde_json::Value>,
) -> Result<()> {
    for (key, question) in questions {
        let value = match preloaded.get(key) {
            Some(value) => {
                check_preloaded(key, question, value)?;
                debug!("Using preloaded answer for '{key}'");
                value.clone()
            }
            None => prompter.answer(key, question)?,
        };
        answers.insert(key.to_string(), value);
    }
    Ok(())
}

/// Runs both prompt stages and finalizes the options record.
///
/// # Arguments
/// * `prompter` - Source of answers for questions not preloaded
/// * `identity` - Git identity used for the author defaults
/// * `preloaded` - JSON object of answers, or `Null`
///
/// # Errors
/// * `Error::InputUnavailable` if a question cannot be answered
/// * `Error::ValidationError` if a preloaded answer is rejected
pub fn collect_answers(
    prompter: &dyn Prompter,
    identity: &GitIdentity,
    preloaded: &serde_json::Value,
) -> Result<OptionsRecord> {
    let mut answers = serde_json::Map::new();

    ask_stage(prompter, &primary_questions(identity), preloaded, &mut answers)?;
    debug!("Primary answers collected");
    ask_stage(prompter, &secondary_questions(), preloaded, &mut answers)?;

    OptionsRecord::from_answers(serde_json::Value::Object(answers))
}

/// Parses a preloaded answers document, trying JSON first and YAML second.
///
/// Empty input yields `Null`.
///
/// # Errors
/// * `Error::ConfigError` if the document is not a mapping
pub fn parse_answers(content: &str) -> Result<serde_json::Value> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }

    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid answers format: {e}")))?,
    };

    match value {
        serde_json::Value::Object(_) | serde_json::Value::Null => Ok(value),
        other => Err(Error::ConfigError(format!("answers must be a mapping, got {other}"))),
    }
}

pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_failure(path, e))?;
    parse_answers(&content)
}

/// Loads preloaded answers from stdin or a file; stdin wins when both are given.
pub fn get_answers_from(
    take_from_stdin: bool,
    answers_file: Option<&Path>,
) -> Result<serde_json::Value> {
    match (take_from_stdin, answers_file) {
        (true, _) => load_from_stdin(),
        (false, Some(path)) => load_from_file(path),
        (false, None) => Ok(serde_json::Value::Null),
    }
}
