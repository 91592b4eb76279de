use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Strings accepted as `true` (case-insensitive).
pub const TRUE_OPTIONS: [&str; 4] = ["true", "t", "yes", "y"];
/// Strings accepted as `false` (case-insensitive).
pub const FALSE_OPTIONS: [&str; 4] = ["false", "f", "no", "n"];

pub const INCLUDE_CHILD_PROJECTS: &str = "includeChildProjects";
pub const RESTRICTED_LICENSES_ONLY: &str = "restrictedLicensesOnly";

/// A flag recognized in the report options: key, wording used in error
/// messages, and the value assumed when the key is missing.
struct FlagSpec {
    key: &'static str,
    description: &'static str,
    default: bool,
}

const FLAGS: [FlagSpec; 2] = [
    FlagSpec {
        key: INCLUDE_CHILD_PROJECTS,
        description: "including child projects",
        default: true,
    },
    FlagSpec {
        key: RESTRICTED_LICENSES_ONLY,
        description: "restricted licenses only",
        default: false,
    },
];

/// A problem found while validating the report options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("Invalid option for {description}: {value}.  Valid options are True/False")]
    InvalidValue {
        option: &'static str,
        description: &'static str,
        value: String,
    },

    #[error("Unable to parse report options: {details}")]
    Malformed { details: String },
}

/// Validated report options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub include_child_projects: bool,
    pub restricted_licenses_only: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_child_projects: true,
            restricted_licenses_only: false,
        }
    }
}

impl ReportOptions {
    /// Parses the raw `reportOptions` JSON passed on the command line.
    ///
    /// Every option is checked before returning, so the error list names all
    /// invalid options rather than only the first one.
    pub fn parse(raw: &str) -> Result<Self, Vec<OptionError>> {
        let normalized = normalize_shell_quoting(raw);
        let value: Value = serde_json::from_str(&normalized).map_err(|e| {
            vec![OptionError::Malformed {
                details: e.to_string(),
            }]
        })?;

        let Value::Object(map) = value else {
            return Err(vec![OptionError::Malformed {
                details: format!("expected a JSON object, found {}", normalized),
            }]);
        };

        let mut errors = Vec::new();
        let mut resolved = [false; 2];

        for (slot, spec) in resolved.iter_mut().zip(FLAGS.iter()) {
            *slot = match map.get(spec.key) {
                None | Some(Value::Null) => spec.default,
                Some(raw_value) => match parse_flag(raw_value) {
                    Some(flag) => flag,
                    None => {
                        errors.push(OptionError::InvalidValue {
                            option: spec.key,
                            description: spec.description,
                            value: display_value(raw_value),
                        });
                        spec.default
                    }
                },
            };
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let [include_child_projects, restricted_licenses_only] = resolved;
        Ok(Self {
            include_child_projects,
            restricted_licenses_only,
        })
    }
}

/// Maps a string-typed boolean through the accepted tables.
pub fn parse_bool_option(value: &str) -> Option<bool> {
    let lowered = value.trim().to_lowercase();
    if TRUE_OPTIONS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_OPTIONS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn parse_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => parse_bool_option(text),
        _ => None,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Undoes the quoting Linux shells apply when the report framework passes the
/// options: the whole value wrapped in quotes with every inner quote doubled.
fn normalize_shell_quoting(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    }
}
