//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MedRedactConfig;
use crate::domain::errors::RedactError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "medredact.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MedRedactConfig
/// 4. Applies environment variable overrides (MEDREDACT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use medredact::config::loader::load_config;
///
/// let config = load_config("medredact.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MedRedactConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RedactError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RedactError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: MedRedactConfig = toml::from_str(&contents)
        .map_err(|e| RedactError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration from `path`, or built-in defaults when no path is given
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&Path>) -> Result<MedRedactConfig> {
    match path {
        Some(path) => load_config(path),
        None => finish(MedRedactConfig::default()),
    }
}

fn finish(mut config: MedRedactConfig) -> Result<MedRedactConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RedactError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| RedactError::Configuration(e.to_string()))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RedactError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MEDREDACT_* prefix
///
/// Environment variables follow the pattern: MEDREDACT_<SECTION>_<KEY>
/// For example: MEDREDACT_APPLICATION_LOG_LEVEL, MEDREDACT_AUDIT_ENABLED
fn apply_env_overrides(config: &mut MedRedactConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MEDREDACT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("MEDREDACT_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool("MEDREDACT_APPLICATION_DRY_RUN", &val)?;
    }

    // Redaction overrides
    if let Ok(val) = std::env::var("MEDREDACT_REDACTION_BARE_KANJI_NAMES") {
        config.redaction.bare_kanji_names =
            parse_bool("MEDREDACT_REDACTION_BARE_KANJI_NAMES", &val)?;
    }
    if let Ok(val) = std::env::var("MEDREDACT_REDACTION_ADDITIONAL_PROTECTED_TERMS") {
        config.redaction.additional_protected_terms = val
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();
    }

    // Input overrides
    if let Ok(val) = std::env::var("MEDREDACT_INPUT_MAX_FILE_SIZE_MB") {
        config.input.max_file_size_mb = val.parse().map_err(|_| {
            RedactError::Configuration(format!(
                "Invalid MEDREDACT_INPUT_MAX_FILE_SIZE_MB value: {val}"
            ))
        })?;
    }

    // Audit overrides
    if let Ok(val) = std::env::var("MEDREDACT_AUDIT_ENABLED") {
        config.audit.enabled = parse_bool("MEDREDACT_AUDIT_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("MEDREDACT_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }
    if let Ok(val) = std::env::var("MEDREDACT_AUDIT_JSON_FORMAT") {
        config.audit.json_format = parse_bool("MEDREDACT_AUDIT_JSON_FORMAT", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MEDREDACT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("MEDREDACT_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("MEDREDACT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MEDREDACT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value
        .trim()
        .parse()
        .map_err(|_| RedactError::Configuration(format!("Invalid {name} value: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("MEDREDACT_TEST_AUDIT_PATH", "/tmp/audit.log");
        let input = "log_path = \"${MEDREDACT_TEST_AUDIT_PATH}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "log_path = \"/tmp/audit.log\"\n");
        std::env::remove_var("MEDREDACT_TEST_AUDIT_PATH");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("MEDREDACT_TEST_MISSING_VAR");
        let input = "log_path = \"${MEDREDACT_TEST_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("MEDREDACT_TEST_MISSING_VAR"));
    }

    #[test]
    fn test_comments_are_not_substituted() {
        let input = "# log_path = \"${MEDREDACT_TEST_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, format!("{input}\n"));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(!parse_bool("X", " false ").unwrap());
        assert!(parse_bool("X", "yes").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-medredact.toml");
        assert!(matches!(result, Err(RedactError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "warn"

[redaction]
additional_protected_terms = ["ブロナンセリン", "ルラシドン"]

[input]
max_file_size_mb = 5
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "warn");
        assert_eq!(config.redaction.additional_protected_terms.len(), 2);
        assert_eq!(config.input.max_file_size_mb, 5);
    }

    #[test]
    fn test_load_config_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\nmax_file_size_mb = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("max_file_size_mb"));
    }
}
