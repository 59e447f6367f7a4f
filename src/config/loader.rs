//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DossierConfig;
use crate::domain::errors::DossierError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`DossierConfig`]
/// 4. Applies environment variable overrides (`DOSSIER_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML doesn't parse, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use dossier::config::loader::load_config;
///
/// let config = load_config("dossier.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DossierConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DossierError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DossierError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DossierConfig = toml::from_str(&contents)
        .map_err(|e| DossierError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        DossierError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("substitution pattern is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
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
        return Err(DossierError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `DOSSIER_*` environment variable overrides
fn apply_env_overrides(config: &mut DossierConfig) {
    if let Ok(level) = std::env::var("DOSSIER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = level;
    }
    if let Ok(path) = std::env::var("DOSSIER_STORAGE_MEETINGS_PATH") {
        config.storage.meetings_path = path;
    }
    if let Ok(path) = std::env::var("DOSSIER_STORAGE_HISTORY_PATH") {
        config.storage.history_path = path;
    }
    if let Ok(dir) = std::env::var("DOSSIER_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = dir;
    }
    if let Ok(format) = std::env::var("DOSSIER_EXPORT_DEFAULT_FORMAT") {
        config.export.default_format = format;
    }
    if let Ok(tool) = std::env::var("DOSSIER_EXPORT_CONVERTER_TOOL") {
        config.export.converter_tool = tool;
    }
}
