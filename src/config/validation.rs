//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;
use crate::calculator::NumeralSystem;

/// Longest prompt that doesn't crowd the keypad session.
const MAX_PROMPT_LEN: usize = 16;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - An empty or overly long prompt
/// - A `mode` that contradicts the configured orientation
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if config.prompt.trim().is_empty() {
        warnings.push(ValidationWarning {
            field: "prompt".to_string(),
            message: "Prompt is empty. Input lines will be hard to tell apart from results."
                .to_string(),
        });
    } else if config.prompt.chars().count() > MAX_PROMPT_LEN {
        warnings.push(ValidationWarning {
            field: "prompt".to_string(),
            message: format!(
                "Prompt is {} characters long. Consider at most {}.",
                config.prompt.chars().count(),
                MAX_PROMPT_LEN
            ),
        });
    }

    if let Some(mode) = config.mode {
        let oriented = NumeralSystem::for_orientation(config.orientation);
        if mode != oriented {
            warnings.push(ValidationWarning {
                field: "mode".to_string(),
                message: format!(
                    "Mode '{}' overrides the {} keypad selected by orientation.",
                    mode.display_name(),
                    oriented.display_name()
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Orientation;

    #[test]
    fn test_validate_valid_config() {
        let config = AppConfig::default();
        let warnings = validate_config(&config);
        // Default config should have no warnings
        assert!(warnings.is_empty(), "Warnings: {:?}", warnings);
    }

    #[test]
    fn test_validate_empty_prompt() {
        let config = AppConfig {
            prompt: "  ".to_string(),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "prompt"));
    }

    #[test]
    fn test_validate_long_prompt() {
        let config = AppConfig {
            prompt: "calculator input please> ".to_string(),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(
            warnings
                .iter()
                .any(|w| w.field == "prompt" && w.message.contains("characters"))
        );
    }

    #[test]
    fn test_validate_mode_overrides_orientation() {
        let config = AppConfig {
            mode: Some(NumeralSystem::Hexadecimal),
            orientation: Orientation::Portrait,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "mode"));
    }

    #[test]
    fn test_validate_mode_matching_orientation() {
        let config = AppConfig {
            mode: Some(NumeralSystem::Hexadecimal),
            orientation: Orientation::Landscape,
            ..AppConfig::default()
        };
        assert!(!validate_config(&config).iter().any(|w| w.field == "mode"));
    }
}
