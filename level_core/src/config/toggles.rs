//! Modifier toggles

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;

/// Which modifiers contribute to the effective level
///
/// Each toggle enables one step of the calculation. Missing keys in a
/// TOML file fall back to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierConfig {
    /// Scale combat skills by the active prayer multiplier
    #[serde(default = "enabled")]
    pub show_prayer_boost: bool,
    /// Add the hidden attack style bonus
    #[serde(default = "enabled")]
    pub show_stance_bonus: bool,
    /// Add the flat +8 the combat formulas apply to every level
    #[serde(default = "enabled")]
    pub show_adjustment_constant: bool,
    /// Scale by the void knight set bonus
    #[serde(default = "enabled")]
    pub show_void_bonus: bool,
    /// Add hidden item and guild boosts to gathering skills
    #[serde(default = "enabled")]
    pub show_invisible_boost: bool,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        ModifierConfig {
            show_prayer_boost: true,
            show_stance_bonus: true,
            show_adjustment_constant: true,
            show_void_bonus: true,
            show_invisible_boost: true,
        }
    }
}

fn enabled() -> bool {
    true
}

impl ModifierConfig {
    /// A config with every modifier turned off (effective level == boosted level)
    pub fn all_disabled() -> Self {
        ModifierConfig {
            show_prayer_boost: false,
            show_stance_bonus: false,
            show_adjustment_constant: false,
            show_void_bonus: false,
            show_invisible_boost: false,
        }
    }

    /// Load toggles from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        super::load_toml(path)
    }

    /// Parse toggles from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::parse_toml(content)
    }

    /// Whether any combat-skill modifier is on
    pub fn any_combat_enabled(&self) -> bool {
        self.show_prayer_boost
            || self.show_stance_bonus
            || self.show_adjustment_constant
            || self.show_void_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_enables_everything() {
        let config = ModifierConfig::default();
        assert!(config.show_prayer_boost);
        assert!(config.show_stance_bonus);
        assert!(config.show_adjustment_constant);
        assert!(config.show_void_bonus);
        assert!(config.show_invisible_boost);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
show_prayer_boost = false
show_void_bonus = false
"#;

        let config = ModifierConfig::from_toml_str(toml).unwrap();
        assert!(!config.show_prayer_boost);
        assert!(!config.show_void_bonus);
        assert!(config.show_stance_bonus);
        assert!(config.show_adjustment_constant);
        assert!(config.show_invisible_boost);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = ModifierConfig::from_toml_str("").unwrap();
        assert_eq!(config, ModifierConfig::default());
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        let result = ModifierConfig::from_toml_str("show_stance_bonus = \"yes\"");
        assert!(matches!(result, Err(ConfigError::Parse { path: None, .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"show_invisible_boost = false\n").unwrap();

        let config = ModifierConfig::load_from_path(file.path()).unwrap();
        assert!(!config.show_invisible_boost);
        assert!(config.any_combat_enabled());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let result = ModifierConfig::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Io { path: Some(_), .. })));
    }

    #[test]
    fn test_all_disabled() {
        let config = ModifierConfig::all_disabled();
        assert!(!config.any_combat_enabled());
        assert!(!config.show_invisible_boost);
    }
}
