use std::path::Path;

use puzzle2048_common::Puzzle2048Settings;
use puzzle2048_common::config::{ConfigError, ConfigManager, FileContentConfigProvider, Validate};

pub const CONFIG_FILE: &str = "puzzle2048_config.yaml";

pub fn get_config_manager(path: &Path) -> ConfigManager<FileContentConfigProvider, Puzzle2048Settings> {
    ConfigManager::from_yaml_file(path)
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub seed: Option<u64>,
}

pub fn apply_overrides(
    mut settings: Puzzle2048Settings,
    overrides: Overrides,
) -> Result<Puzzle2048Settings, ConfigError> {
    if let Some(width) = overrides.width {
        settings.field_width = width;
    }
    if let Some(height) = overrides.height {
        settings.field_height = height;
    }
    if overrides.seed.is_some() {
        settings.seed = overrides.seed;
    }
    settings.validate().map_err(ConfigError::Invalid)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_settings() {
        let settings = Puzzle2048Settings {
            seed: Some(5),
            ..Default::default()
        };
        assert_eq!(apply_overrides(settings, Overrides::default()).unwrap(), settings);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            width: Some(6),
            height: Some(3),
            seed: Some(9),
        };
        let settings = apply_overrides(Puzzle2048Settings::default(), overrides).unwrap();
        assert_eq!(settings.field_width, 6);
        assert_eq!(settings.field_height, 3);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let overrides = Overrides {
            width: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            apply_overrides(Puzzle2048Settings::default(), overrides),
            Err(ConfigError::Invalid(_))
        ));
    }
}
