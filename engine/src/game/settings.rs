use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use super::types::FieldSize;

/// Engine parameters as named, serializable settings. Defaults mirror
/// the classic layout: a 50x30 grid stepped every 100 ms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub queue_capacity: u32,
    pub initial_snake_length: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 50,
            field_height: 30,
            tick_interval_ms: 100,
            queue_capacity: 4,
            initial_snake_length: 5,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.field_width > 200 || self.field_height > 200 {
            return Err("field dimensions must not exceed 200x200".to_string());
        }
        if self.tick_interval_ms < 20 {
            return Err("tick_interval_ms must be at least 20".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        if self.queue_capacity == 0 {
            return Err("queue_capacity must be greater than 0".to_string());
        }
        if self.queue_capacity > 16 {
            return Err("queue_capacity must not exceed 16".to_string());
        }
        if self.initial_snake_length < 2 {
            return Err("initial_snake_length must be at least 2".to_string());
        }
        if self.initial_snake_length >= self.field_width {
            return Err("initial_snake_length must be shorter than the field width".to_string());
        }
        Ok(())
    }
}

/// Validated runtime form of [`GameSettings`].
#[derive(Clone, Debug)]
pub struct SessionSettings {
    pub field_size: FieldSize,
    pub tick_interval: Duration,
    pub queue_capacity: usize,
    pub initial_snake_length: usize,
}

impl From<&GameSettings> for SessionSettings {
    fn from(settings: &GameSettings) -> Self {
        Self {
            field_size: FieldSize::new(
                settings.field_width as usize,
                settings.field_height as usize,
            ),
            tick_interval: Duration::from_millis(settings.tick_interval_ms as u64),
            queue_capacity: settings.queue_capacity as usize,
            initial_snake_length: settings.initial_snake_length as usize,
        }
    }
}

pub fn settings_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, GameSettings, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSerializer;

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_engine_settings_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    fn with(update: impl FnOnce(&mut GameSettings)) -> GameSettings {
        let mut settings = GameSettings::default();
        update(&mut settings);
        settings
    }

    #[test]
    fn test_validation_rejects_bad_dimensions() {
        assert!(with(|s| s.field_width = 0).validate().is_err());
        assert!(with(|s| s.field_height = 4).validate().is_err());
        assert!(with(|s| s.field_width = 500).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_tick_interval() {
        assert!(with(|s| s.tick_interval_ms = 5).validate().is_err());
        assert!(with(|s| s.tick_interval_ms = 60_000).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_queue_capacity() {
        assert!(with(|s| s.queue_capacity = 0).validate().is_err());
        assert!(with(|s| s.queue_capacity = 64).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_snake_length() {
        assert!(with(|s| s.initial_snake_length = 1).validate().is_err());
        assert!(with(|s| s.initial_snake_length = 50).validate().is_err());
    }

    #[test]
    fn test_settings_round_trip_through_yaml() {
        let settings = GameSettings::default();
        let serializer = YamlConfigSerializer::default();

        let serialized = serializer.serialize(&settings).unwrap();
        let deserialized: GameSettings = serializer.deserialize(&serialized).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_settings_round_trip_through_manager() {
        let settings = GameSettings {
            field_width: 40,
            ..GameSettings::default()
        };
        let manager = settings_manager(&temp_file_path());

        manager.set_config(&settings).unwrap();
        assert_eq!(manager.get_config().unwrap(), settings);
    }

    #[test]
    fn test_manager_falls_back_to_defaults_without_file() {
        let manager = settings_manager(&temp_file_path());
        assert_eq!(manager.get_config().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_session_settings_conversion() {
        let settings = GameSettings::default();
        let session_settings = SessionSettings::from(&settings);

        assert_eq!(session_settings.field_size, FieldSize::new(50, 30));
        assert_eq!(session_settings.tick_interval, Duration::from_millis(100));
        assert_eq!(session_settings.queue_capacity, 4);
        assert_eq!(session_settings.initial_snake_length, 5);
    }
}
