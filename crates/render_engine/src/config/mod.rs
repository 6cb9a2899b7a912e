//! Configuration system
//!
//! Window and renderer settings with serde-backed file support. The
//! shipped binary runs on the defaults; file loading exists for
//! applications that want to override them.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Implemented by every settings struct in the crate. File format is
/// chosen by extension; TOML and RON are supported.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window creation parameters
///
/// Immutable once the window exists; the context keeps its own copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Hello Renderer".to_string(),
        }
    }
}

/// Renderer settings consumed by the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Background clear color [R, G, B, A] (0.0-1.0 range)
    pub clear_color: [f32; 4],
    /// Window creation parameters
    pub window: WindowConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            // Dark slate gray
            clear_color: [0.1, 0.1, 0.15, 1.0],
            window: WindowConfig::default(),
        }
    }
}

impl Config for WindowConfig {}
impl Config for RendererConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn window_defaults_match_contract() {
        let config = WindowConfig::default();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.title, "Hello Renderer");
    }

    #[test]
    fn renderer_defaults_use_dark_clear_color() {
        let config = RendererConfig::default();

        assert_relative_eq!(config.clear_color[0], 0.1);
        assert_relative_eq!(config.clear_color[1], 0.1);
        assert_relative_eq!(config.clear_color[2], 0.15);
        assert_relative_eq!(config.clear_color[3], 1.0);
    }

    #[test]
    fn renderer_config_round_trips_through_toml() {
        let config = RendererConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: RendererConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.window.width, config.window.width);
        assert_eq!(restored.window.height, config.window.height);
        assert_eq!(restored.window.title, config.window.title);
        for (restored, original) in restored.clear_color.iter().zip(config.clear_color.iter()) {
            assert_relative_eq!(*restored, *original);
        }
    }

    #[test]
    fn renderer_config_round_trips_through_ron() {
        let config = RendererConfig::default();
        let serialized = ron::ser::to_string_pretty(&config, Default::default()).unwrap();
        let restored: RendererConfig = ron::from_str(&serialized).unwrap();

        assert_eq!(restored.window.title, config.window.title);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let result = WindowConfig::load_from_file("window.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = WindowConfig::load_from_file("does_not_exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
