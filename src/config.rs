use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::game::Start;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Successful throws to play in a single run.
    #[serde(default = "GameConfig::default_throws")]
    pub throws: u64,
    #[serde(default = "GameConfig::default_start")]
    pub start: Start,
    /// Seed for reproducible runs; unset means a fresh random stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GameConfig {
    fn default_throws() -> u64 {
        100
    }
    fn default_start() -> Start {
        Start::Uniform
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            throws: Self::default_throws(),
            start: Self::default_start(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "PlotConfig::default_width")]
    pub width: u32,
    #[serde(default = "PlotConfig::default_height")]
    pub height: u32,
    #[serde(default = "PlotConfig::default_out_dir")]
    pub out_dir: String,
}

impl PlotConfig {
    fn default_width() -> u32 {
        900
    }
    fn default_height() -> u32 {
        900
    }
    fn default_out_dir() -> String {
        "target/plots".to_string()
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            out_dir: Self::default_out_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Throw counts for the four panels of the comparison figure.
    #[serde(default = "BatchConfig::default_throws")]
    pub throws: Vec<u64>,
}

impl BatchConfig {
    fn default_throws() -> Vec<u64> {
        vec![5, 25, 100, 10_000]
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            throws: Self::default_throws(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl AppConfig {
    /// Read `path` if it exists; otherwise write the defaults there and use
    /// them. A file that fails to read or parse is reported and ignored.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(err) => {
                eprintln!("Failed to serialize default config: {err}");
            }
        }
        default_cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "boltzgrid_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_when_missing() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.game.throws, 100);
        assert_eq!(cfg.game.start, Start::Uniform);
        assert_eq!(cfg.game.seed, None);
        assert_eq!(cfg.plot.width, 900);
        assert_eq!(cfg.plot.out_dir, "target/plots");
        assert_eq!(cfg.batch.throws, vec![5, 25, 100, 10_000]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_existing() {
        let path = unique_path("custom.toml");
        let path_str = path.to_string_lossy().to_string();
        let custom = AppConfig {
            game: GameConfig {
                throws: 2_000,
                start: Start::Skewed,
                seed: Some(42),
            },
            plot: PlotConfig {
                width: 640,
                height: 480,
                out_dir: "figures".to_string(),
            },
            batch: BatchConfig {
                throws: vec![1, 10, 100, 1_000],
            },
        };
        let text = toml::to_string_pretty(&custom).unwrap();
        fs::write(&path, text).unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.game.throws, 2_000);
        assert_eq!(cfg.game.start, Start::Skewed);
        assert_eq!(cfg.game.seed, Some(42));
        assert_eq!(cfg.plot.width, 640);
        assert_eq!(cfg.plot.height, 480);
        assert_eq!(cfg.plot.out_dir, "figures");
        assert_eq!(cfg.batch.throws, vec![1, 10, 100, 1_000]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_config_falls_back_to_field_defaults() {
        let path = unique_path("partial.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[game]\nstart = \"skewed\"\n").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.game.start, Start::Skewed);
        assert_eq!(cfg.game.throws, 100);
        assert_eq!(cfg.plot.height, 900);

        let _ = fs::remove_file(&path);
    }
}
