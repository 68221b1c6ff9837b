use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use masktrace::SIMPLIFY_PERIMETER_RATIO;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Config {
    /// Input settings
    #[serde(default)]
    pub input: InputConfig,
    /// Processing parameters
    #[serde(default)]
    pub processing: ProcessingConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct InputConfig {
    /// Mask image file path
    #[serde(default = "default_mask_path")]
    pub mask: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ProcessingConfig {
    /// Threshold for binarizing the mask (0-255); strictly greater is foreground
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Simplification tolerance as a fraction of the contour perimeter
    #[serde(default = "default_simplify_ratio")]
    pub simplify_ratio: f64,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct OutputConfig {
    /// Optional path for a rendered overlay of the extracted outline
    #[serde(default)]
    pub debug_outline: Option<PathBuf>,
}

fn default_mask_path() -> PathBuf {
    PathBuf::from("public/newspaper_rack_mask_full.png")
}

fn default_threshold() -> u8 {
    127
}

fn default_simplify_ratio() -> f64 {
    SIMPLIFY_PERIMETER_RATIO
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputConfig::default(),
            processing: ProcessingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            mask: default_mask_path(),
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        ProcessingConfig {
            threshold: default_threshold(),
            simplify_ratio: default_simplify_ratio(),
            verbose: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            debug_outline: None,
        }
    }
}

impl Config {
    pub(crate) fn load(config_path: &Path) -> anyhow::Result<Config> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config = match config_path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&config_str)?,
            Some("toml") => toml::from_str(&config_str)?,
            _ => bail!("Unsupported config file format. Use .json or .toml"),
        };
        Ok(config)
    }

    pub(crate) fn save_default(config_path: &Path) -> anyhow::Result<()> {
        let config = Config::default();
        let config_str = match config_path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::to_string_pretty(&config)?,
            _ => serde_json::to_string_pretty(&config)?, // Default to JSON
        };

        let mut file = File::create(config_path)?;
        file.write_all(config_str.as_bytes())?;
        println!("Generated default configuration file: {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_pipeline_constants() {
        let config = Config::default();

        assert_eq!(
            config.input.mask,
            PathBuf::from("public/newspaper_rack_mask_full.png")
        );
        assert_eq!(config.processing.threshold, 127);
        assert_eq!(config.processing.simplify_ratio, 0.002);
        assert!(!config.processing.verbose);
        assert!(config.output.debug_outline.is_none());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [processing]
            verbose = true
            "#,
        )
        .unwrap();

        assert_eq!(config.processing.threshold, 127);
        assert_eq!(config.processing.simplify_ratio, 0.002);
        assert!(config.processing.verbose);
        assert_eq!(
            config.input.mask,
            PathBuf::from("public/newspaper_rack_mask_full.png")
        );
    }

    #[test]
    fn json_overrides_are_honored() {
        let config: Config = serde_json::from_str(
            r#"{"input": {"mask": "masks/widget.png"}, "processing": {"threshold": 64}}"#,
        )
        .unwrap();

        assert_eq!(config.input.mask, PathBuf::from("masks/widget.png"));
        assert_eq!(config.processing.threshold, 64);
        assert_eq!(config.processing.simplify_ratio, 0.002);
    }
}
