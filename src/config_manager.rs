use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};


pub const DEFAULT_DETECTION_MODEL: &str = "best.pt";
pub const DEFAULT_CLASSIFICATION_MODEL: &str = "yolov8n-cls.pt";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk application config. Fields this crate does not know about are kept
/// so a load/save cycle does not drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub app: AppInfo,
    #[serde(default)]
    pub models: BTreeMap<String, ModelEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigDocument {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            app: AppInfo {
                name: name.to_string(),
                version: version.to_string(),
                extra: Map::new(),
            },
            models: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    pub fn with_model(mut self, model_type: &str, path: &str) -> Self {
        self.models.insert(
            model_type.to_string(),
            ModelEntry {
                path: Some(path.to_string()),
                extra: Map::new(),
            },
        );
        self
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new("BISINDO Predictor", env!("CARGO_PKG_VERSION"))
            .with_model("detection", DEFAULT_DETECTION_MODEL)
            .with_model("classification", DEFAULT_CLASSIFICATION_MODEL)
    }
}

/// Reads the config at `path`. A missing file is `Ok(None)`; malformed JSON is
/// an error.
pub fn load_config(path: &Path) -> Result<Option<ConfigDocument>, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Overwrites `path` with `config` as pretty-printed JSON.
pub fn save_config(config: &ConfigDocument, path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    serde_json::to_writer_pretty(&mut writer, config).map_err(|source| {
        ConfigError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(io_error)
}

/// Model path for `model_type`: the config entry's path if it has one,
/// otherwise the built-in default for known types.
pub fn get_model_path(model_type: &str, config: Option<&ConfigDocument>) -> Option<String> {
    let configured = config
        .and_then(|config| config.models.get(model_type))
        .and_then(|entry| entry.path.clone());
    if configured.is_some() {
        return configured;
    }

    match model_type {
        "detection" => Some(DEFAULT_DETECTION_MODEL.to_string()),
        "classification" => Some(DEFAULT_CLASSIFICATION_MODEL.to_string()),
        _ => None,
    }
}
