use crate::ranking::RankedPrediction;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ResultLogError {
    #[error("failed to write prediction log {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize prediction log {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionLogEntry {
    pub timestamp: String,
    pub filename: String,
    pub predictions: Vec<RankedPrediction>,
}

/// Writes one JSON file per prediction into a log directory.
#[derive(Debug, Clone)]
pub struct ResultLogger {
    log_dir: PathBuf,
    timezone: chrono::FixedOffset,
}

impl ResultLogger {
    pub fn new(
        log_dir: impl Into<PathBuf>,
        timezone: chrono::FixedOffset,
    ) -> Result<Self, ResultLogError> {
        let log_dir = log_dir.into();
        std::fs::create_dir_all(&log_dir).map_err(|source| ResultLogError::Io {
            path: log_dir.clone(),
            source,
        })?;

        Ok(Self { log_dir, timezone })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Writes `predictions_<timestamp>.json` and returns its path. Two logs in
    /// the same second share a name; the later one wins.
    pub fn log_prediction(
        &self,
        filename: &str,
        predictions: &[RankedPrediction],
    ) -> Result<PathBuf, ResultLogError> {
        let timestamp = Utc::now()
            .with_timezone(&self.timezone)
            .format("%Y%m%d_%H%M%S")
            .to_string();
        let path = self.log_dir.join(format!("predictions_{}.json", timestamp));

        let entry = PredictionLogEntry {
            timestamp,
            filename: filename.to_string(),
            predictions: predictions.to_vec(),
        };

        let io_error = |source| ResultLogError::Io {
            path: path.clone(),
            source,
        };
        let mut writer = BufWriter::new(File::create(&path).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, &entry).map_err(|source| {
            ResultLogError::Serialize {
                path: path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_error)?;

        Ok(path)
    }
}
