use crate::config::Config;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_utils::{resize_to_fit, to_rgb};
use crate::library::logger::interface::Logger;
use crate::ranking::{top1, top_k, RankedPrediction, RankingError};
use crate::result_logger::{ResultLogError, ResultLogger};
use crate::validation::{
    is_valid_image, validate_file_with_limit, ValidationFailure, ValidationResult,
};
use image::{DynamicImage, ImageReader};
use std::path::Path;
use std::sync::Arc;


#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("failed to read image: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("classifier failed: {0}")]
    Classifier(Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Ranking(#[from] RankingError),
    #[error(transparent)]
    ResultLog(#[from] ResultLogError),
    #[error("failed to write log: {0}")]
    Log(Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub top: RankedPrediction,
    pub ranked: Vec<RankedPrediction>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    Rejected(ValidationResult),
    Predicted(Prediction),
}

/// Runs the upload flow: validate, decode, classify, rank, and optionally log.
pub struct Predictor {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    result_logger: Option<ResultLogger>,
}

impl Predictor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        result_logger: Option<ResultLogger>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("predictor"),
            image_classifier,
            result_logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Only image files are predicted. Videos pass general validation but are
    /// rejected here as an unsupported format.
    pub fn predict_file(&self, path: &Path) -> Result<PredictOutcome, PredictError> {
        let mut validation = validate_file_with_limit(path, self.config.max_file_size_mb);
        if validation.is_valid && !is_valid_image(path) {
            validation = ValidationResult::failed(ValidationFailure::UnsupportedFormat);
        }

        if !validation.is_valid {
            self.logger
                .info(&format!(
                    "Rejected {}: {}",
                    path.display(),
                    validation.reason
                ))
                .map_err(PredictError::Log)?;
            return Ok(PredictOutcome::Rejected(validation));
        }

        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.predict_image(&image, &source_name)
            .map(PredictOutcome::Predicted)
    }

    pub fn predict_image(
        &self,
        image: &DynamicImage,
        source_name: &str,
    ) -> Result<Prediction, PredictError> {
        let prepared = resize_to_fit(
            to_rgb(image),
            self.config.max_image_width,
            self.config.max_image_height,
        );

        let output = self
            .image_classifier
            .classify(&prepared)
            .map_err(PredictError::Classifier)?;

        let top = top1(&output.probabilities, &output.labels)?;
        let ranked = top_k(&output.probabilities, &output.labels, self.config.top_k)?;

        self.logger
            .info(&format!(
                "{} -> {} ({:.2}%)",
                source_name,
                top.label,
                top.confidence * 100.0
            ))
            .map_err(PredictError::Log)?;

        if let Some(result_logger) = &self.result_logger {
            let log_path = result_logger.log_prediction(source_name, &ranked)?;
            self.logger
                .info(&format!("Prediction logged to {}", log_path.display()))
                .map_err(PredictError::Log)?;
        }

        Ok(Prediction { top, ranked })
    }
}
