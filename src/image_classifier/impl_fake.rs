use crate::image_classifier::interface::{ClassifierOutput, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::ranking::LabelSet;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Stands in for a pretrained BISINDO model. Produces either random scores or
/// a fixed vector supplied at construction.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    labels: LabelSet,
    fixed_probabilities: Option<Vec<f32>>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier.fake"),
            labels: LabelSet::bisindo(),
            fixed_probabilities: None,
        }
    }

    pub fn with_probabilities(
        logger: Arc<dyn Logger + Send + Sync>,
        labels: LabelSet,
        probabilities: Vec<f32>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier.fake"),
            labels,
            fixed_probabilities: Some(probabilities),
        }
    }

    fn random_probabilities(
        &self,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let score_dist = Uniform::new(0.0f32, 1.0)?;

        let scores: Vec<f32> = (0..self.labels.len())
            .map(|_| score_dist.sample(&mut rng))
            .collect();
        let total: f32 = scores.iter().sum();

        if total <= 0.0 {
            return Ok(scores);
        }

        Ok(scores.into_iter().map(|score| score / total).collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<ClassifierOutput, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying {}x{} image with fake classifier...",
            image.width(),
            image.height()
        ))?;

        let probabilities = match &self.fixed_probabilities {
            Some(probabilities) => probabilities.clone(),
            None => self.random_probabilities()?,
        };

        Ok(ClassifierOutput {
            probabilities,
            labels: self.labels.clone(),
        })
    }
}
