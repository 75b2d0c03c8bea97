use crate::ranking::LabelSet;
use image::DynamicImage;

/// Raw model output for one image: one score per class in `labels`.
#[derive(Debug, Clone)]
pub struct ClassifierOutput {
    pub probabilities: Vec<f32>,
    pub labels: LabelSet,
}

pub trait ImageClassifier {
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<ClassifierOutput, Box<dyn std::error::Error + Send + Sync>>;
}
