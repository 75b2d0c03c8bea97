use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[cfg(test)]
mod ranking_test;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("probability vector has {actual} entries but the label set has {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("probability vector is empty")]
    EmptyInput,
    #[error("k must be at least 1")]
    InvalidK,
}

/// Class index to label mapping for one loaded model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// The 26 BISINDO alphabet classes, `A` through `Z`.
    pub fn bisindo() -> Self {
        Self::new(('A'..='Z').map(|c| c.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    pub label: String,
    pub confidence: f32,
    pub rank: usize,
}

/// Highest-confidence entry of `probabilities`.
pub fn top1(probabilities: &[f32], labels: &LabelSet) -> Result<RankedPrediction, RankingError> {
    let mut ranked = top_k(probabilities, labels, 1)?;
    ranked.pop().ok_or(RankingError::EmptyInput)
}

/// Up to `k` entries ordered by descending confidence. Equal confidences keep
/// their original index order. A `k` past the vector length returns every entry.
pub fn top_k(
    probabilities: &[f32],
    labels: &LabelSet,
    k: usize,
) -> Result<Vec<RankedPrediction>, RankingError> {
    if probabilities.is_empty() {
        return Err(RankingError::EmptyInput);
    }
    if probabilities.len() != labels.len() {
        return Err(RankingError::ShapeMismatch {
            expected: labels.len(),
            actual: probabilities.len(),
        });
    }
    if k == 0 {
        return Err(RankingError::InvalidK);
    }

    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    indices.sort_by(|&a, &b| {
        descending_confidence(probabilities[a], probabilities[b]).then(a.cmp(&b))
    });

    Ok(indices
        .into_iter()
        .take(k)
        .zip(1..)
        .map(|(index, rank)| RankedPrediction {
            // lengths were checked above
            label: labels.get(index).unwrap_or_default().to_string(),
            confidence: probabilities[index],
            rank,
        })
        .collect())
}

// NaN sorts after every number.
fn descending_confidence(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}
