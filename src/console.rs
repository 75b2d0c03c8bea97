use crate::library::logger::interface::Logger;
use crate::predictor::{PredictOutcome, Prediction, Predictor};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Predicts each file in turn and prints the result. Rejected files and
/// prediction errors are reported per file and the run carries on.
pub fn run(
    predictor: &Predictor,
    files: &[PathBuf],
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stdout = std::io::stdout();
    let failed = run_with_output(predictor, files, logger.clone(), &mut stdout.lock())?;

    if failed > 0 {
        logger.error(&format!("{} of {} files failed", failed, files.len()))?;
    }

    Ok(())
}

/// Writes one report per file to `out` and returns how many files failed with
/// an error. Rejections are not failures.
pub fn run_with_output<W: Write>(
    predictor: &Predictor,
    files: &[PathBuf],
    logger: Arc<dyn Logger + Send + Sync>,
    out: &mut W,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let logger = logger.with_namespace("console");
    let mut failed = 0;

    for path in files {
        logger.info(&format!("Processing {}", path.display()))?;

        match predictor.predict_file(path) {
            Ok(PredictOutcome::Rejected(result)) => {
                writeln!(out, "{}: rejected ({})", path.display(), result.reason)?;
            }
            Ok(PredictOutcome::Predicted(prediction)) => {
                writeln!(
                    out,
                    "{}",
                    format_prediction(&path.display().to_string(), &prediction)
                )?;
            }
            Err(e) => {
                failed += 1;
                logger.error(&format!("{}: {}", path.display(), e))?;
                writeln!(out, "{}: error ({})", path.display(), e)?;
            }
        }
    }

    Ok(failed)
}

pub fn format_prediction(source: &str, prediction: &Prediction) -> String {
    let mut lines = vec![format!(
        "{}: {} ({:.2}%)",
        source,
        prediction.top.label,
        prediction.top.confidence * 100.0
    )];

    lines.extend(prediction.ranked.iter().map(|ranked| {
        format!(
            "  {}. {}: {:.2}%",
            ranked.rank,
            ranked.label,
            ranked.confidence * 100.0
        )
    }));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::library::logger::impl_console::LoggerConsole;
    use crate::ranking::{LabelSet, RankedPrediction};
    use image::{DynamicImage, ImageFormat};
    use tempfile::TempDir;

    fn ranked(label: &str, confidence: f32, rank: usize) -> RankedPrediction {
        RankedPrediction {
            label: label.to_string(),
            confidence,
            rank,
        }
    }

    #[test]
    fn test_format_prediction() {
        let prediction = Prediction {
            top: ranked("C", 0.6, 1),
            ranked: vec![ranked("C", 0.6, 1), ranked("D", 0.2, 2), ranked("A", 0.1, 3)],
        };

        let text = format_prediction("hand.jpg", &prediction);

        assert_eq!(
            text,
            "hand.jpg: C (60.00%)\n  1. C: 60.00%\n  2. D: 20.00%\n  3. A: 10.00%"
        );
    }

    #[test]
    fn test_batch_continues_past_bad_files() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            result_log_dir: None,
            ..Config::default()
        };
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let mut probabilities = vec![0.0; 26];
        probabilities[2] = 0.9;
        let predictor = Predictor::new(
            config.clone(),
            logger.clone(),
            Arc::new(ImageClassifierFake::with_probabilities(
                logger.clone(),
                LabelSet::bisindo(),
                probabilities,
            )),
            None,
        );

        let first = dir.path().join("first.png");
        let last = dir.path().join("last.png");
        for path in [&first, &last] {
            DynamicImage::new_rgb8(8, 8)
                .save_with_format(path, ImageFormat::Png)
                .unwrap();
        }
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"not an image").unwrap();
        let video = dir.path().join("clip.mov");
        std::fs::write(&video, b"not decoded").unwrap();

        let files = vec![first.clone(), corrupt.clone(), video.clone(), last.clone()];
        let mut out = Vec::new();
        let failed = run_with_output(&predictor, &files, logger, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(failed, 1);
        assert!(text.contains(&format!("{}: C (90.00%)", first.display())));
        assert!(text.contains(&format!("{}: error (", corrupt.display())));
        assert!(text.contains(&format!("{}: rejected (unsupported format)", video.display())));
        assert!(text.contains(&format!("{}: C (90.00%)", last.display())));
    }
}
