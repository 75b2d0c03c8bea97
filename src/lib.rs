//! BISINDO hand-sign predictor.
//!
//! Ranking, validation and config handling are plain functions with no shared
//! state. The classifier sits behind [`image_classifier::interface::ImageClassifier`]
//! and is handed to [`predictor::Predictor`] by whoever builds it.

pub mod app;
pub mod color_palette;
pub mod config;
pub mod config_manager;
pub mod console;
pub mod fps_counter;
pub mod image_classifier;
pub mod image_utils;
pub mod library;
pub mod predictor;
pub mod ranking;
pub mod result_logger;
pub mod validation;
