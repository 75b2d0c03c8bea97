use bisindo_predictor::config::Config;
use bisindo_predictor::config_manager::{
    get_model_path, load_config, save_config, ConfigDocument,
};
use bisindo_predictor::image_classifier::{
    impl_fake::ImageClassifierFake, interface::ImageClassifier,
};
use bisindo_predictor::library::logger::{impl_console::LoggerConsole, interface::Logger};
use bisindo_predictor::predictor::Predictor;
use bisindo_predictor::result_logger::ResultLogger;
use bisindo_predictor::{app, console};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let document = match load_config(&config.config_path)? {
        Some(document) => document,
        None => {
            logger.info(&format!(
                "No config at {}, writing defaults",
                config.config_path.display()
            ))?;
            let document = ConfigDocument::default();
            save_config(&document, &config.config_path)?;
            document
        }
    };

    match get_model_path(&config.model_type, Some(&document)) {
        Some(path) => logger.info(&format!("{} model: {}", config.model_type, path))?,
        None => logger.info(&format!("No model path for {}", config.model_type))?,
    }

    // No pretrained model runtime is linked in; predictions come from the fake.
    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        Arc::new(ImageClassifierFake::new(logger.clone()));

    let result_logger = match &config.result_log_dir {
        Some(log_dir) => Some(ResultLogger::new(log_dir, config.logger_timezone)?),
        None => None,
    };

    let predictor = Predictor::new(
        config.clone(),
        logger.clone(),
        image_classifier,
        result_logger,
    );

    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    if files.is_empty() {
        app::run(predictor, document, logger)?;
    } else {
        console::run(&predictor, &files, logger)?;
    }

    Ok(())
}
