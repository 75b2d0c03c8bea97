use std::path::PathBuf;

use crate::validation::MAX_FILE_SIZE_MB;

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub config_path: PathBuf,
    pub model_type: String,
    pub top_k: usize,
    pub max_file_size_mb: f64,
    pub max_image_width: u32,
    pub max_image_height: u32,
    pub result_log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: western_indonesia_time(),
            config_path: PathBuf::from("config.json"),
            model_type: "classification".to_string(),
            top_k: 3,
            max_file_size_mb: MAX_FILE_SIZE_MB,
            max_image_width: 1920,
            max_image_height: 1080,
            result_log_dir: Some(PathBuf::from("logs")),
        }
    }
}

fn western_indonesia_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(7 * 3600).unwrap()
}
