use crate::color_palette::{get_color, random_color};
use crate::config_manager::{get_model_path, ConfigDocument};
use crate::fps_counter::FpsCounter;
use crate::image_utils::{draw_box, enhance, resize_to_fit};
use crate::library::logger::interface::Logger;
use crate::predictor::{PredictOutcome, Prediction, Predictor};
use crate::validation::{SUPPORTED_IMAGE_FORMATS, SUPPORTED_VIDEO_FORMATS};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const PREVIEW_SIZE: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Upload,
    Info,
}

enum UploadState {
    Empty,
    Rejected(String),
    Failed(String),
    Predicted {
        prediction: Prediction,
        path: PathBuf,
        preview: Option<egui::TextureHandle>,
        rank_colors: Vec<egui::Color32>,
    },
}

pub struct App {
    predictor: Predictor,
    document: ConfigDocument,
    logger: Arc<dyn Logger + Send + Sync>,
    tab: Tab,
    path_input: String,
    brightness: f32,
    contrast: f32,
    state: UploadState,
    fps: FpsCounter,
}

impl App {
    pub fn new(
        predictor: Predictor,
        document: ConfigDocument,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            predictor,
            document,
            logger: logger.with_namespace("app"),
            tab: Tab::Upload,
            path_input: String::new(),
            brightness: 0.0,
            contrast: 1.0,
            state: UploadState::Empty,
            fps: FpsCounter::new(),
        }
    }

    fn predict(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.path_input = path.display().to_string();

        self.state = match self.predictor.predict_file(&path) {
            Ok(PredictOutcome::Rejected(result)) => UploadState::Rejected(result.reason),
            Ok(PredictOutcome::Predicted(prediction)) => UploadState::Predicted {
                preview: load_preview(ctx, &path, self.brightness, self.contrast),
                rank_colors: rank_colors(prediction.ranked.len()),
                path,
                prediction,
            },
            Err(e) => {
                let _ = self.logger.error(&format!("Prediction failed: {}", e));
                UploadState::Failed(e.to_string())
            }
        };
    }

    fn upload_tab(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.heading("Upload Image");
        ui.label("Type a path or drop an image onto the window.");

        let mut submitted = None;
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.path_input);
            if ui.button("Predict").clicked() && !self.path_input.trim().is_empty() {
                submitted = Some(PathBuf::from(self.path_input.trim()));
            }
        });

        let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(|f| f.path.clone()));
        if let Some(path) = dropped.or(submitted) {
            self.predict(ctx, path);
        }

        let brightness = ui.add(
            egui::Slider::new(&mut self.brightness, -100.0..=100.0).text("Preview brightness"),
        );
        let contrast =
            ui.add(egui::Slider::new(&mut self.contrast, 0.5..=2.0).text("Preview contrast"));
        if brightness.changed() || contrast.changed() {
            if let UploadState::Predicted { path, preview, .. } = &mut self.state {
                *preview = load_preview(ctx, path, self.brightness, self.contrast);
            }
        }

        ui.separator();

        match &self.state {
            UploadState::Empty => {}
            UploadState::Rejected(reason) => {
                ui.colored_label(color32("orange"), format!("Rejected: {}", reason));
            }
            UploadState::Failed(message) => {
                ui.colored_label(color32("red"), format!("Prediction error: {}", message));
            }
            UploadState::Predicted {
                prediction,
                preview,
                rank_colors,
                ..
            } => {
                ui.horizontal_top(|ui| {
                    if let Some(texture) = preview {
                        ui.image((texture.id(), texture.size_vec2()));
                    }

                    ui.vertical(|ui| {
                        ui.colored_label(color32("green"), "Letter detected");
                        ui.label(
                            egui::RichText::new(&prediction.top.label)
                                .size(48.0)
                                .strong(),
                        );
                        ui.label(format!(
                            "Confidence: {:.2}%",
                            prediction.top.confidence * 100.0
                        ));
                        ui.separator();
                        ui.label(format!("Top {} predictions:", prediction.ranked.len()));
                        for (ranked, color) in prediction.ranked.iter().zip(rank_colors) {
                            ui.colored_label(
                                *color,
                                format!(
                                    "{}. {}: {:.2}%",
                                    ranked.rank,
                                    ranked.label,
                                    ranked.confidence * 100.0
                                ),
                            );
                        }
                    });
                });
            }
        }
    }

    fn info_tab(&self, ui: &mut egui::Ui) {
        let config = self.predictor.config();
        let model_path = get_model_path(&config.model_type, Some(&self.document));

        ui.heading(format!(
            "{} v{}",
            self.document.app.name, self.document.app.version
        ));
        ui.label("Classifies BISINDO alphabet hand signs (A-Z) from a single image.");
        ui.separator();

        egui::Grid::new("info").num_columns(2).show(ui, |ui| {
            ui.label("Model type");
            ui.label(config.model_type.as_str());
            ui.end_row();

            ui.label("Model path");
            ui.label(model_path.as_deref().unwrap_or("not configured"));
            ui.end_row();

            ui.label("Image formats");
            ui.label(SUPPORTED_IMAGE_FORMATS.join(", "));
            ui.end_row();

            ui.label("Video formats");
            ui.label(SUPPORTED_VIDEO_FORMATS.join(", "));
            ui.end_row();

            ui.label("Max file size");
            ui.label(format!("{} MB", config.max_file_size_mb));
            ui.end_row();

            ui.label("Ranked results");
            ui.label(format!("top {}", config.top_k));
            ui.end_row();
        });

        ui.separator();
        ui.label("1. Open the Upload tab.");
        ui.label("2. Pick a clear photo of one hand sign.");
        ui.label("3. Press Predict and read the letter and its confidence.");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.fps.update();

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Upload, "Upload");
                ui.selectable_value(&mut self.tab, Tab::Info, "Info");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("{:.0} fps", self.fps.fps()));
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Upload => self.upload_tab(ctx, ui),
            Tab::Info => self.info_tab(ui),
        });
    }
}

fn color32(name: &str) -> egui::Color32 {
    let [r, g, b] = get_color(name).0;
    egui::Color32::from_rgb(r, g, b)
}

// Rank 1 is always green; the rest get one random color each per prediction.
fn rank_colors(count: usize) -> Vec<egui::Color32> {
    (0..count)
        .map(|rank| match rank {
            0 => color32("green"),
            _ => {
                let [r, g, b] = random_color().0;
                egui::Color32::from_rgb(r, g, b)
            }
        })
        .collect()
}

fn load_preview(
    ctx: &egui::Context,
    path: &Path,
    brightness: f32,
    contrast: f32,
) -> Option<egui::TextureHandle> {
    let image = enhance(&image::open(path).ok()?, brightness, contrast);
    let mut rgb = resize_to_fit(image, PREVIEW_SIZE, PREVIEW_SIZE).to_rgb8();

    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return None;
    }
    draw_box(
        &mut rgb,
        (0, 0),
        (width - 1, height - 1),
        get_color("green"),
        3,
    );

    let color_image =
        egui::ColorImage::from_rgb([width as usize, height as usize], rgb.as_raw());
    Some(ctx.load_texture("preview", color_image, egui::TextureOptions::default()))
}

pub fn run(
    predictor: Predictor,
    document: ConfigDocument,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    let title = document.app.name.clone();
    let app = App::new(predictor, document, logger);

    eframe::run_native(&title, options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| format!("failed to open window: {}", e))?;

    Ok(())
}
