use std::time::Instant;

#[derive(Debug, Default, Clone)]
pub struct FpsCounter {
    previous_frame: Option<Instant>,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    /// Records a frame at `now`. The first frame and zero-length intervals
    /// report 0.
    pub fn update_at(&mut self, now: Instant) -> f64 {
        if let Some(previous) = self.previous_frame {
            let elapsed = now.saturating_duration_since(previous).as_secs_f64();
            self.fps = if elapsed > 0.0 { 1.0 / elapsed } else { 0.0 };
        }

        self.previous_frame = Some(now);
        self.fps
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}
