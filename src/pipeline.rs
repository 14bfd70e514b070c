use image::RgbImage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{Result, ThumbnailError};
use crate::output::image_from_raw;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for per-step frames
    pub output_dir: PathBuf,
}

/// Context available to all paint steps
#[derive(Clone, Debug, Default)]
pub struct PaintContext {
    pub verbose: bool,
    pub debug: Option<DebugConfig>,
}

/// Trait that all paint steps must implement
pub trait PaintStep: Send + Sync {
    /// Mutate the buffer in place
    fn paint(&self, image: &mut RgbImage, context: &PaintContext) -> Result<()>;

    /// Human-readable name for this step (used in logs and debug file names)
    fn name(&self) -> &str;
}

/// Composable pipeline that owns the buffer for the duration of a run
pub struct Pipeline {
    width: u32,
    height: u32,
    steps: Vec<Arc<dyn PaintStep>>,
    context: PaintContext,
}

impl Pipeline {
    /// Create an empty pipeline painting onto a `width` x `height` canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            steps: Vec::new(),
            context: PaintContext::default(),
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.context.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory.
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries =
                std::fs::read_dir(&output_dir).map_err(|e| ThumbnailError::io(&output_dir, e))?;
            if entries.count() > 0 {
                return Err(ThumbnailError::InvalidConfig(format!(
                    "debug directory is not empty: {}",
                    output_dir.display()
                )));
            }
        } else {
            std::fs::create_dir_all(&output_dir)
                .map_err(|e| ThumbnailError::io(&output_dir, e))?;
        }

        self.context.debug = Some(DebugConfig { output_dir });

        Ok(self)
    }

    /// Add a paint step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PaintStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Helper method to add a step from a Box
    pub fn add_step_boxed(mut self, step: Box<dyn PaintStep>) -> Self {
        self.steps.push(Arc::from(step));
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Allocate the canvas and run every step over it in order
    pub fn run(&self) -> Result<RgbImage> {
        let mut image = self.blank_canvas()?;

        for (step_idx, step) in self.steps.iter().enumerate() {
            if self.context.verbose {
                info!("Running step {}: {}", step_idx + 1, step.name());
            }

            step.paint(&mut image, &self.context)?;
            self.save_debug_frame(&image, step_idx, step.name())?;
        }

        Ok(image)
    }

    /// Zeroed RGB canvas, shape-checked before any step paints on it
    fn blank_canvas(&self) -> Result<RgbImage> {
        let len = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|cells| cells.checked_mul(3))
            .ok_or_else(|| {
                ThumbnailError::Encoding(format!(
                    "{}x{} RGB canvas does not fit in memory",
                    self.width, self.height
                ))
            })?;
        image_from_raw(self.width, self.height, vec![0; len])
    }

    /// Write the canvas as it stands after `step_idx` when debug mode is on
    fn save_debug_frame(&self, image: &RgbImage, step_idx: usize, step_name: &str) -> Result<()> {
        let Some(debug_config) = &self.context.debug else {
            return Ok(());
        };

        let filename = format!(
            "{:02}_{}.png",
            step_idx + 1,
            step_name.to_lowercase().replace(' ', "_")
        );
        let output_path = debug_config.output_dir.join(&filename);

        image
            .save(&output_path)
            .map_err(|e| ThumbnailError::from_image(e, &output_path))?;

        debug!("Debug: saved {}", filename);
        Ok(())
    }
}
