use std::fs::OpenOptions;
use std::future::Future;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use enough::Stop;
use tracing::{info, instrument, warn};

use crate::pixel_matrix::bmp::standard_bmp_writer::StandardBmpWriter;
use crate::pixel_matrix::bmp::types::BmpConfig;
use crate::pixel_matrix::bmp::writer::ImageWriter;
use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::matrix::PixelMatrix;

/// Encodes pixel matrices and writes them to new files.
pub struct BmpFileSaver<W: ImageWriter> {
    writer: W,
    config: BmpConfig,
}

impl BmpFileSaver<StandardBmpWriter> {
    pub fn new(config: BmpConfig) -> Self {
        Self {
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl Default for BmpFileSaver<StandardBmpWriter> {
    fn default() -> Self {
        Self::new(BmpConfig::default())
    }
}

impl<W: ImageWriter> BmpFileSaver<W> {
    pub fn with_custom(writer: W, config: BmpConfig) -> Self {
        Self { writer, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(MatrixError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Encodes `pixels` into `output`.
    #[instrument(skip_all, fields(width = pixels.width(), height = pixels.height()))]
    pub fn write(&self, pixels: &PixelMatrix<'_>, output: &mut dyn Write) -> Result<()> {
        pixels.ensure_valid()?;
        self.validate_dimensions(pixels.width(), pixels.height())?;
        self.writer.write_image(pixels, output, &self.config)
    }

    /// Saves `pixels` to a file that must not exist yet.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save<P: AsRef<Path>>(&self, pixels: &PixelMatrix<'_>, path: P) -> Result<()> {
        let path = path.as_ref();
        pixels.ensure_valid()?;
        if path.exists() {
            return Err(MatrixError::FileAlreadyExists(path.to_path_buf()));
        }
        self.validate_dimensions(pixels.width(), pixels.height())?;

        let mut encoded = Vec::new();
        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_image(pixels, &mut encoded, &self.config)?;
        }

        let mut file = {
            let _span = tracing::info_span!("create_output_file").entered();
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| match e.kind() {
                    ErrorKind::AlreadyExists => MatrixError::FileAlreadyExists(path.to_path_buf()),
                    _ => MatrixError::IoError(e),
                })?
        };
        file.write_all(&encoded)?;
        file.flush()?;

        info!(bytes = encoded.len(), "Saved BMP file");
        Ok(())
    }

    /// Yields once, checks `stop`, then performs the same work as
    /// [`save`](Self::save). Cancellation is not observed once encoding starts.
    pub async fn save_async<P: AsRef<Path>>(
        &self,
        pixels: &PixelMatrix<'_>,
        path: P,
        stop: &dyn Stop,
    ) -> Result<()> {
        YieldNow::default().await;
        stop.check()
            .map_err(|reason| MatrixError::Cancelled(format!("{:?}", reason)))?;
        self.save(pixels, path)
    }

    pub fn config(&self) -> &BmpConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BmpConfig) {
        self.config = config;
    }
}

/// Saves with the standard writer and default configuration.
pub fn save_to_file<P: AsRef<Path>>(pixels: &PixelMatrix<'_>, path: P) -> Result<()> {
    BmpFileSaver::default().save(pixels, path)
}

pub async fn save_to_file_async<P: AsRef<Path>>(
    pixels: &PixelMatrix<'_>,
    path: P,
    stop: &dyn Stop,
) -> Result<()> {
    BmpFileSaver::default().save_async(pixels, path, stop).await
}

/// Returns `Pending` on the first poll after waking the task, `Ready` after.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
