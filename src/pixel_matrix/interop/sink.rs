use tracing::{debug, instrument};

use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::matrix::{BYTES_PER_PIXEL, PixelMatrix};

/// A writable bitmap, e.g. a platform bitmap used for display.
pub trait BitmapSink {
    fn pixel_width(&self) -> usize;
    fn pixel_height(&self) -> usize;
    fn bytes_per_pixel(&self) -> usize;

    /// Receives all pixel rows in one call; row `y` starts at `y * stride`.
    fn write_pixels(&mut self, pixels: &[u8], stride: usize) -> Result<()>;
}

/// Hands the matrix memory to `sink` in a single bulk write.
#[instrument(skip_all, fields(width = pixels.width(), height = pixels.height()))]
pub fn export(pixels: &PixelMatrix<'_>, sink: &mut dyn BitmapSink) -> Result<()> {
    let bytes = pixels.as_bytes()?;
    if sink.bytes_per_pixel() != BYTES_PER_PIXEL {
        return Err(MatrixError::UnsupportedFormat(format!(
            "sink has {} bytes per pixel, {} required",
            sink.bytes_per_pixel(),
            BYTES_PER_PIXEL
        )));
    }
    if sink.pixel_width() != pixels.width() || sink.pixel_height() != pixels.height() {
        return Err(MatrixError::SizeMismatch {
            src_width: pixels.width(),
            src_height: pixels.height(),
            dst_width: sink.pixel_width(),
            dst_height: sink.pixel_height(),
        });
    }

    debug!(bytes = bytes.len(), stride = pixels.stride(), "Writing pixels to sink");
    sink.write_pixels(bytes, pixels.stride())
}
