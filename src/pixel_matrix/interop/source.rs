use tracing::{debug, instrument};

use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::common::mem_copy::mem_copy;
use crate::pixel_matrix::matrix::{BYTES_PER_PIXEL, Pixel3, PixelMatrixContainer, PixelMatrixMut};

/// A readable bitmap, e.g. a locked platform bitmap.
pub trait BitmapSource {
    fn pixel_width(&self) -> usize;
    fn pixel_height(&self) -> usize;
    fn bytes_per_pixel(&self) -> usize;

    /// Bytes of row `y`; at least `pixel_width() * bytes_per_pixel()` long.
    fn row(&self, y: usize) -> &[u8];

    /// All rows back to back without padding, when the source stores them so.
    fn continuous_pixels(&self) -> Option<&[u8]> {
        None
    }
}

/// Allocates a container matching `source` and copies its pixels in.
#[instrument(skip_all, fields(width = source.pixel_width(), height = source.pixel_height()))]
pub fn ingest(source: &dyn BitmapSource) -> Result<PixelMatrixContainer> {
    check_source(source)?;
    let mut container = PixelMatrixContainer::new(source.pixel_width(), source.pixel_height())?;
    update_from_source(source, &mut container.full_pixels_mut())?;
    Ok(container)
}

/// Copies `source` into an existing matrix of the same size.
///
/// Sources with more than 3 bytes per pixel are truncated to their first
/// three channels.
pub fn update_from_source(source: &dyn BitmapSource, pixels: &mut PixelMatrixMut<'_>) -> Result<()> {
    check_source(source)?;
    pixels.as_view().ensure_valid()?;

    let (width, height) = (source.pixel_width(), source.pixel_height());
    if width != pixels.width() || height != pixels.height() {
        return Err(MatrixError::SizeMismatch {
            src_width: width,
            src_height: height,
            dst_width: pixels.width(),
            dst_height: pixels.height(),
        });
    }

    let src_bytes_per_pixel = source.bytes_per_pixel();
    let row_len = pixels.as_view().row_len();

    if src_bytes_per_pixel == BYTES_PER_PIXEL && pixels.is_continuous() {
        if let Some(data) = source.continuous_pixels() {
            let total = pixels.allocated_size();
            check_len(data.len(), total)?;
            debug!(bytes = total, "Bulk copy from source");
            // SAFETY: `pixels` is valid and continuous, `data` holds `total` bytes.
            unsafe { mem_copy(pixels.as_mut_ptr(), data.as_ptr(), total) };
            return Ok(());
        }
    }

    for y in 0..height {
        let src = source.row(y);
        check_len(src.len(), width * src_bytes_per_pixel)?;
        let dest = pixels.row_mut(y)?;
        if src_bytes_per_pixel == BYTES_PER_PIXEL {
            bytemuck::cast_slice_mut::<Pixel3, u8>(dest).copy_from_slice(&src[..row_len]);
        } else {
            for (pixel, chunk) in dest.iter_mut().zip(src.chunks_exact(src_bytes_per_pixel)) {
                pixel.ch0 = chunk[0];
                pixel.ch1 = chunk[1];
                pixel.ch2 = chunk[2];
            }
        }
    }
    Ok(())
}

fn check_source(source: &dyn BitmapSource) -> Result<()> {
    let (width, height) = (source.pixel_width(), source.pixel_height());
    if width == 0 || height == 0 {
        return Err(MatrixError::InvalidBuffer(format!(
            "source bitmap is {}x{}",
            width, height
        )));
    }
    if source.bytes_per_pixel() < BYTES_PER_PIXEL {
        return Err(MatrixError::UnsupportedFormat(format!(
            "source has {} bytes per pixel, at least {} required",
            source.bytes_per_pixel(),
            BYTES_PER_PIXEL
        )));
    }
    Ok(())
}

fn check_len(actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(MatrixError::InvalidBuffer(format!(
            "source provided {} bytes, {} required",
            actual, required
        )));
    }
    Ok(())
}
