use std::io::Write;

use tracing::debug;

use crate::pixel_matrix::bmp::header::BmpHeader;
use crate::pixel_matrix::bmp::types::BmpConfig;
use crate::pixel_matrix::bmp::writer::ImageWriter;
use crate::pixel_matrix::common::error::Result;
use crate::pixel_matrix::common::mem_copy::mem_copy;
use crate::pixel_matrix::matrix::PixelMatrix;

/// Writes uncompressed 24-bit BMP files.
pub struct StandardBmpWriter;

impl ImageWriter for StandardBmpWriter {
    fn write_image(&self, pixels: &PixelMatrix<'_>, output: &mut dyn Write, config: &BmpConfig) -> Result<()> {
        let buffer = encode_with(pixels, config)?;
        output.write_all(&buffer)?;
        Ok(())
    }
}

/// Encodes with the default configuration.
pub fn encode(pixels: &PixelMatrix<'_>) -> Result<Vec<u8>> {
    encode_with(pixels, &BmpConfig::default())
}

/// Builds the whole file in memory: header, then rows bottom-up, each padded
/// to the 4-byte aligned BMP stride.
pub(crate) fn encode_with(pixels: &PixelMatrix<'_>, config: &BmpConfig) -> Result<Vec<u8>> {
    pixels.ensure_valid()?;

    let (width, height) = (pixels.width(), pixels.height());
    debug!("Encoding BMP image: {}x{}", width, height);

    let header = BmpHeader::new(width, height, pixels.bits_per_pixel(), config.pixels_per_meter)?;
    let mut buffer = vec![0u8; header.file_size as usize];
    let header_bytes = header.to_bytes();
    buffer[..header_bytes.len()].copy_from_slice(&header_bytes);

    let dest_stride = header.image_stride();
    let row_len = pixels.row_len();
    let data = &mut buffer[header.pixel_data_offset as usize..];
    for (y, dest) in data.chunks_exact_mut(dest_stride).enumerate() {
        let src_row = height - 1 - y;
        // SAFETY: the view is valid, `src_row < height` and `row_len <= dest_stride`.
        unsafe { mem_copy(dest.as_mut_ptr(), pixels.row_ptr(src_row), row_len) };
    }

    debug!("BMP encoding complete: {} bytes", buffer.len());
    Ok(buffer)
}
