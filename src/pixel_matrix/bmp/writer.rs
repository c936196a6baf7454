use std::io::Write;

use crate::pixel_matrix::bmp::types::BmpConfig;
use crate::pixel_matrix::common::error::Result;
use crate::pixel_matrix::matrix::PixelMatrix;

pub trait ImageWriter {
    fn write_image(&self, pixels: &PixelMatrix<'_>, output: &mut dyn Write, config: &BmpConfig) -> Result<()>;
}
