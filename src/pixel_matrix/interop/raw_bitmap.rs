use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::interop::{BitmapSink, BitmapSource};

/// In-memory bitmap with rows padded to 4 bytes, the layout most platform
/// bitmaps use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBitmap {
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
    stride: usize,
    data: Vec<u8>,
}

impl RawBitmap {
    /// A zeroed bitmap.
    pub fn new(width: usize, height: usize, bytes_per_pixel: usize) -> Result<Self> {
        let stride = width
            .checked_mul(bytes_per_pixel)
            .and_then(|row| row.checked_next_multiple_of(4))
            .ok_or_else(|| too_large(width, height, bytes_per_pixel))?;
        let size = stride
            .checked_mul(height)
            .ok_or_else(|| too_large(width, height, bytes_per_pixel))?;
        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            stride,
            data: vec![0; size],
        })
    }

    pub fn from_bytes(
        width: usize,
        height: usize,
        bytes_per_pixel: usize,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        let row_len = width
            .checked_mul(bytes_per_pixel)
            .ok_or_else(|| too_large(width, height, bytes_per_pixel))?;
        if stride < row_len {
            return Err(MatrixError::InvalidBuffer(format!(
                "stride {} is shorter than a row of {} bytes",
                stride, row_len
            )));
        }
        let required = stride
            .checked_mul(height)
            .ok_or_else(|| too_large(width, height, bytes_per_pixel))?;
        if data.len() < required {
            return Err(MatrixError::InvalidBuffer(format!(
                "{} bytes for {} rows of stride {}",
                data.len(),
                height,
                stride
            )));
        }
        Ok(Self {
            width,
            height,
            bytes_per_pixel,
            stride,
            data,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The bytes of one pixel, or `None` outside the bitmap.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y * self.stride + x * self.bytes_per_pixel;
        self.data.get(start..start + self.bytes_per_pixel)
    }

    fn row_len(&self) -> usize {
        self.width * self.bytes_per_pixel
    }
}

fn too_large(width: usize, height: usize, bytes_per_pixel: usize) -> MatrixError {
    MatrixError::InvalidBuffer(format!(
        "{}x{} bitmap at {} bytes per pixel overflows",
        width, height, bytes_per_pixel
    ))
}

impl BitmapSource for RawBitmap {
    fn pixel_width(&self) -> usize {
        self.width
    }

    fn pixel_height(&self) -> usize {
        self.height
    }

    fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.row_len()]
    }

    fn continuous_pixels(&self) -> Option<&[u8]> {
        (self.stride == self.row_len()).then_some(&self.data[..])
    }
}

impl BitmapSink for RawBitmap {
    fn pixel_width(&self) -> usize {
        self.width
    }

    fn pixel_height(&self) -> usize {
        self.height
    }

    fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    fn write_pixels(&mut self, pixels: &[u8], stride: usize) -> Result<()> {
        let row_len = self.row_len();
        if self.height == 0 || row_len == 0 {
            return Ok(());
        }
        let required = stride * (self.height - 1) + row_len;
        if stride < row_len || pixels.len() < required {
            return Err(MatrixError::InvalidBuffer(format!(
                "{} bytes with stride {} cannot fill {} rows of {} bytes",
                pixels.len(),
                stride,
                self.height,
                row_len
            )));
        }
        for y in 0..self.height {
            let src = &pixels[y * stride..y * stride + row_len];
            let dest_start = y * self.stride;
            self.data[dest_start..dest_start + row_len].copy_from_slice(src);
        }
        Ok(())
    }
}
