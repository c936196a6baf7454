use crate::pixel_matrix::common::error::{MatrixError, Result};

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 'B', 'M' read as a little-endian u16.
const FILE_TYPE: u16 = 0x4d42;

/// File and info header of an uncompressed BMP, serialised little-endian
/// without padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_type: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_data_offset: u32,
    pub info_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Zero for uncompressed images.
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpHeader {
    pub fn new(width: usize, height: usize, bits_per_pixel: usize, pixels_per_meter: i32) -> Result<Self> {
        let too_large = || {
            MatrixError::UnsupportedFormat(format!(
                "{}x{} at {} bits per pixel does not fit a BMP header",
                width, height, bits_per_pixel
            ))
        };

        let image_size = image_stride(width, bits_per_pixel)
            .and_then(|stride| stride.checked_mul(height))
            .ok_or_else(too_large)?;
        let file_size = u32::try_from(image_size)
            .ok()
            .and_then(|size| size.checked_add(HEADER_SIZE as u32))
            .ok_or_else(too_large)?;

        Ok(Self {
            file_type: FILE_TYPE,
            file_size,
            reserved1: 0,
            reserved2: 0,
            pixel_data_offset: HEADER_SIZE as u32,
            info_header_size: INFO_HEADER_SIZE as u32,
            width: i32::try_from(width).map_err(|_| too_large())?,
            height: i32::try_from(height).map_err(|_| too_large())?,
            planes: 1,
            bits_per_pixel: u16::try_from(bits_per_pixel).map_err(|_| too_large())?,
            compression: 0,
            size_image: 0,
            x_pixels_per_meter: pixels_per_meter,
            y_pixels_per_meter: pixels_per_meter,
            colors_used: 0,
            colors_important: 0,
        })
    }

    /// Bytes per pixel row in the file, padded to a multiple of 4.
    pub fn image_stride(&self) -> usize {
        image_stride(self.width as usize, usize::from(self.bits_per_pixel)).unwrap_or(0)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        let mut offset = 0;
        let mut put = |field: &[u8]| {
            bytes[offset..offset + field.len()].copy_from_slice(field);
            offset += field.len();
        };

        put(&self.file_type.to_le_bytes());
        put(&self.file_size.to_le_bytes());
        put(&self.reserved1.to_le_bytes());
        put(&self.reserved2.to_le_bytes());
        put(&self.pixel_data_offset.to_le_bytes());

        put(&self.info_header_size.to_le_bytes());
        put(&self.width.to_le_bytes());
        put(&self.height.to_le_bytes());
        put(&self.planes.to_le_bytes());
        put(&self.bits_per_pixel.to_le_bytes());
        put(&self.compression.to_le_bytes());
        put(&self.size_image.to_le_bytes());
        put(&self.x_pixels_per_meter.to_le_bytes());
        put(&self.y_pixels_per_meter.to_le_bytes());
        put(&self.colors_used.to_le_bytes());
        put(&self.colors_important.to_le_bytes());

        bytes
    }
}

fn image_stride(width: usize, bits_per_pixel: usize) -> Option<usize> {
    let bytes_per_pixel = bits_per_pixel.div_ceil(8);
    width
        .checked_mul(bytes_per_pixel)
        .and_then(|row| row.checked_next_multiple_of(4))
}
