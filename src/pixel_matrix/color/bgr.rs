use std::fmt;

use crate::pixel_matrix::color::ColorLab;
use crate::pixel_matrix::common::error::{MatrixError, Result};
use crate::pixel_matrix::matrix::Pixel3;

/// Luminance `Y = 0.299 R + 0.587 G + 0.114 B`.
pub fn luminance_y(b: f64, g: f64, r: f64) -> f64 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Channel values in B, G, R order with their luminance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBgr {
    b: f64,
    g: f64,
    r: f64,
    y: f64,
}

impl ColorBgr {
    pub fn new(b: f64, g: f64, r: f64) -> Self {
        Self {
            b,
            g,
            r,
            y: luminance_y(b, g, r),
        }
    }

    pub fn from_bytes(b: u8, g: u8, r: u8) -> Self {
        Self::new(f64::from(b), f64::from(g), f64::from(r))
    }

    pub fn from_channels(channels: &[f64]) -> Result<Self> {
        match channels {
            &[b, g, r] => Ok(Self::new(b, g, r)),
            _ => Err(MatrixError::ArgumentError(format!(
                "expected 3 channels, got {}",
                channels.len()
            ))),
        }
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn to_lab(&self) -> Result<ColorLab> {
        ColorLab::from_bgr(self.b, self.g, self.r)
    }
}

impl From<Pixel3> for ColorBgr {
    fn from(pixel: Pixel3) -> Self {
        Self::from_bytes(pixel.ch0, pixel.ch1, pixel.ch2)
    }
}

impl fmt::Display for ColorBgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B={:.1}, G={:.1}, R={:.1}, Y={:.1}",
            self.b, self.g, self.r, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_weights() {
        assert!((luminance_y(0.0, 0.0, 255.0) - 76.245).abs() < 1e-9);
        assert!((luminance_y(0.0, 255.0, 0.0) - 149.685).abs() < 1e-9);
        assert!((luminance_y(255.0, 0.0, 0.0) - 29.07).abs() < 1e-9);
        assert!((ColorBgr::from(Pixel3::WHITE).y() - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_channels_requires_three() {
        let color = ColorBgr::from_channels(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!((color.b(), color.g(), color.r()), (1.0, 2.0, 3.0));

        let result = ColorBgr::from_channels(&[1.0, 2.0]);
        assert!(matches!(result.unwrap_err(), MatrixError::ArgumentError(_)));
    }

    #[test]
    fn test_display() {
        let color = ColorBgr::new(100.0, 100.0, 100.0);
        assert_eq!(color.to_string(), "B=100.0, G=100.0, R=100.0, Y=100.0");
    }
}
