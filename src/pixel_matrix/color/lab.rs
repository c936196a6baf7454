use std::fmt;

use crate::pixel_matrix::common::error::{MatrixError, Result};

const X_WHITE: f64 = 95.047;
const Z_WHITE: f64 = 108.883;

/// Approximate CIE L*a*b* value.
///
/// Best-effort sRGB -> XYZ (D65) -> Lab; `Y` is not normalised by the white
/// point. Not a reference colorimetric transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLab {
    l: f64,
    a: f64,
    b: f64,
}

impl ColorLab {
    /// Channels are in `[0, 255]`.
    pub fn from_bgr(blue: f64, green: f64, red: f64) -> Result<Self> {
        let in_range = |v: f64| (0.0..=255.0).contains(&v);
        if !in_range(blue) || !in_range(green) || !in_range(red) {
            return Err(MatrixError::ArgumentError(format!(
                "bgr out of range: ({}, {}, {})",
                blue, green, red
            )));
        }

        let r = inverse_gamma(red / 255.0);
        let g = inverse_gamma(green / 255.0);
        let b = inverse_gamma(blue / 255.0);

        let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
        let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
        let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

        let fx = lab_f(x * 100.0 / X_WHITE);
        let fy = lab_f(y);
        let fz = lab_f(z * 100.0 / Z_WHITE);

        Ok(Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        })
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

fn inverse_gamma(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 4.0 / 29.0
    }
}

impl fmt::Display for ColorLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L={:.1}, a={:.1}, b={:.1}", self.l, self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_zero_lightness() {
        let lab = ColorLab::from_bgr(0.0, 0.0, 0.0).unwrap();
        assert!(lab.l().abs() < 1e-9);
        assert!(lab.a().abs() < 1e-9);
        assert!(lab.b().abs() < 1e-9);
    }

    #[test]
    fn test_white_is_full_lightness() {
        let lab = ColorLab::from_bgr(255.0, 255.0, 255.0).unwrap();
        assert!((lab.l() - 100.0).abs() < 0.01, "L={}", lab.l());
        assert!(lab.a().abs() < 0.1);
        assert!(lab.b().abs() < 0.1);
    }

    #[test]
    fn test_red_has_positive_a() {
        let lab = ColorLab::from_bgr(0.0, 0.0, 255.0).unwrap();
        assert!(lab.a() > 50.0);
        assert!(lab.l() > 0.0 && lab.l() < 100.0);
    }

    #[test]
    fn test_out_of_range_input() {
        for (b, g, r) in [(-1.0, 0.0, 0.0), (0.0, 256.0, 0.0), (0.0, 0.0, f64::NAN)] {
            let result = ColorLab::from_bgr(b, g, r);
            assert!(matches!(result.unwrap_err(), MatrixError::ArgumentError(_)));
        }
    }
}
