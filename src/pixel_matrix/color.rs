//! Color space module
//!
//! BGR averages with their luminance, and an approximate BGR to L*a*b*
//! conversion.

mod bgr;
mod lab;

pub use bgr::{ColorBgr, luminance_y};
pub use lab::ColorLab;
