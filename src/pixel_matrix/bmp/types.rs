//! BMP encoding configuration types

/// 96 dpi expressed in pixels per meter.
pub const DEFAULT_PIXELS_PER_METER: i32 = 3780;

/// Configuration for encoding and saving BMP files
#[derive(Debug, Clone)]
pub struct BmpConfig {
    /// Horizontal and vertical resolution written to the info header
    pub pixels_per_meter: i32,
    /// Whether to check image dimensions against `max_dimension` before encoding
    pub validate_dimensions: bool,
    /// Largest accepted width or height
    pub max_dimension: Option<usize>,
}

impl Default for BmpConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            validate_dimensions: true,
            max_dimension: Some(65_535),
        }
    }
}

impl BmpConfig {
    pub fn builder() -> BmpConfigBuilder {
        BmpConfigBuilder::default()
    }
}

/// Builder for BmpConfig
#[derive(Default)]
pub struct BmpConfigBuilder {
    pixels_per_meter: Option<i32>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl BmpConfigBuilder {
    pub fn pixels_per_meter(mut self, pixels_per_meter: i32) -> Self {
        self.pixels_per_meter = Some(pixels_per_meter);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> BmpConfig {
        let default = BmpConfig::default();
        BmpConfig {
            pixels_per_meter: self.pixels_per_meter.unwrap_or(default.pixels_per_meter),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
