use pixel_matrix::logger;
use pixel_matrix::pixel_matrix::{BmpConfig, BmpFileSaver, Pixel3, PixelMatrixContainer};

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "output.bmp".to_string());
    info!("Starting pixel_matrix demo...");

    let mut canvas = PixelMatrixContainer::new(160, 120)?;
    let mut pixels = canvas.full_pixels_mut();
    pixels.fill_all(Pixel3::GRAY)?;
    pixels.draw_rectangle_border(Pixel3::new(0, 255, 0), 10, 10, 100, 50)?;
    pixels.cut_out_mut(40, 70, 60, 30)?.fill_channels(200, 40, 40)?;

    let average = pixels.channel_average_of_entire()?;
    info!("Channel average: {}", average);
    info!("Lab: {}", average.to_lab()?);

    let mut enlarged = PixelMatrixContainer::new(320, 240)?;
    pixels.as_view().copy_to_with_scale_up(&mut enlarged.full_pixels_mut())?;
    let enlarged_pixels = enlarged.full_pixels();

    let config = BmpConfig::builder()
        .pixels_per_meter(3780)
        .validate_dimensions(true)
        .build();
    let saver = BmpFileSaver::new(config);
    saver
        .save(&enlarged_pixels, &output)
        .with_context(|| format!("failed to save {}", output))?;

    info!("Saved {}x{} image to {}", enlarged_pixels.width(), enlarged_pixels.height(), output);
    Ok(())
}
