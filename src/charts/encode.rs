use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{imageops, DynamicImage, ImageFormat, Rgb, RgbImage};

use super::error::ChartRenderError;

const BACKGROUND_PIXEL: Rgb<u8> = Rgb([255, 255, 255]);

/// Converts a raw RGB raster into PNG bytes, cropped tightly to the drawn
/// content so the payload carries no surrounding whitespace.
pub(super) fn rgb_to_cropped_png(
    rgb_buffer: Vec<u8>,
    width: u32,
    height: u32,
    crop_padding: u32,
) -> Result<Vec<u8>, ChartRenderError> {
    let rgb_image =
        RgbImage::from_raw(width, height, rgb_buffer).ok_or(ChartRenderError::ImageBuffer)?;
    let cropped = crop_to_content(&rgb_image, crop_padding);

    let mut output = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(cropped)
        .write_to(&mut output, ImageFormat::Png)
        .map_err(|error| ChartRenderError::PngEncoding(error.to_string()))?;

    Ok(output.into_inner())
}

pub(super) fn to_base64(png_bytes: &[u8]) -> String {
    STANDARD.encode(png_bytes)
}

/// Bounding box of non-background pixels plus a padding margin. A fully
/// blank raster comes back unchanged.
fn crop_to_content(image: &RgbImage, padding: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel != BACKGROUND_PIXEL {
            found = true;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return image.clone();
    }

    let min_x = min_x.saturating_sub(padding);
    let min_y = min_y.saturating_sub(padding);
    let max_x = (max_x + padding).min(width - 1);
    let max_y = (max_y + padding).min(height - 1);

    imageops::crop_imm(image, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1).to_image()
}
