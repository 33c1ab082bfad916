//! Writing decoded images in the target codec.

use crate::error::{ConvertError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Encode `image` as `format` into `path`, truncating any existing file.
///
/// JPEG has no alpha channel, so it is written from RGB8; GIF is written
/// from RGBA8. Other formats keep the decoded pixel layout.
pub fn encode_to_file(
    image: &DynamicImage,
    format: ImageFormat,
    path: &Path,
    jpeg_quality: u8,
) -> Result<()> {
    let file = File::create(path).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality);
            DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)
        }
        ImageFormat::Gif => {
            DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut writer, ImageFormat::Gif)
        }
        other => image.write_to(&mut writer, other),
    };
    encoded.map_err(|source| ConvertError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    writer.flush().map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
