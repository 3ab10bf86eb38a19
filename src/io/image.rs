//! PNG export of pixel regions with transparency for absent pixels

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::compositor::Composition;
use crate::io::error::{GenerationError, Result};
use crate::spatial::region::PixelRegion;

/// Rasterize a region onto a `width x height` transparent canvas
///
/// Pixels outside the canvas are dropped.
pub fn region_to_image(region: &PixelRegion, width: u32, height: u32) -> RgbaImage {
    let mut img = ImageBuffer::new(width, height);
    paint(&mut img, region);
    img
}

/// Rasterize a composition's layers over its background
///
/// Equivalent to rasterizing [`Composition::flatten`] without materializing the
/// background as a region.
pub fn composition_to_image(composition: &Composition) -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(
        composition.width as u32,
        composition.height as u32,
        Rgba(composition.background),
    );
    for layer in composition.layers() {
        paint(&mut img, layer);
    }
    img
}

fn paint(img: &mut RgbaImage, region: &PixelRegion) {
    for (point, color) in region.iter() {
        let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
            continue;
        };
        if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color);
        }
    }
}

/// Export a region as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_region_as_png(
    region: &PixelRegion,
    width: u32,
    height: u32,
    output_path: &Path,
) -> Result<()> {
    save_png(&region_to_image(region, width, height), output_path)
}

/// Export a composition as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded or saved.
pub fn export_composition_as_png(composition: &Composition, output_path: &Path) -> Result<()> {
    save_png(&composition_to_image(composition), output_path)
}

fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
