use std::fs;
use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use log::{debug, warn};

use slidemenu::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

// --- Load Bitmap, Apply EXIF Rotation, Reduce to the Panel, Create Texture ---
pub fn load_slide_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, String> {
    let file_bytes = fs::read(image_path)
        .map_err(|e| format!("failed to read {}: {}", image_path.display(), e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1 // Default: no rotation
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| format!("failed to decode {}: {}", image_path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Flipped orientations are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    // The panel is monochrome and only shows the fixed image region.
    image.color_grayscale();
    if image.width() > DISPLAY_WIDTH || image.height() > DISPLAY_HEIGHT {
        debug!(
            "Scaling {} from {}x{} down to the display",
            image_path.display(),
            image.width(),
            image.height()
        );
        image.resize(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| format!("failed to upload {}: {}", image_path.display(), e))?;

    // CPU copy is no longer needed once the texture exists.
    drop(image);

    Ok(texture)
}

fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}
