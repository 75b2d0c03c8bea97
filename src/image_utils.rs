use image::{imageops, DynamicImage, Rgb, RgbImage};

pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_MAX_HEIGHT: u32 = 1080;

/// Shrinks `image` to fit inside `max_width` x `max_height`, keeping the aspect
/// ratio. Images already inside the bounds are returned as-is.
pub fn resize_to_fit(image: DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());

    if width <= max_width && height <= max_height {
        return image;
    }

    let scale = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);
    let new_width = ((width as f32 * scale) as u32).max(1);
    let new_height = ((height as f32 * scale) as u32).max(1);

    image.resize_exact(new_width, new_height, imageops::FilterType::Triangle)
}

/// Applies `value * contrast + brightness` to every color channel, saturating at
/// the channel bounds. Alpha is left untouched.
pub fn enhance(image: &DynamicImage, brightness: f32, contrast: f32) -> DynamicImage {
    let mut rgba = image.to_rgba8();

    for pixel in rgba.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            let value = *channel as f32 * contrast + brightness;
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
    }

    DynamicImage::ImageRgba8(rgba)
}

/// Drops any alpha channel, e.g. for RGBA PNG uploads.
pub fn to_rgb(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) => image.clone(),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

/// Draws a rectangle outline between the two corners. The stroke grows inward
/// and anything outside the image is clipped.
pub fn draw_box(
    image: &mut RgbImage,
    (x1, y1): (u32, u32),
    (x2, y2): (u32, u32),
    color: Rgb<u8>,
    thickness: u32,
) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }

    let (left, right) = (x1.min(x2), x1.max(x2).min(image.width() - 1));
    let (top, bottom) = (y1.min(y2), y1.max(y2).min(image.height() - 1));

    if left > right || top > bottom {
        return;
    }

    for offset in 0..thickness.max(1) {
        let (l, r) = (left + offset, right.saturating_sub(offset));
        let (t, b) = (top + offset, bottom.saturating_sub(offset));
        if l > r || t > b {
            break;
        }

        for x in l..=r {
            image.put_pixel(x, t, color);
            image.put_pixel(x, b, color);
        }
        for y in t..=b {
            image.put_pixel(l, y, color);
            image.put_pixel(r, y, color);
        }
    }
}
