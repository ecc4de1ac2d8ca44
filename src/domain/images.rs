// src/domain/images.rs

use rand::Rng;

pub const CARD_IMAGE_WIDTH: u32 = 800;
pub const CARD_IMAGE_HEIGHT: u32 = 600;

const PROPERTY_CATEGORIES: [&str; 7] = [
    "house",
    "apartment",
    "condo",
    "interior",
    "real-estate",
    "architecture",
    "home",
];

const PLACEHOLDER_COLORS: [&str; 4] = ["E8ECEF/213B59", "9FBCCF/436280", "D1D5DB/1F2937", "E5E7EB/111827"];

/// Resolves the image reference from the fixture to something a browser can load.
///
/// Absolute URLs pass through, bare file names are served from `/images/`,
/// and an empty reference gets a stock photo picked from the property id.
pub fn property_image_url(image: &str, id: i64, width: u32, height: u32) -> String {
    let image = image.trim();
    if image.starts_with("http") {
        return image.to_string();
    }
    if !image.is_empty() {
        return format!("/images/{}", image.trim_start_matches('/'));
    }
    fallback_image_url(width, height, id)
}

/// Stock image keyed by `id`, so the same listing always gets the same picture.
/// Id 0 has no stable key and gets a random one.
pub fn fallback_image_url(width: u32, height: u32, id: i64) -> String {
    let seed = if id == 0 {
        rand::thread_rng().gen_range(0..1000)
    } else {
        id.unsigned_abs()
    };

    match seed % 3 {
        0 => {
            let category = PROPERTY_CATEGORIES[(seed % 7) as usize];
            format!("https://source.unsplash.com/{width}x{height}/?{category}&sig={seed}")
        }
        1 => format!("https://picsum.photos/seed/{seed}/{width}/{height}"),
        _ => {
            let colors = PLACEHOLDER_COLORS[(seed % 4) as usize];
            format!("https://via.placeholder.com/{width}x{height}/{colors}?text=Property+{id}")
        }
    }
}
