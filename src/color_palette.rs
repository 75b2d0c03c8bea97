use image::Rgb;
use rand::Rng;

pub const DEFAULT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

const COLORS: [(&str, [u8; 3]); 10] = [
    ("red", [255, 0, 0]),
    ("green", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
];

/// Looks up a named color, case-insensitively. Unknown names get green.
pub fn get_color(name: &str) -> Rgb<u8> {
    let name = name.to_lowercase();
    COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, rgb)| Rgb(*rgb))
        .unwrap_or(DEFAULT_COLOR)
}

pub fn random_color() -> Rgb<u8> {
    let mut rng = rand::rng();
    Rgb([rng.random(), rng.random(), rng.random()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors() {
        assert_eq!(get_color("orange"), Rgb([255, 165, 0]));
        assert_eq!(get_color("Purple"), Rgb([128, 0, 128]));
        assert_eq!(get_color("BLUE"), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_unknown_color_falls_back_to_green() {
        assert_eq!(get_color("chartreuse"), DEFAULT_COLOR);
    }

    #[test]
    fn test_random_colors_vary() {
        let colors: Vec<Rgb<u8>> = (0..32).map(|_| random_color()).collect();

        assert!(colors.iter().any(|c| *c != colors[0]));
    }
}
