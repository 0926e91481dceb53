use gif_support::Color;

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 64;

pub const PALETTE: [Color; 8] = [
    Color::from_rgb(0, 0, 0),
    Color::from_rgb(255, 0, 0),
    Color::from_rgb(0, 148, 255),
    Color::from_rgb(255, 255, 255),
    Color::from_rgb(255, 200, 0),
    Color::from_rgb(0, 255, 136),
    Color::from_rgb(163, 73, 164),
    Color::from_rgb(255, 105, 180),
];

const GRADIENT_INDICES: [u8; 6] = [5, 6, 7, 4, 3, 1];

/// Checkerboard of `color_a` and `color_b`, starting with `color_a` in the top left corner.
pub fn diagonal_frame(width: usize, height: usize, color_a: u8, color_b: u8) -> Vec<u8> {
    let mut indices = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            indices.push(if (x + y) % 2 == 0 { color_a } else { color_b });
        }
    }

    indices
}

/// Horizontal bands, one per color. The last color fills whatever rows are left.
pub fn stripe_frame(width: usize, height: usize, colors: &[u8]) -> Vec<u8> {
    let mut indices = Vec::with_capacity(width * height);
    if colors.is_empty() {
        return indices;
    }

    let band = (height / colors.len()).max(1);
    for y in 0..height {
        let color = colors[(y / band).min(colors.len() - 1)];
        indices.extend(std::iter::repeat(color).take(width));
    }

    indices
}

pub fn gradient_frame(width: usize, height: usize) -> Vec<u8> {
    stripe_frame(width, height, &GRADIENT_INDICES)
}
