use hires_engine::{HiResScreen, Rectangle};

/// Counts the set pixel bits inside `rect`.
pub fn lit_pixels(screen: &HiResScreen, rect: Rectangle) -> usize {
    let mut count = 0;
    for y in rect.y_range() {
        for x in rect.x_range() {
            if screen.get_pixel(x, y).unwrap() {
                count += 1;
            }
        }
    }
    count
}

pub fn pixel_bits(screen: &HiResScreen, rect: Rectangle) -> Vec<bool> {
    let mut bits = Vec::new();
    for y in rect.y_range() {
        for x in rect.x_range() {
            bits.push(screen.get_pixel(x, y).unwrap());
        }
    }
    bits
}
