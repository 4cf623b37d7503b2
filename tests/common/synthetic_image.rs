use card_detector::image::RgbU8;

/// Dark background with a solid light rectangle: the canonical "card on a
/// desk" test scene.
pub fn light_card_u8(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> RgbU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(x0 < x1 && x1 <= width, "card x-range must fit the image");
    assert!(y0 < y1 && y1 <= height, "card y-range must fit the image");

    let mut img = RgbU8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let px = if x >= x0 && x < x1 && y >= y0 && y < y1 {
                [242, 240, 235] // light card stock
            } else {
                [52, 44, 38] // dark desk
            };
            img.set(x, y, px);
        }
    }
    img
}

/// Single flat colour across the whole frame.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> RgbU8 {
    let mut img = RgbU8::new(width, height);
    img.data.fill(value);
    img
}
