//! Tests for pixel-adjacency tokenization

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use remixel::analysis::tokenizer::{
        ColorToken, TOKENS_PER_PIXEL, token_count, tokenize, tokenize_all,
    };
    use remixel::spatial::coordinate::NEIGHBOR_OFFSETS;

    // Encodes each pixel's own position as its colour
    fn coordinate_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]))
    }

    // Tests a 5x4 image yields twelve tokens per interior pixel
    // Verified by including the border ring
    #[test]
    fn test_token_count_matches_interior() {
        let image = coordinate_image(5, 4);

        assert_eq!(TOKENS_PER_PIXEL, 12);
        assert_eq!(token_count(5, 4), 72);
        assert_eq!(tokenize(&image).count(), 72);
    }

    // Tests images with no interior produce no tokens
    // Verified by treating 2x2 images as having one interior pixel
    #[test]
    fn test_images_without_interior_are_empty() {
        for (width, height) in [(1, 1), (2, 2), (2, 10), (10, 2), (0, 0)] {
            let image = coordinate_image(width, height);
            assert_eq!(tokenize(&image).count(), 0, "{width}x{height}");
            assert_eq!(token_count(width, height), 0, "{width}x{height}");
        }
        assert_eq!(token_count(3, 3), 12);
    }

    // Tests every pair is a pixel followed by one of its six neighbours
    // Verified by emitting the neighbour before the pixel
    #[test]
    fn test_pairs_are_adjacent() {
        let image = coordinate_image(6, 5);
        let tokens: Vec<ColorToken> = tokenize(&image).collect();

        for (index, pair) in tokens.chunks(2).enumerate() {
            let [ColorToken([px, py, _]), ColorToken([nx, ny, _])] = pair else {
                panic!("odd token stream");
            };
            let delta = [i32::from(*nx) - i32::from(*px), i32::from(*ny) - i32::from(*py)];
            assert_eq!(delta, NEIGHBOR_OFFSETS[index % 6], "pair {index}");
        }
    }

    // Tests interior pixels are walked row by row
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_row_major_walk() {
        let image = coordinate_image(4, 4);
        let pixels: Vec<ColorToken> = tokenize(&image).step_by(TOKENS_PER_PIXEL).collect();

        assert_eq!(
            pixels,
            vec![
                ColorToken([1, 1, 0]),
                ColorToken([2, 1, 0]),
                ColorToken([1, 2, 0]),
                ColorToken([2, 2, 0]),
            ]
        );
    }

    // Tests tokenization is repeatable for the same image
    // Verified by caching a consumed iterator
    #[test]
    fn test_tokenize_is_idempotent() {
        let image = coordinate_image(7, 6);

        let first: Vec<ColorToken> = tokenize(&image).collect();
        let second: Vec<ColorToken> = tokenize(&image).collect();
        assert_eq!(first, second);
    }

    // Tests several images concatenate in input order
    // Verified by reversing the source order
    #[test]
    fn test_tokenize_all_concatenates() {
        let first = coordinate_image(3, 3);
        let second = RgbImage::from_pixel(4, 3, Rgb([9, 9, 9]));
        let sources = vec![first.clone(), second.clone()];

        let combined: Vec<ColorToken> = tokenize_all(&sources).collect();
        let expected: Vec<ColorToken> = tokenize(&first).chain(tokenize(&second)).collect();

        assert_eq!(combined.len(), 12 + 24);
        assert_eq!(combined, expected);
    }

    // Tests colour tokens convert losslessly to and from pixels
    // Verified by dropping the blue channel
    #[test]
    fn test_color_token_pixel_conversion() {
        let token = ColorToken::from(Rgb([1, 2, 3]));

        assert_eq!(token, ColorToken([1, 2, 3]));
        assert_eq!(Rgb::from(token), Rgb([1_u8, 2, 3]));
    }
}
