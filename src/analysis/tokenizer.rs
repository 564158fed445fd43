//! Pixel-adjacency tokenization of source images
//!
//! Each interior pixel contributes one `(pixel, neighbour)` token pair per
//! neighbour, so every neighbour is equally likely to follow a given colour in
//! the training stream. The outermost ring of pixels is skipped so that every
//! neighbour lookup stays in bounds.

use image::{Rgb, RgbImage};

use crate::spatial::coordinate::NEIGHBOR_OFFSETS;

/// Tokens emitted per interior pixel: one pair for each neighbour
pub const TOKENS_PER_PIXEL: usize = NEIGHBOR_OFFSETS.len() * 2;

/// Opaque colour value used as a Markov token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorToken(pub [u8; 3]);

impl From<Rgb<u8>> for ColorToken {
    fn from(pixel: Rgb<u8>) -> Self {
        Self(pixel.0)
    }
}

impl From<ColorToken> for Rgb<u8> {
    fn from(token: ColorToken) -> Self {
        Self(token.0)
    }
}

/// Random access to the colours of an image
pub trait PixelSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Colour of the pixel at `(x, y)`
    fn color_at(&self, x: u32, y: u32) -> ColorToken;
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn color_at(&self, x: u32, y: u32) -> ColorToken {
        ColorToken::from(*self.get_pixel(x, y))
    }
}

/// Number of tokens [`tokenize`] yields for an image of this size
pub const fn token_count(width: u32, height: u32) -> usize {
    TOKENS_PER_PIXEL * interior_len(width) * interior_len(height)
}

const fn interior_len(extent: u32) -> usize {
    extent.saturating_sub(2) as usize
}

/// Lazily tokenize one image
///
/// Interior pixels are walked row by row. For each pixel the neighbours are
/// taken in [`NEIGHBOR_OFFSETS`] order and every pair is emitted as the
/// pixel's colour followed by the neighbour's colour. Images with no interior
/// (width or height of 2 or less) yield nothing.
pub fn tokenize<S: PixelSource + ?Sized>(source: &S) -> impl Iterator<Item = ColorToken> + '_ {
    let (width, height) = source.dimensions();
    (1..height.saturating_sub(1)).flat_map(move |y| {
        (1..width.saturating_sub(1)).flat_map(move |x| {
            let pixel = source.color_at(x, y);
            NEIGHBOR_OFFSETS.into_iter().flat_map(move |[dx, dy]| {
                let neighbor = source.color_at(x.wrapping_add_signed(dx), y.wrapping_add_signed(dy));
                [pixel, neighbor]
            })
        })
    })
}

/// Lazily tokenize several images and concatenate their streams in order
///
/// No marker separates one image from the next. Pairs never straddle two
/// images because each image is tokenized on its own.
pub fn tokenize_all<S: PixelSource>(sources: &[S]) -> impl Iterator<Item = ColorToken> + '_ {
    sources.iter().flat_map(|source| tokenize(source))
}
