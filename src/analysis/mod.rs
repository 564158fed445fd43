/// Pixel-adjacency tokenization of source images
pub mod tokenizer;

pub use tokenizer::{ColorToken, PixelSource, tokenize, tokenize_all};
