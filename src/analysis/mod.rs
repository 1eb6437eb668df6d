pub mod token;
pub mod syllables;
pub mod normalize;
pub mod segmenter;
