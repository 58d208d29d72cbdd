pub mod bitmap;
pub mod char_util;
pub mod enumerator;
pub mod segmenter;
