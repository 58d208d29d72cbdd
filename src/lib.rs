pub mod config;
pub mod core;
pub mod dict;
pub mod errors;
#[cfg(test)]
pub(crate) mod test_utils;

use std::sync::Arc;

use tantivy::tokenizer::{BoxTokenStream, Token, TokenStream, Tokenizer};

pub use crate::core::bitmap::{precompute, Bitmap, CancelToken, PrecomputeSummary, Precomputer};
pub use crate::core::enumerator::{enumerate, WordEnumerator};
pub use crate::core::segmenter::{has_segmentation, segment, Segmentation};
pub use crate::dict::dictionary::TokenDictionary;
pub use crate::dict::entity::{Element, Entity};
pub use crate::dict::periodic_table::PERIODIC_TABLE;
pub use crate::errors::{Error, Result};

use crate::core::char_util::regularize_str;

/// Splits text into element symbols for indexing.
///
/// A word with a chemical spelling yields one token per element, other words
/// are kept whole.
pub struct ElementTokenizer<E = Element> {
    dict: Arc<TokenDictionary<E>>,
}

impl<E> Clone for ElementTokenizer<E> {
    fn clone(&self) -> Self {
        Self {
            dict: Arc::clone(&self.dict),
        }
    }
}

pub struct ElementTokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream for ElementTokenStream {
    fn advance(&mut self) -> bool {
        if self.index < self.tokens.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.index - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.index - 1]
    }
}

impl<E> ElementTokenizer<E> {
    pub fn new(dict: Arc<TokenDictionary<E>>) -> Self {
        Self { dict }
    }
}

impl Default for ElementTokenizer<Element> {
    fn default() -> Self {
        Self::new(Arc::new(PERIODIC_TABLE.clone()))
    }
}

impl<E: Entity> ElementTokenizer<E> {
    fn split(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let base = text.as_ptr() as usize;
        for word in text.split_whitespace() {
            let word_from = word.as_ptr() as usize - base;
            let mut push = |from: usize, to: usize| {
                tokens.push(Token {
                    offset_from: from,
                    offset_to: to,
                    position: tokens.len(),
                    text: regularize_str(&text[from..to]),
                    position_length: 1,
                });
            };
            match segment(word, self.dict.as_ref()) {
                Ok(spelling) => {
                    // regularize keeps one char per char, so widths line up
                    let mut bounds = word
                        .char_indices()
                        .map(|(i, _)| word_from + i)
                        .chain(std::iter::once(word_from + word.len()));
                    let mut from = bounds.next().unwrap_or(word_from);
                    for entity in spelling.entities() {
                        let width = entity.token().chars().count();
                        let to = bounds
                            .nth(width.saturating_sub(1))
                            .unwrap_or(word_from + word.len());
                        push(from, to);
                        from = to;
                    }
                }
                Err(_) => push(word_from, word_from + word.len()),
            }
        }
        tokens
    }
}

impl<E: Entity + Send + Sync + 'static> Tokenizer for ElementTokenizer<E> {
    fn token_stream<'a>(&self, text: &'a str) -> BoxTokenStream<'a> {
        BoxTokenStream::from(ElementTokenStream {
            tokens: self.split(text),
            index: 0,
        })
    }
}
