use crate::core::char_util::regularize;
use crate::errors::{Error, Result};

pub const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Every word of a fixed length over an alphabet, in lexicographic order.
///
/// Word `rank` is `rank` written in base `alphabet.len()`, most significant
/// digit first. The enumerator holds only the digits of the next word, so it
/// can walk `26^n` words in constant memory. It may be limited to a rank
/// range, which is how parallel work is split.
#[derive(Debug, Clone)]
pub struct WordEnumerator {
    alphabet: Vec<char>,
    length: usize,
    total: u64,
    start: u64,
    end: u64,
    // rank of the word next() returns
    next: u64,
    // digits of `next`
    digits: Vec<usize>,
}

/// `enumerate(length)` over `a..=z`.
pub fn enumerate(length: usize) -> Result<WordEnumerator> {
    WordEnumerator::new(length)
}

impl WordEnumerator {
    pub fn new(length: usize) -> Result<Self> {
        Self::with_alphabet(&LOWERCASE, length)
    }

    /// The alphabet must be non-empty and strictly increasing.
    pub fn with_alphabet(alphabet: &[char], length: usize) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(Error::invalid_input("empty alphabet"));
        }
        if alphabet.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::invalid_input(
                "alphabet must be strictly increasing",
            ));
        }
        let total = u32::try_from(length)
            .ok()
            .and_then(|len| (alphabet.len() as u64).checked_pow(len))
            .ok_or_else(|| {
                Error::invalid_input(format!("too many words of length {}", length))
            })?;
        Ok(WordEnumerator {
            alphabet: alphabet.to_vec(),
            length,
            total,
            start: 0,
            end: total,
            next: 0,
            digits: vec![0; length],
        })
    }

    /// Number of words of this length, independent of any range limit.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Rank of the word the next call to `next()` yields.
    pub fn position(&self) -> u64 {
        self.next
    }

    /// Words not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.end - self.next
    }

    /// A fresh enumerator over ranks `[start, end)`.
    pub fn range(&self, start: u64, end: u64) -> Result<Self> {
        if start > end || end > self.total {
            return Err(Error::invalid_input(format!(
                "rank range {}..{} outside 0..{}",
                start, end, self.total
            )));
        }
        let mut sub = self.clone();
        sub.start = start;
        sub.end = end;
        sub.reset();
        Ok(sub)
    }

    /// Restarts from the first word of the range.
    pub fn reset(&mut self) {
        self.next = self.start;
        self.set_digits(self.start);
    }

    fn set_digits(&mut self, mut rank: u64) {
        let base = self.alphabet.len() as u64;
        for digit in self.digits.iter_mut().rev() {
            *digit = (rank % base) as usize;
            rank /= base;
        }
    }

    /// The word with the given rank, if it exists.
    pub fn word_at(&self, rank: u64) -> Option<String> {
        if rank >= self.total {
            return None;
        }
        let base = self.alphabet.len() as u64;
        let mut chars = vec![self.alphabet[0]; self.length];
        let mut r = rank;
        for c in chars.iter_mut().rev() {
            *c = self.alphabet[(r % base) as usize];
            r /= base;
        }
        Some(chars.into_iter().collect())
    }

    /// Inverse of [`word_at`](Self::word_at). The word is lowercased first.
    pub fn rank_of(&self, word: &str) -> Option<u64> {
        let base = self.alphabet.len() as u64;
        let mut rank = 0_u64;
        let mut len = 0;
        for c in word.chars().map(regularize) {
            if len == self.length {
                return None;
            }
            let digit = self.alphabet.binary_search(&c).ok()? as u64;
            rank = rank * base + digit;
            len += 1;
        }
        (len == self.length).then_some(rank)
    }

    /// Writes the next word into `buf`, returns false when exhausted.
    ///
    /// Same sequence as `next()` without allocating a `String` per word.
    pub fn next_into(&mut self, buf: &mut Vec<char>) -> bool {
        if self.next >= self.end {
            return false;
        }
        buf.clear();
        buf.extend(self.digits.iter().map(|&d| self.alphabet[d]));
        self.step();
        true
    }

    fn step(&mut self) {
        self.next += 1;
        let base = self.alphabet.len();
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < base {
                return;
            }
            *digit = 0;
        }
    }

    /// Groups of `size` words, the last group holding whatever is left.
    ///
    /// A `size` of 0 is treated as 1.
    pub fn batches(self, size: usize) -> Batches {
        Batches {
            inner: self,
            size: size.max(1),
        }
    }
}

impl Iterator for WordEnumerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.end {
            return None;
        }
        let word = self.digits.iter().map(|&d| self.alphabet[d]).collect();
        self.step();
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

pub struct Batches {
    inner: WordEnumerator,
    size: usize,
}

impl Iterator for Batches {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        let batch: Vec<String> = self.inner.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}
